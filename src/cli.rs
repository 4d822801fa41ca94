// src/cli.rs
use std::path::PathBuf;
use std::{env, error::Error};

use crate::config::AppConfig;
use crate::core::net::{Client, FetchError};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::stats::ProfileStats;
use crate::widget::{MarkupCache, Theme};
use crate::{scrape, store};

pub struct Params {
    pub user: Option<String>,
    pub save: bool,
    pub widget: bool,
    pub json: bool,
    pub dark: bool,
    pub no_sprites: bool,
    pub config_path: PathBuf,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            user: None,
            save: false,
            widget: false,
            json: false,
            dark: false,
            no_sprites: false,
            config_path: AppConfig::default_path(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;

    let mut config = AppConfig::load(&params.config_path);
    let username = match &params.user {
        Some(u) => u.trim().to_string(),
        None => config.username_trimmed().to_string(),
    };
    if username.is_empty() {
        return Err("No username set. Pass --user <name>, optionally with --save.".into());
    }
    if params.save {
        config.username = username.clone();
        config.dark_mode = params.dark;
        config.save(&params.config_path)?;
        logf!("Saved config to {}", params.config_path.display());
    }

    let client = Client::new().map_err(fetch_err_msg)?;
    let stats = scrape::collect_stats(&client, &username).map_err(fetch_err_msg)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let theme = if params.dark || config.dark_mode { Theme::Dark } else { Theme::Light };

    if params.widget {
        let sprites = if params.no_sprites {
            None
        } else {
            Some(scrape::collect_sprites(&client, &stats, &store::default_sprites_dir()))
        };
        let mut cache = MarkupCache::new();
        println!("{}", cache.get_or_render(Some(&stats), sprites.as_ref(), theme));
        return Ok(());
    }

    print_summary(&stats);
    Ok(())
}

/// Map the fetch taxonomy to end-user wording: a 404 means a bad username,
/// transport failures point at the connection, everything else is generic.
fn fetch_err_msg(e: FetchError) -> Box<dyn Error> {
    match e {
        FetchError::ProfileNotFound { .. } => {
            format!("{e}. Please check the username and try again.").into()
        }
        FetchError::Transport(inner) => {
            format!("network error: {inner}. Please check your internet connection.").into()
        }
        other => format!("unable to fetch stats: {other}").into(),
    }
}

fn print_summary(stats: &ProfileStats) {
    if !stats.has_displayable_stats() {
        println!("No stats found for @{}.", stats.username);
        println!("The profile page layout might have changed, or the username might be incorrect.");
        return;
    }
    println!("Trainer: @{}", stats.username);
    if let Some(level) = stats.trainer_level {
        println!("Level: LV.{level}");
    }
    match (&stats.equipped_name, stats.pet_level) {
        (Some(name), Some(level)) => {
            println!("Focumon: {} (LV.{level})", normalize_ws(&normalize_entities(name)));
        }
        (Some(name), None) => {
            println!("Focumon: {}", normalize_ws(&normalize_entities(name)));
        }
        (None, Some(level)) => println!("Focumon level: LV.{level}"),
        (None, None) => {}
    }
    if let Some(progress) = &stats.progress {
        println!("Focudex: {progress}");
    }
    if let Some(path) = &stats.trainer_sprite {
        println!("Trainer sprite: {path}");
    }
    if let Some(path) = &stats.pet_sprite {
        println!("Focumon sprite: {path}");
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--user" => {
                params.user = Some(args.next().ok_or("Missing value for --user")?);
            }
            "--save" => params.save = true,
            "--widget" => params.widget = true,
            "--json" => params.json = true,
            "--dark" => params.dark = true,
            "--no-sprites" => params.no_sprites = true,
            "--config" => {
                let v = args.next().ok_or("Missing value for --config")?;
                params.config_path = PathBuf::from(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_user_and_flags() {
        let p = parse_args(args(&["--user", "PeaceMonk", "--widget", "--dark"])).unwrap();
        assert_eq!(p.user.as_deref(), Some("PeaceMonk"));
        assert!(p.widget);
        assert!(p.dark);
        assert!(!p.json);
    }

    #[test]
    fn user_requires_a_value() {
        assert!(parse_args(args(&["--user"])).is_err());
    }

    #[test]
    fn unknown_flag_errors() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn config_path_overridable() {
        let p = parse_args(args(&["--config", "/tmp/alt.json"])).unwrap();
        assert_eq!(p.config_path, PathBuf::from("/tmp/alt.json"));
    }
}
