// tests/config_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use focu_scrape::config::AppConfig;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("focu_cfg_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn save_then_load_round_trips() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("config.json");

    let mut cfg = AppConfig::default();
    cfg.username = "PeaceMonk".into();
    cfg.dark_mode = true;
    cfg.save(&path).unwrap();

    let loaded = AppConfig::load(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tmp_dir("missing");
    let loaded = AppConfig::load(&dir.join("nope.json"));
    assert_eq!(loaded, AppConfig::default());
}

#[test]
fn garbage_file_yields_defaults() {
    let dir = tmp_dir("garbage");
    let path = dir.join("config.json");
    fs::write(&path, "{not json").unwrap();
    assert_eq!(AppConfig::load(&path), AppConfig::default());
}

#[test]
fn unknown_keys_are_tolerated() {
    let dir = tmp_dir("extra_keys");
    let path = dir.join("config.json");
    fs::write(&path, r#"{"username":"PeaceMonk","show_welcome":true}"#).unwrap();
    let loaded = AppConfig::load(&path);
    assert_eq!(loaded.username, "PeaceMonk");
    assert!(!loaded.dark_mode);
}
