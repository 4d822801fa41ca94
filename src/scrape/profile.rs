// src/scrape/profile.rs

// Profile page extractors. Each scans the full page text independently and
// tolerates total absence of its target pattern; "not found" is a valid
// result, never an error. All of them are pure and safely repeatable.

use crate::config::consts::{PET_SPRITE_PREFIX, SPRITE_EXT, TRAINER_SPRITE_PREFIX};
use crate::core::html;

/// Level badges in document order: first is the trainer, second the pet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Levels {
    pub trainer: Option<u32>,
    pub pet: Option<u32>,
}

/// Sprite asset paths, each independent and optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprites {
    pub trainer: Option<String>,
    pub pet: Option<String>,
}

const BADGE_OPEN: &str = "<div class=\"badge";
const LEVEL_PREFIX: &str = "LV.";
const BADGE_CLOSE: &str = "</div>";
const PROGRESS_LABEL: &str = "<span>Focudex</span>";

/// Every badge marker of the shape `<div class="badge...">LV.<n></div>`,
/// in document order. Digits that do not fit u32 drop that occurrence.
fn badge_levels(doc: &str) -> Vec<u32> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = doc[pos..].find(BADGE_OPEN) {
        let start = pos + rel;
        pos = start + BADGE_OPEN.len();

        let Some(body) = html::open_tag_end(doc, start) else {
            continue;
        };
        let Some(tail) = doc[body..].strip_prefix(LEVEL_PREFIX) else {
            continue;
        };
        let digits = tail.len() - tail.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 || !tail[digits..].starts_with(BADGE_CLOSE) {
            continue;
        }
        if let Ok(v) = tail[..digits].parse::<u32>() {
            out.push(v);
        }
    }
    out
}

/// Trainer level (first badge) and pet level (second badge). Further badges
/// are ignored; zero badges yields an empty result.
pub fn extract_levels(doc: &str) -> Levels {
    let badges = badge_levels(doc);
    Levels {
        trainer: badges.first().copied(),
        pet: badges.get(1).copied(),
    }
}

/// Raw Focudex value, e.g. "2/186": the inner text of the first span after
/// the `Focudex` label span, verbatim. Splitting into integers is the
/// caller's job (see `stats::Progress`).
pub fn extract_progress(doc: &str) -> Option<String> {
    let after = doc.find(PROGRESS_LABEL)? + PROGRESS_LABEL.len();
    let value = html::next_span_text(doc, after)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Name of the equipped pet: the second `data-tip` tooltip on the page.
/// The first is assumed to be the trainer's. Positional and fragile if the
/// page ever grows another tooltip ahead of these two.
pub fn extract_equipped_name(doc: &str) -> Option<String> {
    let tips: Vec<&str> = html::attr_values(doc, "data-tip")
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect();
    tips.get(1).map(|s| s.to_string())
}

/// First trainer-sprite and first pet-sprite image paths, independently
/// optional.
pub fn extract_sprite_urls(doc: &str) -> Sprites {
    Sprites {
        trainer: html::first_attr_value_with(doc, "src", TRAINER_SPRITE_PREFIX, SPRITE_EXT)
            .map(|s| s.to_string()),
        pet: html::first_attr_value_with(doc, "src", PET_SPRITE_PREFIX, SPRITE_EXT)
            .map(|s| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_zero_badges() {
        assert_eq!(extract_levels("<div class=\"card\">LV.9</div>"), Levels::default());
        assert_eq!(extract_levels(""), Levels::default());
    }

    #[test]
    fn levels_single_badge_is_trainer() {
        let doc = r#"<div class="badge badge-sm">LV.42</div>"#;
        let levels = extract_levels(doc);
        assert_eq!(levels.trainer, Some(42));
        assert_eq!(levels.pet, None);
    }

    #[test]
    fn levels_second_badge_is_pet_third_ignored() {
        let doc = r#"
            <div class="badge">LV.5</div>
            <div class="badge badge-outline">LV.12</div>
            <div class="badge">LV.99</div>
        "#;
        let levels = extract_levels(doc);
        assert_eq!(levels.trainer, Some(5));
        assert_eq!(levels.pet, Some(12));
    }

    #[test]
    fn levels_skip_malformed_badges() {
        // No LV. prefix, no digits, unterminated tag, u32 overflow
        let doc = r#"
            <div class="badge">XP.5</div>
            <div class="badge">LV.</div>
            <div class="badge" <span>LV.3</span>
            <div class="badge">LV.99999999999</div>
            <div class="badge">LV.7</div>
        "#;
        let levels = extract_levels(doc);
        assert_eq!(levels.trainer, Some(7));
        assert_eq!(levels.pet, None);
    }

    #[test]
    fn progress_allows_markup_between_spans() {
        let doc = "<span>Focudex</span>\n   <span class=\"value\">2/186</span>";
        assert_eq!(extract_progress(doc).as_deref(), Some("2/186"));
    }

    #[test]
    fn progress_returns_non_numeric_value_verbatim() {
        let doc = "<span>Focudex</span><span>abc</span>";
        assert_eq!(extract_progress(doc).as_deref(), Some("abc"));
    }

    #[test]
    fn progress_missing_label_or_value() {
        assert_eq!(extract_progress("<span>Pokedex</span><span>2/186</span>"), None);
        assert_eq!(extract_progress("<span>Focudex</span> no value span"), None);
        assert_eq!(extract_progress("<span>Focudex</span><span>  </span>"), None);
    }

    #[test]
    fn equipped_name_requires_two_tooltips() {
        assert_eq!(extract_equipped_name(r#"<div data-tip="Alice"></div>"#), None);

        let doc = r#"<div data-tip="Alice"></div><div data-tip="Sparky"></div>"#;
        assert_eq!(extract_equipped_name(doc).as_deref(), Some("Sparky"));
    }

    #[test]
    fn equipped_name_skips_empty_tooltips() {
        let doc = r#"<i data-tip=""></i><b data-tip="Alice"></b><u data-tip="Sparky"></u>"#;
        assert_eq!(extract_equipped_name(doc).as_deref(), Some("Sparky"));
    }

    #[test]
    fn sprites_both_present() {
        let doc = r#"
            <img src="/assets/trainer/battle/001.png">
            <img src="/assets/focumon/battle/042.png">
        "#;
        let sprites = extract_sprite_urls(doc);
        assert_eq!(sprites.trainer.as_deref(), Some("/assets/trainer/battle/001.png"));
        assert_eq!(sprites.pet.as_deref(), Some("/assets/focumon/battle/042.png"));
    }

    #[test]
    fn sprites_neither_present() {
        let doc = r#"<img src="/img/logo.svg">"#;
        assert_eq!(extract_sprite_urls(doc), Sprites::default());
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = r#"
            <div class="badge">LV.5</div>
            <div class="badge">LV.12</div>
            <span>Focudex</span><span>2/186</span>
            <div data-tip="Alice"></div><div data-tip="Sparky"></div>
            <img src="/assets/trainer/battle/001.png">
        "#;
        assert_eq!(extract_levels(doc), extract_levels(doc));
        assert_eq!(extract_progress(doc), extract_progress(doc));
        assert_eq!(extract_equipped_name(doc), extract_equipped_name(doc));
        assert_eq!(extract_sprite_urls(doc), extract_sprite_urls(doc));
    }
}
