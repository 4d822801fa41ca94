// src/stats.rs

use std::fmt;

use serde::Serialize;

/// Focudex progress as scraped. Exactly two integer parts render as a
/// progress bar; anything else is shown as the literal text it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Progress {
    Fraction { current: u32, total: u32 },
    Literal(String),
}

impl Progress {
    /// Split a raw "current/total" value. Never errors: a value that is not
    /// exactly two non-negative integers downgrades to `Literal`.
    pub fn parse(raw: &str) -> Progress {
        let mut parts = raw.split('/');
        if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
            if let (Ok(current), Ok(total)) = (a.trim().parse(), b.trim().parse()) {
                return Progress::Fraction { current, total };
            }
        }
        Progress::Literal(raw.to_string())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Fraction { current, total } => write!(f, "{current}/{total}"),
            Progress::Literal(s) => f.write_str(s),
        }
    }
}

/// Best-effort projection of one fetched profile page. Every field other
/// than the caller-supplied username is optional: a pattern the page did
/// not contain is "unknown", not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub username: String,
    pub trainer_level: Option<u32>,
    pub pet_level: Option<u32>,
    pub progress: Option<Progress>,
    pub equipped_name: Option<String>,
    pub trainer_sprite: Option<String>,
    pub pet_sprite: Option<String>,
}

impl ProfileStats {
    /// Populated fields beyond the username.
    pub fn populated_fields(&self) -> usize {
        [
            self.trainer_level.is_some(),
            self.pet_level.is_some(),
            self.progress.is_some(),
            self.equipped_name.is_some(),
            self.trainer_sprite.is_some(),
            self.pet_sprite.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    /// Widget rule: fewer than two known fields reads as "no stats available".
    pub fn has_displayable_stats(&self) -> bool {
        self.populated_fields() >= 2
    }
}
