// src/config/consts.rs

// Net config
pub const SERVICE_ORIGIN: &str = "https://www.focumon.com";
pub const TRAINERS_PREFIX: &str = "/trainers/";

// The profile page serves a placeholder to clients it does not recognize,
// so send a browser-like UA.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

pub const PAGE_TIMEOUT_SECS: u64 = 5;
pub const ASSET_TIMEOUT_SECS: u64 = 3;

// Sprite path conventions on the profile page
pub const TRAINER_SPRITE_PREFIX: &str = "/assets/trainer/battle/";
pub const PET_SPRITE_PREFIX: &str = "/assets/focumon/battle/";
pub const SPRITE_EXT: &str = ".png";

// Local working dir
pub const STORE_DIR: &str = ".focu";
pub const SPRITES_SUBDIR: &str = "sprites";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "debug.log";
