// src/store.rs

// Advisory on-disk cache for fetched sprite bytes. IO failures are the
// caller's to log and swallow; the network copy always wins when available.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::config::consts::{SPRITES_SUBDIR, STORE_DIR};

pub fn default_sprites_dir() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SPRITES_SUBDIR)
}

/// "/assets/focumon/battle/042.png" -> "assets_focumon_battle_042.png"
fn sprite_filename(relative_path: &str) -> String {
    let trimmed = relative_path.trim_start_matches('/');
    let mut out = String::with_capacity(trimmed.len());
    let mut last_us = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { "sprite.bin".to_string() } else { out }
}

pub fn save_sprite(dir: &Path, relative_path: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(sprite_filename(relative_path));
    fs::write(&path, bytes)?;
    Ok(path)
}

pub fn load_sprite(dir: &Path, relative_path: &str) -> Option<Vec<u8>> {
    fs::read(dir.join(sprite_filename(relative_path))).ok()
}
