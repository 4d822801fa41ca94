// src/config/options.rs
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::{CONFIG_FILE, STORE_DIR};

/// Persisted settings. One flat struct with named fields; everything the
/// widget and CLI need to know between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Trainer name on the companion service. Empty means not paired yet.
    pub username: String,
    /// Hide the deck-browser widget entirely.
    pub hide_widget: bool,
    /// Keep the embedded app window above other windows.
    pub always_on_top: bool,
    /// Render widget markup with the dark palette.
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            hide_widget: false,
            always_on_top: false,
            dark_mode: false,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(CONFIG_FILE)
    }

    /// Load from `path`. A missing or unreadable file yields defaults;
    /// a malformed file is logged and also yields defaults.
    pub fn load(path: &Path) -> AppConfig {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => return AppConfig::default(),
        };
        match serde_json::from_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                loge!("Bad config at {}: {e}", path.display());
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, text)
    }

    pub fn username_trimmed(&self) -> &str {
        self.username.trim()
    }
}
