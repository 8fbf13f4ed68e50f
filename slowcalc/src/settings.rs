//! Calculator preferences

use serde::{Deserialize, Serialize};
use slowcore::storage::{self, config_dir, StorageError};
use std::path::{Path, PathBuf};

/// Persisted window and display preferences. Calculator state is never saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    pub window_width: f32,
    pub window_height: f32,
    /// Point size of the numeric readout.
    pub display_font_size: f32,
    /// Used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            window_width: 260.0,
            window_height: 350.0,
            display_font_size: 28.0,
            log_level: "info".to_string(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("slowcalc").join("settings.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, writing defaults on first run. Never fails.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<Self>(path) {
            Ok(settings) => settings.sanitized(),
            Err(StorageError::NotFound(_)) => {
                let settings = Self::default();
                if let Err(e) = settings.save_to(path) {
                    log::warn!("could not write default settings to {}: {}", path.display(), e);
                }
                settings
            }
            Err(e) => {
                log::warn!("ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(self, path)
    }

    /// Replace sizes no window could use with the defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.window_width) {
            self.window_width = defaults.window_width;
        }
        if !usable(self.window_height) {
            self.window_height = defaults.window_height;
        }
        if !usable(self.display_font_size) {
            self.display_font_size = defaults.display_font_size;
        }
        self
    }
}
