//! User settings stored as settings.json in the app data directory

use crate::constants::ITEMS_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Custom items file (overrides the default location in the data dir)
    pub items_path: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn items_path_or_default(&self, data_dir: &Path) -> PathBuf {
        self.items_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(ITEMS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.window_x.is_none());
        assert!(settings.items_path.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(520.0),
            window_h: Some(760.0),
            items_path: Some("/tmp/custom_items.json".to_string()),
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(520.0));
        assert_eq!(loaded.items_path.as_deref(), Some("/tmp/custom_items.json"));
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ nope").unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.items_path.is_none());
    }

    #[test]
    fn items_path_defaults_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        assert_eq!(
            settings.items_path_or_default(dir.path()),
            dir.path().join(ITEMS_FILE_NAME)
        );

        let overridden = Settings {
            items_path: Some("/elsewhere/items.json".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            overridden.items_path_or_default(dir.path()),
            PathBuf::from("/elsewhere/items.json")
        );
    }
}
