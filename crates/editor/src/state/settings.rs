//! Application settings

use std::path::{Path, PathBuf};

use history::HistoryLimits;
use serde::{Deserialize, Serialize};
use shared::Rgba;

/// Defaults for new canvases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Width of a new canvas in pixels
    pub default_width: u32,
    /// Height of a new canvas in pixels
    pub default_height: u32,
    /// Background color of a new canvas
    pub background: Rgba,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            default_width: 640,
            default_height: 480,
            background: Rgba::WHITE,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Number of pending undo/redo names shown in the history preview
    pub undo_preview_len: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            undo_preview_len: 10,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Undo/redo retention limits
    #[serde(default)]
    pub history: HistoryLimits,
    /// New canvas defaults
    #[serde(default)]
    pub canvas: CanvasSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Location of the settings file in the platform config dir
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "paint", "paint")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::read_from(&path))
            .unwrap_or_default()
    }

    /// Read settings from `path`
    pub fn read_from(path: &Path) -> Option<Self> {
        let json = std::fs::read_to_string(path).ok()?;
        Self::from_json(&json)
    }

    /// Parse settings, clamping the undo limits into their accepted range
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<AppSettings>(json) {
            Ok(mut settings) => {
                settings.history = settings.history.sanitized();
                Some(settings)
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file: {e}");
                None
            }
        }
    }

    /// Save settings to `path`, logging failures
    pub fn save_to(&self, path: &Path) {
        if let Some(config_dir) = path.parent() {
            if std::fs::create_dir_all(config_dir).is_err() {
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save settings: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to encode settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.history, HistoryLimits::default());
        assert_eq!(s.ui.undo_preview_len, 10);
        assert_eq!(s.canvas.background, Rgba::WHITE);
    }

    #[test]
    fn test_from_json_partial() {
        let s = AppSettings::from_json(r#"{"history": {"max_limit": 42}}"#).unwrap();
        assert_eq!(s.history.max_limit, 42);
        assert_eq!(s.history.min_limit, HistoryLimits::default().min_limit);
        assert_eq!(s.canvas.default_width, 640);
    }

    #[test]
    fn test_from_json_clamps_limits() {
        let s = AppSettings::from_json(r#"{"history": {"min_limit": 0, "max_limit": 100000}}"#)
            .unwrap();
        assert_eq!(s.history.min_limit, 1);
        assert_eq!(s.history.max_limit, 5000);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(AppSettings::from_json("{").is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = AppSettings::default();
        s.history = HistoryLimits::new(2, 30, 1024);
        s.ui.undo_preview_len = 3;
        let json = serde_json::to_string(&s).unwrap();
        let back = AppSettings::from_json(&json).unwrap();
        assert_eq!(back.history, s.history);
        assert_eq!(back.ui.undo_preview_len, 3);
    }

    #[test]
    fn test_save_to_then_read_from() {
        let path = std::env::temp_dir()
            .join(format!("paint-settings-{}", std::process::id()))
            .join("settings.json");
        let mut s = AppSettings::default();
        s.history = HistoryLimits::new(3, 7, 4096);
        s.save_to(&path);

        let json = std::fs::read_to_string(&path).unwrap();
        let back = AppSettings::from_json(&json).unwrap();
        assert_eq!(back.history, s.history);
        assert_eq!(AppSettings::read_from(&path).unwrap().history.max_limit, 7);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_from_missing_file() {
        let path = std::env::temp_dir().join("paint-settings-missing").join("none.json");
        assert!(AppSettings::read_from(&path).is_none());
    }
}
