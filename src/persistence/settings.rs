use crate::persistence::atomic_write;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted user settings. Every field has a default so a partial or
/// hand-edited file fills in the gaps; unknown keys are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Fire a platform toast in addition to the in-app one
    #[serde(default = "default_true")]
    pub enable_system_notification: bool,
    /// Kept for settings-file compatibility; the terminal front-end has no
    /// tray to honor it with
    #[serde(default)]
    pub start_minimized_to_tray: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_system_notification: true,
            start_minimized_to_tray: false,
        }
    }
}

/// Load settings, falling back to defaults when the file is missing or
/// unparseable. Never surfaces an error to the caller.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

/// Save settings atomically
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(temp_dir.path().join("settings.json"));
        assert!(settings.enable_system_notification);
        assert!(!settings.start_minimized_to_tray);
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"start_minimized_to_tray": true}"#).unwrap();

        let settings = load_settings(&path);
        assert!(settings.enable_system_notification, "missing key gets its default");
        assert!(settings.start_minimized_to_tray);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"enable_system_notification": false, "theme": "Dark", "win_x": 100}"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert!(!settings.enable_system_notification);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            enable_system_notification: false,
            start_minimized_to_tray: true,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }
}
