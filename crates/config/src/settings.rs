// Editor settings
// Loaded from ~/.config/quotegrid/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// What a click on a sequence cell does to the existing selection.
///
/// Two conflicting behaviors shipped at different times; the mode is an
/// explicit product switch rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickSelectionMode {
    /// Toggle the clicked row, leaving other selected rows alone.
    #[default]
    Preserve,
    /// Clear the selection first, then select the clicked row.
    Exclusive,
}

/// Which rows the batch type dialog targets when opened from a long-press
/// on the TYPE button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchSelectScope {
    /// Replace the selection with every row that has a width or height.
    #[default]
    Populated,
    /// Use whatever is currently selected.
    Current,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Selection
    #[serde(rename = "selection.clickMode")]
    pub click_selection_mode: ClickSelectionMode,

    #[serde(rename = "selection.batchScope")]
    pub batch_select_scope: BatchSelectScope,

    // Input
    /// Long-press threshold, read by the input-capture layer.
    #[serde(rename = "input.longPressMillis")]
    pub long_press_millis: u64,

    // File
    /// Directory the file persistence layer writes into.
    #[serde(rename = "file.exportDir")]
    pub export_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            click_selection_mode: ClickSelectionMode::default(),
            batch_select_scope: BatchSelectScope::default(),
            long_press_millis: 700,
            export_dir: None,
        }
    }
}

impl Settings {
    /// Get the settings file path.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegrid");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing settings.json: {}", e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Save current settings to disk.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.click_selection_mode, ClickSelectionMode::Preserve);
        assert_eq!(settings.batch_select_scope, BatchSelectScope::Populated);
        assert_eq!(settings.long_press_millis, 700);
    }

    #[test]
    fn test_serde_keys() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("selection.clickMode"));
        assert!(json.contains("selection.batchScope"));

        let parsed: Settings =
            serde_json::from_str(r#"{"selection.clickMode": "exclusive"}"#).unwrap();
        assert_eq!(parsed.click_selection_mode, ClickSelectionMode::Exclusive);
        // Unspecified keys fall back to defaults
        assert_eq!(parsed.batch_select_scope, BatchSelectScope::Populated);
    }
}
