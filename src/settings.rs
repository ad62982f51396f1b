//! User preferences
//!
//! Persisted separately from the document in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::calc::{Document, GradingScale};
use crate::persistence::DEFAULT_EXPORT_FILENAME;

/// Calculator preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scale new documents start on
    pub default_scale: GradingScale,
    /// File name offered when exporting
    pub export_filename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_scale: GradingScale::TenPoint,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cgpa_calc_settings";

    /// Fresh document using the preferred scale
    pub fn new_document(&self) -> Document {
        Document::with_scale(self.default_scale)
    }

    /// Export file name, falling back to the default when blank
    pub fn export_filename(&self) -> &str {
        let name = self.export_filename.trim();
        if name.is_empty() {
            DEFAULT_EXPORT_FILENAME
        } else {
            name
        }
    }

    /// Parse a stored blob, falling back to defaults if it is unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_scale, GradingScale::TenPoint);
        assert_eq!(settings.export_filename(), "cgpa_data.json");
        assert_eq!(settings.new_document(), Document::default());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{"default_scale": "4"}"#);
        assert_eq!(settings.default_scale, GradingScale::FourPoint);
        assert_eq!(settings.export_filename, DEFAULT_EXPORT_FILENAME);
        assert_eq!(settings.new_document().grade_system, GradingScale::FourPoint);
    }

    #[test]
    fn test_from_json_garbage() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_blank_filename_falls_back() {
        let settings = Settings {
            export_filename: "  ".into(),
            ..Default::default()
        };
        assert_eq!(settings.export_filename(), DEFAULT_EXPORT_FILENAME);
    }
}
