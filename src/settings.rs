//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Native builds read and write the
//! JSON file named by `BRICK_BREAKER_SETTINGS`, when set.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause automatically when the window loses focus
    pub pause_on_blur: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Brighter bricks and a yellow paddle
    pub high_contrast: bool,
    /// Paddle corner radius in pixels
    pub paddle_rounding: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause_on_blur: true,
            show_fps: true,
            high_contrast: false,
            paddle_rounding: 3.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "BRICK_BREAKER_SETTINGS";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
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
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
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

    /// Load settings from the file named by `BRICK_BREAKER_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json)
                .inspect(|_| log::info!("Loaded settings from {}", path.to_string_lossy()))
                .unwrap_or_default(),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            return;
        };

        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.to_string_lossy()),
                Err(e) => log::warn!("Cannot write {}: {}", path.to_string_lossy(), e),
            },
            Err(e) => log::warn!("Cannot serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.pause_on_blur);
        assert!(settings.show_fps);
        assert!(!settings.high_contrast);
        assert_eq!(settings.paddle_rounding, 3.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"high_contrast": true}"#).unwrap();
        assert!(settings.high_contrast);
        assert!(settings.pause_on_blur);
        assert_eq!(settings.paddle_rounding, 3.0);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Settings::from_json("not json").is_none());
        assert!(Settings::from_json(r#"{"show_fps": "yes"}"#).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            pause_on_blur: false,
            show_fps: false,
            high_contrast: true,
            paddle_rounding: 0.0,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), Some(settings));
    }
}
