//! Tunable simulation parameters
//!
//! Persisted to LocalStorage so the spawn rate and gravity survive a reload.
//! Shapes themselves are never saved.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_GRAVITY, MIN_SPAWN_RATE};

/// User-tunable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Shapes spawned per second
    pub spawn_rate: u32,
    /// Pixels each shape falls per frame
    pub gravity: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_rate: MIN_SPAWN_RATE,
            gravity: MIN_GRAVITY,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "shape_rain_settings";

    /// Re-apply the parameter floors. Stored JSON is user-editable, so values
    /// below 1 can come back from disk.
    pub fn clamped(mut self) -> Self {
        self.spawn_rate = self.spawn_rate.max(MIN_SPAWN_RATE);
        self.gravity = self.gravity.max(MIN_GRAVITY);
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.clamped();
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
