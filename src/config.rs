use serde::Deserialize;

use crate::ui::Theme;

/// Runtime configuration for the overlay. Every field has a default, so a
/// partial RON file only overrides what it names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Seed for the humanizer's sampler.
    pub seed: u64,
    /// KDL menu layout.
    pub layout_path: String,
    /// RON file that persists item values between sessions.
    pub settings_path: String,
    /// Frames the demo driver runs before saving and exiting.
    pub frames: u32,
    pub theme: Theme,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            layout_path: "data/menu.kdl".to_string(),
            settings_path: "data/settings.ron".to_string(),
            frames: 3,
            theme: Theme::default(),
        }
    }
}

/// Load config from a RON file. Falls back to defaults on any failure.
pub fn load_config(path: &str) -> MenuConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("failed to read {}: {}, using default config", path, e);
            return MenuConfig::default();
        }
    };
    match ron::from_str::<MenuConfig>(&content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("failed to parse RON {}: {}, using default config", path, e);
            MenuConfig::default()
        }
    }
}
