// Copyright 2025 The Bitraam Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_derive::{Deserialize, Serialize};

use crate::Settings;
use crate::units::Unit;

/// Application configuration, stored at toml file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Unit to show amounts with.
    #[serde(default)]
    display_unit: Unit,
    /// Flag to use dark theme, system theme is used when not set.
    dark_theme: Option<bool>,

    /// Width of the desktop window.
    width: f32,
    /// Height of the desktop window.
    height: f32,

    /// Locale code for i18n.
    lang: Option<String>
}

const DEFAULT_WIDTH: f32 = 640.0;
const DEFAULT_HEIGHT: f32 = 420.0;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_unit: Unit::default(),
            dark_theme: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            lang: None,
        }
    }
}

impl AppConfig {
    /// Application configuration file name.
    pub const FILE_NAME: &'static str = "app.toml";

    /// Default i18n locale.
    pub const DEFAULT_LOCALE: &'static str = "en";

    /// Minimal desktop window width.
    pub const MIN_WIDTH: f32 = 480.0;
    /// Minimal desktop window height.
    pub const MIN_HEIGHT: f32 = 320.0;

    /// Save application configuration to the file.
    pub fn save(&self) {
        let path = Settings::get_config_path(Self::FILE_NAME);
        match Settings::write_to_file(self, &path) {
            Ok(_) => log::info!("Configuration saved to {}", path.display()),
            Err(e) => log::error!("{}", e),
        }
    }

    /// Get unit to show amounts with.
    pub fn display_unit() -> Unit {
        let r_config = Settings::app_config_to_read();
        r_config.display_unit
    }

    /// Save unit to show amounts with.
    pub fn set_display_unit(unit: Unit) {
        let mut w_app_config = Settings::app_config_to_update();
        if w_app_config.display_unit != unit {
            w_app_config.display_unit = unit;
            w_app_config.save();
        }
    }

    /// Check if dark theme should be used.
    pub fn dark_theme() -> Option<bool> {
        let r_config = Settings::app_config_to_read();
        r_config.dark_theme
    }

    /// Save desktop window width and height.
    pub fn save_window_size(w: f32, h: f32) {
        let mut w_app_config = Settings::app_config_to_update();
        if w_app_config.width == w && w_app_config.height == h {
            return;
        }
        w_app_config.width = w.max(Self::MIN_WIDTH);
        w_app_config.height = h.max(Self::MIN_HEIGHT);
        w_app_config.save();
    }

    /// Get desktop window width and height.
    pub fn window_size() -> (f32, f32) {
        let r_config = Settings::app_config_to_read();
        (r_config.width, r_config.height)
    }

    /// Get current saved locale code.
    pub fn locale() -> Option<String> {
        let r_config = Settings::app_config_to_read();
        r_config.lang.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_serializes_to_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("display_unit = \"BTR\""));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn reads_micro_unit_from_toml() {
        let text = "display_unit = \"uBTR\"\ndark_theme = true\nwidth = 800.0\nheight = 600.0\n";
        let parsed: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(parsed.display_unit, Unit::uBTR);
        assert_eq!(parsed.dark_theme, Some(true));
        assert_eq!(parsed.lang, None);
    }

    #[test]
    fn missing_unit_falls_back_to_default() {
        let parsed: AppConfig = toml::from_str("width = 800.0\nheight = 600.0\n").unwrap();
        assert_eq!(parsed.display_unit, Unit::BTR);
    }
}
