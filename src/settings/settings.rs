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

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::settings::AppConfig;

lazy_static! {
    /// Static settings state to be accessible globally.
    static ref SETTINGS_STATE: Arc<Settings> = Arc::new(Settings::init());
}

/// Main application directory name.
const MAIN_DIR_NAME: &'static str = ".bitraam";

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can not access config file {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("Can not parse config file {0}: {1}")]
    Parse(String, String),
    #[error("Can not serialize config: {0}")]
    Serialize(String),
}

/// Contains initialized configurations.
pub struct Settings {
    /// Application configuration.
    app_config: Arc<RwLock<AppConfig>>,
}

impl Settings {
    /// Initialize settings with app config.
    fn init() -> Self {
        let app_config_path = Settings::get_config_path(AppConfig::FILE_NAME);
        let app_config = Self::init_config::<AppConfig>(app_config_path);
        Self {
            app_config: Arc::new(RwLock::new(app_config)),
        }
    }

    /// Initialize configuration from provided file path or set [`Default`] if file not exists.
    pub fn init_config<T: Default + Serialize + DeserializeOwned>(path: PathBuf) -> T {
        match Self::read_from_file::<T>(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    log::warn!("{}, default configuration is used", e);
                }
                let default_config = T::default();
                if let Err(e) = Settings::write_to_file(&default_config, &path) {
                    log::error!("{}", e);
                }
                default_config
            }
        }
    }

    /// Get app configuration to read values.
    pub fn app_config_to_read() -> RwLockReadGuard<'static, AppConfig> {
        SETTINGS_STATE.app_config.read()
    }

    /// Get app configuration to update values.
    pub fn app_config_to_update() -> RwLockWriteGuard<'static, AppConfig> {
        SETTINGS_STATE.app_config.write()
    }

    /// Get base directory path for configuration.
    pub fn get_base_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_default();
        path.push(MAIN_DIR_NAME);
        // Create if the default path doesn't exist.
        if !path.exists() {
            let _ = fs::create_dir_all(&path);
        }
        path
    }

    /// Get configuration file path from provided name.
    pub fn get_config_path(config_name: &str) -> PathBuf {
        let mut settings_path = Self::get_base_path();
        settings_path.push(config_name);
        settings_path
    }

    /// Read configuration from the file.
    pub fn read_from_file<T: DeserializeOwned>(config_path: &Path) -> Result<T, ConfigError> {
        let path_str = config_path.display().to_string();
        let file_content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::Io(path_str.clone(), e))?;
        toml::from_str::<T>(file_content.as_str())
            .map_err(|e| ConfigError::Parse(path_str, format!("{}", e)))
    }

    /// Write configuration to the file.
    pub fn write_to_file<T: Serialize>(config: &T, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let conf_out = toml::to_string(config)
            .map_err(|e| ConfigError::Serialize(format!("{}", e)))?;
        let mut file = File::create(path).map_err(|e| ConfigError::Io(path_str.clone(), e))?;
        file.write_all(conf_out.as_bytes()).map_err(|e| ConfigError::Io(path_str, e))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("bitraam_{}_{}.toml", name, std::process::id()));
        path
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let res = Settings::read_from_file::<AppConfig>(&path);
        assert!(matches!(res, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn bad_content_is_parse_error() {
        let path = temp_path("bad");
        fs::write(&path, "display_unit = 42").unwrap();
        let res = Settings::read_from_file::<AppConfig>(&path);
        assert!(matches!(res, Err(ConfigError::Parse(_, _))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn init_replaces_bad_file_with_default() {
        let path = temp_path("init");
        fs::write(&path, "not toml at all [").unwrap();
        let config = Settings::init_config::<AppConfig>(path.clone());
        assert_eq!(config, AppConfig::default());
        let saved = Settings::read_from_file::<AppConfig>(&path).unwrap();
        assert_eq!(saved, AppConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn written_config_reads_back() {
        let path = temp_path("write");
        let config: AppConfig = toml::from_str(
            "display_unit = \"mBTR\"\nwidth = 700.0\nheight = 500.0\nlang = \"ru\"\n"
        ).unwrap();
        Settings::write_to_file(&config, &path).unwrap();
        let saved = Settings::read_from_file::<AppConfig>(&path).unwrap();
        assert_eq!(saved, config);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("display_unit = \"mBTR\""));
        let _ = fs::remove_file(&path);
    }
}
