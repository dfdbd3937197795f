use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE: &str = "traffic-incidents.json";

/// Default dataset shipped with the dashboard.
pub const DEFAULT_DATA_PATH: &str = "data/Filtered_Accident_Causes__Alcohol_Focus_.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file loaded at startup.
    pub data_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl AppConfig {
    /// Load `traffic-incidents.json` if present, otherwise the defaults.
    /// A malformed file is logged and ignored rather than aborting startup.
    pub fn load() -> AppConfig {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> AppConfig {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {e}", path.display());
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bundled_dataset() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from(Path::new("definitely-not-here.json"));
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }
}
