//! Application configuration, stored as JSON next to the data.

use crate::catalog::CATALOG_KEY;
use crate::employees::EMPLOYEE_KEY;
use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "FRESHMADE_DATA_DIR";

fn default_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV).map(PathBuf::from).unwrap_or_else(|_| {
        tracing::debug!("{} not set, using ./data", DATA_DIR_ENV);
        PathBuf::from("./data")
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the database and logs
    pub data_dir: PathBuf,
    /// SQLite file name inside `data_dir`
    pub database_file: String,
    /// Default filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Also write daily log files under `data_dir/logs`
    pub log_to_file: bool,
    /// Storage key for menu, orders and bills
    pub catalog_key: String,
    /// Storage key for employees and salary payments
    pub employee_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database_file: "freshmade_pos.db".to_string(),
            log_level: "info".to_string(),
            log_to_file: false,
            catalog_key: CATALOG_KEY.to_string(),
            employee_key: EMPLOYEE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| StoreError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();

        assert_eq!(config.catalog_key, "restaurantData");
        assert_eq!(config.employee_key, "employeeData");
        assert_eq!(config.database_file, "freshmade_pos.db");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_dir": "/srv/pos", "log_level": "debug"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.database_path(), PathBuf::from("/srv/pos/freshmade_pos.db"));
        assert_eq!(config.log_level, "debug");
        assert!(!config.log_to_file);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            log_to_file: true,
            ..AppConfig::default()
        };

        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(StoreError::Config(_))));
    }
}
