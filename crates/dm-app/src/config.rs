//! Dashboard configuration.
//!
//! An optional YAML file next to the working directory overrides the
//! defaults; a missing file just means defaults.

use std::path::{Path, PathBuf};

use dm_core::Scenario;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "demandmap.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory holding the boundary file and demand tables.
    pub data_dir: PathBuf,
    /// Window title.
    pub title: String,
    /// Scenario selected at startup.
    pub default_scenario: Scenario,
    /// First historical year shown on charts. Older rows in the historical
    /// table are loaded but not displayed.
    pub historical_from_year: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            title: "Turkey Electricity Demand".to_string(),
            default_scenario: Scenario::Ssp1,
            historical_from_year: 2020,
        }
    }
}

impl DashboardConfig {
    /// Read a config file. The file must exist and parse.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Read `path` if given, otherwise `demandmap.yaml` from the working
    /// directory if present, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
