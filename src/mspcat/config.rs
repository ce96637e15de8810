use crate::error::{CatalogError, Result};
use crate::filter::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Configuration for mspcat, stored as config.json next to the catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory export files are written to (relative paths resolve from cwd)
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Category selector applied by `list` when none is given ("all" or a category label)
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_export_dir() -> String {
    DEFAULT_EXPORT_DIR.to_string()
}

fn default_category() -> String {
    "all".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            default_category: default_category(),
        }
    }
}

impl CatalogConfig {
    pub const KEYS: [&'static str; 2] = ["export-dir", "default-category"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "export-dir" => Some(self.export_dir.clone()),
            "default-category" => Some(self.default_category.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export-dir" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::Config("export-dir cannot be empty".into()));
                }
                self.export_dir = value.to_string();
            }
            "default-category" => {
                let filter: CategoryFilter = value
                    .parse()
                    .map_err(|_| CatalogError::Config(format!("Unknown category: {}", value)))?;
                self.default_category = filter.to_string();
            }
            other => return Err(CatalogError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }

    /// The configured default category, falling back to "all" if the stored value is stale.
    pub fn category_filter(&self) -> CategoryFilter {
        self.default_category.parse().unwrap_or_default()
    }
}
