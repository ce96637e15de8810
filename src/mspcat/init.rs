use crate::api::{CatalogApi, CatalogPaths};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub struct CatalogContext {
    pub api: CatalogApi<FileStore>,
    pub config: CatalogConfig,
}

/// The platform data directory, e.g. `~/.local/share/mspcat` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "mspcat", "mspcat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine data directory".to_string()))
}

/// Builds the file-backed API rooted at `data_dir` (or the platform default).
pub fn initialize(data_dir: Option<PathBuf>) -> Result<CatalogContext> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "initializing catalog");

    let config = CatalogConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = CatalogApi::new(store, CatalogPaths { data_dir })?;

    Ok(CatalogContext { api, config })
}
