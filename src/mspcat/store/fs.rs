use super::RecordStore;
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const SNAPSHOT_FILENAME: &str = "msp-services.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        let path = self.snapshot_path();
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot on disk");
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, snapshot: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.snapshot_path();
        // Written beside the target, then renamed over it.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, snapshot).map_err(CatalogError::Io)?;
        fs::rename(&tmp, &path).map_err(CatalogError::Io)?;
        debug!(path = %path.display(), bytes = snapshot.len(), "snapshot saved");
        Ok(())
    }
}
