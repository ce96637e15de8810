use super::RecordStore;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of `save` calls since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<()> {
        self.snapshot = Some(snapshot.to_string());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_snapshot_and_counts() {
        let mut store = InMemoryStore::with_snapshot("old");
        store.save("new").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
        assert_eq!(store.save_count(), 1);
    }
}
