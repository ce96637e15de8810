//! # Storage Layer
//!
//! The catalog is persisted as a single snapshot: the whole collection,
//! serialized as text, overwritten on every save. [`RecordStore`] is the
//! get/set-string seam behind which that snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - Snapshot stored in `msp-services.json` inside the data directory
//!   - Directory is created on first save
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves, so tests can assert that mutations were written
//!
//! The store knows nothing about services. Parsing, and falling back to the
//! sample catalog when parsing fails, happen in the API layer.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait RecordStore {
    /// Returns the last saved snapshot, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrites the stored snapshot.
    fn save(&mut self, snapshot: &str) -> Result<()>;
}
