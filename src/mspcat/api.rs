//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all catalog operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! `CatalogApi` is also the application's root controller. It:
//! - **Owns** the in-memory [`Catalog`] and the [`RecordStore`]
//! - **Loads** the snapshot once, at construction
//! - **Dispatches** each call to the matching command function
//! - **Saves** the full snapshot after every successful mutation
//!
//! A command that fails leaves the catalog untouched, and nothing is saved.
//!
//! ## Generic Over RecordStore
//!
//! `CatalogApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::filter::ServiceFilter;
use crate::form::{to_form, ServiceForm};
use crate::store::RecordStore;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct CatalogApi<S: RecordStore> {
    store: S,
    catalog: Catalog,
    paths: commands::CatalogPaths,
    notices: Vec<commands::CmdMessage>,
}

impl<S: RecordStore> CatalogApi<S> {
    /// Loads the catalog from `store`.
    ///
    /// On first run the sample catalog is used and saved. A snapshot that
    /// fails to parse is left on disk untouched and the sample catalog is
    /// used in memory until the next mutation overwrites it.
    pub fn new(store: S, paths: commands::CatalogPaths) -> Result<Self> {
        let mut api = Self {
            store,
            catalog: Catalog::new(),
            paths,
            notices: Vec::new(),
        };

        match api.store.load()? {
            None => {
                debug!("no saved catalog, seeding sample services");
                api.catalog = Catalog::sample();
                api.persist()?;
            }
            Some(text) => match Catalog::from_snapshot(&text) {
                Ok(catalog) => {
                    debug!(services = catalog.len(), "catalog loaded");
                    api.catalog = catalog;
                }
                Err(e) => {
                    warn!(error = %e, "could not read saved catalog, using sample services");
                    api.catalog = Catalog::sample();
                    api.notices.push(commands::CmdMessage::warning(
                        "Saved catalog could not be read; showing the sample services. \
                         The next change will overwrite it.",
                    ));
                }
            },
        }

        Ok(api)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Messages raised while loading, for the UI to show once.
    pub fn notices(&self) -> &[commands::CmdMessage] {
        &self.notices
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.catalog.to_snapshot()?;
        self.store.save(&snapshot)
    }

    fn mutate<F>(&mut self, op: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut Catalog) -> Result<commands::CmdResult>,
    {
        let result = op(&mut self.catalog)?;
        self.persist()?;
        Ok(result)
    }

    pub fn get_services(&self, filter: &ServiceFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filter)
    }

    pub fn view_service(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, id)
    }

    /// The editable form for an existing service.
    pub fn edit_form(&self, id: &str) -> Result<ServiceForm> {
        self.catalog
            .get(id)
            .map(to_form)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn create_service(&mut self, form: &ServiceForm) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::create::run(catalog, form))
    }

    pub fn update_service(&mut self, id: &str, form: &ServiceForm) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::update::run(catalog, id, form))
    }

    pub fn delete_service(&mut self, id: &str) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::delete::run(catalog, id))
    }

    pub fn duplicate_service(&mut self, id: &str) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::duplicate::run(catalog, id))
    }

    pub fn feature_services(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::featuring::feature(catalog, ids))
    }

    pub fn unfeature_services(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::featuring::unfeature(catalog, ids))
    }

    pub fn activate_services(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::status::activate(catalog, ids))
    }

    pub fn deactivate_services(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        self.mutate(|catalog| commands::status::deactivate(catalog, ids))
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog)
    }

    /// Exports the full catalog. Without `out`, files go to the configured export dir.
    pub fn export(
        &self,
        format: ExportFormat,
        out: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        let dir = match out {
            Some(dir) => dir,
            None => PathBuf::from(CatalogConfig::load(&self.paths.data_dir)?.export_dir),
        };
        commands::export::run(&self.catalog, &dir, format)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::filter::CategoryFilter;
pub use commands::{CatalogPaths, CatalogStats, CmdMessage, CmdResult, MessageLevel};
