use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};

pub fn run(catalog: &Catalog, id: &str) -> Result<CmdResult> {
    let service = catalog
        .get(id)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_services(vec![service]))
}
