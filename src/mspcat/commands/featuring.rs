use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};

pub fn feature(catalog: &mut Catalog, ids: &[String]) -> Result<CmdResult> {
    featured_state(catalog, ids, true)
}

pub fn unfeature(catalog: &mut Catalog, ids: &[String]) -> Result<CmdResult> {
    featured_state(catalog, ids, false)
}

fn featured_state(catalog: &mut Catalog, ids: &[String], featured: bool) -> Result<CmdResult> {
    // Resolve everything first so an unknown id changes nothing.
    for id in ids {
        if !catalog.contains(id) {
            return Err(CatalogError::NotFound(id.clone()));
        }
    }

    let mut result = CmdResult::default();
    for id in ids {
        let service = catalog.set_featured(id, featured)?;
        let verb = if featured { "featured" } else { "unfeatured" };
        result.add_message(CmdMessage::success(format!(
            "Service {} ({}): {}",
            verb, service.id, service.service_name
        )));
        result.affected_services.push(service);
    }

    Ok(result)
}
