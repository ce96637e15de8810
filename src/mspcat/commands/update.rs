use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::form::{from_form, ServiceForm};

/// Resubmits `form` over the service with `id`.
///
/// The form has no status or featured fields, so both are carried over from
/// the stored record rather than reset.
pub fn run(catalog: &mut Catalog, id: &str, form: &ServiceForm) -> Result<CmdResult> {
    let existing = catalog
        .get(id)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

    let mut service = from_form(form, Some(id), || catalog.fresh_id())?;
    service.status = existing.status;
    service.featured = existing.featured;

    let service = catalog.update(id, service)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Service updated ({}): {}",
        service.id, service.service_name
    )));
    result.affected_services.push(service);
    Ok(result)
}
