use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Status;

pub fn activate(catalog: &mut Catalog, ids: &[String]) -> Result<CmdResult> {
    set_status(catalog, ids, Status::Active)
}

pub fn deactivate(catalog: &mut Catalog, ids: &[String]) -> Result<CmdResult> {
    set_status(catalog, ids, Status::Inactive)
}

fn set_status(catalog: &mut Catalog, ids: &[String], status: Status) -> Result<CmdResult> {
    if let Some(missing) = ids.iter().find(|id| !catalog.contains(id)) {
        return Err(CatalogError::NotFound(missing.clone()));
    }

    let mut result = CmdResult::default();
    for id in ids {
        let service = catalog.set_status(id, status)?;
        result.add_message(CmdMessage::success(format!(
            "Service marked {} ({}): {}",
            status.as_str(),
            service.id,
            service.service_name
        )));
        result.affected_services.push(service);
    }

    Ok(result)
}
