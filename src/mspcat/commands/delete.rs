use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.remove(id) {
        Some(service) => {
            result.add_message(CmdMessage::success(format!(
                "Service deleted ({}): {}",
                service.id, service.service_name
            )));
            result.affected_services.push(service);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No service with id {}", id)));
        }
    }

    Ok(result)
}
