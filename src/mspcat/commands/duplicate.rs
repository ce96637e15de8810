use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, id: &str) -> Result<CmdResult> {
    let copy = catalog.duplicate(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Service duplicated ({} -> {}): {}",
        id, copy.id, copy.service_name
    )));
    result.affected_services.push(copy);
    Ok(result)
}
