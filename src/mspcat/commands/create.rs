use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{from_form, ServiceForm};

pub fn run(catalog: &mut Catalog, form: &ServiceForm) -> Result<CmdResult> {
    let service = from_form(form, None, || catalog.fresh_id())?;
    let service = catalog.add(service)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Service added ({}): {}",
        service.id, service.service_name
    )));
    result.affected_services.push(service);
    Ok(result)
}
