use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter, ServiceFilter};

pub fn run(catalog: &Catalog, service_filter: &ServiceFilter) -> Result<CmdResult> {
    let term = service_filter.search_term.as_deref().unwrap_or("");
    let listed = filter(catalog.services(), term, service_filter.category)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_services(listed))
}
