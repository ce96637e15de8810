use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Service;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_services: usize,
    pub active_services: usize,
    pub featured_services: usize,
    /// Distinct categories in use, not the size of the category list.
    pub categories: usize,
}

pub fn compute(services: &[Service]) -> CatalogStats {
    CatalogStats {
        total_services: services.len(),
        active_services: services.iter().filter(|s| s.is_active()).count(),
        featured_services: services.iter().filter(|s| s.featured).count(),
        categories: services
            .iter()
            .map(|s| s.category)
            .collect::<HashSet<_>>()
            .len(),
    }
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(compute(catalog.services())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_stats() {
        let stats = compute(Catalog::sample().services());
        assert_eq!(
            stats,
            CatalogStats {
                total_services: 3,
                active_services: 3,
                featured_services: 2,
                categories: 3,
            }
        );
    }

    #[test]
    fn duplicates_do_not_add_categories() {
        let mut catalog = Catalog::sample();
        catalog.duplicate("1").unwrap();
        let stats = compute(catalog.services());
        assert_eq!(stats.total_services, 4);
        assert_eq!(stats.categories, 3);
    }

    #[test]
    fn empty_catalog() {
        assert_eq!(compute(&[]), CatalogStats::default());
    }
}
