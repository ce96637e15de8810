//! # Filter Engine
//!
//! A pure, stable filter over the catalog: a category selector plus a
//! case-insensitive substring search on name and description. Results keep
//! catalog order.

use crate::error::{CatalogError, Result};
use crate::model::{Category, Service};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub search_term: Option<String>,
    pub category: CategoryFilter,
}

impl ServiceFilter {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: Some(search_term.into()),
            category,
        }
    }
}

pub fn filter<'a>(
    services: &'a [Service],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<&'a Service> {
    let term = search_term.to_lowercase();
    services
        .iter()
        .filter(|s| category.matches(s.category))
        .filter(|s| {
            term.is_empty()
                || s.service_name.to_lowercase().contains(&term)
                || s.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(found: &[&Service]) -> Vec<String> {
        found.iter().map(|s| s.service_name.clone()).collect()
    }

    #[test]
    fn empty_term_and_all_returns_everything_in_order() {
        let catalog = Catalog::sample();
        let found = filter(catalog.services(), "", CategoryFilter::All);
        let all: Vec<&Service> = catalog.services().iter().collect();
        assert_eq!(found, all);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::sample();
        let found = filter(catalog.services(), "OFFICE", CategoryFilter::All);
        assert_eq!(names(&found), vec!["Office 365 Setup"]);
    }

    #[test]
    fn search_matches_description() {
        let catalog = Catalog::sample();
        let found = filter(catalog.services(), "daily backups", CategoryFilter::All);
        assert_eq!(names(&found), vec!["Backup Service"]);
    }

    #[test]
    fn search_ignores_short_description_and_tags() {
        let catalog = Catalog::sample();
        // "Complete" only appears in the short description of record 1
        assert!(filter(catalog.services(), "complete", CategoryFilter::All).is_empty());
        assert!(filter(catalog.services(), "productivity", CategoryFilter::All).is_empty());
    }

    #[test]
    fn category_and_term_combine() {
        let catalog = Catalog::sample();
        let monitoring = CategoryFilter::Only(Category::Monitoring);
        assert_eq!(filter(catalog.services(), "", monitoring).len(), 1);
        assert!(filter(catalog.services(), "office", monitoring).is_empty());
        assert!(filter(
            catalog.services(),
            "",
            CategoryFilter::Only(Category::Printing)
        )
        .is_empty());
    }

    #[test]
    fn category_filter_parses() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Business Operations".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::BusinessOperations)
        );
        assert!("nope".parse::<CategoryFilter>().is_err());
    }
}
