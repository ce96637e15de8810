//! # Catalog Model
//!
//! The in-memory, ordered collection of [`Service`] records. Insertion order is
//! kept for display; nothing else depends on it.
//!
//! Every mutating method either succeeds completely or leaves the collection
//! untouched, so a rejected operation never needs rolling back. Persistence is
//! not this type's concern: the API facade saves a full snapshot after each
//! successful mutation.

use crate::error::{CatalogError, Result};
use crate::model::{
    new_id, Category, Period, Pricing, PricingType, Service, ServiceLevel, Status,
};
use std::collections::HashSet;
use tracing::warn;

const COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from loaded records, re-keying any record whose id
    /// was already taken by an earlier one.
    pub fn from_services(services: Vec<Service>) -> Self {
        let mut seen = HashSet::new();
        let mut catalog = Self::new();
        for mut service in services {
            if !seen.insert(service.id.clone()) {
                let fresh = catalog.fresh_id();
                warn!(old = %service.id, new = %fresh, "duplicate id in snapshot, re-keyed");
                seen.insert(fresh.clone());
                service.id = fresh;
            }
            catalog.services.push(service);
        }
        catalog
    }

    /// Parses a stored snapshot (a JSON array of services).
    pub fn from_snapshot(text: &str) -> Result<Self> {
        let services: Vec<Service> = serde_json::from_str(text).map_err(CatalogError::Parse)?;
        Ok(Self::from_services(services))
    }

    pub fn to_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.services)?)
    }

    /// The three-record catalog used on first run.
    pub fn sample() -> Self {
        Self::from_services(vec![
            Service {
                id: "1".to_string(),
                service_name: "Office 365 Setup".to_string(),
                category: Category::AppsSoftware,
                short_description: "Complete Office 365 setup and configuration".to_string(),
                description: "Microsoft Office 365 setup including user accounts, email configuration, and basic training.".to_string(),
                pricing: Pricing::new(PricingType::Fixed, 150.0, Period::OneTime),
                service_level: ServiceLevel {
                    response_time: "4 hours".to_string(),
                    resolution_time: "24 hours".to_string(),
                    availability: "9 AM - 5 PM".to_string(),
                    emergency_support: false,
                },
                status: Status::Active,
                featured: true,
                tags: vec!["office".into(), "email".into(), "productivity".into()],
            },
            Service {
                id: "2".to_string(),
                service_name: "Network Monitoring".to_string(),
                category: Category::Monitoring,
                short_description: "24/7 network monitoring and alerting".to_string(),
                description: "Continuous monitoring of network infrastructure with proactive alerting and issue resolution.".to_string(),
                pricing: Pricing::new(PricingType::Fixed, 99.0, Period::Monthly),
                service_level: ServiceLevel {
                    response_time: "15 minutes".to_string(),
                    resolution_time: "2 hours".to_string(),
                    availability: "24/7".to_string(),
                    emergency_support: true,
                },
                status: Status::Active,
                featured: true,
                tags: vec!["monitoring".into(), "network".into(), "proactive".into()],
            },
            Service {
                id: "3".to_string(),
                service_name: "Backup Service".to_string(),
                category: Category::Security,
                short_description: "Automated backup and recovery solution".to_string(),
                description: "Comprehensive backup solution with automated daily backups and quick recovery options.".to_string(),
                pricing: Pricing::new(PricingType::Fixed, 75.0, Period::Monthly),
                service_level: ServiceLevel {
                    response_time: "2 hours".to_string(),
                    resolution_time: "4 hours".to_string(),
                    availability: "9 AM - 6 PM".to_string(),
                    emergency_support: true,
                },
                status: Status::Active,
                featured: false,
                tags: vec!["backup".into(), "security".into(), "recovery".into()],
            },
        ])
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// A new id not used by any record in the catalog.
    pub fn fresh_id(&self) -> String {
        loop {
            let id = new_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub fn add(&mut self, service: Service) -> Result<Service> {
        service.validate()?;
        if self.contains(&service.id) {
            return Err(CatalogError::Validation(format!(
                "A service with id {} already exists",
                service.id
            )));
        }
        self.services.push(service.clone());
        Ok(service)
    }

    /// Replaces the record with `id`. The stored record always keeps `id`,
    /// whatever id `service` carries.
    pub fn update(&mut self, id: &str, mut service: Service) -> Result<Service> {
        let pos = self.position(id)?;
        service.validate()?;
        service.id = id.to_string();
        self.services[pos] = service.clone();
        Ok(service)
    }

    /// Removes the record with `id`, returning it. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Service> {
        let pos = self.services.iter().position(|s| s.id == id)?;
        Some(self.services.remove(pos))
    }

    /// Appends a copy of `id` under a fresh id with `" (Copy)"` added to its name.
    pub fn duplicate(&mut self, id: &str) -> Result<Service> {
        let pos = self.position(id)?;
        let mut copy = self.services[pos].clone();
        copy.id = self.fresh_id();
        copy.service_name.push_str(COPY_SUFFIX);
        self.services.push(copy.clone());
        Ok(copy)
    }

    pub fn set_featured(&mut self, id: &str, featured: bool) -> Result<Service> {
        let pos = self.position(id)?;
        self.services[pos].featured = featured;
        Ok(self.services[pos].clone())
    }

    pub fn set_status(&mut self, id: &str, status: Status) -> Result<Service> {
        let pos = self.position(id)?;
        self.services[pos].status = status;
        Ok(self.services[pos].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_unique(catalog: &Catalog) -> bool {
        let ids: HashSet<_> = catalog.services().iter().map(|s| &s.id).collect();
        ids.len() == catalog.len()
    }

    fn service(name: &str) -> Service {
        Service {
            id: new_id(),
            service_name: name.to_string(),
            category: Category::Hardware,
            short_description: format!("{} short", name),
            description: String::new(),
            pricing: Pricing::new(PricingType::Fixed, 10.0, Period::Monthly),
            service_level: ServiceLevel::default(),
            status: Status::Active,
            featured: false,
            tags: vec![],
        }
    }

    #[test]
    fn add_appends_in_order() {
        let mut catalog = Catalog::new();
        catalog.add(service("A")).unwrap();
        catalog.add(service("B")).unwrap();
        let names: Vec<_> = catalog.services().iter().map(|s| s.service_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn add_rejects_missing_required_fields() {
        let mut catalog = Catalog::new();
        let mut blank = service("A");
        blank.short_description = String::new();
        assert!(matches!(
            catalog.add(blank),
            Err(CatalogError::Validation(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn add_rejects_taken_id() {
        let mut catalog = Catalog::sample();
        let mut clash = service("Clash");
        clash.id = "1".into();
        assert!(catalog.add(clash).is_err());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn update_keeps_the_original_id() {
        let mut catalog = Catalog::sample();
        let mut replacement = service("Renamed");
        replacement.id = "something-else".into();
        let updated = catalog.update("2", replacement).unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(catalog.get("2").unwrap().service_name, "Renamed");
        assert!(!catalog.contains("something-else"));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut catalog = Catalog::sample();
        let before = catalog.clone();
        assert!(matches!(
            catalog.update("nope", service("X")),
            Err(CatalogError::NotFound(_))
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut catalog = Catalog::sample();
        assert!(catalog.remove("nope").is_none());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.remove("1").unwrap().service_name, "Office 365 Setup");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_gets_fresh_id_and_copy_suffix() {
        let mut catalog = Catalog::sample();
        let copy = catalog.duplicate("1").unwrap();
        let original = catalog.get("1").unwrap().clone();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.service_name, "Office 365 Setup (Copy)");
        assert_eq!(copy.category, original.category);
        assert_eq!(copy.pricing, original.pricing);
        assert_eq!(copy.service_level, original.service_level);
        assert_eq!(copy.tags, original.tags);
        assert_eq!(copy.featured, original.featured);
        assert_eq!(catalog.services().last().unwrap().id, copy.id);
    }

    #[test]
    fn duplicate_missing_id_is_not_found() {
        let mut catalog = Catalog::sample();
        assert!(matches!(
            catalog.duplicate("nope"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut catalog = Catalog::sample();
        catalog.duplicate("1").unwrap();
        catalog.duplicate("1").unwrap();
        catalog.add(service("New")).unwrap();
        catalog.remove("2");
        let first = catalog.services()[0].id.clone();
        catalog.update(&first, service("Changed")).unwrap();
        let last = catalog.services().last().unwrap().id.clone();
        catalog.duplicate(&last).unwrap();
        assert!(ids_unique(&catalog));
    }

    #[test]
    fn snapshot_roundtrips() {
        let catalog = Catalog::sample();
        let text = catalog.to_snapshot().unwrap();
        assert_eq!(Catalog::from_snapshot(&text).unwrap(), catalog);
    }

    #[test]
    fn malformed_snapshot_is_parse_error() {
        assert!(matches!(
            Catalog::from_snapshot("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_ids_in_snapshot_are_rekeyed() {
        let mut a = service("A");
        let mut b = service("B");
        a.id = "same".into();
        b.id = "same".into();
        let catalog = Catalog::from_services(vec![a, b]);
        assert!(ids_unique(&catalog));
        assert_eq!(catalog.services()[0].id, "same");
    }

    #[test]
    fn featured_and_status_flags() {
        let mut catalog = Catalog::sample();
        catalog.set_featured("3", true).unwrap();
        catalog.set_status("3", Status::Inactive).unwrap();
        let s = catalog.get("3").unwrap();
        assert!(s.featured);
        assert!(!s.is_active());
        assert!(catalog.set_featured("nope", true).is_err());
    }
}
