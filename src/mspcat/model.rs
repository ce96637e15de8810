//! Core data types for the catalog.
//!
//! Field names serialize in camelCase so snapshots written by earlier versions
//! of the catalog load unchanged.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The only currency the catalog prices in.
pub const CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Apps & Software")]
    AppsSoftware,
    Security,
    Monitoring,
    Hardware,
    Training,
    #[serde(rename = "Phones & Tablets")]
    PhonesTablets,
    Printing,
    #[serde(rename = "Business Operations")]
    BusinessOperations,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 8] = [
        Category::AppsSoftware,
        Category::Security,
        Category::Monitoring,
        Category::Hardware,
        Category::Training,
        Category::PhonesTablets,
        Category::Printing,
        Category::BusinessOperations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::AppsSoftware => "Apps & Software",
            Category::Security => "Security",
            Category::Monitoring => "Monitoring",
            Category::Hardware => "Hardware",
            Category::Training => "Training",
            Category::PhonesTablets => "Phones & Tablets",
            Category::Printing => "Printing",
            Category::BusinessOperations => "Business Operations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(CatalogError::Validation("Category is required".to_string()));
        }
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::Validation(format!("Unknown category: {}", wanted)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Fixed,
    Range,
    Consultation,
}

impl PricingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingType::Fixed => "fixed",
            PricingType::Range => "range",
            PricingType::Consultation => "consultation",
        }
    }
}

impl FromStr for PricingType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(PricingType::Fixed),
            "range" => Ok(PricingType::Range),
            "consultation" => Ok(PricingType::Consultation),
            other => Err(CatalogError::Validation(format!(
                "Unknown pricing type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    OneTime,
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneTime => "one-time",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "one-time" => Ok(Period::OneTime),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(CatalogError::Validation(format!("Unknown period: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(rename = "type")]
    pub kind: PricingType,
    pub amount: f64,
    pub currency: String,
    pub period: Period,
    // Cached at edit time; not refreshed when amount or period change elsewhere.
    pub display_text: String,
}

impl Pricing {
    pub fn new(kind: PricingType, amount: f64, period: Period) -> Self {
        Self {
            kind,
            amount,
            currency: CURRENCY.to_string(),
            period,
            display_text: display_text_for(amount, period),
        }
    }
}

/// `$150 one-time`, `$99/monthly`, `$1200/yearly`.
pub fn display_text_for(amount: f64, period: Period) -> String {
    match period {
        Period::OneTime => format!("${} one-time", amount),
        other => format!("${}/{}", amount, other.as_str()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevel {
    pub response_time: String,
    pub resolution_time: String,
    pub availability: String,
    pub emergency_support: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub service_name: String,
    pub category: Category,
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub pricing: Pricing,
    #[serde(default)]
    pub service_level: ServiceLevel,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Service {
    /// Checks the fields the catalog refuses to store blank.
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Service name is required".to_string(),
            ));
        }
        if self.short_description.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Short description is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
