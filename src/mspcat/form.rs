//! # Form Binding
//!
//! [`ServiceForm`] is the flat, all-text shape an editing UI works with. It
//! shadows the nested [`Service`] structure, and the two are mapped by
//! [`to_form`] and [`from_form`] only.
//!
//! The mapping is lossy on purpose in one direction: `from_form` always yields
//! an `active`, non-featured service, because the form has no fields for
//! either. Callers that edit an existing record decide whether to carry those
//! flags over (see `commands::update`).

use crate::error::Result;
use crate::model::{Category, Period, Pricing, PricingType, Service, ServiceLevel, Status};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    pub service_name: String,
    pub category: String,
    pub short_description: String,
    pub description: String,
    pub pricing_type: String,
    pub amount: String,
    pub period: String,
    pub response_time: String,
    pub resolution_time: String,
    pub availability: String,
    pub emergency_support: bool,
    pub tags: String,
}

impl Default for ServiceForm {
    /// The blank form: fixed pricing, billed monthly.
    fn default() -> Self {
        Self {
            service_name: String::new(),
            category: String::new(),
            short_description: String::new(),
            description: String::new(),
            pricing_type: PricingType::Fixed.as_str().to_string(),
            amount: String::new(),
            period: Period::Monthly.as_str().to_string(),
            response_time: String::new(),
            resolution_time: String::new(),
            availability: String::new(),
            emergency_support: false,
            tags: String::new(),
        }
    }
}

pub fn to_form(service: &Service) -> ServiceForm {
    ServiceForm {
        service_name: service.service_name.clone(),
        category: service.category.label().to_string(),
        short_description: service.short_description.clone(),
        description: service.description.clone(),
        pricing_type: service.pricing.kind.as_str().to_string(),
        amount: format_amount(service.pricing.amount),
        period: service.pricing.period.as_str().to_string(),
        response_time: service.service_level.response_time.clone(),
        resolution_time: service.service_level.resolution_time.clone(),
        availability: service.service_level.availability.clone(),
        emergency_support: service.service_level.emergency_support,
        tags: service.tags.join(", "),
    }
}

/// Builds a service from a submitted form. `existing_id` is kept when editing;
/// otherwise `new_id` supplies the id.
pub fn from_form(
    form: &ServiceForm,
    existing_id: Option<&str>,
    new_id: impl FnOnce() -> String,
) -> Result<Service> {
    let category: Category = form.category.parse()?;
    let kind: PricingType = form.pricing_type.parse()?;
    let period: Period = form.period.parse()?;
    let amount = parse_amount(&form.amount);

    Ok(Service {
        id: existing_id.map(str::to_string).unwrap_or_else(new_id),
        service_name: form.service_name.clone(),
        category,
        short_description: form.short_description.clone(),
        description: form.description.clone(),
        pricing: Pricing::new(kind, amount, period),
        service_level: ServiceLevel {
            response_time: form.response_time.clone(),
            resolution_time: form.resolution_time.clone(),
            availability: form.availability.clone(),
            emergency_support: form.emergency_support,
        },
        status: Status::Active,
        featured: false,
        tags: split_tags(&form.tags),
    })
}

/// Anything that isn't a finite, positive number reads as 0.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::CatalogError;

    fn fixed_id() -> String {
        "fresh".to_string()
    }

    fn filled_form() -> ServiceForm {
        ServiceForm {
            service_name: "Laptop Refresh".into(),
            category: "Hardware".into(),
            short_description: "Swap out old laptops".into(),
            amount: "150".into(),
            period: "one-time".into(),
            tags: "hardware, , laptops ,".into(),
            ..ServiceForm::default()
        }
    }

    #[test]
    fn one_time_display_text() {
        let service = from_form(&filled_form(), None, fixed_id).unwrap();
        assert_eq!(service.pricing.amount, 150.0);
        assert_eq!(service.pricing.display_text, "$150 one-time");
    }

    #[test]
    fn monthly_display_text() {
        let form = ServiceForm {
            amount: "99".into(),
            period: "monthly".into(),
            ..filled_form()
        };
        let service = from_form(&form, None, fixed_id).unwrap();
        assert_eq!(service.pricing.display_text, "$99/monthly");
    }

    #[test]
    fn empty_amount_defaults_to_zero_monthly() {
        let form = ServiceForm {
            service_name: "Consult".into(),
            category: "Training".into(),
            short_description: "Talk".into(),
            ..ServiceForm::default()
        };
        let service = from_form(&form, None, fixed_id).unwrap();
        assert_eq!(service.pricing.amount, 0.0);
        assert_eq!(service.pricing.display_text, "$0/monthly");
    }

    #[test]
    fn garbage_amount_is_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
    }

    #[test]
    fn tags_drop_empty_tokens() {
        let service = from_form(&filled_form(), None, fixed_id).unwrap();
        assert_eq!(service.tags, vec!["hardware", "laptops"]);
    }

    #[test]
    fn new_service_uses_supplied_id_and_defaults_flags() {
        let service = from_form(&filled_form(), None, fixed_id).unwrap();
        assert_eq!(service.id, "fresh");
        assert_eq!(service.status, Status::Active);
        assert!(!service.featured);
        assert_eq!(service.pricing.currency, "USD");
    }

    #[test]
    fn missing_category_is_validation_error() {
        let form = ServiceForm {
            category: String::new(),
            ..filled_form()
        };
        assert!(matches!(
            from_form(&form, None, fixed_id),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn roundtrip_reproduces_active_unfeatured_services() {
        let mut catalog = Catalog::sample();
        catalog.set_featured("1", false).unwrap();
        catalog.set_featured("2", false).unwrap();

        for service in catalog.services() {
            let back = from_form(&to_form(service), Some(&service.id), fixed_id).unwrap();
            assert_eq!(&back, service);
        }
    }

    #[test]
    fn roundtrip_drops_featured_flag() {
        let catalog = Catalog::sample();
        let featured = catalog.get("1").unwrap();
        assert!(featured.featured);

        let back = from_form(&to_form(featured), Some("1"), fixed_id).unwrap();
        assert!(!back.featured);
        assert_eq!(back.pricing.display_text, featured.pricing.display_text);
    }

    #[test]
    fn to_form_flattens_nested_fields() {
        let catalog = Catalog::sample();
        let form = to_form(catalog.get("2").unwrap());
        assert_eq!(form.amount, "99");
        assert_eq!(form.period, "monthly");
        assert_eq!(form.category, "Monitoring");
        assert_eq!(form.tags, "monitoring, network, proactive");
        assert!(form.emergency_support);
    }
}
