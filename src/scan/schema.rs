//! JSON-LD structured data detection.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static JSON_LD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid json-ld script regex")
});

/// schema.org types that are LocalBusiness or one of its common descendants.
const LOCAL_BUSINESS_TYPES: &[&str] = &[
    "LocalBusiness",
    "AccountingService",
    "Attorney",
    "AutoRepair",
    "AutomotiveBusiness",
    "BeautySalon",
    "ChildCare",
    "Dentist",
    "DryCleaningOrLaundry",
    "Electrician",
    "EmergencyService",
    "FinancialService",
    "FoodEstablishment",
    "GeneralContractor",
    "HVACBusiness",
    "HealthAndBeautyBusiness",
    "HomeAndConstructionBusiness",
    "HousePainter",
    "InsuranceAgency",
    "LegalService",
    "Locksmith",
    "LodgingBusiness",
    "MedicalBusiness",
    "MovingCompany",
    "Physician",
    "Plumber",
    "ProfessionalService",
    "RealEstateAgent",
    "Restaurant",
    "RoofingContractor",
    "Store",
    "VeterinaryCare",
];

pub fn has_local_business_schema(html: &str) -> bool {
    JSON_LD.captures_iter(html).any(|cap| {
        let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
        if raw.is_empty() {
            return false;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return false;
        };
        contains_local_business(&value)
    })
}

fn contains_local_business(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.get("@type").is_some_and(is_local_business_type)
                || map.values().any(contains_local_business)
        }
        Value::Array(items) => items.iter().any(contains_local_business),
        _ => false,
    }
}

fn is_local_business_type(value: &Value) -> bool {
    match value {
        Value::String(name) => {
            let name = name.rsplit(['/', ':']).next().unwrap_or(name.as_str());
            LOCAL_BUSINESS_TYPES.contains(&name)
        }
        Value::Array(items) => items.iter().any(is_local_business_type),
        _ => false,
    }
}
