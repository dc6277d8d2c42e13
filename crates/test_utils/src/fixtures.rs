//! Pre-built Test Fixtures
//!
//! Provides ready-to-use FNOL documents and field maps. These fixtures are
//! consistent and predictable so scenario tests can state exact expectations.

use domain_claims::samples;
use domain_claims::{FieldMap, FieldName};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for whole FNOL documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Complete property claim for $1,200.00 with a clean description
    pub fn low_value_property() -> &'static str {
        samples::LOW_VALUE_DAMAGE.text
    }

    /// Complete personal injury claim for $18,500.00
    pub fn personal_injury() -> &'static str {
        samples::PERSONAL_INJURY.text
    }

    /// Complete property claim whose description is inconsistent and staged
    pub fn potential_fraud() -> &'static str {
        samples::POTENTIAL_FRAUD.text
    }

    /// The low-value property claim with its policy number line removed
    pub fn missing_policy_number() -> String {
        samples::LOW_VALUE_DAMAGE
            .text
            .lines()
            .filter(|line| !line.starts_with("Policy Number:"))
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Labels written in a compact single-block layout with alternative label
    /// spellings
    pub fn compact_layout() -> &'static str {
        "Policy #: HOME-88-1203\n\
         Policyholder: Dana Whitfield\n\
         Loss Date: 11-30-25\n\
         Incident Location: 42 Birch Lane, Portland, OR\n\
         Damage Estimate: 31,750\n\
         Claim Type: Water Damage\n\
         Incident Description: Pipe burst in the upstairs bathroom.\n\
         Water reached the kitchen ceiling.\n"
    }
}

/// Fixture for field maps built directly, bypassing extraction
pub struct FieldMapFixtures;

impl FieldMapFixtures {
    /// Standard policy number
    pub fn policy_number() -> &'static str {
        "AUTO-2024-78901"
    }

    /// Standard damage amount, below the default fast-track threshold
    pub fn damage() -> Decimal {
        dec!(1200.00)
    }

    /// All six mandatory fields plus a description
    pub fn complete() -> FieldMap {
        FieldMap::new()
            .with(FieldName::PolicyNumber, Self::policy_number())
            .with(FieldName::PolicyholderName, "Sarah Johnson")
            .with(FieldName::IncidentDate, "02/03/2026")
            .with(FieldName::IncidentLocation, "123 Main Street, Springfield, IL")
            .with(FieldName::IncidentDescription, "Minor fender bender in parking lot.")
            .with(FieldName::EstimatedDamage, Self::damage())
            .with(FieldName::ClaimType, "Property Damage")
    }
}
