//! Test Data Builders
//!
//! Provides a builder for FNOL document text with sensible defaults. Tests
//! specify only the fields they care about, and may drop any field to
//! exercise the completeness gate.

use core_kernel::{Currency, Money};
use domain_claims::FieldName;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Which label introduces the damage amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageLabel {
    /// `Estimated Damage:`
    EstimatedDamage,
    /// `Damage Estimate:`
    DamageEstimate,
}

/// Builder for FNOL document text laid out like an intake form
#[derive(Debug, Clone)]
pub struct FnolTextBuilder {
    policy_number: Option<String>,
    policyholder_name: Option<String>,
    incident_date: Option<String>,
    incident_location: Option<String>,
    incident_description: Option<String>,
    estimated_damage: Option<Decimal>,
    damage_label: DamageLabel,
    claim_type: Option<String>,
}

impl Default for FnolTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolTextBuilder {
    /// Creates a builder for a complete, clean, low-value property claim
    pub fn new() -> Self {
        Self {
            policy_number: Some("AUTO-2024-78901".to_string()),
            policyholder_name: Some("Sarah Johnson".to_string()),
            incident_date: Some("02/03/2026".to_string()),
            incident_location: Some("123 Main Street, Springfield, IL".to_string()),
            incident_description: Some(
                "Minor fender bender in parking lot. Vehicle backing out hit a shopping cart."
                    .to_string(),
            ),
            estimated_damage: Some(dec!(1200.00)),
            damage_label: DamageLabel::EstimatedDamage,
            claim_type: Some("Property Damage".to_string()),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, value: impl Into<String>) -> Self {
        self.policy_number = Some(value.into());
        self
    }

    /// Sets the policyholder name
    pub fn with_policyholder_name(mut self, value: impl Into<String>) -> Self {
        self.policyholder_name = Some(value.into());
        self
    }

    /// Sets the incident date
    pub fn with_incident_date(mut self, value: impl Into<String>) -> Self {
        self.incident_date = Some(value.into());
        self
    }

    /// Sets the incident location
    pub fn with_incident_location(mut self, value: impl Into<String>) -> Self {
        self.incident_location = Some(value.into());
        self
    }

    /// Sets the incident description
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.incident_description = Some(value.into());
        self
    }

    /// Sets the estimated damage
    pub fn with_damage(mut self, amount: Decimal) -> Self {
        self.estimated_damage = Some(amount);
        self
    }

    /// Chooses the label used for the damage line
    pub fn with_damage_label(mut self, label: DamageLabel) -> Self {
        self.damage_label = label;
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, value: impl Into<String>) -> Self {
        self.claim_type = Some(value.into());
        self
    }

    /// Leaves the line for `field` out of the document
    pub fn without(mut self, field: FieldName) -> Self {
        match field {
            FieldName::PolicyNumber => self.policy_number = None,
            FieldName::PolicyholderName => self.policyholder_name = None,
            FieldName::IncidentDate => self.incident_date = None,
            FieldName::IncidentLocation => self.incident_location = None,
            FieldName::IncidentDescription => self.incident_description = None,
            FieldName::EstimatedDamage => self.estimated_damage = None,
            FieldName::ClaimType => self.claim_type = None,
        }
        self
    }

    /// Renders the document text
    pub fn build(self) -> String {
        let mut text = String::from("FIRST NOTICE OF LOSS (FNOL)\n================================\n\n");

        text.push_str("POLICY INFORMATION\n------------------\n");
        push_line(&mut text, "Policy Number", self.policy_number.as_deref());
        push_line(&mut text, "Policyholder Name", self.policyholder_name.as_deref());

        text.push_str("\nINCIDENT INFORMATION\n--------------------\n");
        push_line(&mut text, "Incident Date", self.incident_date.as_deref());
        push_line(&mut text, "Location", self.incident_location.as_deref());
        push_line(&mut text, "Description", self.incident_description.as_deref());

        text.push_str("\nASSET DETAILS\n-------------\n");
        let label = match self.damage_label {
            DamageLabel::EstimatedDamage => "Estimated Damage",
            DamageLabel::DamageEstimate => "Damage Estimate",
        };
        let damage = self
            .estimated_damage
            .map(|amount| Money::new(amount, Currency::USD).to_grouped_string());
        push_line(&mut text, label, damage.as_deref());

        text.push_str("\nOTHER INFORMATION\n-----------------\n");
        push_line(&mut text, "Claim Type", self.claim_type.as_deref());

        text
    }
}

fn push_line(text: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        text.push_str(label);
        text.push_str(": ");
        text.push_str(value);
        text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_every_label() {
        let text = FnolTextBuilder::new().build();
        for label in ["Policy Number:", "Policyholder Name:", "Incident Date:", "Location:", "Description:", "Estimated Damage:", "Claim Type:"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert!(text.contains("$1,200.00"));
    }

    #[test]
    fn test_without_removes_line() {
        let text = FnolTextBuilder::new().without(FieldName::ClaimType).build();
        assert!(!text.contains("Claim Type:"));
    }

    #[test]
    fn test_damage_estimate_label() {
        let text = FnolTextBuilder::new()
            .with_damage_label(DamageLabel::DamageEstimate)
            .with_damage(dec!(31750))
            .build();
        assert!(text.contains("Damage Estimate: $31,750.00"));
    }
}
