//! Field vocabulary and the sparse field map produced by extraction

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields that can be read from an FNOL document
///
/// Declaration order is extraction order, and therefore the order in
/// which a [`FieldMap`] serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    PolicyNumber,
    PolicyholderName,
    IncidentDate,
    IncidentLocation,
    IncidentDescription,
    EstimatedDamage,
    ClaimType,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::IncidentDate,
        FieldName::IncidentLocation,
        FieldName::IncidentDescription,
        FieldName::EstimatedDamage,
        FieldName::ClaimType,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policy_number",
            FieldName::PolicyholderName => "policyholder_name",
            FieldName::IncidentDate => "incident_date",
            FieldName::IncidentLocation => "incident_location",
            FieldName::IncidentDescription => "incident_description",
            FieldName::EstimatedDamage => "estimated_damage",
            FieldName::ClaimType => "claim_type",
        }
    }

    /// Human-facing label, e.g. `Policy Number`
    pub fn title(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "Policy Number",
            FieldName::PolicyholderName => "Policyholder Name",
            FieldName::IncidentDate => "Incident Date",
            FieldName::IncidentLocation => "Incident Location",
            FieldName::IncidentDescription => "Incident Description",
            FieldName::EstimatedDamage => "Estimated Damage",
            FieldName::ClaimType => "Claim Type",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extracted value: free text, or a decimal amount emitted as a JSON number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Amount(#[serde(with = "rust_decimal::serde::float")] Decimal),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            FieldValue::Amount(amount) => Some(*amount),
            FieldValue::Text(_) => None,
        }
    }

    /// Empty text and a zero amount both count as "not provided"
    pub fn is_provided(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Amount(amount) => !amount.is_zero(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Decimal> for FieldValue {
    fn from(amount: Decimal) -> Self {
        FieldValue::Amount(amount)
    }
}

/// Fields found in one document; a missing key means "not found"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a map with `name` set to `value`
    pub fn with(mut self, name: FieldName, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name, value.into());
        self
    }

    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    pub fn text(&self, name: FieldName) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn amount(&self, name: FieldName) -> Option<Decimal> {
        self.get(name).and_then(FieldValue::as_amount)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

impl FromIterator<(FieldName, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Mandatory fields that are absent or not provided, in mandatory-set order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingFieldList(Vec<FieldName>);

impl MissingFieldList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.0.contains(&name)
    }

    pub fn names(&self) -> &[FieldName] {
        &self.0
    }
}

impl fmt::Display for MissingFieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.as_str())?;
        }
        Ok(())
    }
}

/// The ordered set of fields every claim must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryFieldSet {
    fields: Vec<FieldName>,
}

impl MandatoryFieldSet {
    /// Policy number, policyholder, incident date and location, claim type,
    /// estimated damage
    pub fn standard() -> Self {
        Self {
            fields: vec![
                FieldName::PolicyNumber,
                FieldName::PolicyholderName,
                FieldName::IncidentDate,
                FieldName::IncidentLocation,
                FieldName::ClaimType,
                FieldName::EstimatedDamage,
            ],
        }
    }

    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    pub fn missing_from(&self, map: &FieldMap) -> MissingFieldList {
        MissingFieldList(
            self.fields
                .iter()
                .copied()
                .filter(|name| !map.get(*name).is_some_and(FieldValue::is_provided))
                .collect(),
        )
    }
}

impl Default for MandatoryFieldSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn complete_map() -> FieldMap {
        FieldMap::new()
            .with(FieldName::PolicyNumber, "AUTO-2024-78901")
            .with(FieldName::PolicyholderName, "Sarah Johnson")
            .with(FieldName::IncidentDate, "02/03/2026")
            .with(FieldName::IncidentLocation, "123 Main Street")
            .with(FieldName::ClaimType, "Property Damage")
            .with(FieldName::EstimatedDamage, dec!(1200.00))
    }

    #[test]
    fn test_complete_map_has_no_missing_fields() {
        let missing = MandatoryFieldSet::standard().missing_from(&complete_map());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_fields_follow_mandatory_order() {
        let map = FieldMap::new()
            .with(FieldName::IncidentDate, "01/01/2026")
            .with(FieldName::ClaimType, "Theft");
        let missing = MandatoryFieldSet::standard().missing_from(&map);
        assert_eq!(
            missing.names(),
            &[
                FieldName::PolicyNumber,
                FieldName::PolicyholderName,
                FieldName::IncidentLocation,
                FieldName::EstimatedDamage,
            ]
        );
        assert_eq!(
            missing.to_string(),
            "policy_number, policyholder_name, incident_location, estimated_damage"
        );
    }

    #[test]
    fn test_zero_damage_counts_as_missing() {
        let map = complete_map().with(FieldName::EstimatedDamage, dec!(0));
        let missing = MandatoryFieldSet::standard().missing_from(&map);
        assert_eq!(missing.names(), &[FieldName::EstimatedDamage]);
    }

    #[test]
    fn test_empty_text_counts_as_missing() {
        let map = complete_map().with(FieldName::PolicyNumber, "");
        assert!(MandatoryFieldSet::standard()
            .missing_from(&map)
            .contains(FieldName::PolicyNumber));
    }

    #[test]
    fn test_description_is_not_mandatory() {
        assert!(!MandatoryFieldSet::standard()
            .fields()
            .contains(&FieldName::IncidentDescription));
    }

    #[test]
    fn test_field_map_serializes_amount_as_number() {
        let json = serde_json::to_value(&complete_map()).unwrap();
        assert!(json["estimated_damage"].is_number());
        assert_eq!(json["estimated_damage"].as_f64(), Some(1200.0));
        assert_eq!(json["policy_number"], "AUTO-2024-78901");
    }

    #[test]
    fn test_field_map_serializes_in_extraction_order() {
        let map = FieldMap::new()
            .with(FieldName::ClaimType, "Theft")
            .with(FieldName::PolicyNumber, "P-1");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"policy_number":"P-1","claim_type":"Theft"}"#);
    }

    #[test]
    fn test_field_map_deserializes_amounts() {
        let map: FieldMap =
            serde_json::from_str(r#"{"estimated_damage":18500.0,"claim_type":"Personal Injury"}"#)
                .unwrap();
        assert_eq!(map.amount(FieldName::EstimatedDamage), Some(dec!(18500)));
        assert_eq!(map.text(FieldName::ClaimType), Some("Personal Injury"));
    }

    #[test]
    fn test_all_field_names_round_trip_through_serde() {
        for name in FieldName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }
}
