//! Pattern-based field extraction from FNOL text
//!
//! Every field has its own rule. A rule holds an ordered list of
//! case-insensitive patterns; the first pattern that matches anywhere in the
//! document supplies the value and the remaining patterns are not tried.
//! Rules never look at each other's results.
//!
//! # Example
//!
//! ```rust
//! use domain_claims::{FieldExtractor, FieldName, RawDocument};
//!
//! let extractor = FieldExtractor::new()?;
//! let fields = extractor.extract(&RawDocument::new("Policy Number: HOME-7731\n"))?;
//! assert_eq!(fields.text(FieldName::PolicyNumber), Some("HOME-7731"));
//! # Ok::<(), domain_claims::IntakeError>(())
//! ```

use regex::{Captures, Regex};
use tracing::{debug, instrument, trace};

use core_kernel::parse_grouped_amount;
use crate::document::RawDocument;
use crate::error::IntakeError;
use crate::fields::{FieldMap, FieldName, FieldValue};

/// How the captured text of a rule becomes a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// The trimmed capture, as text
    Text,
    /// The capture plus any directly following lines that do not open a
    /// new `word:` label
    Paragraph,
    /// A decimal amount with thousands separators removed
    Amount,
}

/// Extraction rule for a single field
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: FieldName,
    kind: CaptureKind,
    patterns: Vec<Regex>,
}

impl FieldRule {
    /// Compiles `patterns`; each must have the value in capture group 1
    pub fn new(field: FieldName, kind: CaptureKind, patterns: &[&str]) -> Result<Self, IntakeError> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|source| IntakeError::Pattern { field, source }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { field, kind, patterns })
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    fn first_match<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.patterns.iter().find_map(|pattern| pattern.captures(text))
    }
}

/// Turns unstructured FNOL text into a [`FieldMap`]
///
/// Holds only compiled patterns, so one extractor can serve any number of
/// documents.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    rules: Vec<FieldRule>,
    label_start: Regex,
}

impl FieldExtractor {
    /// Builds the extractor with the standard FNOL label rules
    pub fn new() -> Result<Self, IntakeError> {
        let rules = vec![
            FieldRule::new(
                FieldName::PolicyNumber,
                CaptureKind::Text,
                &[r"(?i)policy\s*(?:number|#|no\.?)[\s:]*([A-Z0-9-]+)"],
            )?,
            FieldRule::new(
                FieldName::PolicyholderName,
                CaptureKind::Text,
                &[r"(?i)policyholder\s*(?:name)?[\s:]*([A-Za-z\s]+?)(?:\n|Date|Policy)"],
            )?,
            FieldRule::new(
                FieldName::IncidentDate,
                CaptureKind::Text,
                &[r"(?i)(?:incident|accident|loss)\s*date[\s:]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"],
            )?,
            FieldRule::new(
                FieldName::IncidentLocation,
                CaptureKind::Text,
                &[r"(?i)(?:incident\s*)?location[\s:]*([^\n]+)"],
            )?,
            FieldRule::new(
                FieldName::IncidentDescription,
                CaptureKind::Paragraph,
                &[r"(?i)(?:incident\s*)?description[\s:]*([^\n]+)"],
            )?,
            FieldRule::new(
                FieldName::EstimatedDamage,
                CaptureKind::Amount,
                &[
                    r"(?i)estimated\s*damage[\s:]*\$?([0-9,]+(?:\.[0-9]{2})?)",
                    r"(?i)damage\s*estimate[\s:]*\$?([0-9,]+(?:\.[0-9]{2})?)",
                ],
            )?,
            FieldRule::new(
                FieldName::ClaimType,
                CaptureKind::Text,
                &[r"(?i)claim\s*type[\s:]*([^\n]+)"],
            )?,
        ];

        Self::with_rules(rules)
    }

    /// Builds an extractor from custom rules
    pub fn with_rules(rules: Vec<FieldRule>) -> Result<Self, IntakeError> {
        let label_start = Regex::new(r"^\w+:").map_err(|source| IntakeError::Pattern {
            field: FieldName::IncidentDescription,
            source,
        })?;

        Ok(Self { rules, label_start })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Runs every rule over the document
    ///
    /// Empty text yields an empty map. The only failure is an amount capture
    /// that does not parse, which is reported instead of being read as zero.
    #[instrument(skip_all, fields(chars = document.text().len()))]
    pub fn extract(&self, document: &RawDocument) -> Result<FieldMap, IntakeError> {
        let text = document.text();
        let mut found = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            if let Some(value) = self.apply(rule, text)? {
                trace!(field = %rule.field, "field matched");
                found.push((rule.field, value));
            }
        }

        debug!(found = found.len(), "extraction complete");
        Ok(found.into_iter().collect())
    }

    fn apply(&self, rule: &FieldRule, text: &str) -> Result<Option<FieldValue>, IntakeError> {
        let Some(group) = rule.first_match(text).and_then(|caps| caps.get(1)) else {
            return Ok(None);
        };

        let captured = match rule.kind {
            CaptureKind::Paragraph => &text[group.start()..self.paragraph_end(text, group.end())],
            CaptureKind::Text | CaptureKind::Amount => group.as_str(),
        };
        let captured = captured.trim();
        if captured.is_empty() {
            return Ok(None);
        }

        let value = match rule.kind {
            CaptureKind::Amount => {
                let amount = parse_grouped_amount(captured).map_err(|source| {
                    IntakeError::MalformedAmount {
                        field: rule.field,
                        raw: captured.to_string(),
                        source,
                    }
                })?;
                FieldValue::Amount(amount)
            }
            CaptureKind::Text | CaptureKind::Paragraph => FieldValue::Text(captured.to_string()),
        };

        Ok(Some(value))
    }

    /// Extends a capture ending at `end` over the non-empty lines that follow
    /// it, stopping at a blank line or a line that starts a `word:` label
    fn paragraph_end(&self, text: &str, mut end: usize) -> usize {
        while text[end..].starts_with('\n') {
            let line_start = end + 1;
            let line_end = text[line_start..]
                .find('\n')
                .map_or(text.len(), |offset| line_start + offset);
            let line = &text[line_start..line_end];

            if line.is_empty() || self.label_start.is_match(line) {
                break;
            }
            end = line_end;
        }
        end
    }
}
