//! Output formatting for the CLI.

use std::fmt::Write as _;

use core_kernel::{Currency, Money};
use domain_claims::{FieldName, FieldValue, IntakeReport};

use crate::config::OutputFormat;
use crate::error::Result;

/// Fields shown in the text summary, in display order.
const KEY_FIELDS: [FieldName; 5] = [
    FieldName::PolicyNumber,
    FieldName::PolicyholderName,
    FieldName::IncidentDate,
    FieldName::EstimatedDamage,
    FieldName::ClaimType,
];

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    currency: Currency,
}

impl Formatter {
    /// Create a new formatter. Amounts are shown in `currency`.
    pub fn new(format: OutputFormat, currency: Currency) -> Self {
        Self { format, currency }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format reports, each labelled with the document it came from.
    ///
    /// JSON output is a single object for one report and an array otherwise.
    pub fn format_reports(&self, reports: &[(String, IntakeReport)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => match reports {
                [(_, report)] => self.format_json(report),
                _ => {
                    let all: Vec<&IntakeReport> = reports.iter().map(|(_, report)| report).collect();
                    Ok(serde_json::to_string_pretty(&all)?)
                }
            },
            OutputFormat::Text => Ok(reports
                .iter()
                .map(|(label, report)| self.format_text(label, report))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Pretty-printed JSON for one report.
    pub fn format_json(&self, report: &IntakeReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Human-readable summary of one report: key fields, missing fields,
    /// route and reasoning.
    pub fn format_text(&self, label: &str, report: &IntakeReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", label);

        for name in KEY_FIELDS {
            let rendered = match report.extracted_fields.get(name) {
                Some(FieldValue::Amount(amount)) => Money::new(*amount, self.currency).to_grouped_string(),
                Some(FieldValue::Text(text)) => text.clone(),
                None => continue,
            };
            let _ = writeln!(out, "{}: {}", name.title(), rendered);
        }

        if !report.missing_fields.is_empty() {
            let titles: Vec<&str> = report.missing_fields.names().iter().map(|n| n.title()).collect();
            let _ = writeln!(out, "Missing: {}", titles.join(", "));
        }

        let _ = writeln!(out, "Route: {}", report.recommended_route);
        let _ = writeln!(out, "Reasoning: {}", report.reasoning);
        out
    }
}
