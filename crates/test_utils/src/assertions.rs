//! Custom Test Assertions
//!
//! Provides assertion helpers for intake reports that print the whole
//! report on failure, which is usually what you need to see.

use domain_claims::{FieldName, IntakeReport, RouteQueue};

/// Asserts that the report was routed to `queue`
pub fn assert_routed_to(report: &IntakeReport, queue: RouteQueue) {
    assert_eq!(
        report.recommended_route, queue,
        "Expected route {}, got {} ({}); report: {:?}",
        queue, report.recommended_route, report.reasoning, report
    );
}

/// Asserts that exactly `expected` are listed as missing, in that order
pub fn assert_missing_exactly(report: &IntakeReport, expected: &[FieldName]) {
    assert_eq!(
        report.missing_fields.names(),
        expected,
        "Missing field list mismatch; report: {:?}",
        report
    );
}

/// Asserts that the reasoning mentions every fragment
///
/// # Panics
///
/// Panics naming the first fragment that is absent
pub fn assert_reasoning_mentions(report: &IntakeReport, fragments: &[&str]) {
    for fragment in fragments {
        assert!(
            report.reasoning.contains(fragment),
            "Reasoning {:?} does not mention {:?}",
            report.reasoning,
            fragment
        );
    }
}

/// Asserts that every mandatory field name listed as missing appears in the
/// reasoning
pub fn assert_reasoning_lists_missing(report: &IntakeReport) {
    for name in report.missing_fields.names() {
        assert!(
            report.reasoning.contains(name.as_str()),
            "Reasoning {:?} does not list missing field {}",
            report.reasoning,
            name
        );
    }
}
