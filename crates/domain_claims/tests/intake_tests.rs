//! End-to-end tests for the claims intake pipeline
//!
//! These tests drive whole documents through extraction and routing and
//! check the resulting report, including its JSON wire shape.

use rust_decimal_macros::dec;

use core_kernel::MoneyError;

use domain_claims::{
    ClaimIntake, DocumentSource, FieldMap, FieldName, FileSystemSource, InMemorySource,
    IntakeError, IntakeReport, MandatoryFieldSet, RawDocument, RouteQueue, ClaimRouter,
};
use test_utils::{
    assert_missing_exactly, assert_reasoning_lists_missing, assert_reasoning_mentions,
    assert_routed_to, DamageLabel, DocumentFixtures, FieldMapFixtures, FnolTextBuilder,
};

fn process(text: &str) -> IntakeReport {
    ClaimIntake::new()
        .expect("standard intake")
        .process_document(&RawDocument::new(text))
        .expect("document processes")
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_low_value_property_is_fast_tracked() {
        let report = process(DocumentFixtures::low_value_property());

        assert_routed_to(&report, RouteQueue::FastTrack);
        assert_reasoning_mentions(&report, &["$1,200.00", "$25,000"]);
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_personal_injury_goes_to_specialist_despite_low_damage() {
        let report = process(DocumentFixtures::personal_injury());

        assert_routed_to(&report, RouteQueue::SpecialistQueue);
        assert_eq!(
            report.extracted_fields.amount(FieldName::EstimatedDamage),
            Some(dec!(18500.00))
        );
    }

    #[test]
    fn test_inconsistent_staged_description_goes_to_investigation() {
        let report = process(DocumentFixtures::potential_fraud());

        assert_routed_to(&report, RouteQueue::InvestigationQueue);
        assert_eq!(report.reasoning, "Potential fraud indicators detected");
    }

    #[test]
    fn test_fraud_wins_regardless_of_damage() {
        let text = FnolTextBuilder::new()
            .with_description("Witness statements are inconsistent. Damage pattern suggests staged incident.")
            .with_damage(dec!(750000))
            .build();

        assert_routed_to(&process(&text), RouteQueue::InvestigationQueue);
    }

    #[test]
    fn test_missing_policy_number_goes_to_manual_review() {
        let report = process(&DocumentFixtures::missing_policy_number());

        assert_routed_to(&report, RouteQueue::ManualReview);
        assert_missing_exactly(&report, &[FieldName::PolicyNumber]);
        assert_eq!(report.reasoning, "Missing mandatory fields: policy_number");
    }

    #[test]
    fn test_high_damage_is_standard_processing() {
        let text = FnolTextBuilder::new().with_damage(dec!(42000.50)).build();
        let report = process(&text);

        assert_routed_to(&report, RouteQueue::StandardProcessing);
        assert_eq!(report.reasoning, "Standard claim (damage: $42,000.50)");
    }

    #[test]
    fn test_compact_layout_with_alternative_labels() {
        let report = process(DocumentFixtures::compact_layout());

        assert!(report.missing_fields.is_empty(), "{:?}", report);
        assert_eq!(report.extracted_fields.text(FieldName::PolicyNumber), Some("HOME-88-1203"));
        assert_eq!(report.extracted_fields.text(FieldName::PolicyholderName), Some("Dana Whitfield"));
        assert_eq!(report.extracted_fields.text(FieldName::IncidentDate), Some("11-30-25"));
        assert_eq!(
            report.extracted_fields.text(FieldName::IncidentDescription),
            Some("Pipe burst in the upstairs bathroom.\nWater reached the kitchen ceiling.")
        );
        assert_eq!(report.extracted_fields.amount(FieldName::EstimatedDamage), Some(dec!(31750)));
        assert_routed_to(&report, RouteQueue::StandardProcessing);
    }
}

// ============================================================================
// Extraction Tests
// ============================================================================

mod extraction {
    use super::*;

    #[test]
    fn test_sample_fields_are_extracted() {
        let report = process(DocumentFixtures::low_value_property());
        let fields = &report.extracted_fields;

        assert_eq!(fields.text(FieldName::PolicyNumber), Some("AUTO-2024-78901"));
        assert_eq!(fields.text(FieldName::PolicyholderName), Some("Sarah Johnson"));
        assert_eq!(fields.text(FieldName::IncidentDate), Some("02/03/2026"));
        assert_eq!(fields.text(FieldName::IncidentLocation), Some("123 Main Street, Springfield, IL"));
        assert_eq!(
            fields.text(FieldName::IncidentDescription),
            Some("Minor fender bender in parking lot. Vehicle backing out hit a shopping cart.")
        );
        assert_eq!(fields.amount(FieldName::EstimatedDamage), Some(dec!(1200.00)));
        assert_eq!(fields.text(FieldName::ClaimType), Some("Property Damage"));
        assert_eq!(fields.len(), 7);
    }

    #[test]
    fn test_damage_estimate_label_is_understood() {
        let text = FnolTextBuilder::new()
            .with_damage_label(DamageLabel::DamageEstimate)
            .with_damage(dec!(3300))
            .build();

        let report = process(&text);
        assert_eq!(report.extracted_fields.amount(FieldName::EstimatedDamage), Some(dec!(3300)));
    }

    #[test]
    fn test_missing_description_is_not_a_missing_field() {
        let text = FnolTextBuilder::new().without(FieldName::IncidentDescription).build();
        let report = process(&text);

        assert!(!report.extracted_fields.contains(FieldName::IncidentDescription));
        assert!(report.missing_fields.is_empty());
        assert_routed_to(&report, RouteQueue::FastTrack);
    }

    #[test]
    fn test_non_ascii_damage_digits_count_as_missing() {
        let text = FnolTextBuilder::new()
            .without(FieldName::EstimatedDamage)
            .build()
            + "Estimated Damage: ١٢٣\n";

        let report = process(&text);
        assert_routed_to(&report, RouteQueue::ManualReview);
        assert_missing_exactly(&report, &[FieldName::EstimatedDamage]);
    }

    #[test]
    fn test_damage_beyond_decimal_range_aborts_document() {
        let text = FnolTextBuilder::new()
            .without(FieldName::EstimatedDamage)
            .build()
            + "Estimated Damage: $100,000,000,000,000,000,000,000,000,000\n";

        let result = ClaimIntake::new().unwrap().process_document(&RawDocument::new(text));
        match result {
            Err(IntakeError::MalformedAmount { source: MoneyError::Overflow(raw), .. }) => {
                assert!(raw.starts_with("100,000"));
            }
            other => panic!("expected amount overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_damage_aborts_document() {
        let text = FnolTextBuilder::new()
            .without(FieldName::EstimatedDamage)
            .build()
            + "Estimated Damage: $,,,\n";

        let result = ClaimIntake::new().unwrap().process_document(&RawDocument::new(text));
        match result {
            Err(IntakeError::MalformedAmount { field, raw, .. }) => {
                assert_eq!(field, FieldName::EstimatedDamage);
                assert_eq!(raw, ",,,");
            }
            other => panic!("expected malformed amount, got {:?}", other),
        }
    }
}

// ============================================================================
// Read Failure Tests
// ============================================================================

mod read_failures {
    use super::*;

    #[test]
    fn test_missing_file_yields_error_report() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSystemSource::rooted(dir.path());

        let report = ClaimIntake::new().unwrap().process(&source, "absent.txt").unwrap();

        assert_routed_to(&report, RouteQueue::Error);
        assert_eq!(report.reasoning, "Could not read document.");
        assert!(report.extracted_fields.is_empty());
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_non_utf8_file_yields_error_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("binary.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let source = FileSystemSource::rooted(dir.path());

        let report = ClaimIntake::new().unwrap().process(&source, "binary.txt").unwrap();
        assert_eq!(report, IntakeReport::unreadable());
    }

    #[test]
    fn test_file_on_disk_is_processed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("claim.txt"), DocumentFixtures::personal_injury()).unwrap();
        let source = FileSystemSource::rooted(dir.path());

        let document = source.read("claim.txt").unwrap();
        assert!(document.text().contains("Michael Chen"));

        let report = ClaimIntake::new().unwrap().process(&source, "claim.txt").unwrap();
        assert_routed_to(&report, RouteQueue::SpecialistQueue);
    }

    #[test]
    fn test_empty_document_yields_error_report() {
        let source = InMemorySource::new().with_document("empty.txt", "");
        let report = ClaimIntake::new().unwrap().process(&source, "empty.txt").unwrap();
        assert_eq!(report, IntakeReport::unreadable());
    }
}

// ============================================================================
// Wire Format Tests
// ============================================================================

mod wire_format {
    use super::*;

    #[test]
    fn test_report_uses_camel_case_keys_and_numeric_damage() {
        let report = process(DocumentFixtures::low_value_property());
        let json = serde_json::to_value(&report).unwrap();

        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["extractedFields", "missingFields", "reasoning", "recommendedRoute"]);

        assert_eq!(json["recommendedRoute"], "Fast-Track");
        assert_eq!(json["extractedFields"]["estimated_damage"].as_f64(), Some(1200.0));
        assert_eq!(json["extractedFields"]["policy_number"], "AUTO-2024-78901");
        assert_eq!(json["missingFields"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields_serialize_as_names() {
        let text = FnolTextBuilder::new()
            .without(FieldName::IncidentDate)
            .without(FieldName::EstimatedDamage)
            .build();
        let json = serde_json::to_value(process(&text)).unwrap();

        assert_eq!(json["missingFields"], serde_json::json!(["incident_date", "estimated_damage"]));
        assert_eq!(json["recommendedRoute"], "Manual Review");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = process(DocumentFixtures::personal_injury());
        let json = serde_json::to_string(&report).unwrap();
        let back: IntakeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

// ============================================================================
// Router Invariant Tests
// ============================================================================

mod router_invariants {
    use super::*;

    #[test]
    fn test_map_passing_completeness_always_has_damage() {
        let mandatory = MandatoryFieldSet::standard();
        let complete = FieldMapFixtures::complete();
        assert!(mandatory.missing_from(&complete).is_empty());
        assert!(complete.amount(FieldName::EstimatedDamage).is_some());

        let without_damage: FieldMap = complete
            .iter()
            .filter(|(name, _)| *name != FieldName::EstimatedDamage)
            .map(|(name, value)| (name, value.clone()))
            .collect();
        assert!(mandatory
            .missing_from(&without_damage)
            .contains(FieldName::EstimatedDamage));
    }

    #[test]
    fn test_direct_routing_of_fixture_map() {
        let fields = FieldMapFixtures::complete();
        let missing = MandatoryFieldSet::standard().missing_from(&fields);
        let decision = ClaimRouter::default().route(&fields, &missing);

        assert_eq!(decision.queue, RouteQueue::FastTrack);
        assert_eq!(decision.reasoning, "Damage ($1,200.00) below $25,000 threshold");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let intake = ClaimIntake::new().unwrap();
        let document = RawDocument::new(DocumentFixtures::potential_fraud());

        let first = intake.process_document(&document).unwrap();
        let second = intake.process_document(&document).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_every_dropped_field_is_reported() {
        for field in MandatoryFieldSet::standard().fields() {
            let report = process(&FnolTextBuilder::new().without(*field).build());
            assert_routed_to(&report, RouteQueue::ManualReview);
            assert_missing_exactly(&report, &[*field]);
            assert_reasoning_lists_missing(&report);
        }
    }
}
