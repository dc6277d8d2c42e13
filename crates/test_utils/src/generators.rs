//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating FNOL content that keeps the
//! routing-relevant properties under control: descriptions with or without
//! fraud keywords, injury and non-injury claim types, and damage amounts on
//! either side of the fast-track threshold.

use domain_claims::{FieldName, MandatoryFieldSet};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rust_decimal::Decimal;

use crate::builders::{DamageLabel, FnolTextBuilder};

/// Words that cannot form a fraud keyword or any field label
const NEUTRAL_WORDS: &[&str] = &[
    "vehicle", "parking", "lot", "rain", "hail", "window", "bumper", "collision",
    "tree", "garage", "water", "pipe", "burst", "minor", "dent", "roof", "fence",
    "driver", "rear", "wind", "kitchen", "ceiling", "cracked", "branch",
];

/// Claim types that contain none of the injury keywords
const NON_INJURY_CLAIM_TYPES: &[&str] = &[
    "Property Damage", "Theft", "Collision", "Fire", "Flood", "Vandalism", "Windstorm",
];

/// Claim types that contain at least one injury keyword
const INJURY_CLAIM_TYPES: &[&str] = &[
    "Personal Injury", "Bodily Injury", "Injury", "Medical", "Medical Payments",
    "personal injury protection", "BODILY INJURY",
];

const FRAUD_KEYWORDS: &[&str] = &["fraud", "inconsistent", "staged", "suspicious", "fabricated"];

/// Fast-track threshold in cents
const THRESHOLD_CENTS: i64 = 2_500_000;

/// Strategy for a single-line description free of fraud keywords
pub fn clean_description_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(NEUTRAL_WORDS), 1..12)
        .prop_map(|words| words.join(" "))
}

/// Strategy for a fraud keyword in random letter case
pub fn fraud_keyword_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(FRAUD_KEYWORDS), any::<u64>()).prop_map(|(word, mask)| {
        word.chars()
            .enumerate()
            .map(|(i, c)| if (mask >> (i % 64)) & 1 == 1 { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// Strategy for a description containing at least one fraud keyword
pub fn fraud_description_strategy() -> impl Strategy<Value = String> {
    (clean_description_strategy(), fraud_keyword_strategy(), clean_description_strategy())
        .prop_map(|(before, keyword, after)| format!("{} {} {}", before, keyword, after))
}

/// Strategy for claim types that do not trigger the injury gate
pub fn non_injury_claim_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(NON_INJURY_CLAIM_TYPES).prop_map(String::from)
}

/// Strategy for claim types that trigger the injury gate
pub fn injury_claim_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(INJURY_CLAIM_TYPES).prop_map(String::from)
}

/// Strategy for positive damage strictly below the fast-track threshold
pub fn below_threshold_damage_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..THRESHOLD_CENTS).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for damage at or above the fast-track threshold
pub fn at_or_above_threshold_damage_strategy() -> impl Strategy<Value = Decimal> {
    (THRESHOLD_CENTS..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for any positive damage amount
pub fn damage_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for either damage label
pub fn damage_label_strategy() -> impl Strategy<Value = DamageLabel> {
    prop_oneof![Just(DamageLabel::EstimatedDamage), Just(DamageLabel::DamageEstimate)]
}

/// Strategy for a non-empty selection of mandatory fields, in mandatory order
pub fn dropped_mandatory_fields_strategy() -> impl Strategy<Value = Vec<FieldName>> {
    let mandatory = MandatoryFieldSet::standard().fields().to_vec();
    let count = mandatory.len();
    subsequence(mandatory, 1..=count)
}

/// Strategy for a complete document with arbitrary routing-relevant content
pub fn complete_document_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![clean_description_strategy(), fraud_description_strategy()],
        prop_oneof![non_injury_claim_type_strategy(), injury_claim_type_strategy()],
        damage_strategy(),
        damage_label_strategy(),
    )
        .prop_map(|(description, claim_type, damage, label)| {
            FnolTextBuilder::new()
                .with_description(description)
                .with_claim_type(claim_type)
                .with_damage(damage)
                .with_damage_label(label)
                .build()
        })
}
