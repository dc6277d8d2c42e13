//! Claim routing
//!
//! Routing evaluates a fixed sequence of gates over an extracted field map.
//! The first gate that fires decides the queue; later gates are never
//! consulted.
//!
//! ```text
//! completeness -> fraud -> injury -> fast-track -> standard processing
//! ```

use std::fmt;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{Currency, Money};
use crate::fields::{FieldMap, FieldName, MissingFieldList};

/// Destination queues a document can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteQueue {
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Investigation Queue")]
    InvestigationQueue,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast-Track")]
    FastTrack,
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
    /// The document could not be read
    #[serde(rename = "Error")]
    Error,
}

impl RouteQueue {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteQueue::ManualReview => "Manual Review",
            RouteQueue::InvestigationQueue => "Investigation Queue",
            RouteQueue::SpecialistQueue => "Specialist Queue",
            RouteQueue::FastTrack => "Fast-Track",
            RouteQueue::StandardProcessing => "Standard Processing",
            RouteQueue::Error => "Error",
        }
    }
}

impl fmt::Display for RouteQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds and keyword sets the router applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    /// Damage strictly below this amount is fast-tracked
    pub fast_track_threshold: Money,
    /// Any of these in the incident description sends the claim to investigation
    pub fraud_keywords: Vec<String>,
    /// Any of these in the claim type sends the claim to a specialist
    pub injury_claim_types: Vec<String>,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            fast_track_threshold: Money::new(dec!(25000), Currency::USD),
            fraud_keywords: ["fraud", "inconsistent", "staged", "suspicious", "fabricated"]
                .into_iter()
                .map(String::from)
                .collect(),
            injury_claim_types: ["injury", "personal injury", "bodily injury", "medical"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// The queue chosen for a document and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    pub queue: RouteQueue,
    pub reasoning: String,
}

impl RoutingDecision {
    fn new(queue: RouteQueue, reasoning: impl Into<String>) -> Self {
        Self {
            queue,
            reasoning: reasoning.into(),
        }
    }
}

/// Applies a [`RoutingPolicy`] to extracted claims
#[derive(Debug, Clone)]
pub struct ClaimRouter {
    policy: RoutingPolicy,
}

impl ClaimRouter {
    /// Keywords are compared case-insensitively
    pub fn new(policy: RoutingPolicy) -> Self {
        let lower = |words: &[String]| -> Vec<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        };
        Self {
            policy: RoutingPolicy {
                fast_track_threshold: policy.fast_track_threshold,
                fraud_keywords: lower(&policy.fraud_keywords),
                injury_claim_types: lower(&policy.injury_claim_types),
            },
        }
    }

    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    /// Picks exactly one queue for the claim
    pub fn route(&self, fields: &FieldMap, missing: &MissingFieldList) -> RoutingDecision {
        let decision = self.evaluate(fields, missing);
        info!(queue = %decision.queue, "claim routed");
        decision
    }

    fn evaluate(&self, fields: &FieldMap, missing: &MissingFieldList) -> RoutingDecision {
        if !missing.is_empty() {
            return RoutingDecision::new(
                RouteQueue::ManualReview,
                format!("Missing mandatory fields: {}", missing),
            );
        }

        if contains_any(fields.text(FieldName::IncidentDescription), &self.policy.fraud_keywords) {
            return RoutingDecision::new(
                RouteQueue::InvestigationQueue,
                "Potential fraud indicators detected",
            );
        }

        if contains_any(fields.text(FieldName::ClaimType), &self.policy.injury_claim_types) {
            return RoutingDecision::new(RouteQueue::SpecialistQueue, "Claim involves personal injury");
        }

        let threshold = self.policy.fast_track_threshold;
        let damage = fields
            .amount(FieldName::EstimatedDamage)
            .map(|amount| Money::new(amount, threshold.currency()));

        match damage {
            Some(damage) if damage.amount() < threshold.amount() => RoutingDecision::new(
                RouteQueue::FastTrack,
                format!(
                    "Damage ({}) below {} threshold",
                    damage.to_grouped_string(),
                    threshold.to_grouped_whole_string()
                ),
            ),
            Some(damage) => RoutingDecision::new(
                RouteQueue::StandardProcessing,
                format!("Standard claim (damage: {})", damage.to_grouped_string()),
            ),
            None => RoutingDecision::new(
                RouteQueue::StandardProcessing,
                "Standard claim (damage: not stated)",
            ),
        }
    }
}

impl Default for ClaimRouter {
    fn default() -> Self {
        Self::new(RoutingPolicy::default())
    }
}

fn contains_any(value: Option<&str>, keywords: &[String]) -> bool {
    let value = value.unwrap_or_default().to_lowercase();
    keywords.iter().any(|keyword| value.contains(keyword.as_str()))
}
