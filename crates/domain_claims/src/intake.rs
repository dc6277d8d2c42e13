//! The FNOL intake pipeline: read, extract, check completeness, route

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::document::{DocumentSource, RawDocument};
use crate::error::IntakeError;
use crate::extraction::FieldExtractor;
use crate::fields::{FieldMap, MandatoryFieldSet, MissingFieldList};
use crate::routing::{ClaimRouter, RouteQueue, RoutingPolicy};

/// Reasoning attached to documents whose text could not be obtained
pub const UNREADABLE_REASONING: &str = "Could not read document.";

/// Outcome of processing one document, as handed to output consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReport {
    pub extracted_fields: FieldMap,
    pub missing_fields: MissingFieldList,
    pub recommended_route: RouteQueue,
    pub reasoning: String,
}

impl IntakeReport {
    /// The fixed report for a document with no readable text
    pub fn unreadable() -> Self {
        Self {
            extracted_fields: FieldMap::new(),
            missing_fields: MissingFieldList::default(),
            recommended_route: RouteQueue::Error,
            reasoning: UNREADABLE_REASONING.to_string(),
        }
    }
}

/// Extractor, mandatory field set and router wired together
///
/// Holds no per-document state; share it freely between callers.
#[derive(Debug, Clone)]
pub struct ClaimIntake {
    extractor: FieldExtractor,
    mandatory: MandatoryFieldSet,
    router: ClaimRouter,
}

impl ClaimIntake {
    /// Standard extraction rules, mandatory fields and routing policy
    pub fn new() -> Result<Self, IntakeError> {
        Self::with_policy(RoutingPolicy::default())
    }

    /// Standard extraction with a custom routing policy
    pub fn with_policy(policy: RoutingPolicy) -> Result<Self, IntakeError> {
        Ok(Self::from_parts(
            FieldExtractor::new()?,
            MandatoryFieldSet::standard(),
            ClaimRouter::new(policy),
        ))
    }

    pub fn from_parts(extractor: FieldExtractor, mandatory: MandatoryFieldSet, router: ClaimRouter) -> Self {
        Self {
            extractor,
            mandatory,
            router,
        }
    }

    pub fn router(&self) -> &ClaimRouter {
        &self.router
    }

    /// Reads `locator` from `source` and processes it
    ///
    /// A read failure is not an error here: it produces the
    /// [`unreadable`](IntakeReport::unreadable) report.
    #[instrument(skip(self, source))]
    pub fn process<S>(&self, source: &S, locator: &str) -> Result<IntakeReport, IntakeError>
    where
        S: DocumentSource + ?Sized,
    {
        match source.read(locator) {
            Ok(document) => self.process_document(&document),
            Err(failure) => {
                warn!(error = %failure, "document unreadable");
                Ok(IntakeReport::unreadable())
            }
        }
    }

    /// Processes text that is already in hand
    pub fn process_document(&self, document: &RawDocument) -> Result<IntakeReport, IntakeError> {
        if document.is_empty() {
            warn!("document has no text");
            return Ok(IntakeReport::unreadable());
        }

        let extracted_fields = self.extractor.extract(document)?;
        let missing_fields = self.mandatory.missing_from(&extracted_fields);
        let decision = self.router.route(&extracted_fields, &missing_fields);

        Ok(IntakeReport {
            extracted_fields,
            missing_fields,
            recommended_route: decision.queue,
            reasoning: decision.reasoning,
        })
    }
}
