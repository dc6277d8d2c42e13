//! Claims Intake Domain
//!
//! This crate turns free-form First Notice of Loss (FNOL) documents into
//! structured fields and routes each claim to exactly one processing queue.
//!
//! # Pipeline
//!
//! ```text
//! DocumentSource -> RawDocument -> FieldExtractor -> FieldMap
//!     -> MandatoryFieldSet (missing fields) -> ClaimRouter -> IntakeReport
//! ```
//!
//! A document that cannot be read yields the fixed `Error` report; a
//! damage amount that cannot be parsed aborts the document with an
//! [`IntakeError`].

pub mod document;
pub mod fields;
pub mod extraction;
pub mod routing;
pub mod intake;
pub mod samples;
pub mod error;

pub use document::{RawDocument, DocumentSource, FileSystemSource, InMemorySource};
pub use fields::{FieldName, FieldValue, FieldMap, MandatoryFieldSet, MissingFieldList};
pub use extraction::{FieldExtractor, FieldRule, CaptureKind};
pub use routing::{ClaimRouter, RoutingPolicy, RoutingDecision, RouteQueue};
pub use intake::{ClaimIntake, IntakeReport, UNREADABLE_REASONING};
pub use samples::SampleDocument;
pub use error::{IntakeError, ReadFailure};
