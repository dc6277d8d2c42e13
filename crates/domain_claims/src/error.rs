//! Claims intake errors

use thiserror::Error;

use core_kernel::MoneyError;
use crate::fields::FieldName;

/// Errors that abort processing of a single document
///
/// A pattern that simply does not match is not an error; the field is
/// left out of the map instead.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid extraction pattern for {field}: {source}")]
    Pattern {
        field: FieldName,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed amount for {field}: {raw:?}")]
    MalformedAmount {
        field: FieldName,
        raw: String,
        #[source]
        source: MoneyError,
    },
}

/// The text provider could not produce a document
#[derive(Debug, Error)]
#[error("Could not read document {locator}: {source}")]
pub struct ReadFailure {
    pub locator: String,
    #[source]
    pub source: std::io::Error,
}

impl ReadFailure {
    pub fn new(locator: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            locator: locator.into(),
            source,
        }
    }
}
