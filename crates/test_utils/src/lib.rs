//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built FNOL documents and field maps
//! - `builders`: Builder for FNOL text with selectable fields
//! - `assertions`: Custom assertion helpers for intake reports
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
