//! Core Kernel - Foundational types shared by the claims intake crates
//!
//! This crate provides the money building blocks used across the workspace:
//! - Money and Currency types with precise decimal arithmetic
//! - Grouped currency rendering for human-readable reasoning strings
//! - Parsing of amounts written with thousands separators

pub mod money;

pub use money::{Money, Currency, MoneyError, parse_grouped_amount};
