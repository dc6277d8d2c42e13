//! CLI configuration

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{Currency, Money};
use domain_claims::RoutingPolicy;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON reports
    Json,
}

/// CLI configuration
///
/// Every setting is optional; the defaults reproduce the standard routing
/// policy exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Report format when `--format` is not given
    pub output_format: OutputFormat,
    /// Currency of the fast-track threshold
    pub currency: Currency,
    /// Damage strictly below this is fast-tracked
    pub fast_track_threshold: Decimal,
    /// Description keywords that trigger investigation
    pub fraud_keywords: Vec<String>,
    /// Claim type keywords that trigger specialist handling
    pub injury_claim_types: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let policy = RoutingPolicy::default();
        Self {
            log_level: "info".to_string(),
            output_format: OutputFormat::Text,
            currency: policy.fast_track_threshold.currency(),
            fast_track_threshold: policy.fast_track_threshold.amount(),
            fraud_keywords: policy.fraud_keywords,
            injury_claim_types: policy.injury_claim_types,
        }
    }
}

impl CliConfig {
    /// Loads configuration from an optional file, then `FNOL_`-prefixed
    /// environment variables
    ///
    /// List settings read from the environment are comma separated.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        builder
            .add_source(
                config::Environment::with_prefix("FNOL")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("fraud_keywords")
                    .with_list_parse_key("injury_claim_types"),
            )
            .build()?
            .try_deserialize()
    }

    /// Routing policy described by this configuration
    pub fn routing_policy(&self) -> RoutingPolicy {
        RoutingPolicy {
            fast_track_threshold: Money::new(self.fast_track_threshold, self.currency),
            fraud_keywords: self.fraud_keywords.clone(),
            injury_claim_types: self.injury_claim_types.clone(),
        }
    }
}
