//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, plus the grouped ("1,234.56") rendering and parsing
//! used when amounts travel through free-form claim documents.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    INR,
    AUD,
    CAD,
    SGD,
    HKD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::SGD => "S$",
            Currency::HKD => "HK$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::SGD => "SGD",
            Currency::HKD => "HKD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amount out of range: {0:?}")]
    Overflow(String),
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally; rendering rounds
/// to the currency's standard precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Renders the amount with its symbol, thousands separators, and the
    /// currency's standard decimal places, e.g. `$1,200.00`
    pub fn to_grouped_string(&self) -> String {
        self.render_grouped(self.currency.decimal_places())
    }

    /// Renders the amount rounded to a whole number with thousands
    /// separators, e.g. `$25,000`
    pub fn to_grouped_whole_string(&self) -> String {
        self.render_grouped(0)
    }

    fn render_grouped(&self, dp: u32) -> String {
        let rounded = self.amount.round_dp(dp);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.dp$}", rounded.abs(), dp = dp as usize);
        let (whole, fraction) = match plain.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut rendered = format!("{}{}{}", sign, self.currency.symbol(), group_thousands(whole));
        if let Some(fraction) = fraction {
            rendered.push('.');
            rendered.push_str(fraction);
        }
        rendered
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_grouped_string())
    }
}

/// Parses an amount written with optional thousands separators
/// (`"18,500.00"`) into a decimal
///
/// Anything that is not a plain decimal once the commas are removed is
/// rejected rather than read as zero. A plain decimal too large for
/// [`Decimal`] is reported as [`MoneyError::Overflow`].
pub fn parse_grouped_amount(raw: &str) -> Result<Decimal, MoneyError> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&digits).map_err(|_| {
        if is_plain_decimal(&digits) {
            MoneyError::Overflow(raw.to_string())
        } else {
            MoneyError::InvalidAmount(raw.to_string())
        }
    })
}

fn is_plain_decimal(digits: &str) -> bool {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouped_rendering_parses_back(cents in 0i64..100_000_000_000i64) {
            let money = Money::new(Decimal::new(cents, 2), Currency::USD);
            let rendered = money.to_grouped_string();
            let parsed = parse_grouped_amount(rendered.trim_start_matches('$')).unwrap();
            prop_assert_eq!(parsed, money.amount());
        }

        #[test]
        fn groups_never_exceed_three_digits(whole in 0i64..1_000_000_000_000i64) {
            let rendered = Money::new(Decimal::from(whole), Currency::USD).to_grouped_whole_string();
            let digits = rendered.trim_start_matches('$');
            let groups: Vec<&str> = digits.split(',').collect();
            prop_assert!(groups[0].len() <= 3 && !groups[0].is_empty());
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
