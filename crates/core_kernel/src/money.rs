//! Money types with precise decimal arithmetic
//!
//! Survey amounts are carried as plain `Decimal` values through the assessment
//! engine. `Money` pairs an amount with a currency for display in reports,
//! where everything is shown to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    INR,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates an amount in rupees, the survey's working currency
    pub fn inr(amount: Decimal) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
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
}

impl fmt::Display for Money {
    /// Symbol followed by [`format_amount`], e.g. `₹-920.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), format_amount(self.amount))
    }
}

/// Rounds a value to two decimal places, with midpoints going away from zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimals, the way survey screens show totals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use core_kernel::format_amount;
///
/// assert_eq!(format_amount(dec!(880)), "880.00");
/// assert_eq!(format_amount(dec!(-920.005)), "-920.01");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_creation() {
        let m = Money::inr(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_money_display_uses_symbol_and_two_decimals() {
        assert_eq!(Money::inr(dec!(880)).to_string(), "₹880.00");
        assert_eq!(Money::inr(dec!(-920)).to_string(), "₹-920.00");
        assert_eq!(Money::inr(dec!(10.005)).to_string(), "₹10.01");
    }

    #[test]
    fn test_format_amount_pads_and_rounds() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(12.345)), "12.35");
        assert_eq!(format_amount(dec!(12.344)), "12.34");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn format_amount_always_has_two_decimals(minor in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6) {
            let formatted = format_amount(Decimal::new(minor, scale));
            let (_, decimals) = formatted.split_once('.').expect("decimal point");
            prop_assert_eq!(decimals.len(), 2);
        }

        #[test]
        fn display_is_symbol_plus_formatted_amount(minor in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6) {
            let amount = Decimal::new(minor, scale);
            prop_assert_eq!(Money::inr(amount).to_string(), format!("₹{}", format_amount(amount)));
        }
    }
}
