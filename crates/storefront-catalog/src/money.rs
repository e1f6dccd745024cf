//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that catalog prices such as
//! `59.99` compare and subtract exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::CatalogError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::INR => "\u{20b9}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(59.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 5999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a value from whole currency units (e.g., slider bounds),
    /// saturating at the representable range.
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_units()), currency)
    }

    /// Like [`from_major`](Self::from_major), but an amount that does not fit
    /// in minor units is an error.
    pub fn try_from_major(units: i64, currency: Currency) -> Result<Money, CatalogError> {
        units
            .checked_mul(currency.minor_units())
            .map(|cents| Self::new(cents, currency))
            .ok_or_else(|| CatalogError::AmountOutOfRange(format!("{} {}", units, currency)))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$59.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Subtract another Money value, failing on currency mismatch.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CatalogError> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }

    /// Compare two amounts, failing on currency mismatch.
    pub fn try_cmp(&self, other: &Money) -> Result<Ordering, CatalogError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount_cents.cmp(&other.amount_cents))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CatalogError> {
        if self.currency != other.currency {
            return Err(CatalogError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(129.99, Currency::USD);
        assert_eq!(m.amount_cents, 12999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_cents, 100);
    }

    #[test]
    fn test_money_from_major() {
        assert_eq!(Money::from_major(500, Currency::USD).amount_cents, 50000);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1999, Currency::USD).display(), "$19.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::from_decimal(79.99, Currency::USD);
        let b = Money::from_decimal(59.99, Currency::USD);
        assert_eq!(a.try_subtract(&b).unwrap().amount_cents, 2000);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(matches!(
            usd.try_cmp(&eur),
            Err(CatalogError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_from_major_overflow() {
        let huge = 100_000_000_000_000_000;
        assert_eq!(Money::from_major(huge, Currency::USD).amount_cents, i64::MAX);
        assert_eq!(Money::from_major(-huge, Currency::USD).amount_cents, i64::MIN);
        assert!(matches!(
            Money::try_from_major(huge, Currency::USD),
            Err(CatalogError::AmountOutOfRange(_))
        ));
        assert_eq!(
            Money::try_from_major(huge, Currency::JPY).unwrap().amount_cents,
            huge
        );
        assert_eq!(Money::try_from_major(120, Currency::GBP).unwrap().display(), "\u{00a3}120.00");
    }

    #[test]
    fn test_currency_codes_deserialize() {
        let c: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(c, Currency::EUR);
        assert!(serde_json::from_str::<Currency>("\"XYZ\"").is_err());
    }
}
