//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (kobo for NGN, cents for USD) to
//! avoid floating-point precision issues in totals.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "NGN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₦").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NGN => "\u{20a6}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
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

    /// Minor units per major unit (100 for NGN, 1 for JPY).
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency. Arithmetic is
/// checked: every operation that can overflow or mix currencies returns an
/// `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units (e.g., naira).
    ///
    /// Saturates on overflow.
    ///
    /// ```
    /// use campus_commerce::money::{Currency, Money};
    /// let price = Money::from_major(3500, Currency::NGN);
    /// assert_eq!(price.amount_minor, 350_000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Format as a display string with thousands separators (e.g., "₦3,500.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "3,500.00").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let major = (self.amount_minor / per_major).unsigned_abs();
        let minor = (self.amount_minor % per_major).unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let places = self.currency.decimal_places() as usize;

        if places == 0 {
            format!("{}{}", sign, group_thousands(major))
        } else {
            format!("{}{}.{:0places$}", sign, group_thousands(major), minor)
        }
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }
}

/// Amounts in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount_minor.cmp(&other.amount_minor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(85_000, Currency::NGN);
        assert_eq!(m.amount_minor, 8_500_000);

        let m = Money::from_major(100, Currency::JPY);
        assert_eq!(m.amount_minor, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_major(3500, Currency::NGN).display(), "\u{20a6}3,500.00");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::from_major(1_234_567, Currency::JPY).display(), "\u{00a5}1,234,567");
        assert_eq!(Money::new(-150, Currency::USD).display_amount(), "-1.50");
        assert_eq!(Money::zero(Currency::NGN).display_amount(), "0.00");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(1000, Currency::NGN);
        let b = Money::new(500, Currency::NGN);

        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::NGN)));
        assert_eq!(a.try_multiply(3), Some(Money::new(3000, Currency::NGN)));
        assert_eq!(Money::new(i64::MAX, Currency::NGN).try_multiply(2), None);
        assert_eq!(Money::new(i64::MAX, Currency::NGN).try_add(&a), None);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let ngn = Money::new(1000, Currency::NGN);
        let usd = Money::new(1000, Currency::USD);

        assert_eq!(ngn.try_add(&usd), None);
        assert_eq!(ngn.partial_cmp(&usd), None);
        assert!(!(ngn >= usd));
        assert!(!(ngn <= usd));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("NGN"), Some(Currency::NGN));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
