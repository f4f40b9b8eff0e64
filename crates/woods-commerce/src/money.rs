//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! prices everything in US dollars, so no currency is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Basis points in one whole (100%).
const BASIS_POINTS: i128 = 10_000;

/// A monetary value in US dollars.
///
/// Amounts are stored in cents and serialized as that bare integer.
/// Arithmetic saturates instead of overflowing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self::new(dollars.saturating_mul(100))
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use woods_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Add another Money value.
    pub fn add(&self, other: &Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Multiply by a scalar (e.g., a line quantity).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Calculate a rate of this amount given in basis points (800 = 8%).
    ///
    /// The result is rounded to the nearest cent, halves away from zero.
    pub fn percentage(&self, basis_points: i64) -> Money {
        let scaled = i128::from(self.amount_cents) * i128::from(basis_points);
        let mut cents = scaled / BASIS_POINTS;
        let remainder = scaled % BASIS_POINTS;
        if remainder.abs() * 2 >= BASIS_POINTS {
            cents += scaled.signum();
        }
        Money::new(cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }

    /// Format as a display string with cents (e.g., "$1,299.00").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
    }

    /// Format without cents when the amount is whole dollars (e.g., "$1,299").
    ///
    /// Falls back to [`Money::display`] when there are cents to show.
    pub fn display_whole(&self) -> String {
        if self.amount_cents % 100 != 0 {
            return self.display();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}${}",
            sign,
            group_thousands(self.amount_cents.unsigned_abs() / 100)
        )
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

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
    fn test_money_from_dollars_and_decimal() {
        assert_eq!(Money::from_dollars(1299).amount_cents, 129_900);
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert!((Money::new(4999).to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::from_dollars(1299).display(), "$1,299.00");
        assert_eq!(Money::from_dollars(1_234_567).display(), "$1,234,567.00");
        assert_eq!(Money::new(-500).display(), "-$5.00");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_money_display_whole() {
        assert_eq!(Money::from_dollars(1079).display_whole(), "$1,079");
        assert_eq!(Money::from_dollars(25).display_whole(), "$25");
        assert_eq!(Money::new(2050).display_whole(), "$20.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_dollars(10);
        let b = Money::from_dollars(5);
        assert_eq!((a + b).amount_cents, 1500);
        assert_eq!((a * 3).amount_cents, 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_dollars(20));
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!((big + Money::new(1)).amount_cents, i64::MAX);
        assert_eq!((big * 2).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_percentage_rounds_to_cent() {
        assert_eq!(Money::from_dollars(250).percentage(800), Money::from_dollars(20));
        // 8% of $0.99 is 7.92 cents
        assert_eq!(Money::new(99).percentage(800).amount_cents, 8);
        // 0.5% of $1.00 is half a cent
        assert_eq!(Money::new(100).percentage(50).amount_cents, 1);
        assert_eq!(Money::new(-99).percentage(800).amount_cents, -8);
    }

    #[test]
    fn test_money_serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::new(129_900)).unwrap(), "129900");
    }
}
