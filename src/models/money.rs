//! Money type for representing currency amounts
//!
//! Amounts are whole units of the local currency stored as `i64`. There is no
//! fractional part; the ledger only ever deals in integer amounts. Arithmetic
//! saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use vetsplit::models::Money;
    /// let amount = Money::new(300_000);
    /// assert_eq!(amount.to_string(), "300,000");
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse an amount from user or sheet text
    ///
    /// Accepts "300000", "300,000", "300_000", "-5000", and a numeric text
    /// with a zero fraction such as "300000.0" (how spreadsheets often
    /// export integers).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        if let Ok(units) = cleaned.parse::<i64>() {
            return Ok(Self(units));
        }

        match cleaned.split_once('.') {
            Some((whole, frac)) if !frac.is_empty() && frac.chars().all(|c| c == '0') => whole
                .parse::<i64>()
                .map(Self)
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string())),
            Some((_, frac)) if frac.chars().all(|c| c.is_ascii_digit()) && !frac.is_empty() => {
                Err(MoneyParseError::Fractional(s.to_string()))
            }
            _ => Err(MoneyParseError::InvalidFormat(s.to_string())),
        }
    }

    /// Format with a currency symbol prefix
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        } else {
            format!("{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        }
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

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Fractional(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Fractional(s) => {
                write!(f, "Amounts must be whole units, got: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(999).to_string(), "999");
        assert_eq!(Money::new(1000).to_string(), "1,000");
        assert_eq!(Money::new(300_000).to_string(), "300,000");
        assert_eq!(Money::new(1_234_567).to_string(), "1,234,567");
        assert_eq!(Money::new(-50_000).to_string(), "-50,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(100_000).format_with_symbol("₩"), "₩100,000");
        assert_eq!(Money::new(-50_000).format_with_symbol("₩"), "-₩50,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(400);

        assert_eq!((a + b).units(), 1400);
        assert_eq!((a - b).units(), 600);
        assert_eq!((-a).units(), -1000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::new(i64::MAX);

        assert_eq!(max + Money::new(1), max);
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
        assert_eq!(-Money::new(i64::MIN), max);
        assert_eq!([max, Money::new(1)].iter().sum::<Money>(), max);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("300000").unwrap().units(), 300_000);
        assert_eq!(Money::parse(" 300,000 ").unwrap().units(), 300_000);
        assert_eq!(Money::parse("300_000").unwrap().units(), 300_000);
        assert_eq!(Money::parse("-5000").unwrap().units(), -5000);
        assert_eq!(Money::parse("120000.0").unwrap().units(), 120_000);
    }

    #[test]
    fn test_parse_rejects_garbage_and_fractions() {
        assert!(matches!(
            Money::parse(""),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("10.5"),
            Err(MoneyParseError::Fractional(_))
        ));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::new(100), Money::new(200), Money::new(300)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.units(), 600);
        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(40_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "40000");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
