//! Price type for catalog items
//!
//! Stored as a whole number of minor units (cents, paisa, ...) so prices
//! never go through floating point. Prices cannot be negative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount in minor currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from minor units
    ///
    /// # Examples
    /// ```
    /// use shopfront::models::Price;
    /// let price = Price::from_minor(1050); // 10.50
    /// ```
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// A zero price
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in minor units
    pub const fn minor(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a price
    ///
    /// Accepts "10.50", "10.5", "10", "$10.50" and "Rs 10.50". Digits past the
    /// second decimal place are dropped.
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let original = s.trim();
        if original.starts_with('-') {
            return Err(PriceParseError::Negative(original.to_string()));
        }

        let s = original
            .strip_prefix('$')
            .or_else(|| original.strip_prefix("Rs"))
            .unwrap_or(original)
            .trim_start();

        let invalid = || PriceParseError::InvalidFormat(original.to_string());

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(fraction))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Format with a currency symbol in front
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Error type for price parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for PriceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid price format: {}", s),
            Self::Negative(s) => write!(f, "Price cannot be negative: {}", s),
        }
    }
}

impl std::error::Error for PriceParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Price::from_minor(1050).to_string(), "10.50");
        assert_eq!(Price::zero().to_string(), "0.00");
        assert_eq!(Price::from_minor(5).to_string(), "0.05");
        assert_eq!(Price::from_minor(1050).format_with_symbol("Rs "), "Rs 10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Price::parse("$10.50").unwrap().minor(), 1050);
        assert_eq!(Price::parse("Rs 10.50").unwrap().minor(), 1050);
        assert_eq!(Price::parse("10").unwrap().minor(), 1000);
        assert_eq!(Price::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Price::parse("10.").unwrap().minor(), 1000);
        assert_eq!(Price::parse("0.059").unwrap().minor(), 5);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Price::parse("-3.00"),
            Err(PriceParseError::Negative(_))
        ));
        assert!(Price::parse("").is_err());
        assert!(Price::parse("abc").is_err());
        assert!(Price::parse("1.2.3").is_err());
        assert!(Price::parse(".50").is_err());
        assert!(Price::parse("1e3").is_err());
    }

    #[test]
    fn test_serialization() {
        let price = Price::from_minor(1999);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "1999");
        assert_eq!(serde_json::from_str::<Price>(&json).unwrap(), price);
    }
}
