//! Type-safe price representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative variant price in the shop's currency.
///
/// Serialized as a decimal string (e.g. `"19.99"`), which is what Shopify's
/// `Money` scalar accepts and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1999);
        assert_eq!(price.amount(), Decimal::new(1999, 2));
        assert_eq!(price.to_string(), "19.99");
    }

    #[test]
    fn test_zero_formats_with_cents() {
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(4250)).unwrap();
        assert_eq!(json, "\"42.50\"");
    }

    #[test]
    fn test_deserializes_from_string() {
        let price: Price = serde_json::from_str("\"7.05\"").unwrap();
        assert_eq!(price, Price::from_cents(705));
    }
}
