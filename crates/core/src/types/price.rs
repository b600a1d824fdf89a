//! Type-safe price representation.
//!
//! Prices are stored as an integer number of cents (the store persists
//! `price_cents` columns), with decimal conversion for display and
//! serialization. A price can never be negative.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {cents} cents)")]
    Negative {
        /// The rejected amount in cents.
        cents: i64,
    },
}

/// A non-negative price in the store's single currency.
///
/// ## Examples
///
/// ```
/// use festiva_core::Price;
///
/// let price = Price::from_cents(1950).unwrap();
/// assert_eq!(price.cents(), 1950);
/// assert_eq!(price.to_string(), "19.50");
///
/// assert!(Price::from_cents(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a `Price` from an amount in cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is negative.
    pub const fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative { cents });
        }
        Ok(Self(cents))
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a decimal in the currency's standard unit.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.amount())
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::from_cents(cents)
    }
}

impl Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let amount: Decimal = s.parse().map_err(serde::de::Error::custom)?;
        let cents = (amount * Decimal::new(100, 0))
            .to_i64()
            .ok_or_else(|| serde::de::Error::custom("price out of range"))?;
        Self::from_cents(cents).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Price {
    fn decode(
        value: sqlx::sqlite::SqliteValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let cents = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self::from_cents(cents)?)
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_rejects_negative() {
        assert!(matches!(
            Price::from_cents(-50),
            Err(PriceError::Negative { cents: -50 })
        ));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_cents(500).unwrap().to_string(), "5.00");
        assert_eq!(Price::from_cents(1999).unwrap().to_string(), "19.99");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Price::from_cents(1250).unwrap()).unwrap();
        assert_eq!(json, "\"12.50\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let price: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(price.cents(), 1250);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-1.00\"").is_err());
    }
}
