//! Hex color code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum HexColorError {
    /// The input is not exactly 7 characters long.
    #[error("hex color must be exactly 7 characters, e.g. \"#ff99cc\"")]
    WrongLength,
    /// The input does not start with '#'.
    #[error("hex color must start with '#'")]
    MissingHash,
    /// The input contains a non-hexadecimal digit.
    #[error("hex color must contain only hexadecimal digits after '#'")]
    InvalidDigit,
}

/// A CSS-style hex color code in `#rrggbb` form.
///
/// ## Constraints
///
/// - Exactly 7 characters
/// - Starts with `#`
/// - The remaining 6 characters are hexadecimal digits
///
/// ## Examples
///
/// ```
/// use festiva_core::HexColor;
///
/// assert!(HexColor::parse("#ff99cc").is_ok());
/// assert!(HexColor::parse("#FFD700").is_ok());
///
/// assert!(HexColor::parse("ff99cc").is_err());   // missing '#'
/// assert!(HexColor::parse("#fff").is_err());     // too short
/// assert!(HexColor::parse("#gg0000").is_err());  // not hex
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Length of a hex color code, including the leading '#'.
    pub const LENGTH: usize = 7;

    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is not exactly 7 characters
    /// - Does not start with '#'
    /// - Contains non-hexadecimal digits
    pub fn parse(s: &str) -> Result<Self, HexColorError> {
        if s.len() != Self::LENGTH {
            return Err(HexColorError::WrongLength);
        }

        let Some(digits) = s.strip_prefix('#') else {
            return Err(HexColorError::MissingHash);
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the color code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `HexColor` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for HexColor {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for HexColor {
    fn decode(
        value: sqlx::sqlite::SqliteValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self::parse(&s)?)
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for HexColor {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let color = HexColor::parse("#e6b8cf").unwrap();
        assert_eq!(color.as_str(), "#e6b8cf");
    }

    #[test]
    fn test_parse_uppercase_digits() {
        assert!(HexColor::parse("#FFD700").is_ok());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            HexColor::parse("#fff"),
            Err(HexColorError::WrongLength)
        ));
        assert!(matches!(
            HexColor::parse("#ff99cc0"),
            Err(HexColorError::WrongLength)
        ));
    }

    #[test]
    fn test_parse_missing_hash() {
        assert!(matches!(
            HexColor::parse("0ff99cc"),
            Err(HexColorError::MissingHash)
        ));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert!(matches!(
            HexColor::parse("#zz99cc"),
            Err(HexColorError::InvalidDigit)
        ));
    }
}
