//! ISO 3166-1 alpha-2 country code.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a two-letter country code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("country code must be two ASCII letters, got {0:?}")]
pub struct CountryCodeError(pub String);

/// An upper-case two-letter country code such as `PL` or `US`.
///
/// This only checks the shape. Whether the country is supported for
/// addresses is decided by the address format table in the API crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code, accepting any letter case.
    ///
    /// # Errors
    ///
    /// Returns `CountryCodeError` unless the trimmed input is exactly two
    /// ASCII letters.
    pub fn parse(s: &str) -> Result<Self, CountryCodeError> {
        match s.trim().as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(CountryCodeError(s.to_owned())),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        core::str::from_utf8(&self.0).unwrap_or("ZZ")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_owned()
    }
}
