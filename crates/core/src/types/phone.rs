//! Phone number in E.164 form.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::CountryCode;

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input could not be read as a phone number at all.
    #[error("phone number could not be parsed: {0}")]
    Unparseable(#[from] phonenumber::ParseError),
    /// The number parsed but is not a valid number for its region.
    #[error("phone number is not valid")]
    Invalid,
}

/// A phone number normalized to E.164 (`+48221234567`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a number in international form, starting with `+` and the
    /// country calling code.
    ///
    /// # Errors
    ///
    /// Returns an error if the number cannot be parsed without a region or
    /// is not a valid number.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        Self::parse_in_region(s, None)
    }

    /// Parse a number that may be written in the national format of
    /// `country`. International numbers are accepted as well.
    ///
    /// Countries without numbering metadata only accept international form.
    ///
    /// # Errors
    ///
    /// Returns an error if the number cannot be parsed or is not a valid
    /// number.
    pub fn parse_for_country(s: &str, country: CountryCode) -> Result<Self, PhoneError> {
        let region = country.as_str().parse::<phonenumber::country::Id>().ok();
        Self::parse_in_region(s, region)
    }

    fn parse_in_region(
        s: &str,
        region: Option<phonenumber::country::Id>,
    ) -> Result<Self, PhoneError> {
        let number = phonenumber::parse(region, s.trim())?;
        if !number.is_valid() {
            return Err(PhoneError::Invalid);
        }
        Ok(Self(number.format().mode(phonenumber::Mode::E164).to_string()))
    }

    /// Returns the E.164 form.
    #[must_use]
    pub fn as_e164(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}
