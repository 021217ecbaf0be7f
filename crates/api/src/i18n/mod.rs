//! Country-specific address formats and validation.
//!
//! One table drives both the `addressValidator` query and the normalization
//! applied by every mutation that writes an address.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use shopkeep_core::{CountryCode, Phone};

pub use data::CountryRules;

use crate::models::AddressData;

pub const FIELD_REQUIRED: &str = "This field is required.";
pub const INVALID_VALUE: &str = "This value is not valid for the address.";
pub const INVALID_PHONE: &str = "Enter a valid phone number.";
pub const INVALID_COUNTRY: &str = "Invalid country code.";

/// Address fields referenced by country rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Name,
    CompanyName,
    StreetAddress,
    City,
    CountryArea,
    PostalCode,
}

impl AddressField {
    /// Name reported in `requiredFields` and `upperFields`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CompanyName => "company_name",
            Self::StreetAddress => "street_address",
            Self::City => "city",
            Self::CountryArea => "country_area",
            Self::PostalCode => "postal_code",
        }
    }

    /// GraphQL input field that errors for this field are attached to.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "firstName",
            Self::CompanyName => "companyName",
            Self::StreetAddress => "streetAddress1",
            Self::City => "city",
            Self::CountryArea => "countryArea",
            Self::PostalCode => "postalCode",
        }
    }
}

static POSTAL_CODE_MATCHERS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    data::COUNTRIES
        .iter()
        .filter_map(|rules| {
            let pattern = rules.postal_code_pattern?;
            let matcher =
                Regex::new(&anchored(pattern)).expect("Invalid postal code pattern");
            Some((rules.code, matcher))
        })
        .collect()
});

fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Rules for `country`, or `None` for codes that name no region.
#[must_use]
pub fn rules_for(country: CountryCode) -> Option<&'static CountryRules> {
    let index = data::COUNTRIES
        .binary_search_by(|rules| rules.code.cmp(country.as_str()))
        .ok()?;
    data::COUNTRIES.get(index)
}

impl CountryRules {
    /// Country name in title case, e.g. `United Kingdom`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .split(' ')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Romanized format, falling back to the native one.
    #[must_use]
    pub fn latin_format(&self) -> &'static str {
        self.address_latin_format.unwrap_or(self.address_format)
    }

    /// Anchored postal code patterns, as sent to clients.
    #[must_use]
    pub fn postal_code_matchers(&self) -> Vec<String> {
        self.postal_code_pattern.map(anchored).into_iter().collect()
    }

    /// Whether `postal_code` is valid here. Countries without postal codes
    /// accept anything.
    #[must_use]
    pub fn postal_code_matches(&self, postal_code: &str) -> bool {
        POSTAL_CODE_MATCHERS
            .get(self.code)
            .is_none_or(|matcher| matcher.is_match(postal_code))
    }
}

/// One failed address check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressValidationError {
    /// GraphQL input field name.
    pub field: &'static str,
    pub message: &'static str,
}

impl AddressValidationError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Address fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct RawAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub street_address_1: Option<String>,
    pub street_address_2: Option<String>,
    pub city: Option<String>,
    pub city_area: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub country_area: Option<String>,
    pub phone: Option<String>,
}

fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Validate and normalize an address for its country.
///
/// Trims every field, checks required fields and the postal code, upper-cases
/// the country's upper fields and converts the phone number to E.164, reading
/// numbers without a `+` prefix as national numbers of the address country.
///
/// # Errors
///
/// Returns every failed check. An unknown or missing country stops
/// validation early since the other rules depend on it.
pub fn normalize_address(raw: RawAddress) -> Result<AddressData, Vec<AddressValidationError>> {
    let country = clean(raw.country);
    if country.is_empty() {
        return Err(vec![AddressValidationError::new("country", FIELD_REQUIRED)]);
    }
    let Some((code, rules)) = CountryCode::parse(&country)
        .ok()
        .and_then(|code| rules_for(code).map(|rules| (code, rules)))
    else {
        return Err(vec![AddressValidationError::new("country", INVALID_COUNTRY)]);
    };

    let mut address = AddressData {
        first_name: clean(raw.first_name),
        last_name: clean(raw.last_name),
        company_name: clean(raw.company_name),
        street_address_1: clean(raw.street_address_1),
        street_address_2: clean(raw.street_address_2),
        city: clean(raw.city),
        city_area: clean(raw.city_area),
        postal_code: clean(raw.postal_code),
        country: code,
        country_area: clean(raw.country_area),
        phone: None,
    };

    for field in rules.upper_fields {
        for value in field_values_mut(&mut address, *field) {
            *value = value.to_uppercase();
        }
    }

    let mut errors = Vec::new();
    for field in rules.required_fields {
        if field_values_mut(&mut address, *field)
            .first()
            .is_none_or(|value| value.is_empty())
        {
            errors.push(AddressValidationError::new(field.input_name(), FIELD_REQUIRED));
        }
    }

    if !address.postal_code.is_empty() && !rules.postal_code_matches(&address.postal_code) {
        errors.push(AddressValidationError::new(
            AddressField::PostalCode.input_name(),
            INVALID_VALUE,
        ));
    }

    let phone = clean(raw.phone);
    if !phone.is_empty() {
        match Phone::parse_for_country(&phone, code) {
            Ok(phone) => address.phone = Some(phone),
            Err(_) => errors.push(AddressValidationError::new("phone", INVALID_PHONE)),
        }
    }

    if errors.is_empty() {
        Ok(address)
    } else {
        Err(errors)
    }
}

/// Stored values behind a rule field. The first entry is the one checked
/// for presence.
fn field_values_mut(address: &mut AddressData, field: AddressField) -> Vec<&mut String> {
    match field {
        AddressField::Name => vec![&mut address.first_name, &mut address.last_name],
        AddressField::CompanyName => vec![&mut address.company_name],
        AddressField::StreetAddress => {
            vec![&mut address.street_address_1, &mut address.street_address_2]
        }
        AddressField::City => vec![&mut address.city],
        AddressField::CountryArea => vec![&mut address.country_area],
        AddressField::PostalCode => vec![&mut address.postal_code],
    }
}
