//! Address domain types.

use shopkeep_core::{AddressId, CountryCode, Phone, UserId};

/// A postal address as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    /// Owning user. Addresses created outside a user flow have no owner.
    pub user_id: Option<UserId>,
    pub data: AddressData,
}

/// Validated, normalized address fields.
///
/// Produced by `i18n::normalize_address`; empty strings mean "not given".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressData {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub city_area: String,
    pub postal_code: String,
    pub country: CountryCode,
    pub country_area: String,
    pub phone: Option<Phone>,
}

impl AddressData {
    /// An address with only a country set.
    #[must_use]
    pub const fn empty(country: CountryCode) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            company_name: String::new(),
            street_address_1: String::new(),
            street_address_2: String::new(),
            city: String::new(),
            city_area: String::new(),
            postal_code: String::new(),
            country,
            country_area: String::new(),
            phone: None,
        }
    }

    /// Full name as printed on labels.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}
