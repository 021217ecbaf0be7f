//! `Address` object type and address input.

use async_graphql::{ID, InputObject, Object, SimpleObject};

use crate::i18n::{self, RawAddress};
use crate::models::{Address, AddressData};

/// A country code with its display name.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "CountryDisplay")]
pub struct CountryDisplay {
    pub code: String,
    pub country: String,
}

/// A stored postal address.
#[derive(Debug, Clone)]
pub struct AddressNode(pub Address);

#[Object(name = "Address")]
impl AddressNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_global_id().into_inner())
    }

    async fn first_name(&self) -> &str {
        &self.0.data.first_name
    }

    async fn last_name(&self) -> &str {
        &self.0.data.last_name
    }

    async fn company_name(&self) -> &str {
        &self.0.data.company_name
    }

    async fn street_address_1(&self) -> &str {
        &self.0.data.street_address_1
    }

    async fn street_address_2(&self) -> &str {
        &self.0.data.street_address_2
    }

    async fn city(&self) -> &str {
        &self.0.data.city
    }

    async fn city_area(&self) -> &str {
        &self.0.data.city_area
    }

    async fn postal_code(&self) -> &str {
        &self.0.data.postal_code
    }

    async fn country(&self) -> CountryDisplay {
        let code = self.0.data.country;
        CountryDisplay {
            code: code.as_str().to_owned(),
            country: i18n::rules_for(code)
                .map_or_else(|| code.as_str().to_owned(), |rules| rules.display_name()),
        }
    }

    async fn country_area(&self) -> &str {
        &self.0.data.country_area
    }

    /// Phone number in E.164 format.
    async fn phone(&self) -> Option<&str> {
        self.0.data.phone.as_ref().map(|phone| phone.as_e164())
    }
}

/// Address fields sent by clients. Omitted fields keep their current value
/// on update.
#[derive(Debug, Clone, Default, InputObject)]
pub struct AddressInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub street_address_1: Option<String>,
    pub street_address_2: Option<String>,
    pub city: Option<String>,
    pub city_area: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub country: Option<String>,
    pub country_area: Option<String>,
    pub phone: Option<String>,
}

impl AddressInput {
    /// Merge the input over `current` for validation.
    #[must_use]
    pub fn into_raw(self, current: Option<&AddressData>) -> RawAddress {
        let base = current.map(|data| RawAddress {
            first_name: Some(data.first_name.clone()),
            last_name: Some(data.last_name.clone()),
            company_name: Some(data.company_name.clone()),
            street_address_1: Some(data.street_address_1.clone()),
            street_address_2: Some(data.street_address_2.clone()),
            city: Some(data.city.clone()),
            city_area: Some(data.city_area.clone()),
            postal_code: Some(data.postal_code.clone()),
            country: Some(data.country.as_str().to_owned()),
            country_area: Some(data.country_area.clone()),
            phone: data.phone.as_ref().map(|phone| phone.as_e164().to_owned()),
        });
        let base = base.unwrap_or_default();

        RawAddress {
            first_name: self.first_name.or(base.first_name),
            last_name: self.last_name.or(base.last_name),
            company_name: self.company_name.or(base.company_name),
            street_address_1: self.street_address_1.or(base.street_address_1),
            street_address_2: self.street_address_2.or(base.street_address_2),
            city: self.city.or(base.city),
            city_area: self.city_area.or(base.city_area),
            postal_code: self.postal_code.or(base.postal_code),
            country: self.country.or(base.country),
            country_area: self.country_area.or(base.country_area),
            phone: self.phone.or(base.phone),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopkeep_core::CountryCode;

    use super::*;

    #[test]
    fn test_input_overrides_current_values() {
        let mut current = AddressData::empty(CountryCode::parse("PL").unwrap());
        current.city = "Wroclaw".to_owned();
        current.postal_code = "53-601".to_owned();

        let raw = AddressInput {
            city: Some("Krakow".to_owned()),
            ..AddressInput::default()
        }
        .into_raw(Some(&current));

        assert_eq!(raw.city.as_deref(), Some("Krakow"));
        assert_eq!(raw.postal_code.as_deref(), Some("53-601"));
        assert_eq!(raw.country.as_deref(), Some("PL"));
    }

    #[test]
    fn test_new_address_starts_empty() {
        let raw = AddressInput {
            country: Some("US".to_owned()),
            ..AddressInput::default()
        }
        .into_raw(None);
        assert_eq!(raw.country.as_deref(), Some("US"));
        assert!(raw.city.is_none());
    }
}
