//! `addressValidator` input and result types.

use async_graphql::{InputObject, SimpleObject};

use crate::i18n::CountryRules;

#[derive(Debug, Clone, Default, InputObject)]
pub struct AddressValidationInput {
    /// ISO 3166-1 alpha-2 code. Detected from the client IP when omitted.
    pub country_code: Option<String>,
    pub country_area: Option<String>,
    pub city_area: Option<String>,
}

/// Address format metadata for one country.
#[derive(Debug, Clone, SimpleObject)]
pub struct AddressValidationData {
    pub country_code: String,
    /// English name, upper case.
    pub country_name: String,
    pub address_format: String,
    pub address_latin_format: String,
    pub postal_code_matchers: Vec<String>,
    pub postal_code_examples: Vec<String>,
    pub required_fields: Vec<String>,
    pub upper_fields: Vec<String>,
    pub country_area_type: String,
    pub postal_code_type: String,
    pub city_type: String,
}

impl From<&CountryRules> for AddressValidationData {
    fn from(rules: &CountryRules) -> Self {
        Self {
            country_code: rules.code.to_owned(),
            country_name: rules.name.to_owned(),
            address_format: rules.address_format.to_owned(),
            address_latin_format: rules.latin_format().to_owned(),
            postal_code_matchers: rules.postal_code_matchers(),
            postal_code_examples: rules
                .postal_code_examples
                .iter()
                .map(|example| (*example).to_owned())
                .collect(),
            required_fields: rules
                .required_fields
                .iter()
                .map(|field| field.key().to_owned())
                .collect(),
            upper_fields: rules
                .upper_fields
                .iter()
                .map(|field| field.key().to_owned())
                .collect(),
            country_area_type: rules.country_area_type.to_owned(),
            postal_code_type: rules.postal_code_type.to_owned(),
            city_type: rules.city_type.to_owned(),
        }
    }
}
