//! Query root.

use std::net::IpAddr;

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use shopkeep_core::{CountryCode, Permission, UserId};

use super::context;
use super::guards::PermissionGuard;
use super::types::{
    AddressValidationData, AddressValidationInput, UserConnection, UserNode, connection,
};
use crate::db::UserFilter;
use crate::error::{self, AppError};
use crate::i18n::{self, CountryRules, FIELD_REQUIRED, INVALID_COUNTRY};
use crate::models::UserKind;
use crate::state::AppState;

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// The authenticated user.
    async fn me(&self, ctx: &Context<'_>) -> Option<UserNode> {
        context::caller(ctx).cloned().map(UserNode)
    }

    /// Look up any user by ID.
    #[graphql(guard = "PermissionGuard::new(Permission::ManageUsers)")]
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserNode>> {
        let Some(user_id) = UserId::from_global_id(&id) else {
            return Ok(None);
        };
        let user = context::state(ctx)?
            .store()
            .user_by_id(user_id)
            .await
            .map_err(|e| AppError::from(e).extend())?;
        Ok(user.map(UserNode))
    }

    /// Non-staff users, ordered by email.
    #[graphql(guard = "PermissionGuard::new(Permission::ManageUsers)")]
    async fn customers(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Case-insensitive email search")] query: Option<String>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<UserConnection> {
        let filter = UserFilter {
            kind: Some(UserKind::Customer),
            search: query,
        };
        connection::users(context::state(ctx)?, filter, after, before, first, last).await
    }

    /// Staff users, ordered by email.
    #[graphql(guard = "PermissionGuard::new(Permission::ManageStaff)")]
    async fn staff_users(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Case-insensitive email search")] query: Option<String>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<UserConnection> {
        let filter = UserFilter {
            kind: Some(UserKind::Staff),
            search: query,
        };
        connection::users(context::state(ctx)?, filter, after, before, first, last).await
    }

    /// Address format rules for a country, detected from the client IP when
    /// no country code is given.
    async fn address_validator(
        &self,
        ctx: &Context<'_>,
        input: AddressValidationInput,
    ) -> Result<AddressValidationData> {
        let rules = country_rules(context::state(ctx)?, input, context::client_ip(ctx))
            .await
            .map_err(|e| e.extend())?;
        Ok(AddressValidationData::from(rules))
    }
}

fn invalid_country() -> AppError {
    AppError::InvalidInput {
        field: "countryCode",
        message: INVALID_COUNTRY.to_owned(),
    }
}

async fn country_rules(
    state: &AppState,
    input: AddressValidationInput,
    client_ip: Option<IpAddr>,
) -> error::Result<&'static CountryRules> {
    let requested = input.country_code.filter(|code| !code.trim().is_empty());
    let country = match requested {
        Some(code) => Some(CountryCode::parse(&code).map_err(|_| invalid_country())?),
        None => locate(state, client_ip).await,
    };

    let Some(country) = country else {
        return Err(AppError::InvalidInput {
            field: "countryCode",
            message: FIELD_REQUIRED.to_owned(),
        });
    };
    i18n::rules_for(country).ok_or_else(invalid_country)
}

/// Country of the client, if it can be determined. Lookup failures are
/// logged and treated as unknown.
async fn locate(state: &AppState, client_ip: Option<IpAddr>) -> Option<CountryCode> {
    let ip = client_ip?;
    match state.locator().country_by_ip(ip).await {
        Ok(country) => country,
        Err(e) => {
            tracing::warn!(error = %e, %ip, "Geolocation lookup failed");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use shopkeep_core::Permission;

    use crate::graphql::test_support::{TestApi, assert_permission_denied, data};

    const LIST_CUSTOMERS: &str = r#"query {
        customers(first: 20) { totalCount edges { node { email isStaff } } }
    }"#;
    const LIST_STAFF: &str = r#"query {
        staffUsers(first: 20) { totalCount edges { node { email isStaff } } }
    }"#;

    #[tokio::test]
    async fn test_me() {
        let api = TestApi::new();
        let customer = api.customer("customer@example.com", None).await;

        let response = api
            .as_user(&customer, "query { me { email isStaff } }")
            .await;
        assert_eq!(
            data(response)["me"],
            json!({ "email": "customer@example.com", "isStaff": false })
        );

        let response = api.anonymous("query { me { email } }").await;
        assert_eq!(data(response)["me"], json!(null));
    }

    #[tokio::test]
    async fn test_user_query() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api.customer("customer@example.com", None).await;
        let query = format!(
            r#"query {{ user(id: "{}") {{ email isActive note }} }}"#,
            customer.id.to_global_id()
        );

        let response = api.as_user(&staff, &query).await;
        assert_eq!(
            data(response)["user"],
            json!({ "email": "customer@example.com", "isActive": true, "note": null })
        );

        let response = api
            .as_user(&staff, r#"query { user(id: "garbage") { email } }"#)
            .await;
        assert_eq!(data(response)["user"], json!(null));
    }

    #[tokio::test]
    async fn test_user_addresses_connection() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        let customer = api
            .customer_with_billing("customer@example.com", "PL", "Wroclaw", "53-601")
            .await;

        let query = format!(
            r#"query {{
                user(id: "{}") {{
                    addresses {{ totalCount }}
                    firstPage: addresses(first: 1) {{
                        pageInfo {{ hasNextPage }}
                        edges {{ node {{ city }} }}
                    }}
                }}
            }}"#,
            customer.id.to_global_id()
        );
        let response = api.as_user(&staff, &query).await;
        assert_eq!(
            data(response)["user"],
            json!({
                "addresses": { "totalCount": 1 },
                "firstPage": {
                    "pageInfo": { "hasNextPage": false },
                    "edges": [{ "node": { "city": "Wroclaw" } }]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_user_query_denied_regardless_of_existence() {
        let api = TestApi::new();
        let customer = api.customer("customer@example.com", None).await;

        let existing = api
            .as_user(
                &customer,
                &format!(
                    r#"query {{ user(id: "{}") {{ email }} }}"#,
                    customer.id.to_global_id()
                ),
            )
            .await;
        let missing = api
            .as_user(&customer, r#"query { user(id: "VXNlcjo5OTk=") { email } }"#)
            .await;

        let existing = serde_json::to_value(&existing).unwrap();
        let missing = serde_json::to_value(&missing).unwrap();
        assert_eq!(existing, missing);
        assert_eq!(existing["data"]["user"], json!(null));
        assert_eq!(existing["errors"][0]["extensions"]["code"], "PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn test_customers_excludes_staff() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        api.customer("b-customer@example.com", None).await;
        api.customer("a-customer@example.com", None).await;

        let response = api.as_user(&staff, LIST_CUSTOMERS).await;
        assert_eq!(
            data(response)["customers"],
            json!({
                "totalCount": 2,
                "edges": [
                    { "node": { "email": "a-customer@example.com", "isStaff": false } },
                    { "node": { "email": "b-customer@example.com", "isStaff": false } }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_staff_users_excludes_customers() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageStaff]).await;
        api.customer("customer@example.com", None).await;

        let response = api.as_user(&staff, LIST_STAFF).await;
        assert_eq!(
            data(response)["staffUsers"],
            json!({
                "totalCount": 1,
                "edges": [{ "node": { "email": "staff@example.com", "isStaff": true } }]
            })
        );
    }

    #[tokio::test]
    async fn test_listings_require_permission() {
        let api = TestApi::new();
        let users_only = api.staff("users@example.com", &[Permission::ManageUsers]).await;
        let staff_only = api.staff("staff@example.com", &[Permission::ManageStaff]).await;

        assert_permission_denied(api.anonymous(LIST_CUSTOMERS).await);
        assert_permission_denied(api.as_user(&staff_only, LIST_CUSTOMERS).await);
        assert_permission_denied(api.anonymous(LIST_STAFF).await);
        assert_permission_denied(api.as_user(&users_only, LIST_STAFF).await);
    }

    #[tokio::test]
    async fn test_customers_search_and_pagination() {
        let api = TestApi::new();
        let staff = api.staff("staff@example.com", &[Permission::ManageUsers]).await;
        for email in ["ann@shop.test", "bob@shop.test", "cid@other.test"] {
            api.customer(email, None).await;
        }

        let response = api
            .as_user(
                &staff,
                r#"query {
                    customers(query: "SHOP.TEST", first: 1) {
                        totalCount
                        pageInfo { hasNextPage endCursor }
                        edges { node { email } }
                    }
                }"#,
            )
            .await;
        let page = &data(response)["customers"];
        assert_eq!(page["totalCount"], 2);
        assert_eq!(page["pageInfo"]["hasNextPage"], true);
        assert_eq!(page["edges"], json!([{ "node": { "email": "ann@shop.test" } }]));

        let cursor = page["pageInfo"]["endCursor"].as_str().unwrap().to_owned();
        let response = api
            .as_user(
                &staff,
                &format!(
                    r#"query {{
                        customers(query: "shop.test", first: 5, after: "{cursor}") {{
                            pageInfo {{ hasNextPage }}
                            edges {{ node {{ email }} }}
                        }}
                    }}"#
                ),
            )
            .await;
        let page = &data(response)["customers"];
        assert_eq!(page["pageInfo"]["hasNextPage"], false);
        assert_eq!(page["edges"], json!([{ "node": { "email": "bob@shop.test" } }]));
    }

    #[tokio::test]
    async fn test_address_validator_for_poland() {
        let api = TestApi::new();
        let response = api
            .anonymous(
                r#"query {
                    addressValidator(input: { countryCode: "PL" }) {
                        countryCode
                        countryName
                        addressFormat
                        addressLatinFormat
                        postalCodeMatchers
                    }
                }"#,
            )
            .await;

        let result = &data(response)["addressValidator"];
        assert_eq!(result["countryCode"], "PL");
        assert_eq!(result["countryName"], "POLAND");
        assert_eq!(result["addressFormat"], "%N%n%O%n%A%n%Z %C");
        assert_eq!(result["addressLatinFormat"], "%N%n%O%n%A%n%Z %C");
        let matcher = regex::Regex::new(result["postalCodeMatchers"][0].as_str().unwrap()).unwrap();
        assert!(matcher.is_match("00-123"));
    }

    #[tokio::test]
    async fn test_address_validator_uses_client_country() {
        let api = TestApi::with_country("US");
        let response = api
            .anonymous_from(
                "203.0.113.7".parse().unwrap(),
                "query { addressValidator(input: {}) { countryCode countryName postalCodeType } }",
            )
            .await;

        assert_eq!(
            data(response)["addressValidator"],
            json!({ "countryCode": "US", "countryName": "UNITED STATES", "postalCodeType": "zip" })
        );
    }

    #[tokio::test]
    async fn test_address_validator_outside_core_markets() {
        let api = TestApi::with_country("SE");
        let response = api
            .anonymous_from(
                "198.51.100.20".parse().unwrap(),
                "query { addressValidator(input: {}) { countryCode countryName postalCodeExamples } }",
            )
            .await;
        assert_eq!(
            data(response)["addressValidator"],
            json!({
                "countryCode": "SE",
                "countryName": "SWEDEN",
                "postalCodeExamples": ["11455", "12345", "10500"]
            })
        );

        for code in ["BR", "IN", "CH"] {
            let query = format!(
                r#"query {{ addressValidator(input: {{ countryCode: "{code}" }}) {{ countryCode }} }}"#
            );
            let response = api.anonymous(&query).await;
            assert_eq!(data(response)["addressValidator"]["countryCode"], code);
        }
    }

    #[tokio::test]
    async fn test_address_validator_unknown_country() {
        let api = TestApi::new();
        let response = api
            .anonymous(r#"query { addressValidator(input: { countryCode: "XX" }) { countryCode } }"#)
            .await;

        let response = serde_json::to_value(&response).unwrap();
        assert_eq!(response["errors"][0]["message"], "Invalid country code.");
        assert_eq!(response["errors"][0]["extensions"]["field"], "countryCode");
    }
}
