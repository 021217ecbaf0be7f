//! GraphQL schema for accounts.
//!
//! # Operations
//!
//! ```text
//! Query
//!   me                       - authenticated user
//!   user(id)                 - MANAGE_USERS
//!   customers                - MANAGE_USERS
//!   staffUsers               - MANAGE_STAFF
//!   addressValidator(input)  - public
//!
//! Mutation
//!   tokenCreate, tokenVerify, tokenRefresh       - public, allowed in read-only mode
//!   customerRegister, customerPasswordReset      - public
//!   setPassword                                  - public, needs a reset token
//!   customerCreate/Update/Delete, passwordReset  - MANAGE_USERS
//!   addressCreate/Update/Delete                  - MANAGE_USERS
//!   staffCreate/Update/Delete                    - MANAGE_STAFF
//! ```
//!
//! Field validation failures come back in each payload's `errors` list.
//! Permission failures, read-only rejections and internal errors are
//! GraphQL errors with an extension `code`.

pub mod context;
pub mod errors;
mod guards;
pub mod mutations;
pub mod query;
pub mod types;
pub mod validators;

#[cfg(test)]
pub(crate) mod test_support;

use async_graphql::{EmptySubscription, Schema};

pub use context::RequestContext;
pub use mutations::Mutation;
pub use query::Query;

use crate::state::AppState;

/// Maximum selection depth accepted from clients.
const MAX_DEPTH: usize = 12;

pub type ApiSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema with `state` available to every resolver.
#[must_use]
pub fn build_schema(state: AppState) -> ApiSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(state)
        .limit_depth(MAX_DEPTH)
        .finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use shopkeep_core::Permission;

    use super::test_support::{TestApi, data};
    use crate::error::READ_ONLY_MESSAGE;

    #[tokio::test]
    async fn test_read_only_mode_rejects_writes() {
        let api = TestApi::read_only();
        let staff = api
            .staff("staff@example.com", &[Permission::ManageUsers, Permission::ManageStaff])
            .await;

        for query in [
            r#"mutation { customerRegister(input: {email: "new@example.com", password: "password"}) { errors { field } } }"#,
            r#"mutation { customerCreate(input: {email: "new@example.com"}) { errors { field } } }"#,
            r#"mutation { staffCreate(input: {email: "new@example.com"}) { errors { field } } }"#,
            r#"mutation { customerPasswordReset(input: {email: "staff@example.com"}) { errors { field } } }"#,
        ] {
            let response = api.as_user(&staff, query).await;
            assert_eq!(response.errors.len(), 1);
            assert_eq!(response.errors[0].message, READ_ONLY_MESSAGE);
        }
        assert!(api.user_by_email("new@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_read_only_mode_checked_before_permissions() {
        let api = TestApi::read_only();
        let response = api
            .anonymous(r#"mutation { staffDelete(id: "VXNlcjox") { errors { field } } }"#)
            .await;
        assert_eq!(response.errors[0].message, READ_ONLY_MESSAGE);
    }

    #[tokio::test]
    async fn test_read_only_mode_allows_tokens_and_queries() {
        let api = TestApi::read_only();
        api.customer("customer@example.com", Some("password")).await;

        let response = api
            .anonymous(
                r#"mutation {
                    tokenCreate(email: "customer@example.com", password: "password") {
                        token
                        errors { field }
                    }
                }"#,
            )
            .await;
        let payload = &data(response)["tokenCreate"];
        assert_eq!(payload["errors"], json!([]));
        assert!(payload["token"].is_string());

        let response = api
            .anonymous(r#"query { addressValidator(input: {countryCode: "DE"}) { countryName } }"#)
            .await;
        assert_eq!(data(response)["addressValidator"]["countryName"], "GERMANY");
    }

    #[test]
    fn test_schema_exposes_operations() {
        let sdl = TestApi::new().sdl();
        for operation in [
            "tokenCreate",
            "tokenVerify",
            "tokenRefresh",
            "customerRegister",
            "customerCreate",
            "customerUpdate",
            "customerDelete",
            "staffCreate",
            "staffUpdate",
            "staffDelete",
            "setPassword",
            "passwordReset",
            "customerPasswordReset",
            "addressCreate",
            "addressUpdate",
            "addressDelete",
            "addressValidator",
            "staffUsers",
            "customers",
        ] {
            assert!(sdl.contains(operation), "missing {operation}");
        }
    }
}
