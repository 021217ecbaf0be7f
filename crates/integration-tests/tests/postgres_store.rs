//! `PgAccountStore` against a real database.
//!
//! These tests require a `PostgreSQL` database in `SHOPKEEP_DATABASE_URL`
//! (or `DATABASE_URL`). Migrations are applied before each test.

use std::sync::Arc;

use serde_json::json;
use shopkeep_api::config::database_url_from_env;
use shopkeep_api::db::{self, AccountStore, PgAccountStore, RepositoryError, UserFilter};
use shopkeep_api::models::{AddressData, NewUser, UserChanges, UserKind};
use shopkeep_core::{CountryCode, Email};
use shopkeep_integration_tests::{TestServer, test_config};

async fn store() -> PgAccountStore {
    let url = database_url_from_env().expect("SHOPKEEP_DATABASE_URL must be set");
    let pool = db::create_pool(&url).await.expect("Failed to connect");
    db::migrate(&pool).await.expect("Failed to migrate");
    PgAccountStore::new(pool)
}

/// An email no other test run has used.
fn unique_email(prefix: &str) -> Email {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    Email::parse(&format!("{prefix}-{nanos}@example.com")).unwrap()
}

fn address(city: &str) -> AddressData {
    let mut address = AddressData::empty(CountryCode::parse("PL").unwrap());
    address.first_name = "John".to_owned();
    address.last_name = "Doe".to_owned();
    address.street_address_1 = "Tęczowa 7".to_owned();
    address.city = city.to_owned();
    address.postal_code = "53-601".to_owned();
    address
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (SHOPKEEP_DATABASE_URL)"]
async fn test_user_lifecycle() {
    let store = store().await;
    let email = unique_email("lifecycle");

    let mut new_user = NewUser::customer(email.clone());
    new_user.default_billing_address = Some(address("WROCŁAW"));
    let user = store.create_user(new_user).await.unwrap();
    let billing_id = user.default_billing_address_id.unwrap();

    let duplicate = store.create_user(NewUser::customer(email.clone())).await;
    assert!(matches!(duplicate, Err(RepositoryError::Conflict(_))));

    // Updating the default address keeps its identity.
    let changes = UserChanges {
        default_billing_address: Some(address("KRAKÓW")),
        ..UserChanges::default()
    };
    let updated = store.update_user(user.id, changes).await.unwrap();
    assert_eq!(updated.default_billing_address_id, Some(billing_id));
    let billing = store.address_by_id(billing_id).await.unwrap().unwrap();
    assert_eq!(billing.data.city, "KRAKÓW");

    let filter = UserFilter {
        kind: Some(UserKind::Customer),
        search: Some(email.as_str().to_uppercase()),
    };
    assert_eq!(store.count_users(&filter).await.unwrap(), 1);

    assert!(store.delete_user(user.id).await.unwrap());
    assert!(store.user_by_id(user.id).await.unwrap().is_none());
    assert!(store.address_by_id(billing_id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL (SHOPKEEP_DATABASE_URL)"]
async fn test_graphql_over_postgres() {
    let store = Arc::new(store().await);
    store.ping().await.unwrap();
    let server = TestServer::start_with(test_config(false), store).await;
    let email = unique_email("register");

    let body = server
        .graphql(
            "mutation Register($email: String!) {
                customerRegister(input: { email: $email, password: \"correct-horse\" }) {
                    errors { field }
                }
            }",
            json!({ "email": email.as_str() }),
            None,
        )
        .await;
    assert_eq!(body["data"]["customerRegister"]["errors"], json!([]));

    let token = server.login(email.as_str(), "correct-horse").await;
    let body = server
        .graphql("query { me { email } }", json!({}), Some(&token))
        .await;
    assert_eq!(body["data"]["me"]["email"], email.as_str());
}
