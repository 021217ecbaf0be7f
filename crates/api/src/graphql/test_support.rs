//! Schema harness for resolver tests: in-memory store, recording mailer
//! and a fixed geolocation answer.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_graphql::{Request, Response};
use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use url::Url;

use shopkeep_core::{AddressId, CountryCode, Email, Permission};

use super::context::RequestContext;
use super::{ApiSchema, build_schema};
use crate::config::{ApiConfig, AuthConfig};
use crate::db::{AccountStore, MemoryAccountStore};
use crate::error::PERMISSION_DENIED_MESSAGE;
use crate::models::{Address, AddressData, NewUser, User, UserChanges};
use crate::services::auth::{AuthService, hash_password};
use crate::services::email::{EmailError, PasswordResetEmail, PasswordResetMailer};
use crate::services::geo::{CountryLocator, GeoError};
use crate::state::AppState;

/// Mailer that keeps every message in memory.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<PasswordResetEmail>>,
}

#[async_trait]
impl PasswordResetMailer for RecordingMailer {
    async fn send_password_reset(&self, email: &PasswordResetEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Locator that places every client in the same country.
pub struct FixedLocator(pub Option<CountryCode>);

#[async_trait]
impl CountryLocator for FixedLocator {
    async fn country_by_ip(&self, _ip: IpAddr) -> Result<Option<CountryCode>, GeoError> {
        Ok(self.0)
    }
}

pub fn test_config(read_only: bool) -> ApiConfig {
    ApiConfig {
        database_url: None,
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        auth: AuthConfig {
            secret_key: SecretString::from("k3y-for-t3sts-0nly-9f8e7d6c5b4a3210"),
            token_ttl: chrono::Duration::minutes(5),
            refresh_window: chrono::Duration::days(7),
            password_reset_ttl: chrono::Duration::days(3),
        },
        password_reset_url: Url::parse("https://shop.test/account/password/reset/").unwrap(),
        read_only,
        geoip_url: None,
        email: None,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

pub struct TestApi {
    store: Arc<MemoryAccountStore>,
    mailer: Arc<RecordingMailer>,
    state: AppState,
    schema: ApiSchema,
}

impl TestApi {
    pub fn new() -> Self {
        Self::build(false, None)
    }

    pub fn read_only() -> Self {
        Self::build(true, None)
    }

    /// API whose geolocation answers `country` for every client.
    pub fn with_country(country: &str) -> Self {
        Self::build(false, Some(CountryCode::parse(country).unwrap()))
    }

    fn build(read_only: bool, country: Option<CountryCode>) -> Self {
        let store = MemoryAccountStore::new_shared();
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::new(
            test_config(read_only),
            store.clone(),
            mailer.clone(),
            Arc::new(FixedLocator(country)),
        );
        let schema = build_schema(state.clone());

        Self {
            store,
            mailer,
            state,
            schema,
        }
    }

    async fn create(&self, mut new_user: NewUser, password: Option<&str>) -> User {
        new_user.password_hash = password.map(|p| hash_password(p).unwrap());
        self.store.create_user(new_user).await.unwrap()
    }

    pub async fn customer(&self, email: &str, password: Option<&str>) -> User {
        self.create(NewUser::customer(Email::parse(email).unwrap()), password)
            .await
    }

    /// Customer with a default billing address in `country`.
    pub async fn customer_with_billing(
        &self,
        email: &str,
        country: &str,
        city: &str,
        postal_code: &str,
    ) -> User {
        let mut address = AddressData::empty(CountryCode::parse(country).unwrap());
        address.first_name = "John".to_owned();
        address.last_name = "Doe".to_owned();
        address.street_address_1 = "Tęczowa 7".to_owned();
        address.city = city.to_owned();
        address.postal_code = postal_code.to_owned();

        let mut new_user = NewUser::customer(Email::parse(email).unwrap());
        new_user.default_billing_address = Some(address);
        self.create(new_user, None).await
    }

    pub async fn staff(&self, email: &str, permissions: &[Permission]) -> User {
        let permissions = permissions.iter().copied().collect::<BTreeSet<_>>();
        self.create(
            NewUser::staff(Email::parse(email).unwrap(), permissions),
            Some("staff-password"),
        )
        .await
    }

    pub async fn superuser(&self, email: &str) -> User {
        let mut new_user = NewUser::staff(Email::parse(email).unwrap(), BTreeSet::new());
        new_user.is_superuser = true;
        self.create(new_user, Some("root-password")).await
    }

    pub async fn grant(&self, user: &User, permissions: &[Permission]) {
        let changes = UserChanges {
            permissions: Some(permissions.iter().copied().collect()),
            ..UserChanges::default()
        };
        self.store.update_user(user.id, changes).await.unwrap();
    }

    pub async fn reload(&self, user: &User) -> User {
        self.store.user_by_id(user.id).await.unwrap().unwrap()
    }

    pub async fn user_by_email(&self, email: &str) -> Option<User> {
        let email = Email::parse(email).unwrap();
        self.store.user_by_email(&email).await.unwrap()
    }

    pub async fn address(&self, id: AddressId) -> Option<Address> {
        self.store.address_by_id(id).await.unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.tokens().issue(&user.email, Utc::now()).unwrap()
    }

    pub fn reset_token_for(&self, user: &User) -> String {
        self.state.reset_tokens().make_token(user, Utc::now())
    }

    /// Whether `email` and `password` currently log in.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        AuthService::new(self.state.store(), self.state.tokens())
            .login_with_password(email, password)
            .await
            .is_ok()
    }

    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }

    pub async fn execute(&self, query: &str, context: RequestContext) -> Response {
        self.schema.execute(Request::new(query).data(context)).await
    }

    pub async fn anonymous(&self, query: &str) -> Response {
        self.execute(query, RequestContext::default()).await
    }

    pub async fn anonymous_from(&self, ip: IpAddr, query: &str) -> Response {
        let context = RequestContext {
            caller: None,
            client_ip: Some(ip),
        };
        self.execute(query, context).await
    }

    /// Execute as `user`, with their current stored permissions.
    pub async fn as_user(&self, user: &User, query: &str) -> Response {
        let caller = self.reload(user).await;
        self.execute(query, RequestContext::authenticated(caller))
            .await
    }

    pub fn sent_emails(&self) -> Vec<PasswordResetEmail> {
        self.mailer.sent.lock().unwrap().clone()
    }

    /// Wait for background mail dispatch to deliver `count` messages.
    pub async fn wait_for_emails(&self, count: usize) -> Vec<PasswordResetEmail> {
        for _ in 0..100 {
            let sent = self.sent_emails();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {count} emails, got {:?}", self.sent_emails());
    }
}

/// Response data as JSON, asserting there were no errors.
pub fn data(response: Response) -> serde_json::Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Assert the response is a single permission error and carries no data.
pub fn assert_permission_denied(response: Response) {
    assert_eq!(response.errors.len(), 1, "{:?}", response.errors);
    let error = &response.errors[0];
    assert_eq!(error.message, PERMISSION_DENIED_MESSAGE);
    let extensions = serde_json::to_value(&error.extensions).unwrap();
    assert_eq!(extensions["code"], "PERMISSION_DENIED");

    let data = response.data.into_json().unwrap();
    assert!(
        data.is_null()
            || data
                .as_object()
                .is_some_and(|fields| fields.values().all(serde_json::Value::is_null)),
        "unexpected data: {data}"
    );
}
