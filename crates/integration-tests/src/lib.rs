//! Integration test harness for the Shopkeep accounts API.
//!
//! [`TestServer`] serves the real router on an ephemeral port, backed by
//! the in-memory store, and talks to it over HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopkeep-integration-tests
//!
//! # Including the PostgreSQL store tests
//! SHOPKEEP_DATABASE_URL=postgres://... cargo test -p shopkeep-integration-tests -- --ignored
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::collections::BTreeSet;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

use shopkeep_api::config::{ApiConfig, AuthConfig};
use shopkeep_api::db::{AccountStore, MemoryAccountStore};
use shopkeep_api::models::{NewUser, User};
use shopkeep_api::routes;
use shopkeep_api::services::auth::hash_password;
use shopkeep_api::services::email::{EmailError, PasswordResetEmail, PasswordResetMailer};
use shopkeep_api::services::geo::DisabledLocator;
use shopkeep_api::state::AppState;
use shopkeep_core::{Email, Permission};

/// Storefront page used in password reset links.
pub const RESET_PAGE: &str = "https://shop.test/account/password/reset/";

/// Configuration for a local test server.
#[must_use]
pub fn test_config(read_only: bool) -> ApiConfig {
    ApiConfig {
        database_url: None,
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        auth: AuthConfig {
            secret_key: SecretString::from("integr4tion-k3y-7c1e9a5d3b0f8e6a4c2d"),
            token_ttl: chrono::Duration::minutes(5),
            refresh_window: chrono::Duration::days(7),
            password_reset_ttl: chrono::Duration::days(3),
        },
        password_reset_url: Url::parse(RESET_PAGE).expect("valid reset page"),
        read_only,
        geoip_url: None,
        email: None,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Mailer that keeps every message for inspection.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<PasswordResetEmail>>,
}

#[async_trait]
impl PasswordResetMailer for RecordingMailer {
    async fn send_password_reset(&self, email: &PasswordResetEmail) -> Result<(), EmailError> {
        self.sent
            .lock()
            .expect("mailer lock poisoned")
            .push(email.clone());
        Ok(())
    }
}

/// A running API server.
pub struct TestServer {
    base_url: String,
    client: Client,
    store: Arc<dyn AccountStore>,
    mailer: Arc<RecordingMailer>,
}

impl TestServer {
    /// Start a writable server on the in-memory store.
    pub async fn start() -> Self {
        Self::start_with(test_config(false), MemoryAccountStore::new_shared()).await
    }

    /// Start a server in read-only mode.
    pub async fn start_read_only() -> Self {
        Self::start_with(test_config(true), MemoryAccountStore::new_shared()).await
    }

    /// Start a server over `store`.
    pub async fn start_with(config: ApiConfig, store: Arc<dyn AccountStore>) -> Self {
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::new(config, store.clone(), mailer.clone(), Arc::new(DisabledLocator));
        let app = routes::router(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
            store,
            mailer,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a GraphQL document, authenticated with `token` if given, and
    /// return the decoded response body.
    pub async fn graphql(&self, query: &str, variables: Value, token: Option<&str>) -> Value {
        let mut request = self
            .client
            .post(self.url("/graphql"))
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("JWT {token}"));
        }

        let response = request.send().await.expect("GraphQL request failed");
        assert!(response.status().is_success(), "status {}", response.status());
        response.json().await.expect("GraphQL response is JSON")
    }

    /// Log in through `tokenCreate` and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = self
            .graphql(
                "mutation Login($email: String!, $password: String!) {
                    tokenCreate(email: $email, password: $password) { token errors { field message } }
                }",
                json!({ "email": email, "password": password }),
                None,
            )
            .await;
        let payload = &body["data"]["tokenCreate"];
        assert_eq!(payload["errors"], json!([]), "login failed for {email}");
        payload["token"]
            .as_str()
            .expect("token in tokenCreate payload")
            .to_owned()
    }

    /// Insert a staff user directly into the store.
    pub async fn create_staff(
        &self,
        email: &str,
        password: &str,
        superuser: bool,
        permissions: &[Permission],
    ) -> User {
        let permissions = permissions.iter().copied().collect::<BTreeSet<_>>();
        let mut new_user = NewUser::staff(Email::parse(email).expect("valid email"), permissions);
        new_user.is_superuser = superuser;
        new_user.password_hash = Some(hash_password(password).expect("hashable password"));
        self.store
            .create_user(new_user)
            .await
            .expect("Failed to create staff user")
    }

    #[must_use]
    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn sent_emails(&self) -> Vec<PasswordResetEmail> {
        self.mailer.sent.lock().expect("mailer lock poisoned").clone()
    }

    /// Wait for background mail delivery to record `count` messages.
    pub async fn wait_for_emails(&self, count: usize) -> Vec<PasswordResetEmail> {
        for _ in 0..100 {
            let sent = self.sent_emails();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {count} password reset emails");
    }
}

/// The `id` and `token` query parameters of a password reset link.
#[must_use]
pub fn reset_link_params(link: &str) -> (String, String) {
    let url = Url::parse(link).expect("reset link is a URL");
    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_else(|| panic!("reset link without {name}: {link}"))
    };
    (param("id"), param("token"))
}
