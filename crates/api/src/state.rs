//! Application state shared across handlers and resolvers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::AccountStore;
use crate::services::auth::{ResetTokenGenerator, TokenSigner};
use crate::services::email::PasswordResetMailer;
use crate::services::geo::CountryLocator;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the account store, token signers and external collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Arc<dyn AccountStore>,
    tokens: TokenSigner,
    reset_tokens: ResetTokenGenerator,
    mailer: Arc<dyn PasswordResetMailer>,
    locator: Arc<dyn CountryLocator>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `store` - Account storage backend
    /// * `mailer` - Password reset email sender
    /// * `locator` - IP-to-country lookup used by `addressValidator`
    #[must_use]
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn AccountStore>,
        mailer: Arc<dyn PasswordResetMailer>,
        locator: Arc<dyn CountryLocator>,
    ) -> Self {
        let tokens = TokenSigner::new(&config.auth);
        let reset_tokens = ResetTokenGenerator::new(&config.auth);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                tokens,
                reset_tokens,
                mailer,
                locator,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the account store.
    #[must_use]
    pub fn store(&self) -> &dyn AccountStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the auth token signer.
    #[must_use]
    pub fn tokens(&self) -> &TokenSigner {
        &self.inner.tokens
    }

    /// Get a reference to the password reset token generator.
    #[must_use]
    pub fn reset_tokens(&self) -> &ResetTokenGenerator {
        &self.inner.reset_tokens
    }

    /// Shared handle to the password reset mailer.
    #[must_use]
    pub fn mailer(&self) -> Arc<dyn PasswordResetMailer> {
        Arc::clone(&self.inner.mailer)
    }

    /// Get a reference to the country locator.
    #[must_use]
    pub fn locator(&self) -> &dyn CountryLocator {
        self.inner.locator.as_ref()
    }

    /// Whether data-changing mutations are rejected.
    #[must_use]
    pub fn read_only(&self) -> bool {
        self.inner.config.read_only
    }
}
