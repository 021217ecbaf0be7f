//! Shopkeep accounts API server.
//!
//! Serves the GraphQL endpoint on `/graphql` (port 8000 by default).
//!
//! # Backends
//!
//! - `PostgreSQL` when `SHOPKEEP_DATABASE_URL` (or `DATABASE_URL`) is set,
//!   otherwise an in-memory store that is lost on restart
//! - SMTP mail when `SMTP_HOST` is set, otherwise reset links are logged
//! - HTTP geolocation when `SHOPKEEP_GEOIP_URL` is set

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shopkeep_api::config::ApiConfig;
use shopkeep_api::db::{self, AccountStore, MemoryAccountStore, PgAccountStore};
use shopkeep_api::routes;
use shopkeep_api::services::email::{LogMailer, PasswordResetMailer, SmtpMailer};
use shopkeep_api::services::geo::{CountryLocator, DisabledLocator, HttpCountryLocator};
use shopkeep_api::state::AppState;

/// Start Sentry (when a DSN is configured) and the tracing subscriber.
///
/// The returned guard flushes pending Sentry events on drop, so it has to
/// live as long as `main`.
fn init_telemetry(config: &ApiConfig) -> Option<sentry::ClientInitGuard> {
    let guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: config.sentry_environment.clone().map(Into::into),
                attach_stacktrace: true,
                ..Default::default()
            },
        ))
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shopkeep_api=info,tower_http=debug"));
    let sentry_layer = sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer)
        .init();

    if guard.is_some() {
        tracing::info!("Sentry enabled");
    }
    guard
}

async fn connect_store(config: &ApiConfig) -> Arc<dyn AccountStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured, using the in-memory account store");
        return MemoryAccountStore::new_shared();
    };

    let pool = db::create_pool(database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Migrations are not run on startup: `cargo run -p shopkeep-cli -- migrate`
    Arc::new(PgAccountStore::new(pool))
}

fn mailer(config: &ApiConfig) -> Arc<dyn PasswordResetMailer> {
    match &config.email {
        Some(email) => Arc::new(SmtpMailer::new(email).expect("Invalid SMTP configuration")),
        None => {
            tracing::warn!("SMTP not configured, password reset links will only be logged");
            Arc::new(LogMailer)
        }
    }
}

fn locator(config: &ApiConfig) -> Arc<dyn CountryLocator> {
    match &config.geoip_url {
        Some(url) => Arc::new(HttpCountryLocator::new(url.clone())),
        None => Arc::new(DisabledLocator),
    }
}

#[tokio::main]
async fn main() {
    let config = ApiConfig::from_env().expect("Failed to load configuration");
    let _sentry = init_telemetry(&config);

    if config.read_only {
        tracing::warn!("Read-only mode: data-changing mutations are disabled");
    }

    let store = connect_store(&config).await;
    let state = AppState::new(config.clone(), store, mailer(&config), locator(&config));

    let app = routes::router(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot listen on {addr}: {e}"));
    tracing::info!(%addr, "Accounts API listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.expect("Failed to listen for Ctrl+C"),
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    tracing::info!("Shutting down, draining open connections");
}
