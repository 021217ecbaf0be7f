//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPKEEP_SECRET_KEY` - Signing key for auth and password reset tokens
//!   (min 32 chars, high entropy)
//!
//! ## Optional
//! - `SHOPKEEP_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`; when neither is set the in-memory store is used)
//! - `SHOPKEEP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPKEEP_PORT` - Listen port (default: 8000)
//! - `SHOPKEEP_TOKEN_TTL_MINUTES` - Auth token lifetime (default: 5)
//! - `SHOPKEEP_TOKEN_REFRESH_DAYS` - Refresh window from first issue (default: 7)
//! - `SHOPKEEP_PASSWORD_RESET_DAYS` - Password reset link validity (default: 3)
//! - `SHOPKEEP_PASSWORD_RESET_URL` - Storefront page that accepts reset links
//! - `SHOPKEEP_READ_ONLY` - Reject data-changing mutations (default: false)
//! - `SHOPKEEP_GEOIP_URL` - Base URL of the IP-to-country lookup service
//! - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
//!   `SMTP_FROM_ADDRESS` - Outgoing mail (log-only mailer when `SMTP_HOST` is unset)
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT` - Sentry error tracking

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_SECRET_KEY_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Substrings that mark a signing key as copied from a sample file.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "changeme",
    "placeholder",
    "example",
    "secret",
    "password",
    "your-",
    "replace",
    "xxx",
    "todo",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Accounts API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL, `None` selects the in-memory store
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Token signing configuration
    pub auth: AuthConfig,
    /// Storefront page receiving password reset links
    pub password_reset_url: Url,
    /// Reject data-changing mutations
    pub read_only: bool,
    /// IP-to-country lookup service
    pub geoip_url: Option<Url>,
    /// Outgoing mail, `None` logs reset links instead of sending them
    pub email: Option<EmailConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Token signing configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key for auth token and password reset token MACs
    pub secret_key: SecretString,
    /// Auth token lifetime
    pub token_ttl: chrono::Duration,
    /// How long after the first issue a token may be refreshed
    pub refresh_window: chrono::Duration,
    /// How long a password reset link stays valid
    pub password_reset_ttl: chrono::Duration,
}

/// SMTP configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: SecretString,
    pub from_address: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the secret key fails validation (length, placeholder, entropy).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = database_url_from_env();
        let host = parse_env("SHOPKEEP_HOST", "127.0.0.1")?;
        let port = parse_env("SHOPKEEP_PORT", "8000")?;
        let password_reset_url = parse_env(
            "SHOPKEEP_PASSWORD_RESET_URL",
            "http://localhost:3000/account/password/reset/",
        )?;
        let read_only = parse_env("SHOPKEEP_READ_ONLY", "false")?;
        let geoip_url = get_optional_env("SHOPKEEP_GEOIP_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("SHOPKEEP_GEOIP_URL".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            database_url,
            host,
            port,
            auth: AuthConfig::from_env()?,
            password_reset_url,
            read_only,
            geoip_url,
            email: EmailConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret_key = signing_key_from_env("SHOPKEEP_SECRET_KEY")?;

        let token_ttl: i64 = parse_env("SHOPKEEP_TOKEN_TTL_MINUTES", "5")?;
        let refresh_days: i64 = parse_env("SHOPKEEP_TOKEN_REFRESH_DAYS", "7")?;
        let reset_days: i64 = parse_env("SHOPKEEP_PASSWORD_RESET_DAYS", "3")?;

        Ok(Self {
            secret_key,
            token_ttl: chrono::Duration::minutes(token_ttl),
            refresh_window: chrono::Duration::days(refresh_days),
            password_reset_ttl: chrono::Duration::days(reset_days),
        })
    }
}

impl EmailConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(smtp_host) = get_optional_env("SMTP_HOST") else {
            return Ok(None);
        };

        Ok(Some(Self {
            smtp_host,
            smtp_port: parse_env("SMTP_PORT", "587")?,
            smtp_username: get_required_env("SMTP_USERNAME")?,
            smtp_password: get_required_secret("SMTP_PASSWORD")?,
            from_address: get_required_env("SMTP_FROM_ADDRESS")?,
        }))
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Database URL from `SHOPKEEP_DATABASE_URL`, falling back to `DATABASE_URL`.
///
/// Shared with the CLI, which needs only the database.
#[must_use]
pub fn database_url_from_env() -> Option<SecretString> {
    std::env::var("SHOPKEEP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to a default literal.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Read the token signing key and reject keys that are short, look like a
/// placeholder or have too little entropy.
fn signing_key_from_env(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    check_signing_key(&value)
        .map_err(|reason| ConfigError::InsecureSecret(key.to_string(), reason))?;
    Ok(SecretString::from(value))
}

fn check_signing_key(value: &str) -> Result<(), String> {
    if value.len() < MIN_SECRET_KEY_LENGTH {
        return Err(format!(
            "must be at least {MIN_SECRET_KEY_LENGTH} characters (got {})",
            value.len()
        ));
    }

    let lower = value.to_lowercase();
    if let Some(word) = PLACEHOLDER_PATTERNS.iter().find(|word| lower.contains(*word)) {
        return Err(format!("looks like a placeholder (contains '{word}')"));
    }

    let entropy = bits_per_byte(value.as_bytes());
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(format!(
            "entropy {entropy:.2} bits/char is below {MIN_ENTROPY_BITS_PER_CHAR:.1}; generate the key randomly"
        ));
    }
    Ok(())
}

/// Shannon entropy of `bytes`.
#[allow(clippy::cast_precision_loss)]
fn bits_per_byte(bytes: &[u8]) -> f64 {
    let mut counts = [0usize; 256];
    for &b in bytes {
        counts[usize::from(b)] += 1;
    }

    let total = bytes.len() as f64;
    counts
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_per_byte() {
        assert!(bits_per_byte(b"zzzz").abs() < f64::EPSILON);
        assert!((bits_per_byte(b"abab") - 1.0).abs() < 1e-9);
        assert!(bits_per_byte(b"").abs() < f64::EPSILON);
    }

    #[test]
    fn test_signing_key_checks() {
        assert!(check_signing_key("tooshort").unwrap_err().starts_with("must be at least"));
        assert!(
            check_signing_key("changeme-0123456789abcdefghijklmnop")
                .unwrap_err()
                .contains("changeme")
        );
        assert!(check_signing_key(&"ab".repeat(20)).unwrap_err().starts_with("entropy"));
        assert!(check_signing_key("Q7r!v2Lw#9zK@4mXp$8sNc%1tBh&6yDf").is_ok());
    }

    #[test]
    fn test_email_config_debug_redacts_password() {
        let config = EmailConfig {
            smtp_host: "smtp.mail.test".to_string(),
            smtp_port: 587,
            smtp_username: "mailer".to_string(),
            smtp_password: SecretString::from("hunter2-but-longer"),
            from_address: "noreply@shop.test".to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("smtp.mail.test"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2-but-longer"));
    }
}
