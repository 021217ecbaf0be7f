//! IP-to-country geolocation.
//!
//! The HTTP backend calls `GET <base>/<ip>` on a lookup service answering
//! `{"country_code": "US"}` and caches answers for an hour.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use shopkeep_core::{CountryCode, CountryCodeError};

/// Errors from a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("lookup service returned {0}")]
    Status(u16),

    /// The lookup URL could not be built.
    #[error("invalid lookup URL: {0}")]
    Url(#[from] url::ParseError),

    /// The service returned something that is not a country code.
    #[error("invalid country in response: {0}")]
    InvalidCountry(#[from] CountryCodeError),
}

/// Resolves client IP addresses to countries.
#[async_trait]
pub trait CountryLocator: Send + Sync + 'static {
    /// Country for `ip`, or `None` when the address is unknown.
    async fn country_by_ip(&self, ip: IpAddr) -> Result<Option<CountryCode>, GeoError>;
}

/// Locator used when no lookup service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLocator;

#[async_trait]
impl CountryLocator for DisabledLocator {
    async fn country_by_ip(&self, _ip: IpAddr) -> Result<Option<CountryCode>, GeoError> {
        Ok(None)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    country_code: Option<String>,
}

/// HTTP lookup service client with an in-memory cache.
#[derive(Clone)]
pub struct HttpCountryLocator {
    inner: Arc<HttpCountryLocatorInner>,
}

struct HttpCountryLocatorInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<IpAddr, Option<CountryCode>>,
}

impl HttpCountryLocator {
    /// Create a locator for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a locator using a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(mut base_url: Url, client: reqwest::Client) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(3600)) // 1 hour
            .build();

        Self {
            inner: Arc::new(HttpCountryLocatorInner {
                client,
                base_url,
                cache,
            }),
        }
    }

    async fn fetch(&self, ip: IpAddr) -> Result<Option<CountryCode>, GeoError> {
        let url = self.inner.base_url.join(&ip.to_string())?;
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body: LookupResponse = response.json().await?;
        body.country_code
            .filter(|code| !code.is_empty())
            .map(|code| CountryCode::parse(&code))
            .transpose()
            .map_err(GeoError::from)
    }
}

#[async_trait]
impl CountryLocator for HttpCountryLocator {
    #[instrument(skip(self))]
    async fn country_by_ip(&self, ip: IpAddr) -> Result<Option<CountryCode>, GeoError> {
        if let Some(cached) = self.inner.cache.get(&ip).await {
            debug!("Geolocation cache hit");
            return Ok(cached);
        }

        let country = self.fetch(ip).await?;
        self.inner.cache.insert(ip, country).await;
        Ok(country)
    }
}
