//! Catalog provider fetching JSON objects from an object-storage endpoint.
//!
//! Objects are addressed path-style as `{endpoint}/{bucket}/{key}`, which
//! works against S3-compatible gateways and plain static file servers alike.
//!
//! # Example
//!
//! ```no_run
//! use contrail_core::CatalogProvider;
//! use contrail_data::catalog::{HttpCatalogProvider, HttpCatalogProviderConfig};
//!
//! let config = HttpCatalogProviderConfig::new("http://localhost:9000", "reference-data");
//! let provider = HttpCatalogProvider::with_config(config)?;
//! let airports = provider.load_airport_catalog()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use contrail_core::{AircraftCatalog, AirportCatalog, CatalogError, CatalogKind, CatalogProvider};
use log::{debug, info};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::decode::{CatalogDecodeError, decode_aircraft_catalog, decode_airport_catalog};
use super::fs::{DEFAULT_AIRCRAFT_FILE, DEFAULT_AIRPORTS_FILE};

/// Error type for [`HttpCatalogProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for catalog requests.
pub const DEFAULT_USER_AGENT: &str = "contrail-catalog/0.1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpCatalogProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogProviderConfig {
    /// Base URL of the object store (e.g. `"http://localhost:9000"`).
    pub endpoint: String,
    /// Bucket holding the catalog objects.
    pub bucket: String,
    /// Object key of the airport catalog.
    pub airports_key: String,
    /// Object key of the aircraft catalog.
    pub aircraft_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpCatalogProviderConfig {
    /// Create a configuration for `bucket` on `endpoint` using the default keys.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            airports_key: DEFAULT_AIRPORTS_FILE.to_owned(),
            aircraft_key: DEFAULT_AIRCRAFT_FILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the airport catalog key.
    #[must_use]
    pub fn with_airports_key(mut self, key: impl Into<String>) -> Self {
        self.airports_key = key.into();
        self
    }

    /// Set the aircraft catalog key.
    #[must_use]
    pub fn with_aircraft_key(mut self, key: impl Into<String>) -> Self {
        self.aircraft_key = key.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-backed catalog provider.
///
/// Implements the synchronous [`CatalogProvider`] trait by blocking on
/// `reqwest` futures. It owns a current-thread Tokio runtime reused across
/// calls. When invoked from inside a multi-threaded Tokio runtime it drives
/// the request on that runtime via [`tokio::task::block_in_place`] instead.
pub struct HttpCatalogProvider {
    client: Client,
    config: HttpCatalogProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpCatalogProvider {
    /// Create a provider for `bucket` on `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpCatalogProviderConfig::new(endpoint, bucket))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpCatalogProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpCatalogProviderConfig {
        &self.config
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket.trim_matches('/'),
            key.trim_start_matches('/')
        )
    }

    async fn fetch_object(&self, url: &str, catalog: CatalogKind) -> Result<Vec<u8>, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url, catalog))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url, catalog))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url, catalog))?;
        debug!("fetched {} bytes of {catalog} catalog from {url}", body.len());
        Ok(body.to_vec())
    }

    fn convert_reqwest_error(
        &self,
        error: &reqwest::Error,
        url: &str,
        catalog: CatalogKind,
    ) -> CatalogError {
        let message = if error.is_timeout() {
            format!("timed out after {}s", self.config.timeout.as_secs())
        } else if let Some(status) = error.status() {
            format!("HTTP status {}", status.as_u16())
        } else {
            error.to_string()
        };
        CatalogError::Unavailable {
            catalog,
            location: url.to_owned(),
            message,
        }
    }

    fn fetch_blocking(
        &self,
        key: &str,
        catalog: CatalogKind,
    ) -> Result<(String, Vec<u8>), CatalogError> {
        let url = self.object_url(key);
        // block_in_place panics on current_thread runtimes, so only use the
        // caller's runtime when it is multi-threaded.
        let future = self.fetch_object(&url, catalog);
        let body = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }?;
        Ok((url, body))
    }
}

fn malformed(url: String, catalog: CatalogKind, err: &CatalogDecodeError) -> CatalogError {
    CatalogError::Malformed {
        catalog,
        location: url,
        message: err.to_string(),
    }
}

impl CatalogProvider for HttpCatalogProvider {
    fn load_airport_catalog(&self) -> Result<AirportCatalog, CatalogError> {
        let (url, body) = self.fetch_blocking(&self.config.airports_key, CatalogKind::Airports)?;
        let catalog = decode_airport_catalog(body.as_slice())
            .map_err(|err| malformed(url, CatalogKind::Airports, &err))?;
        info!("loaded {} airports from bucket {}", catalog.len(), self.config.bucket);
        Ok(catalog)
    }

    fn load_aircraft_catalog(&self) -> Result<AircraftCatalog, CatalogError> {
        let (url, body) = self.fetch_blocking(&self.config.aircraft_key, CatalogKind::Aircraft)?;
        let catalog = decode_aircraft_catalog(body.as_slice())
            .map_err(|err| malformed(url, CatalogKind::Aircraft, &err))?;
        info!(
            "loaded {} aircraft types from bucket {}",
            catalog.len(),
            self.config.bucket
        );
        Ok(catalog)
    }
}
