//! Catalog provider backed by a local directory of JSON files.

use camino::{Utf8Path, Utf8PathBuf};
use contrail_core::{AircraftCatalog, AirportCatalog, CatalogError, CatalogKind, CatalogProvider};
use log::debug;

use super::decode::{decode_aircraft_catalog, decode_airport_catalog};

/// File name of the airport catalog inside a catalog directory.
pub const DEFAULT_AIRPORTS_FILE: &str = "airports.json";
/// File name of the aircraft catalog inside a catalog directory.
pub const DEFAULT_AIRCRAFT_FILE: &str = "aircraft.json";

/// Configuration for [`FsCatalogProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsCatalogProviderConfig {
    /// Directory holding both catalog files.
    pub directory: Utf8PathBuf,
    /// Airport catalog file name, relative to `directory`.
    pub airports_file: String,
    /// Aircraft catalog file name, relative to `directory`.
    pub aircraft_file: String,
}

impl FsCatalogProviderConfig {
    /// Configuration reading the default file names from `directory`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            airports_file: DEFAULT_AIRPORTS_FILE.to_owned(),
            aircraft_file: DEFAULT_AIRCRAFT_FILE.to_owned(),
        }
    }

    /// Override the airport catalog file name.
    #[must_use]
    pub fn with_airports_file(mut self, file: impl Into<String>) -> Self {
        self.airports_file = file.into();
        self
    }

    /// Override the aircraft catalog file name.
    #[must_use]
    pub fn with_aircraft_file(mut self, file: impl Into<String>) -> Self {
        self.aircraft_file = file.into();
        self
    }

    /// Full path of the airport catalog.
    #[must_use]
    pub fn airports_path(&self) -> Utf8PathBuf {
        self.directory.join(&self.airports_file)
    }

    /// Full path of the aircraft catalog.
    #[must_use]
    pub fn aircraft_path(&self) -> Utf8PathBuf {
        self.directory.join(&self.aircraft_file)
    }
}

/// Reads catalogs from a local mirror of the reference bucket.
///
/// Files are re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct FsCatalogProvider {
    config: FsCatalogProviderConfig,
}

impl FsCatalogProvider {
    /// Create a provider reading the default file names from `directory`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self::with_config(FsCatalogProviderConfig::new(directory))
    }

    /// Create a provider with explicit configuration.
    #[must_use]
    pub const fn with_config(config: FsCatalogProviderConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &FsCatalogProviderConfig {
        &self.config
    }
}

fn read_catalog(path: &Utf8Path, catalog: CatalogKind) -> Result<String, CatalogError> {
    contrail_fs::read_utf8_file(path).map_err(|err| CatalogError::Unavailable {
        catalog,
        location: path.to_string(),
        message: err.to_string(),
    })
}

fn malformed(path: &Utf8Path, catalog: CatalogKind, err: &impl ToString) -> CatalogError {
    CatalogError::Malformed {
        catalog,
        location: path.to_string(),
        message: err.to_string(),
    }
}

impl CatalogProvider for FsCatalogProvider {
    fn load_airport_catalog(&self) -> Result<AirportCatalog, CatalogError> {
        let path = self.config.airports_path();
        let contents = read_catalog(&path, CatalogKind::Airports)?;
        let catalog = decode_airport_catalog(contents.as_bytes())
            .map_err(|err| malformed(&path, CatalogKind::Airports, &err))?;
        debug!("loaded {} airports from {path}", catalog.len());
        Ok(catalog)
    }

    fn load_aircraft_catalog(&self) -> Result<AircraftCatalog, CatalogError> {
        let path = self.config.aircraft_path();
        let contents = read_catalog(&path, CatalogKind::Aircraft)?;
        let catalog = decode_aircraft_catalog(contents.as_bytes())
            .map_err(|err| malformed(&path, CatalogKind::Aircraft, &err))?;
        debug!("loaded {} aircraft types from {path}", catalog.len());
        Ok(catalog)
    }
}
