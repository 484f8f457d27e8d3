use std::fmt;

use thiserror::Error;

/// Which reference catalog an operation concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// The airport catalog.
    Airports,
    /// The aircraft catalog.
    Aircraft,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Airports => f.write_str("airport"),
            Self::Aircraft => f.write_str("aircraft"),
        }
    }
}

/// Errors from [`crate::CatalogProvider`] implementations.
///
/// Messages are carried as strings so the core stays free of transport and
/// decoding crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog could not be fetched from its location.
    #[error("failed to fetch {catalog} catalog from {location}: {message}")]
    Unavailable {
        /// Catalog being loaded.
        catalog: CatalogKind,
        /// Path or URL that was read.
        location: String,
        /// Underlying failure.
        message: String,
    },
    /// The catalog payload could not be decoded.
    #[error("failed to decode {catalog} catalog from {location}: {message}")]
    Malformed {
        /// Catalog being loaded.
        catalog: CatalogKind,
        /// Path or URL that was read.
        location: String,
        /// Underlying failure.
        message: String,
    },
}

impl CatalogError {
    /// The catalog the error relates to.
    #[must_use]
    pub const fn catalog(&self) -> CatalogKind {
        match self {
            Self::Unavailable { catalog, .. } | Self::Malformed { catalog, .. } => *catalog,
        }
    }
}
