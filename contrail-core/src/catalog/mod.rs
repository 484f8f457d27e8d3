//! Airport and aircraft reference catalogs.
//!
//! Catalogs are in-memory mappings keyed by an identifier. They are produced
//! by a [`CatalogProvider`] and then only read: the resolver scans an
//! [`AirportCatalog`] and the fuel estimator looks up an [`AircraftCatalog`].
//!
//! Both aliases use `BTreeMap`, so iteration follows sorted key order. The
//! resolver's tie-break depends on that order.

mod error;
mod provider;
mod types;

pub use error::{CatalogError, CatalogKind};
pub use provider::CatalogProvider;
pub use types::{Aircraft, AircraftCatalog, Airport, AirportCatalog};
