//! Reference catalog retrieval.
//!
//! Catalogs are stored as JSON objects keyed by identifier:
//!
//! ```json
//! { "EDDB": { "iata": "BER", "lat": 52.3667, "lon": 13.5033, "name": "Berlin Brandenburg" } }
//! { "LJ40": { "galph": 207, "manufacturer": "Learjet", "model": "40" } }
//! ```
//!
//! [`FsCatalogProvider`] reads them from a local directory and
//! [`HttpCatalogProvider`] fetches them from an object-storage bucket over
//! HTTP. Both implement [`contrail_core::CatalogProvider`] so the transform
//! step does not care where the catalogs came from.

mod decode;
mod fs;
mod http;

pub use decode::{CatalogDecodeError, decode_aircraft_catalog, decode_airport_catalog};
pub use fs::{
    DEFAULT_AIRCRAFT_FILE, DEFAULT_AIRPORTS_FILE, FsCatalogProvider, FsCatalogProviderConfig,
};
pub use http::{
    DEFAULT_USER_AGENT, HttpCatalogProvider, HttpCatalogProviderConfig, ProviderBuildError,
};
