//! Facade crate for the Contrail trip ETL utilities.
//!
//! This crate re-exports the pure utility core: great-circle distances,
//! nearest-airport resolution and fuel estimation, together with the catalog
//! types they operate on.

#![forbid(unsafe_code)]

pub use contrail_core::{
    Aircraft, AircraftCatalog, Airport, AirportCatalog, CatalogError, CatalogProvider, Coordinate,
    EARTH_MEAN_RADIUS_KM, FlightInterval, FlightIntervalError, FuelError, NearestAirport,
    ResolveError, calculate_fuel_consumption, estimate_fuel, find_nearest_airport,
    haversine_distance, nearest_airport,
};

#[cfg(feature = "test-support")]
pub use contrail_core::test_support;
