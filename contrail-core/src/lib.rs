//! Core domain types and pure utilities for the Contrail trip ETL.
//!
//! Responsibilities:
//! - Model coordinates and the airport and aircraft reference catalogs.
//! - Compute great-circle distances with the haversine formula.
//! - Resolve the nearest airport to a coordinate.
//! - Estimate fuel consumption for a flight interval.
//!
//! Boundaries:
//! - No I/O. Catalogs are loaded by [`CatalogProvider`] implementations that
//!   live in `contrail-data`.
//!
//! Invariants:
//! - Every function here is pure and reentrant; catalogs are never mutated.

#![forbid(unsafe_code)]

mod catalog;
mod coordinate;
mod distance;
mod fuel;
mod resolver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{
    Aircraft, AircraftCatalog, Airport, AirportCatalog, CatalogError, CatalogKind,
    CatalogProvider,
};
pub use coordinate::Coordinate;
pub use distance::{EARTH_MEAN_RADIUS_KM, haversine_distance};
pub use fuel::{
    FlightInterval, FlightIntervalError, FuelError, calculate_fuel_consumption, estimate_fuel,
};
pub use resolver::{NearestAirport, ResolveError, find_nearest_airport, nearest_airport};
