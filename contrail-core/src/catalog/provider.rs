//! Catalog provider trait for the airport and aircraft reference datasets.

use super::error::CatalogError;
use super::types::{AircraftCatalog, AirportCatalog};

/// Materialise reference catalogs from an external source.
///
/// Implementations own retrieval; the pure functions in this crate only see
/// the resulting maps. Providers are constructed with explicit configuration
/// and hold no global state.
///
/// # Examples
///
/// ```rust
/// use contrail_core::{
///     Aircraft, AircraftCatalog, Airport, AirportCatalog, CatalogError, CatalogProvider,
///     Coordinate, find_nearest_airport,
/// };
///
/// struct Fixed;
///
/// impl CatalogProvider for Fixed {
///     fn load_airport_catalog(&self) -> Result<AirportCatalog, CatalogError> {
///         Ok(AirportCatalog::from([(
///             "EDDB".to_owned(),
///             Airport::new("BER", Coordinate::new(52.3667, 13.5033)),
///         )]))
///     }
///
///     fn load_aircraft_catalog(&self) -> Result<AircraftCatalog, CatalogError> {
///         Ok(AircraftCatalog::from([("LJ40".to_owned(), Aircraft::new(207.0))]))
///     }
/// }
///
/// let airports = Fixed.load_airport_catalog()?;
/// let code = find_nearest_airport(Coordinate::new(52.36, 13.51), &airports).unwrap();
/// assert_eq!(code, "BER");
/// # Ok::<(), CatalogError>(())
/// ```
pub trait CatalogProvider {
    /// Load the airport catalog.
    fn load_airport_catalog(&self) -> Result<AirportCatalog, CatalogError>;

    /// Load the aircraft catalog.
    fn load_aircraft_catalog(&self) -> Result<AircraftCatalog, CatalogError>;
}
