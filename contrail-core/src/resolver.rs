//! Nearest-airport resolution over an [`AirportCatalog`].

use thiserror::Error;

use crate::{Airport, AirportCatalog, Coordinate, haversine_distance};

/// Errors from [`nearest_airport`] and [`find_nearest_airport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The catalog contained no airports, so no minimum exists.
    #[error("airport catalog is empty")]
    EmptyCatalog,
}

/// The closest catalog entry to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestAirport<'a> {
    /// The winning catalog entry.
    pub airport: &'a Airport,
    /// Great-circle distance from the query point, in kilometres.
    pub distance_km: f64,
}

/// Find the airport closest to `point`.
///
/// Every entry is scanned in catalog order. When several airports are
/// equidistant the first one encountered wins.
///
/// # Errors
/// Returns [`ResolveError::EmptyCatalog`] when `catalog` has no entries.
///
/// # Examples
/// ```
/// use contrail_core::{Airport, AirportCatalog, Coordinate, nearest_airport};
///
/// let catalog = AirportCatalog::from([
///     ("EDDB".to_owned(), Airport::new("BER", Coordinate::new(52.3667, 13.5033))),
///     ("PAWD".to_owned(), Airport::new("WKK", Coordinate::new(59.2906, -158.605))),
/// ]);
/// let nearest = nearest_airport(Coordinate::new(52.36, 13.51), &catalog)?;
/// assert_eq!(nearest.airport.iata, "BER");
/// assert!(nearest.distance_km < 1.0);
/// # Ok::<(), contrail_core::ResolveError>(())
/// ```
pub fn nearest_airport(
    point: Coordinate,
    catalog: &AirportCatalog,
) -> Result<NearestAirport<'_>, ResolveError> {
    let mut best: Option<NearestAirport<'_>> = None;
    for airport in catalog.values() {
        let distance_km = haversine_distance(point, airport.location);
        // A NaN distance never wins over a real one.
        let closer = best.as_ref().is_none_or(|current| {
            current.distance_km.is_nan() || distance_km < current.distance_km
        });
        if closer {
            best = Some(NearestAirport {
                airport,
                distance_km,
            });
        }
    }
    best.ok_or(ResolveError::EmptyCatalog)
}

/// Return the IATA code of the airport closest to `point`.
///
/// # Errors
/// Returns [`ResolveError::EmptyCatalog`] when `catalog` has no entries.
pub fn find_nearest_airport(
    point: Coordinate,
    catalog: &AirportCatalog,
) -> Result<&str, ResolveError> {
    nearest_airport(point, catalog).map(|nearest| nearest.airport.iata.as_str())
}
