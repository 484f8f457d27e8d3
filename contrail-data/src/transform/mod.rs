//! Enrich raw flight records with airports, distance and fuel estimates.
//!
//! A [`FlightRecord`] carries what the tracking feed reports: timestamps and
//! the coordinates where the aircraft was first and last seen. The transform
//! resolves both ends to their nearest airport, measures the great-circle
//! distance between the observed coordinates and estimates fuel burnt from
//! the aircraft catalog. Records that fail are reported, not dropped
//! silently.

use std::io::Read;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use contrail_core::{
    AircraftCatalog, AirportCatalog, Coordinate, FlightInterval, FuelError, ResolveError,
    estimate_fuel, haversine_distance, nearest_airport,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flight as reported by the tracking feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FlightRecord {
    /// Feed-assigned identifier, unique per flight.
    pub flight_id: String,
    /// Aircraft type designator (e.g. `"LJ40"`).
    pub aircraft_type: String,
    /// Departure time in Unix seconds.
    pub departed_at: i64,
    /// Arrival time in Unix seconds.
    pub arrived_at: i64,
    /// Latitude where the flight was first observed.
    pub departure_lat: f64,
    /// Longitude where the flight was first observed.
    pub departure_lon: f64,
    /// Latitude where the flight was last observed.
    pub arrival_lat: f64,
    /// Longitude where the flight was last observed.
    pub arrival_lon: f64,
}

impl FlightRecord {
    /// Coordinate where the flight was first observed.
    #[must_use]
    pub const fn departure(&self) -> Coordinate {
        Coordinate::new(self.departure_lat, self.departure_lon)
    }

    /// Coordinate where the flight was last observed.
    #[must_use]
    pub const fn arrival(&self) -> Coordinate {
        Coordinate::new(self.arrival_lat, self.arrival_lon)
    }
}

/// Row ready to load into the flights table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedFlight {
    /// Feed-assigned identifier.
    pub flight_id: String,
    /// Aircraft type designator.
    pub aircraft_type: String,
    /// IATA code of the airport nearest the departure coordinate.
    pub origin_iata: String,
    /// IATA code of the airport nearest the arrival coordinate.
    pub destination_iata: String,
    /// Departure time in Unix seconds.
    pub departed_at: i64,
    /// Arrival time in Unix seconds.
    pub arrived_at: i64,
    /// Whole seconds between departure and arrival.
    pub duration_secs: u64,
    /// Great-circle distance between the observed coordinates.
    pub distance_km: f64,
    /// Estimated fuel burnt, in US gallons.
    pub fuel_gallons: f64,
}

/// Why a single record could not be transformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A timestamp cannot be represented as a system time.
    #[error("flight {flight_id}: timestamp {value} is out of range")]
    Timestamp {
        /// Offending record.
        flight_id: String,
        /// Unix seconds that failed to convert.
        value: i64,
    },
    /// No airport could be resolved.
    #[error("flight {flight_id}: {source}")]
    Resolve {
        /// Offending record.
        flight_id: String,
        /// Resolver failure.
        #[source]
        source: ResolveError,
    },
    /// Fuel could not be estimated.
    #[error("flight {flight_id}: {source}")]
    Fuel {
        /// Offending record.
        flight_id: String,
        /// Estimator failure.
        #[source]
        source: FuelError,
    },
}

impl TransformError {
    /// Identifier of the record that failed.
    #[must_use]
    pub fn flight_id(&self) -> &str {
        match self {
            Self::Timestamp { flight_id, .. }
            | Self::Resolve { flight_id, .. }
            | Self::Fuel { flight_id, .. } => flight_id,
        }
    }
}

/// Errors raised while reading a batch of flight records.
#[derive(Debug, Error)]
pub enum FlightDecodeError {
    /// The payload was not a JSON array of flight records.
    #[error("malformed flight records: {source}")]
    Json {
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of transforming a batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransformReport {
    /// Successfully transformed rows, in input order.
    pub flights: Vec<TransformedFlight>,
    /// Records that failed, in input order.
    pub rejected: Vec<TransformError>,
}

/// Read a JSON array of [`FlightRecord`]s.
///
/// # Errors
/// Returns [`FlightDecodeError::Json`] if the payload is not an array of
/// well-formed records.
pub fn decode_flight_records<R: Read>(reader: R) -> Result<Vec<FlightRecord>, FlightDecodeError> {
    serde_json::from_reader(reader).map_err(|source| FlightDecodeError::Json { source })
}

fn system_time(flight_id: &str, unix_secs: i64) -> Result<SystemTime, TransformError> {
    let offset = Duration::from_secs(unix_secs.unsigned_abs());
    let time = if unix_secs >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    time.ok_or_else(|| TransformError::Timestamp {
        flight_id: flight_id.to_owned(),
        value: unix_secs,
    })
}

/// Transform one record.
///
/// # Errors
/// Returns [`TransformError::Timestamp`] for unrepresentable timestamps,
/// [`TransformError::Fuel`] when arrival precedes departure or the aircraft
/// type is unknown, and [`TransformError::Resolve`] when the airport catalog
/// is empty.
///
/// # Examples
/// ```
/// use contrail_core::test_support::{sample_aircraft, sample_airports};
/// use contrail_data::transform::{FlightRecord, transform_flight};
///
/// let record = FlightRecord {
///     flight_id: "a1".into(),
///     aircraft_type: "LJ40".into(),
///     departed_at: 1_700_000_000,
///     arrived_at: 1_700_003_600,
///     departure_lat: 52.36,
///     departure_lon: 13.51,
///     arrival_lat: 51.47,
///     arrival_lon: -0.45,
/// };
/// let row = transform_flight(&record, &sample_airports(), &sample_aircraft())?;
/// assert_eq!((row.origin_iata.as_str(), row.destination_iata.as_str()), ("BER", "LHR"));
/// assert_eq!(row.fuel_gallons, 207.0);
/// # Ok::<(), contrail_data::transform::TransformError>(())
/// ```
pub fn transform_flight(
    record: &FlightRecord,
    airports: &AirportCatalog,
    aircraft: &AircraftCatalog,
) -> Result<TransformedFlight, TransformError> {
    let departed = system_time(&record.flight_id, record.departed_at)?;
    let arrived = system_time(&record.flight_id, record.arrived_at)?;
    let fuel_error = |source: FuelError| TransformError::Fuel {
        flight_id: record.flight_id.clone(),
        source,
    };
    let resolve_error = |source: ResolveError| TransformError::Resolve {
        flight_id: record.flight_id.clone(),
        source,
    };

    let interval =
        FlightInterval::new(departed, arrived).map_err(|err| fuel_error(FuelError::from(err)))?;
    let fuel_gallons =
        estimate_fuel(&interval, &record.aircraft_type, aircraft).map_err(fuel_error)?;
    let origin = nearest_airport(record.departure(), airports).map_err(resolve_error)?;
    let destination = nearest_airport(record.arrival(), airports).map_err(resolve_error)?;

    Ok(TransformedFlight {
        flight_id: record.flight_id.clone(),
        aircraft_type: record.aircraft_type.clone(),
        origin_iata: origin.airport.iata.clone(),
        destination_iata: destination.airport.iata.clone(),
        departed_at: record.departed_at,
        arrived_at: record.arrived_at,
        duration_secs: interval.elapsed().as_secs(),
        distance_km: haversine_distance(record.departure(), record.arrival()),
        fuel_gallons,
    })
}

/// Transform a batch, collecting failures instead of aborting.
///
/// Each rejected record is logged at `warn` level.
#[must_use]
pub fn transform_flights(
    records: &[FlightRecord],
    airports: &AirportCatalog,
    aircraft: &AircraftCatalog,
) -> TransformReport {
    let mut report = TransformReport::default();
    for record in records {
        match transform_flight(record, airports, aircraft) {
            Ok(flight) => report.flights.push(flight),
            Err(err) => {
                warn!("skipping record: {err}");
                report.rejected.push(err);
            }
        }
    }
    info!(
        "transformed {} of {} flight records",
        report.flights.len(),
        records.len()
    );
    report
}
