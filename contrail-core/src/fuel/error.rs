use std::time::Duration;

use thiserror::Error;

/// Errors returned by [`super::FlightInterval::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightIntervalError {
    /// The arrival timestamp is earlier than the departure timestamp.
    #[error("arrival precedes departure by {lag:?}")]
    ArrivalBeforeDeparture {
        /// How far the arrival lies before the departure.
        lag: Duration,
    },
}

/// Errors from the fuel estimator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuelError {
    /// The aircraft type code is not present in the catalog.
    #[error("unknown aircraft type {code:?}")]
    UnknownAircraftType {
        /// Type code that was looked up.
        code: String,
    },
    /// The departure and arrival timestamps do not form a valid interval.
    #[error("invalid flight interval: {source}")]
    InvalidInterval {
        /// Interval validation failure.
        #[from]
        source: FlightIntervalError,
    },
}
