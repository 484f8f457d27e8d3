use std::time::{Duration, SystemTime};

use super::error::FlightIntervalError;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// A departure/arrival pair with `arrival >= departure`.
///
/// # Examples
/// ```
/// use std::time::{Duration, SystemTime};
/// use contrail_core::FlightInterval;
///
/// let departure = SystemTime::UNIX_EPOCH;
/// let arrival = departure + Duration::from_secs(5400);
/// let interval = FlightInterval::new(departure, arrival)?;
/// assert_eq!(interval.elapsed(), Duration::from_secs(5400));
/// assert_eq!(interval.elapsed_hours(), 1.5);
/// # Ok::<(), contrail_core::FlightIntervalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightInterval {
    departure: SystemTime,
    arrival: SystemTime,
    elapsed: Duration,
}

impl FlightInterval {
    /// Validate and construct a [`FlightInterval`].
    ///
    /// # Errors
    /// Returns [`FlightIntervalError::ArrivalBeforeDeparture`] when
    /// `arrival` is earlier than `departure`.
    pub fn new(departure: SystemTime, arrival: SystemTime) -> Result<Self, FlightIntervalError> {
        let elapsed = arrival.duration_since(departure).map_err(|err| {
            FlightIntervalError::ArrivalBeforeDeparture {
                lag: err.duration(),
            }
        })?;
        Ok(Self {
            departure,
            arrival,
            elapsed,
        })
    }

    /// Departure timestamp.
    #[must_use]
    pub const fn departure(&self) -> SystemTime {
        self.departure
    }

    /// Arrival timestamp.
    #[must_use]
    pub const fn arrival(&self) -> SystemTime {
        self.arrival
    }

    /// Wall-clock time between departure and arrival.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional hours, exact to the second.
    #[must_use]
    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed.as_secs_f64() / SECONDS_PER_HOUR
    }
}
