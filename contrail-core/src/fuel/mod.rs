//! Fuel consumption estimates from elapsed flight time.
//!
//! Consumption is the elapsed time in hours, counted to the second, times the
//! aircraft type's hourly burn rate (`galph`). Results are not rounded.

mod error;
mod interval;

use std::time::SystemTime;

pub use error::{FlightIntervalError, FuelError};
pub use interval::FlightInterval;

use crate::AircraftCatalog;

/// Estimate fuel burned between `departure` and `arrival`.
///
/// # Errors
/// Returns [`FuelError::InvalidInterval`] when `arrival` precedes
/// `departure` and [`FuelError::UnknownAircraftType`] when `aircraft_type`
/// is absent from `catalog`.
///
/// # Examples
/// ```
/// use std::time::{Duration, SystemTime};
/// use contrail_core::{Aircraft, AircraftCatalog, calculate_fuel_consumption};
///
/// let catalog = AircraftCatalog::from([("LJ40".to_owned(), Aircraft::new(207.0))]);
/// let arrival = SystemTime::now();
/// let departure = arrival - Duration::from_secs(3600);
/// let fuel = calculate_fuel_consumption(departure, arrival, "LJ40", &catalog)?;
/// assert_eq!(fuel, 207.0);
/// # Ok::<(), contrail_core::FuelError>(())
/// ```
pub fn calculate_fuel_consumption(
    departure: SystemTime,
    arrival: SystemTime,
    aircraft_type: &str,
    catalog: &AircraftCatalog,
) -> Result<f64, FuelError> {
    let interval = FlightInterval::new(departure, arrival)?;
    estimate_fuel(&interval, aircraft_type, catalog)
}

/// Estimate fuel burned over an already validated [`FlightInterval`].
///
/// # Errors
/// Returns [`FuelError::UnknownAircraftType`] when `aircraft_type` is absent
/// from `catalog`.
pub fn estimate_fuel(
    interval: &FlightInterval,
    aircraft_type: &str,
    catalog: &AircraftCatalog,
) -> Result<f64, FuelError> {
    let aircraft = catalog
        .get(aircraft_type)
        .ok_or_else(|| FuelError::UnknownAircraftType {
            code: aircraft_type.to_owned(),
        })?;
    Ok(interval.elapsed_hours() * aircraft.galph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_aircraft;
    use rstest::{fixture, rstest};
    use std::time::Duration;

    #[fixture]
    fn arrival() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    #[rstest]
    fn one_hour_of_lj40_burns_its_hourly_rate(arrival: SystemTime) {
        let departure = arrival - Duration::from_secs(3600);
        let fuel = calculate_fuel_consumption(departure, arrival, "LJ40", &sample_aircraft())
            .expect("LJ40 is catalogued");
        assert_eq!(fuel, 207.0);
    }

    #[rstest]
    fn overflowing_minutes_and_seconds_roll_forward(arrival: SystemTime) {
        // 7h 42m 87s is 7h 43m 27s.
        let elapsed = Duration::from_secs(7 * 3600 + 42 * 60 + 87);
        assert_eq!(elapsed, Duration::from_secs(7 * 3600 + 43 * 60 + 27));
        let fuel =
            calculate_fuel_consumption(arrival - elapsed, arrival, "GA5C", &sample_aircraft())
                .expect("GA5C is catalogued");
        assert_eq!(fuel.round(), 3105.0);
    }

    #[rstest]
    fn zero_length_flight_burns_nothing(arrival: SystemTime) {
        let fuel = calculate_fuel_consumption(arrival, arrival, "LJ40", &sample_aircraft())
            .expect("LJ40 is catalogued");
        assert_eq!(fuel, 0.0);
    }

    #[rstest]
    fn unknown_type_is_reported(arrival: SystemTime) {
        let departure = arrival - Duration::from_secs(60);
        let err = calculate_fuel_consumption(departure, arrival, "B748", &sample_aircraft())
            .expect_err("B748 is not catalogued");
        assert_eq!(
            err,
            FuelError::UnknownAircraftType {
                code: "B748".to_owned()
            }
        );
    }

    #[rstest]
    fn arrival_before_departure_is_rejected(arrival: SystemTime) {
        let departure = arrival + Duration::from_secs(90);
        let err = calculate_fuel_consumption(departure, arrival, "LJ40", &sample_aircraft())
            .expect_err("reversed interval should fail");
        assert!(matches!(
            err,
            FuelError::InvalidInterval {
                source: FlightIntervalError::ArrivalBeforeDeparture { lag }
            } if lag == Duration::from_secs(90)
        ));
    }
}
