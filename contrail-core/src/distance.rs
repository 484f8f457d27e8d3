//! Great-circle distance on a spherical Earth.

use crate::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Great-circle surface distance between two coordinates, in kilometres.
///
/// Uses the haversine formula with [`EARTH_MEAN_RADIUS_KM`]. Identical
/// coordinates yield exactly `0.0`; antipodal coordinates yield half the
/// circumference regardless of longitude. Out-of-range inputs are not
/// validated.
///
/// # Examples
/// ```
/// use contrail_core::{Coordinate, haversine_distance};
///
/// let south = Coordinate::new(-18.0, 35.0);
/// let north = Coordinate::new(72.0, -40.0);
/// assert_eq!(haversine_distance(south, north).round(), 11407.0);
/// assert_eq!(haversine_distance(south, south), 0.0);
/// ```
#[must_use]
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let from_lat = from.latitude().to_radians();
    let to_lat = to.latitude().to_radians();
    let delta_lat = to_lat - from_lat;
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` fractionally past 1 for antipodes.
    2.0 * EARTH_MEAN_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(17.0, 17.0)]
    #[case(0.0, 0.0)]
    #[case(-90.0, 180.0)]
    #[case(52.36, 13.51)]
    fn distance_to_self_is_zero(#[case] lat: f64, #[case] lon: f64) {
        let point = Coordinate::new(lat, lon);
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[rstest]
    #[case(Coordinate::new(-90.0, 135.0), Coordinate::new(90.0, -45.0))]
    #[case(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0))]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0))]
    #[case(Coordinate::new(30.0, 20.0), Coordinate::new(-30.0, -160.0))]
    fn antipodal_points_are_half_a_circumference_apart(
        #[case] from: Coordinate,
        #[case] to: Coordinate,
    ) {
        let distance = haversine_distance(from, to);
        assert!((distance - PI * EARTH_MEAN_RADIUS_KM).abs() < 1.0e-3);
        assert_eq!(distance.round(), 20015.0);
    }

    #[rstest]
    fn matches_reference_distance() {
        let distance =
            haversine_distance(Coordinate::new(-18.0, 35.0), Coordinate::new(72.0, -40.0));
        assert_eq!(distance.round(), 11407.0);
    }

    #[rstest]
    fn is_symmetric() {
        let berlin = Coordinate::new(52.3667, 13.5033);
        let aleknagik = Coordinate::new(59.2906, -158.605);
        let there = haversine_distance(berlin, aleknagik);
        let back = haversine_distance(aleknagik, berlin);
        assert!((there - back).abs() < 1.0e-9);
    }
}
