use geo::Coord;

/// A position on the Earth's surface in decimal degrees.
///
/// Stored as a WGS84 [`Coord`] with `x = longitude` and `y = latitude`.
/// Ranges are not validated; latitude is expected in `[-90, 90]` and
/// longitude in `[-180, 180]`.
///
/// # Examples
/// ```
/// use contrail_core::Coordinate;
///
/// let berlin = Coordinate::new(52.3667, 13.5033);
/// assert_eq!(berlin.latitude(), 52.3667);
/// assert_eq!(berlin.longitude(), 13.5033);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate(Coord<f64>);

impl Coordinate {
    /// Build a coordinate from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self(Coord {
            x: longitude,
            y: latitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.0.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.0.x
    }

    /// The underlying `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn as_coord(self) -> Coord<f64> {
        self.0
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self(coord)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.0
    }
}
