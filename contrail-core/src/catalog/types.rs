use std::collections::BTreeMap;

use crate::Coordinate;

/// Airports keyed by an internal identifier (typically an ICAO-like code).
pub type AirportCatalog = BTreeMap<String, Airport>;

/// Aircraft specifications keyed by type designator (e.g. `LJ40`).
pub type AircraftCatalog = BTreeMap<String, Aircraft>;

/// A single airport entry.
///
/// # Examples
/// ```
/// use contrail_core::{Airport, Coordinate};
///
/// let airport = Airport::new("BER", Coordinate::new(52.3667, 13.5033))
///     .with_name("Berlin Brandenburg");
/// assert_eq!(airport.iata, "BER");
/// assert_eq!(airport.name.as_deref(), Some("Berlin Brandenburg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    /// Three-letter IATA code.
    pub iata: String,
    /// Aerodrome reference point.
    pub location: Coordinate,
    /// Human-readable airport name.
    pub name: Option<String>,
    /// Four-letter ICAO code, when known.
    pub icao: Option<String>,
    /// ISO country code, when known.
    pub country: Option<String>,
}

impl Airport {
    /// Construct an airport with only the required fields.
    #[must_use]
    pub fn new(iata: impl Into<String>, location: Coordinate) -> Self {
        Self {
            iata: iata.into(),
            location,
            name: None,
            icao: None,
            country: None,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an ICAO code.
    #[must_use]
    pub fn with_icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = Some(icao.into());
        self
    }

    /// Attach a country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Specification of an aircraft type.
///
/// `galph` is the hourly fuel burn in US gallons and drives the fuel
/// estimator; the remaining fields are descriptive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    /// Fuel burn rate in gallons per hour.
    pub galph: f64,
    /// Manufacturer name.
    pub manufacturer: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Number of engines.
    pub engine_count: Option<u8>,
}

impl Aircraft {
    /// Construct an aircraft with only a burn rate.
    #[must_use]
    pub const fn new(galph: f64) -> Self {
        Self {
            galph,
            manufacturer: None,
            model: None,
            engine_count: None,
        }
    }

    /// Attach manufacturer and model names.
    #[must_use]
    pub fn with_model(mut self, manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self.model = Some(model.into());
        self
    }

    /// Attach the engine count.
    #[must_use]
    pub const fn with_engine_count(mut self, engine_count: u8) -> Self {
        self.engine_count = Some(engine_count);
        self
    }
}
