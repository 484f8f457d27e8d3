//! Test-only, in-memory catalogs and a `CatalogProvider` used by unit and
//! behaviour tests.

use crate::{
    Aircraft, AircraftCatalog, Airport, AirportCatalog, CatalogError, CatalogKind,
    CatalogProvider, Coordinate,
};

/// A small airport catalog covering Berlin, Aleknagik and Heathrow.
#[must_use]
pub fn sample_airports() -> AirportCatalog {
    AirportCatalog::from([
        (
            "EDDB".to_owned(),
            Airport::new("BER", Coordinate::new(52.3667, 13.5033))
                .with_name("Berlin Brandenburg")
                .with_icao("EDDB")
                .with_country("DE"),
        ),
        (
            "EGLL".to_owned(),
            Airport::new("LHR", Coordinate::new(51.4700, -0.4543))
                .with_name("London Heathrow")
                .with_icao("EGLL")
                .with_country("GB"),
        ),
        (
            "PAWD".to_owned(),
            Airport::new("WKK", Coordinate::new(59.2906, -158.605))
                .with_name("Aleknagik")
                .with_country("US"),
        ),
    ])
}

/// A small aircraft catalog with known hourly burn rates.
#[must_use]
pub fn sample_aircraft() -> AircraftCatalog {
    AircraftCatalog::from([
        (
            "GA5C".to_owned(),
            Aircraft::new(402.0)
                .with_model("Gulfstream", "G500")
                .with_engine_count(2),
        ),
        (
            "LJ40".to_owned(),
            Aircraft::new(207.0)
                .with_model("Learjet", "40")
                .with_engine_count(2),
        ),
    ])
}

/// In-memory `CatalogProvider` returning fixed catalogs or a fixed failure.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogProvider {
    airports: AirportCatalog,
    aircraft: AircraftCatalog,
    unavailable_at: Option<String>,
}

impl MemoryCatalogProvider {
    /// Provider serving the supplied catalogs.
    #[must_use]
    pub fn new(airports: AirportCatalog, aircraft: AircraftCatalog) -> Self {
        Self {
            airports,
            aircraft,
            unavailable_at: None,
        }
    }

    /// Provider serving [`sample_airports`] and [`sample_aircraft`].
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_airports(), sample_aircraft())
    }

    /// Provider whose every load fails as if `location` were unreachable.
    #[must_use]
    pub fn unavailable(location: impl Into<String>) -> Self {
        Self {
            unavailable_at: Some(location.into()),
            ..Self::default()
        }
    }

    fn check_available(&self, catalog: CatalogKind) -> Result<(), CatalogError> {
        match &self.unavailable_at {
            Some(location) => Err(CatalogError::Unavailable {
                catalog,
                location: location.clone(),
                message: "connection refused".to_owned(),
            }),
            None => Ok(()),
        }
    }
}

impl CatalogProvider for MemoryCatalogProvider {
    fn load_airport_catalog(&self) -> Result<AirportCatalog, CatalogError> {
        self.check_available(CatalogKind::Airports)?;
        Ok(self.airports.clone())
    }

    fn load_aircraft_catalog(&self) -> Result<AircraftCatalog, CatalogError> {
        self.check_available(CatalogKind::Aircraft)?;
        Ok(self.aircraft.clone())
    }
}
