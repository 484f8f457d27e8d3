//! JSON decoding for the airport and aircraft catalogs.

use std::{collections::BTreeMap, io::Read};

use contrail_core::{Aircraft, AircraftCatalog, Airport, AirportCatalog, Coordinate};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while decoding a catalog payload.
#[derive(Debug, Error)]
pub enum CatalogDecodeError {
    /// The payload was not a JSON object of catalog records.
    #[error("malformed catalog JSON: {source}")]
    Json {
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Decode an airport catalog from a JSON object keyed by airport identifier.
///
/// Each record needs `lat`, `lon` and `iata`; `name`, `icao` and `country`
/// are optional and any other fields are ignored.
///
/// # Errors
/// Returns [`CatalogDecodeError::Json`] when the payload is not valid JSON or
/// a record lacks a required field.
///
/// # Examples
/// ```
/// use contrail_data::catalog::decode_airport_catalog;
///
/// let json = br#"{"EDDB": {"iata": "BER", "lat": 52.3667, "lon": 13.5033, "tz": "Europe/Berlin"}}"#;
/// let catalog = decode_airport_catalog(&json[..])?;
/// assert_eq!(catalog["EDDB"].iata, "BER");
/// # Ok::<(), contrail_data::catalog::CatalogDecodeError>(())
/// ```
pub fn decode_airport_catalog<R: Read>(reader: R) -> Result<AirportCatalog, CatalogDecodeError> {
    let raw: BTreeMap<String, RawAirport> = serde_json::from_reader(reader)
        .map_err(|source| CatalogDecodeError::Json { source })?;
    Ok(raw
        .into_iter()
        .map(|(id, record)| (id, record.into_airport()))
        .collect())
}

/// Decode an aircraft catalog from a JSON object keyed by type designator.
///
/// Each record needs `galph`; `manufacturer`, `model` and `engines` (or
/// `engine_count`) are optional.
///
/// # Errors
/// Returns [`CatalogDecodeError::Json`] when the payload is not valid JSON or
/// a record lacks a burn rate.
pub fn decode_aircraft_catalog<R: Read>(reader: R) -> Result<AircraftCatalog, CatalogDecodeError> {
    let raw: BTreeMap<String, RawAircraft> = serde_json::from_reader(reader)
        .map_err(|source| CatalogDecodeError::Json { source })?;
    Ok(raw
        .into_iter()
        .map(|(code, record)| (code, record.into_aircraft()))
        .collect())
}

#[derive(Debug, Deserialize)]
struct RawAirport {
    iata: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    icao: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl RawAirport {
    fn into_airport(self) -> Airport {
        Airport {
            iata: self.iata,
            location: Coordinate::new(self.lat, self.lon),
            name: non_empty(self.name),
            icao: non_empty(self.icao),
            country: non_empty(self.country),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAircraft {
    galph: f64,
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default, alias = "engines")]
    engine_count: Option<u8>,
}

impl RawAircraft {
    fn into_aircraft(self) -> Aircraft {
        Aircraft {
            galph: self.galph,
            manufacturer: non_empty(self.manufacturer),
            model: non_empty(self.model),
            engine_count: self.engine_count,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
