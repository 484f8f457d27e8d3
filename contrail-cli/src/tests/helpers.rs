//! Test helpers for laying out catalogs, flight records and databases.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Temporary directory populated with everything a transform run needs.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let workspace = Self { _dir: dir, root };
        fs::create_dir_all(workspace.catalog_dir().as_std_path()).expect("create catalog dir");
        write_json(
            &workspace.catalog_dir().join("airports.json"),
            &json!({
                "EDDB": {"iata": "BER", "lat": 52.3667, "lon": 13.5033},
                "EGLL": {"iata": "LHR", "lat": 51.47, "lon": -0.4543},
                "PAWD": {"iata": "WKK", "lat": 59.2906, "lon": -158.605}
            }),
        );
        write_json(
            &workspace.catalog_dir().join("aircraft.json"),
            &json!({
                "GA5C": {"galph": 402.0},
                "LJ40": {"galph": 207, "manufacturer": "Learjet", "model": "40"}
            }),
        );
        write_json(
            &workspace.flights(),
            &json!([
                {
                    "flight_id": "lj40-1", "aircraft_type": "LJ40",
                    "departed_at": 1_700_000_000, "arrived_at": 1_700_003_600,
                    "departure_lat": 59.3, "departure_lon": -158.61,
                    "arrival_lat": 52.36, "arrival_lon": 13.51
                },
                {
                    "flight_id": "b748-1", "aircraft_type": "B748",
                    "departed_at": 1_700_000_000, "arrived_at": 1_700_007_200,
                    "departure_lat": 52.36, "departure_lon": 13.51,
                    "arrival_lat": 51.47, "arrival_lon": -0.45
                }
            ]),
        );
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog_dir(&self) -> Utf8PathBuf {
        self.root.join("catalogs")
    }

    pub(super) fn flights(&self) -> Utf8PathBuf {
        self.root.join("flights.json")
    }

    pub(super) fn staging_db(&self) -> Utf8PathBuf {
        self.root.join("db").join("staging.sqlite")
    }

    pub(super) fn production_db(&self) -> Utf8PathBuf {
        self.root.join("db").join("production.sqlite")
    }
}

fn write_json(path: &Utf8Path, value: &serde_json::Value) {
    let contents = serde_json::to_string_pretty(value).expect("serialise fixture");
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Count rows in the `flights` table of the database at `path`.
pub(super) fn count_rows(path: &Utf8Path) -> i64 {
    let connection = rusqlite::Connection::open(path.as_std_path()).expect("open database");
    connection
        .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))
        .expect("count rows")
}
