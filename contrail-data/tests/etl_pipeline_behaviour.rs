//! Behavioural tests for the catalog-to-database pipeline.
//!
//! Catalogs come from a local mirror written into a temporary directory, so
//! no object store is needed.

use camino::Utf8PathBuf;
use contrail_core::test_support::MemoryCatalogProvider;
use contrail_core::{CatalogError, CatalogKind, CatalogProvider};
use contrail_data::catalog::FsCatalogProvider;
use contrail_data::store::{DatabaseConfig, Stage, open_database};
use contrail_data::transform::{FlightRecord, transform_flights};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

struct PipelineWorld {
    _dir: TempDir,
    root: Utf8PathBuf,
    provider: RefCell<Option<Box<dyn CatalogProvider>>>,
    records: RefCell<Vec<FlightRecord>>,
    outcome: RefCell<Option<Result<usize, CatalogError>>>,
}

impl PipelineWorld {
    fn databases(&self) -> DatabaseConfig {
        DatabaseConfig::new(
            self.root.join("staging.sqlite"),
            self.root.join("production.sqlite"),
        )
    }
}

#[fixture]
fn world() -> PipelineWorld {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    PipelineWorld {
        _dir: dir,
        root,
        provider: RefCell::new(None),
        records: RefCell::new(Vec::new()),
        outcome: RefCell::new(None),
    }
}

#[given("a catalog mirror with airports and aircraft")]
fn catalog_mirror(#[from(world)] world: &PipelineWorld) {
    let mirror = world.root.join("mirror");
    fs::create_dir_all(mirror.as_std_path()).expect("create mirror");
    fs::write(
        mirror.join("airports.json").as_std_path(),
        r#"{"EDDB": {"iata": "BER", "lat": 52.3667, "lon": 13.5033},
            "PAWD": {"iata": "WKK", "lat": 59.2906, "lon": -158.605}}"#,
    )
    .expect("write airports");
    fs::write(
        mirror.join("aircraft.json").as_std_path(),
        r#"{"GA5C": {"galph": 402.0}}"#,
    )
    .expect("write aircraft");
    *world.provider.borrow_mut() = Some(Box::new(FsCatalogProvider::new(mirror)));
}

#[given("a catalog source that cannot be reached")]
fn unreachable_source(#[from(world)] world: &PipelineWorld) {
    *world.provider.borrow_mut() = Some(Box::new(MemoryCatalogProvider::unavailable(
        "http://localhost:9/reference/airports.json",
    )));
}

#[given("a Gulfstream flight from Aleknagik to Berlin")]
fn gulfstream_flight(#[from(world)] world: &PipelineWorld) {
    world.records.borrow_mut().push(FlightRecord {
        flight_id: "ga5c-1".into(),
        aircraft_type: "GA5C".into(),
        departed_at: 1_700_000_000,
        arrived_at: 1_700_027_807,
        departure_lat: 59.3,
        departure_lon: -158.61,
        arrival_lat: 52.36,
        arrival_lon: 13.51,
    });
}

#[when("I load the catalogs and transform the batch into staging")]
fn load_and_transform(#[from(world)] world: &PipelineWorld) {
    let borrowed = world.provider.borrow();
    let provider = borrowed
        .as_ref()
        .unwrap_or_else(|| panic!("catalog provider must be configured"));
    let outcome = provider.load_airport_catalog().and_then(|airports| {
        let aircraft = provider.load_aircraft_catalog()?;
        let report = transform_flights(&world.records.borrow(), &airports, &aircraft);
        let mut store = open_database(&world.databases(), Stage::Staging)
            .unwrap_or_else(|err| panic!("staging database should open: {err}"));
        store
            .persist_flights(&report.flights)
            .unwrap_or_else(|err| panic!("flights should persist: {err}"));
        Ok(report.flights.len())
    });
    *world.outcome.borrow_mut() = Some(outcome);
}

#[then("the staging database holds the flight with about 3105 gallons of fuel")]
fn staging_holds_flight(#[from(world)] world: &PipelineWorld) {
    match world.outcome.borrow().as_ref() {
        Some(Ok(loaded)) => assert_eq!(*loaded, 1),
        other => panic!("expected a successful load, got {other:?}"),
    }
    let store = open_database(&world.databases(), Stage::Staging).expect("reopen staging");
    assert_eq!(store.count_flights().expect("count"), 1);
    let production =
        open_database(&world.databases(), Stage::Production).expect("open production");
    assert_eq!(production.count_flights().expect("count"), 0);

    let connection =
        rusqlite::Connection::open(world.databases().staging.as_std_path()).expect("open");
    let (origin, destination, fuel): (String, String, f64) = connection
        .query_row(
            "SELECT origin_iata, destination_iata, fuel_gallons FROM flights",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("read row");
    assert_eq!((origin.as_str(), destination.as_str()), ("WKK", "BER"));
    assert_eq!(fuel.round(), 3105.0);
}

#[then("the load fails naming the airport catalog")]
fn load_fails(#[from(world)] world: &PipelineWorld) {
    match world.outcome.borrow().as_ref() {
        Some(Err(err)) => {
            assert_eq!(err.catalog(), CatalogKind::Airports);
            assert!(err.to_string().contains("airport catalog"), "{err}");
        }
        other => panic!("expected a catalog error, got {other:?}"),
    }
    assert!(!world.root.join("staging.sqlite").exists());
}

#[scenario(path = "tests/features/etl_pipeline.feature", index = 0)]
fn load_transform_persist(#[from(world)] world: PipelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/etl_pipeline.feature", index = 1)]
fn surface_unavailable_catalog(#[from(world)] world: PipelineWorld) {
    let _ = world;
}
