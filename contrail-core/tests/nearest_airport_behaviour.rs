//! Behavioural tests for nearest-airport resolution.

use contrail_core::{
    AirportCatalog, Coordinate, ResolveError, find_nearest_airport, test_support::sample_airports,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn catalog() -> RefCell<AirportCatalog> {
    RefCell::new(AirportCatalog::new())
}

#[fixture]
fn outcome() -> RefCell<Option<Result<String, ResolveError>>> {
    RefCell::new(None)
}

fn resolve(
    catalog: &RefCell<AirportCatalog>,
    outcome: &RefCell<Option<Result<String, ResolveError>>>,
    point: Coordinate,
) {
    let result = find_nearest_airport(point, &catalog.borrow()).map(str::to_owned);
    *outcome.borrow_mut() = Some(result);
}

#[given("the sample airport catalog")]
fn given_sample(#[from(catalog)] catalog: &RefCell<AirportCatalog>) {
    *catalog.borrow_mut() = sample_airports();
}

#[given("an empty airport catalog")]
fn given_empty(#[from(catalog)] catalog: &RefCell<AirportCatalog>) {
    catalog.borrow_mut().clear();
}

#[when("I resolve the nearest airport to a point beside Berlin")]
fn resolve_berlin(
    #[from(catalog)] catalog: &RefCell<AirportCatalog>,
    #[from(outcome)] outcome: &RefCell<Option<Result<String, ResolveError>>>,
) {
    resolve(catalog, outcome, Coordinate::new(52.36, 13.51));
}

#[when("I resolve the nearest airport to a point beside Aleknagik")]
fn resolve_aleknagik(
    #[from(catalog)] catalog: &RefCell<AirportCatalog>,
    #[from(outcome)] outcome: &RefCell<Option<Result<String, ResolveError>>>,
) {
    resolve(catalog, outcome, Coordinate::new(59.3, -158.61));
}

#[then("the resolved code is BER")]
fn then_ber(#[from(outcome)] outcome: &RefCell<Option<Result<String, ResolveError>>>) {
    let borrow = outcome.borrow();
    let code = borrow
        .as_ref()
        .expect("resolution should have run")
        .as_ref()
        .expect("expected a resolved airport");
    assert_eq!(code, "BER");
}

#[then("the resolved code is WKK")]
fn then_wkk(#[from(outcome)] outcome: &RefCell<Option<Result<String, ResolveError>>>) {
    let borrow = outcome.borrow();
    let code = borrow
        .as_ref()
        .expect("resolution should have run")
        .as_ref()
        .expect("expected a resolved airport");
    assert_eq!(code, "WKK");
}

#[then("an empty catalog error is returned")]
fn then_empty(#[from(outcome)] outcome: &RefCell<Option<Result<String, ResolveError>>>) {
    let borrow = outcome.borrow();
    let result = borrow.as_ref().expect("resolution should have run");
    assert_eq!(result, &Err(ResolveError::EmptyCatalog));
}

#[scenario(path = "tests/features/nearest_airport.feature", index = 0)]
fn resolves_berlin(
    catalog: RefCell<AirportCatalog>,
    outcome: RefCell<Option<Result<String, ResolveError>>>,
) {
    let _ = (catalog, outcome);
}

#[scenario(path = "tests/features/nearest_airport.feature", index = 1)]
fn resolves_aleknagik(
    catalog: RefCell<AirportCatalog>,
    outcome: RefCell<Option<Result<String, ResolveError>>>,
) {
    let _ = (catalog, outcome);
}

#[scenario(path = "tests/features/nearest_airport.feature", index = 2)]
fn rejects_empty_catalog(
    catalog: RefCell<AirportCatalog>,
    outcome: RefCell<Option<Result<String, ResolveError>>>,
) {
    let _ = (catalog, outcome);
}
