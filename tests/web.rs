use pollsim::capacity_planning::BoothAllocation;
use pollsim::models::{Precinct, Voter};
use pollsim::simulator::{median_wait, Simulation, WebSimulation};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[test]
#[wasm_bindgen_test]
fn seeded_web_days_match_native_days() {
    let precinct = r#"
name: "Maple Hall"
pollWindowMinutes: 180.0
voterCap: 500
arrivalRate: 1.0
serviceRate: 0.25
"#;
    let mut web = WebSimulation::post_yaml(precinct, 3, 271828);
    let web_voters: Vec<Voter> = serde_json::from_str(&web.run_day_json()).unwrap();
    let mut native =
        Simulation::from_seed(Precinct::post_yaml(precinct).unwrap(), 3, 271828).unwrap();
    let native_voters = native.run_day().unwrap();
    assert![!web_voters.is_empty()];
    assert_eq![web_voters, native_voters];
}

#[test]
#[wasm_bindgen_test]
fn web_surface_reports_day_progress() {
    let precinct = r#"{
        "name": "Maple Hall",
        "pollWindowMinutes": 180.0,
        "voterCap": 500,
        "arrivalRate": 1.0,
        "serviceRate": 0.25
    }"#;
    let mut web = WebSimulation::post_json(precinct, 3, 42);
    assert_eq![web.get_global_time(), 0.0];
    assert_eq![web.get_voters_admitted(), 0];
    assert_eq![web.get_status(), "Polling (0 voters admitted)"];
    let first_voter = web.step().unwrap();
    assert![first_voter.arrival_time() > 0.0];
    assert_eq![web.get_voters_admitted(), 1];
    web.run_day_json();
    assert![web.get_status().starts_with("Closed")];
    web.reset();
    assert_eq![web.get_global_time(), 0.0];
    assert_eq![web.get_voters_admitted(), 0];
}

#[test]
#[wasm_bindgen_test]
fn web_replications_match_native_replications() {
    let precinct = r#"{
        "name": "Maple Hall",
        "pollWindowMinutes": 180.0,
        "voterCap": 500,
        "arrivalRate": 1.0,
        "serviceRate": 0.25
    }"#;
    let web_median = WebSimulation::median_wait_json(precinct, 2, 15, 1000);
    let native_median =
        median_wait(&Precinct::post_json(precinct).unwrap(), 2, 15, 1000).unwrap();
    assert_eq![web_median, native_median];
    let web_waits: Vec<f64> =
        serde_json::from_str(&WebSimulation::mean_waits_json(precinct, 2, 15, 1000)).unwrap();
    assert_eq![web_waits.len(), 15];
}

#[test]
#[wasm_bindgen_test]
fn web_booth_search_returns_an_allocation() {
    let precinct = r#"{
        "name": "Maple Hall",
        "pollWindowMinutes": 180.0,
        "voterCap": 500,
        "arrivalRate": 1.0,
        "serviceRate": 0.25
    }"#;
    let allocation: BoothAllocation = serde_json::from_str(&WebSimulation::minimum_booths_json(
        precinct, 120.0, 8, 10, 42,
    ))
    .unwrap();
    assert![allocation.booth_count() >= 1];
    assert![allocation.booth_count() <= 8];
    assert![allocation.median_wait() < 120.0];
}

#[test]
#[wasm_bindgen_test]
fn web_booth_search_reports_infeasibility_as_null() {
    let precinct = r#"{
        "name": "Overrun Hall",
        "pollWindowMinutes": 120.0,
        "voterCap": 10000,
        "arrivalRate": 5.0,
        "serviceRate": 0.05
    }"#;
    let allocation = WebSimulation::minimum_booths_json(precinct, 0.01, 3, 10, 42);
    assert_eq![allocation, "null"];
}

#[test]
#[wasm_bindgen_test]
fn web_configuration_round_trips() {
    let precinct = r#"
name: "Maple Hall"
pollWindowMinutes: 180.0
voterCap: 500
arrivalRate: 1.0
serviceRate: 0.25
"#;
    let web = WebSimulation::post_yaml(precinct, 3, 42);
    assert![web.get_yaml().contains("name: Maple Hall")];
    assert![web.get_json().contains("\"name\": \"Maple Hall\"")];
}

#[test]
#[wasm_bindgen_test]
fn web_put_replaces_the_configuration() {
    let first = r#"{
        "name": "Maple Hall",
        "pollWindowMinutes": 180.0,
        "voterCap": 500,
        "arrivalRate": 1.0,
        "serviceRate": 0.25
    }"#;
    let second = r#"{
        "name": "Library",
        "pollWindowMinutes": 240.0,
        "voterCap": 300,
        "arrivalRate": 0.5,
        "serviceRate": 0.2
    }"#;
    let mut web = WebSimulation::post_json(first, 3, 42);
    web.run_day_json();
    web.put_json(second, 6);
    assert_eq![web.get_voters_admitted(), 0];
    assert_eq![web.get_global_time(), 0.0];
    assert![web.get_json().contains("\"name\": \"Library\"")];
}
