use js_sys::Array;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::capacity_planning::minimum_booths;
use crate::models::{Precinct, Voter};
use crate::utils::set_panic_hook;

use super::Simulation as CoreSimulation;
use super::{mean_waits, median_wait};

/// The web `Simulation` provides JS/WASM-compatible interfaces to the core
/// `Simulation` struct.  For additional insight on these methods, refer to
/// the associated core `Simulation` methods.  Errors are unwrapped, instead
/// of returned, in the web `Simulation` methods.
#[wasm_bindgen]
#[derive(Serialize, Deserialize)]
pub struct Simulation {
    simulation: CoreSimulation,
}

#[wasm_bindgen]
impl Simulation {
    /// A JS/WASM interface for `Simulation.from_seed`, which uses a JSON
    /// representation of the precinct configuration.
    pub fn post_json(precinct: &str, booth_count: usize, seed: u64) -> Self {
        set_panic_hook();
        Self {
            simulation: CoreSimulation::from_seed(
                Precinct::post_json(precinct).unwrap(),
                booth_count,
                seed,
            )
            .unwrap(),
        }
    }

    /// A JS/WASM interface for `Simulation.put`, which uses a JSON
    /// representation of the precinct configuration.
    pub fn put_json(&mut self, precinct: &str, booth_count: usize) {
        self.simulation
            .put(Precinct::post_json(precinct).unwrap(), booth_count)
            .unwrap();
    }

    /// Get a JSON representation of the full `Simulation` configuration.
    pub fn get_json(&self) -> String {
        serde_json::to_string_pretty(&self.simulation).unwrap()
    }

    /// A JS/WASM interface for `Simulation.from_seed`, which uses a YAML
    /// representation of the precinct configuration.
    pub fn post_yaml(precinct: &str, booth_count: usize, seed: u64) -> Simulation {
        set_panic_hook();
        Self {
            simulation: CoreSimulation::from_seed(
                Precinct::post_yaml(precinct).unwrap(),
                booth_count,
                seed,
            )
            .unwrap(),
        }
    }

    /// A JS/WASM interface for `Simulation.put`, which uses a YAML
    /// representation of the precinct configuration.
    pub fn put_yaml(&mut self, precinct: &str, booth_count: usize) {
        self.simulation
            .put(Precinct::post_yaml(precinct).unwrap(), booth_count)
            .unwrap();
    }

    /// Get a YAML representation of the full `Simulation` configuration.
    pub fn get_yaml(&self) -> String {
        serde_yaml::to_string(&self.simulation).unwrap()
    }

    /// An interface to `Simulation.get_global_time`.
    pub fn get_global_time(&self) -> f64 {
        self.simulation.get_global_time()
    }

    /// An interface to `Simulation.get_voters_admitted`.
    pub fn get_voters_admitted(&self) -> usize {
        self.simulation.get_voters_admitted()
    }

    /// An interface to `Simulation.get_status`.
    pub fn get_status(&self) -> String {
        self.simulation.get_status()
    }

    /// An interface to `Simulation.reset`.
    pub fn reset(&mut self) {
        self.simulation.reset();
    }

    /// An interface to `Simulation.reset_booths`.
    pub fn reset_booths(&mut self) {
        self.simulation.reset_booths();
    }

    /// An interface to `Simulation.reset_global_time`
    pub fn reset_global_time(&mut self) {
        self.simulation.reset_global_time();
    }

    /// A JS/WASM interface for `Simulation.step`, which returns the next
    /// voter record, or nothing once the day is over.
    pub fn step(&mut self) -> Option<Voter> {
        self.simulation.step().unwrap()
    }

    /// A JS/WASM interface for `Simulation.run_day`, which converts the
    /// returned voter records to a JavaScript Array.
    pub fn run_day_js(&mut self) -> Array {
        self.simulation
            .run_day()
            .unwrap()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// A JS/WASM interface for `Simulation.run_day`, which converts the
    /// returned voter records to a JSON string.
    pub fn run_day_json(&mut self) -> String {
        serde_json::to_string(&self.simulation.run_day().unwrap()).unwrap()
    }

    /// A JS/WASM interface for `Simulation.run_day`, which converts the
    /// returned voter records to a YAML string.
    pub fn run_day_yaml(&mut self) -> String {
        serde_yaml::to_string(&self.simulation.run_day().unwrap()).unwrap()
    }

    /// A JS/WASM interface for `replications.mean_waits`, which uses a JSON
    /// representation of the precinct configuration and converts the daily
    /// mean waits to a JSON string.
    pub fn mean_waits_json(
        precinct: &str,
        booth_count: usize,
        replication_count: usize,
        initial_seed: u64,
    ) -> String {
        serde_json::to_string(
            &mean_waits(
                &Precinct::post_json(precinct).unwrap(),
                booth_count,
                replication_count,
                initial_seed,
            )
            .unwrap(),
        )
        .unwrap()
    }

    /// A JS/WASM interface for `replications.median_wait`, which uses a
    /// JSON representation of the precinct configuration.
    pub fn median_wait_json(
        precinct: &str,
        booth_count: usize,
        replication_count: usize,
        initial_seed: u64,
    ) -> f64 {
        median_wait(
            &Precinct::post_json(precinct).unwrap(),
            booth_count,
            replication_count,
            initial_seed,
        )
        .unwrap()
    }

    /// A JS/WASM interface for `capacity_planning.minimum_booths`, which
    /// uses a JSON representation of the precinct configuration and returns
    /// a JSON representation of the allocation - `null` when no booth count
    /// within the maximum meets the target.
    pub fn minimum_booths_json(
        precinct: &str,
        target_wait: f64,
        max_booth_count: usize,
        replication_count: usize,
        initial_seed: u64,
    ) -> String {
        serde_json::to_string(
            &minimum_booths(
                &Precinct::post_json(precinct).unwrap(),
                target_wait,
                max_booth_count,
                replication_count,
                initial_seed,
            )
            .unwrap(),
        )
        .unwrap()
    }
}
