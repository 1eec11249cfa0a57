use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A `Voter` records one voter's trip through the polling place.  The record
/// includes arrival information (arrival time and voting duration) and
/// outcome information (voting start time and departure time).  All times
/// are in minutes after the polls open.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    arrival_time: f64,
    voting_duration: f64,
    voting_start_time: f64,
    departure_time: f64,
}

impl Voter {
    /// This constructor method builds a `Voter` from the arrival draws and
    /// booth assignment of a simulation step.
    pub(crate) fn new(arrival_time: f64, voting_duration: f64, voting_start_time: f64) -> Self {
        Self {
            arrival_time,
            voting_duration,
            voting_start_time,
            departure_time: voting_start_time + voting_duration,
        }
    }

    /// This accessor method returns the arrival time of a voter.
    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    /// This accessor method returns the voting duration of a voter.
    pub fn voting_duration(&self) -> f64 {
        self.voting_duration
    }

    /// This accessor method returns the time a voter entered a booth.
    pub fn voting_start_time(&self) -> f64 {
        self.voting_start_time
    }

    /// This accessor method returns the time a voter left their booth.
    pub fn departure_time(&self) -> f64 {
        self.departure_time
    }

    /// The time a voter spent in the queue, from arrival until entering a
    /// booth.  A voter assigned directly to an open booth has a wait time of
    /// zero.
    pub fn wait_time(&self) -> f64 {
        self.voting_start_time - self.arrival_time
    }
}
