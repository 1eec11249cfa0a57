use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

/// The `Precinct` struct holds the election-day configuration of a single
/// polling place.  The poll window is the period, in minutes, during which
/// arriving voters are admitted.  The voter cap is the registered voter
/// count, which bounds the number of admissions in a day.  The arrival and
/// service rates parameterize the stochastic behavior of the precinct - both
/// are per-minute rates, so a mean voting duration of 5 minutes corresponds
/// to a service rate of 0.2.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precinct {
    name: String,
    poll_window_minutes: f64,
    voter_cap: usize,
    arrival_rate: f64,
    service_rate: f64,
}

impl Precinct {
    /// This constructor method creates a `Precinct` from a supplied
    /// configuration, validating the configuration in the process.
    pub fn post(
        name: String,
        poll_window_minutes: f64,
        voter_cap: usize,
        arrival_rate: f64,
        service_rate: f64,
    ) -> Result<Self, SimulationError> {
        let precinct = Self {
            name,
            poll_window_minutes,
            voter_cap,
            arrival_rate,
            service_rate,
        };
        precinct.validate()?;
        Ok(precinct)
    }

    /// This constructor method creates a `Precinct` from a JSON
    /// representation of the configuration.
    pub fn post_json(precinct: &str) -> Result<Self, SimulationError> {
        let precinct: Precinct = serde_json::from_str(precinct)?;
        precinct.validate()?;
        Ok(precinct)
    }

    /// This constructor method creates a `Precinct` from a YAML
    /// representation of the configuration.
    pub fn post_yaml(precinct: &str) -> Result<Self, SimulationError> {
        let precinct: Precinct = serde_yaml::from_str(precinct)?;
        precinct.validate()?;
        Ok(precinct)
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if !self.poll_window_minutes.is_finite() || self.poll_window_minutes < 0.0 {
            return Err(SimulationError::InvalidPrecinctConfiguration(
                "the poll window must be a finite number of minutes, zero or greater",
            ));
        }
        if !self.arrival_rate.is_finite() || self.arrival_rate <= 0.0 {
            return Err(SimulationError::InvalidPrecinctConfiguration(
                "the arrival rate must be finite and strictly positive",
            ));
        }
        if !self.service_rate.is_finite() || self.service_rate <= 0.0 {
            return Err(SimulationError::InvalidPrecinctConfiguration(
                "the service rate must be finite and strictly positive",
            ));
        }
        Ok(())
    }

    /// This accessor method returns the name of a precinct.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This accessor method returns the poll window of a precinct, in
    /// minutes.
    pub fn poll_window_minutes(&self) -> f64 {
        self.poll_window_minutes
    }

    /// This accessor method returns the registered voter cap of a precinct.
    pub fn voter_cap(&self) -> usize {
        self.voter_cap
    }

    /// This accessor method returns the voter arrival rate of a precinct,
    /// per minute.
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    /// This accessor method returns the voting service rate of a precinct,
    /// per minute.
    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }
}
