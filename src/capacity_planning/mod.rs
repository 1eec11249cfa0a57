//! The capacity planning module searches booth counts against a service
//! standard.  The planning question is the one election officials ask ahead
//! of election day - the smallest number of booths that keeps the median
//! wait under a target.

use serde::{Deserialize, Serialize};

use crate::models::Precinct;
use crate::simulator::replications::median_wait;
use crate::utils::errors::SimulationError;

/// A `BoothAllocation` is the outcome of a successful booth search - the
/// smallest booth count meeting the service standard, and the median wait
/// simulated at that count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothAllocation {
    booth_count: usize,
    median_wait: f64,
}

impl BoothAllocation {
    /// This accessor method returns the booth count of an allocation.
    pub fn booth_count(&self) -> usize {
        self.booth_count
    }

    /// This accessor method returns the median wait of an allocation, in
    /// minutes.
    pub fn median_wait(&self) -> f64 {
        self.median_wait
    }
}

/// This function finds the smallest booth count whose median wait, across
/// replicated election days, falls strictly below the target wait.
/// Candidate counts are swept in order, from one booth up - sampling noise
/// makes the median wait only roughly monotone in the booth count, so a
/// bisection over candidates could settle above the true minimum.  Every
/// candidate reuses the same seed schedule, so candidates are compared on
/// identical arrival and duration draws.  A `None` is returned when no
/// count within `max_booth_count` meets the target.
pub fn minimum_booths(
    precinct: &Precinct,
    target_wait: f64,
    max_booth_count: usize,
    replication_count: usize,
    initial_seed: u64,
) -> Result<Option<BoothAllocation>, SimulationError> {
    for booth_count in 1..=max_booth_count {
        let median_wait = median_wait(precinct, booth_count, replication_count, initial_seed)?;
        if median_wait < target_wait {
            return Ok(Some(BoothAllocation {
                booth_count,
                median_wait,
            }));
        }
    }
    Ok(None)
}
