//! Replications run many simulated election days over a shared seed
//! schedule, for statistical analysis of precinct waiting times.  A single
//! day is one draw from a heavy-tailed distribution, so summaries are taken
//! across replications rather than within a day.

use crate::models::{Precinct, Voter};
use crate::output_analysis::ReplicationSample;
use crate::utils::errors::SimulationError;

use super::Simulation;

/// This function calculates the mean wait of a single simulated day.  A day
/// that admitted no voters has no mean wait.
fn day_mean_wait(voters: &[Voter]) -> Result<f64, SimulationError> {
    if voters.is_empty() {
        return Err(SimulationError::EmptyTrial);
    }
    Ok(voters.iter().map(Voter::wait_time).sum::<f64>() / (voters.len() as f64))
}

/// This function runs replicated election days, returning each day's mean
/// wait in minutes.  Replication `i` draws from seed `initial_seed + i`, so
/// booth counts compared over the same seed schedule see identical arrival
/// and duration draws.
pub fn mean_waits(
    precinct: &Precinct,
    booth_count: usize,
    replication_count: usize,
    initial_seed: u64,
) -> Result<Vec<f64>, SimulationError> {
    (0..replication_count)
        .map(|replication| -> Result<f64, SimulationError> {
            let mut simulation = Simulation::from_seed(
                precinct.clone(),
                booth_count,
                initial_seed + replication as u64,
            )?;
            day_mean_wait(&simulation.run_day()?)
        })
        .collect()
}

/// This function runs replicated election days and summarizes them with the
/// median of the daily mean waits, in minutes.
pub fn median_wait(
    precinct: &Precinct,
    booth_count: usize,
    replication_count: usize,
    initial_seed: u64,
) -> Result<f64, SimulationError> {
    let sample = ReplicationSample::post(mean_waits(
        precinct,
        booth_count,
        replication_count,
        initial_seed,
    )?)?;
    Ok(sample.median())
}
