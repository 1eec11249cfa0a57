//! The simulator module provides the mechanics to run a polling place
//! through an election day via discrete event simulation.  Each simulation
//! event is a voter arrival, and the booth scheduler carries the occupancy
//! state between events.  User interaction is also captured in this module -
//! simulation stepping, day execution, and replicated days.
//!
//! `Simulation` and `WebSimulation` are used for Rust- and npm-based
//! projects, respectively.  The `Simulation` methods use the associated
//! struct types directly, while the `WebSimulation` provides an interface
//! with better JS/WASM compatibility.
//!
//! Most simulation analysis will involve the collection, transformation,
//! and analysis of voter records.  The `step` and `run_day` methods return
//! the voter records generated during the execution of the simulation
//! step(s), for use in waiting time analysis.

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::input_modeling::{dyn_rng, EventClock};
use crate::models::{BoothScheduler, Precinct, Voter};
use crate::utils::errors::SimulationError;
use crate::utils::set_panic_hook;

pub mod replications;
pub mod services;
pub mod web;

pub use self::replications::{mean_waits, median_wait};
pub use self::services::Services;
pub use self::web::Simulation as WebSimulation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
enum Phase {
    Polling,
    Closed,
}

/// The `Simulation` struct is the core of pollsim, and includes everything
/// needed to run one polling place through an election day - the precinct
/// configuration, the booth scheduler, the event clock, and a random number
/// generator.  State information, specifically the phase of the day and the
/// voters admitted so far, is additionally retained in the struct.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    precinct: Precinct,
    booths: BoothScheduler,
    clock: EventClock,
    phase: Phase,
    voters_admitted: usize,
    services: Services,
}

impl Simulation {
    /// This constructor method creates a simulation from a supplied
    /// configuration (precinct and booth count), with the default random
    /// number generator.
    pub fn post(precinct: Precinct, booth_count: usize) -> Result<Self, SimulationError> {
        set_panic_hook();
        Ok(Self {
            booths: BoothScheduler::post(booth_count)?,
            clock: EventClock::post(&precinct),
            precinct,
            phase: Phase::Polling,
            voters_admitted: 0,
            services: Services::default(),
        })
    }

    /// This constructor method creates a simulation from a supplied
    /// configuration and seed.  Two simulations created from the same
    /// configuration and seed produce identical days, voter by voter.
    pub fn from_seed(
        precinct: Precinct,
        booth_count: usize,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        let mut simulation = Self::post(precinct, booth_count)?;
        simulation.services = Services::post(dyn_rng(rand_pcg::Pcg64Mcg::seed_from_u64(seed)));
        Ok(simulation)
    }

    /// This method sets the precinct and booth count of an existing
    /// simulation, resetting the day state while retaining the random
    /// number generator.
    pub fn put(&mut self, precinct: Precinct, booth_count: usize) -> Result<(), SimulationError> {
        self.booths = BoothScheduler::post(booth_count)?;
        self.clock = EventClock::post(&precinct);
        self.precinct = precinct;
        self.reset();
        Ok(())
    }

    /// An accessor method for the simulation global time.  During a day,
    /// the global time is the latest arrival draw, so after the polls
    /// close it reflects the first arrival past the poll window.
    pub fn get_global_time(&self) -> f64 {
        self.services.global_time()
    }

    /// An accessor method for the number of voters admitted so far in the
    /// simulated day.
    pub fn get_voters_admitted(&self) -> usize {
        self.voters_admitted
    }

    /// An accessor method for the precinct configuration.
    pub fn get_precinct(&self) -> &Precinct {
        &self.precinct
    }

    /// An accessor method for the booth count.
    pub fn get_booth_count(&self) -> usize {
        self.booths.capacity()
    }

    /// This method provides the status of the simulation - whether the
    /// polls are still open, and the voters admitted so far.
    pub fn get_status(&self) -> String {
        match self.phase {
            Phase::Polling => format!["Polling ({} voters admitted)", self.voters_admitted],
            Phase::Closed => format!["Closed ({} voters admitted)", self.voters_admitted],
        }
    }

    /// The reset method resets the day state of the simulation, except for
    /// the random number generator, so consecutive days can draw from one
    /// continuing random stream.
    pub fn reset(&mut self) {
        self.reset_booths();
        self.reset_global_time();
        self.phase = Phase::Polling;
        self.voters_admitted = 0;
    }

    /// Reopen every booth in the simulation.
    pub fn reset_booths(&mut self) {
        self.booths.reset();
    }

    /// Reset the simulation global time to 0.0.
    pub fn reset_global_time(&mut self) {
        self.services.set_global_time(0.0);
    }

    /// The simulation step is foundational for a discrete event simulation.
    /// This method advances the simulation by one voter arrival, including
    /// the stochastic draws, the poll closing check, the booth assignment,
    /// and global time accounting.  A `None` indicates the day is over -
    /// either an arrival draw has landed past the poll window, closing the
    /// polls, or the voter cap has been reached.
    pub fn step(&mut self) -> Result<Option<Voter>, SimulationError> {
        if self.phase == Phase::Closed {
            return Ok(None);
        }
        if self.voters_admitted >= self.precinct.voter_cap() {
            self.phase = Phase::Closed;
            return Ok(None);
        }
        let (interarrival_gap, voting_duration) = self.clock.draw(self.services.global_rng())?;
        let arrival_time = self.services.global_time() + interarrival_gap;
        self.services.set_global_time(arrival_time);
        if arrival_time > self.precinct.poll_window_minutes() {
            self.phase = Phase::Closed;
            return Ok(None);
        }
        let voting_start_time = if self.booths.is_full() {
            f64::max(self.booths.reclaim()?, arrival_time)
        } else {
            arrival_time
        };
        self.booths.admit(voting_start_time + voting_duration)?;
        self.voters_admitted += 1;
        Ok(Some(Voter::new(
            arrival_time,
            voting_duration,
            voting_start_time,
        )))
    }

    /// This method executes simulation `step` calls, until the polls have
    /// closed or the voter cap has been reached.  The voter records from
    /// the full day are returned.
    pub fn run_day(&mut self) -> Result<Vec<Voter>, SimulationError> {
        let mut voters: Vec<Voter> = Vec::new();
        while let Some(voter) = self.step()? {
            voters.push(voter);
        }
        Ok(voters)
    }
}
