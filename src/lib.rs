//! # Overview
//! Pollsim provides a discrete event simulation of election-day polling
//! places, for queueing analysis and booth capacity planning.  Polling
//! place modeling, simulation, and analysis capabilities are provided
//! through native Rust and WebAssembly interfaces.  The simulator
//! steps voters through arrival, queueing, voting, and departure over a
//! single election day, and the surrounding modules support replicated
//! days, summary statistics, and "how many booths do we need" planning
//! questions.
//!
//! Input modeling covers the stochastic processes driving the
//! simulation - voter arrivals and voting durations.  Models are the
//! deterministic pieces of a polling place - the precinct configuration
//! and the booth scheduler.  Output analysis summarizes the waiting
//! times recorded across replicated election days.  Capacity planning
//! searches booth counts against a service standard.  The simulator
//! module ties these together for native and web-based execution.

pub mod capacity_planning;
pub mod input_modeling;
pub mod models;
pub mod output_analysis;
pub mod simulator;
pub mod utils;
