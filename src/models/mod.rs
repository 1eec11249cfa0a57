//! The models module provides the deterministic pieces of a polling place.
//! The precinct holds the election-day configuration, the booth scheduler
//! tracks booth occupancy, and the voter records an individual's trip
//! through the polling place.

pub mod booth_scheduler;
pub mod precinct;
pub mod voter;

pub use self::booth_scheduler::BoothScheduler;
pub use self::precinct::Precinct;
pub use self::voter::Voter;
