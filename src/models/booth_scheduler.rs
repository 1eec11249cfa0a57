use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

/// The departure time of the voter occupying a booth, in minutes after the
/// polls open.  Ordering uses `f64::total_cmp`, so departure times can key
/// a `BinaryHeap`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct BusyUntil(f64);

impl Ord for BusyUntil {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for BusyUntil {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BusyUntil {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BusyUntil {}

/// The booth scheduler tracks occupancy across the voting booths of a
/// polling place.  Busy booths are held in a min-heap, keyed by the
/// occupying voter's departure time, so the booth to free up soonest is
/// always the one reclaimed.  The scheduler has no knowledge of the
/// simulation clock - admission and reclamation decisions belong to the
/// simulator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothScheduler {
    capacity: usize,
    busy_until: BinaryHeap<Reverse<BusyUntil>>,
}

impl BoothScheduler {
    /// This constructor method creates a `BoothScheduler` with the supplied
    /// number of booths, all initially open.
    pub fn post(capacity: usize) -> Result<Self, SimulationError> {
        if capacity == 0 {
            return Err(SimulationError::NoBooths);
        }
        Ok(Self {
            capacity,
            busy_until: BinaryHeap::with_capacity(capacity),
        })
    }

    /// This method marks one open booth as busy until the supplied departure
    /// time.
    pub fn admit(&mut self, departure_time: f64) -> Result<(), SimulationError> {
        if self.is_full() {
            return Err(SimulationError::SaturatedBooths);
        }
        self.busy_until.push(Reverse(BusyUntil(departure_time)));
        Ok(())
    }

    /// This method frees the busy booth with the earliest departure time,
    /// returning that departure time.
    pub fn reclaim(&mut self) -> Result<f64, SimulationError> {
        match self.busy_until.pop() {
            Some(Reverse(BusyUntil(departure_time))) => Ok(departure_time),
            None => Err(SimulationError::IdleBooths),
        }
    }

    /// This method reopens every booth, for reuse of the scheduler across
    /// simulated days.
    pub fn reset(&mut self) {
        self.busy_until.clear();
    }

    /// Whether every booth is currently occupied.
    pub fn is_full(&self) -> bool {
        self.busy_until.len() == self.capacity
    }

    /// This accessor method returns the number of currently occupied booths.
    pub fn occupancy(&self) -> usize {
        self.busy_until.len()
    }

    /// This accessor method returns the number of booths.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
