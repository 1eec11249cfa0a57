//! The input modeling module provides the stochastic foundation of the
//! simulation.  The module includes the event clock, which draws voter
//! interarrival gaps and voting durations from exponential distributions,
//! and a structure around random number generation.

use std::{cell::RefCell, rc::Rc};

pub mod event_clock;

pub use event_clock::EventClock;

pub trait SimulationRng: std::fmt::Debug + rand_core::RngCore {}
impl<T: std::fmt::Debug + rand_core::RngCore> SimulationRng for T {}
pub type DynRng = Rc<RefCell<dyn SimulationRng>>;

pub(crate) fn default_rng() -> DynRng {
    Rc::new(RefCell::new(rand_pcg::Pcg64Mcg::new(42)))
}

pub fn dyn_rng<Rng: SimulationRng + 'static>(rng: Rng) -> DynRng {
    Rc::new(RefCell::new(rng))
}
