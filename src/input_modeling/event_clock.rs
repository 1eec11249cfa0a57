//! The event clock generates the two stochastic processes of a polling
//! place.  Voter arrivals form a Poisson process, so interarrival gaps are
//! exponential with the precinct arrival rate, and voting durations are
//! exponential with the precinct service rate.

use rand::distributions::Distribution;
use rand_distr::Exp;
use serde::{Deserialize, Serialize};

use super::DynRng;
use crate::models::Precinct;
use crate::utils::errors::SimulationError;

/// The event clock holds the stochastic rates of a precinct, and draws the
/// random variates that advance a simulated election day.  All rates are
/// per-minute, and all variates are in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventClock {
    arrival_rate: f64,
    service_rate: f64,
}

impl EventClock {
    pub fn post(precinct: &Precinct) -> Self {
        Self {
            arrival_rate: precinct.arrival_rate(),
            service_rate: precinct.service_rate(),
        }
    }

    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces an (interarrival gap,
    /// voting duration) pair of f64 random variates.
    pub fn draw(&mut self, uniform_rng: DynRng) -> Result<(f64, f64), SimulationError> {
        let interarrival_gap =
            Exp::new(self.arrival_rate)?.sample(&mut *uniform_rng.borrow_mut());
        let voting_duration = Exp::new(self.service_rate)?.sample(&mut *uniform_rng.borrow_mut());
        Ok((interarrival_gap, voting_duration))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::super::{default_rng, dyn_rng};
    use super::*;

    fn test_precinct(arrival_rate: f64, service_rate: f64) -> Precinct {
        Precinct::post(
            String::from("Leafy Hollow"),
            720.0,
            1200,
            arrival_rate,
            service_rate,
        )
        .unwrap()
    }

    fn empirical_means(clock: &mut EventClock, sample_size: usize) -> (f64, f64) {
        let uniform_rng = default_rng();
        let (mut gaps, mut durations) = (0.0, 0.0);
        (0..sample_size).for_each(|_| {
            let (gap, duration) = clock.draw(uniform_rng.clone()).unwrap();
            gaps += gap;
            durations += duration;
        });
        (
            gaps / (sample_size as f64),
            durations / (sample_size as f64),
        )
    }

    #[test]
    fn interarrival_samples_match_expectation() {
        let mut clock = EventClock::post(&test_precinct(7.0, 11.0));
        let (mean, _) = empirical_means(&mut clock, 20000);
        let expected = 1.0 / 7.0;
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn duration_samples_match_expectation() {
        let mut clock = EventClock::post(&test_precinct(7.0, 0.25));
        let (_, mean) = empirical_means(&mut clock, 20000);
        let expected = 4.0;
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn identical_seeds_reproduce_draws() {
        let mut first_clock = EventClock::post(&test_precinct(2.0, 0.5));
        let mut second_clock = EventClock::post(&test_precinct(2.0, 0.5));
        let first_rng = dyn_rng(rand_pcg::Pcg64Mcg::seed_from_u64(271828));
        let second_rng = dyn_rng(rand_pcg::Pcg64Mcg::seed_from_u64(271828));
        let first_draws: Vec<(f64, f64)> = (0..5)
            .map(|_| first_clock.draw(first_rng.clone()).unwrap())
            .collect();
        let second_draws: Vec<(f64, f64)> = (0..5)
            .map(|_| second_clock.draw(second_rng.clone()).unwrap())
            .collect();
        assert_eq![first_draws, second_draws];
    }
}
