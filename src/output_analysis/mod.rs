//! The output analysis module provides statistical analysis tools for
//! analyzing simulation outputs.  Replicated election days produce
//! independent, identically-distributed (IID) mean waits, which are analyzed
//! with the `ReplicationSample`.

use std::cmp::Ordering;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

fn sum<T: Float>(points: &[T]) -> T
where
    f64: Into<T>,
{
    points.iter().fold(0.0.into(), |sum, point| sum + *point)
}

/// This function calculates the sample mean from a set of points - a simple
/// arithmetic mean.
fn sample_mean<T: Float>(points: &[T]) -> Result<T, SimulationError>
where
    f64: Into<T>,
{
    Ok(sum(points) / usize_to_float(points.len())?)
}

/// This function calculates sample variance, given a set of points and the
/// sample mean.
fn sample_variance<T: Float>(points: &[T], mean: &T) -> Result<T, SimulationError>
where
    f64: Into<T>,
{
    Ok(points
        .iter()
        .fold(0.0.into(), |acc, point| acc + (*point - *mean).powi(2))
        / usize_to_float(points.len())?)
}

/// This function converts a usize to a Float, with an associated
/// `SimulationError` returned for failed conversions
fn usize_to_float<T: Float>(unconv: usize) -> Result<T, SimulationError> {
    T::from(unconv).ok_or(SimulationError::FloatConvError)
}

/// The replication sample is for independent, identically-distributed (IID)
/// samples, such as the mean waits of replicated election days.  There are
/// no additional requirements on the data beyond being IID - in particular,
/// there are no normality assumptions, which is why the median is the
/// preferred summary statistic for skewed queueing outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationSample<T> {
    points: Vec<T>,
    mean: T,
    variance: T,
}

impl<T: Float> ReplicationSample<T>
where
    f64: Into<T>,
{
    /// This constructor method creates a `ReplicationSample` from a vector
    /// of floating point values.  At least one point is required.
    pub fn post(points: Vec<T>) -> Result<ReplicationSample<T>, SimulationError> {
        if points.is_empty() {
            return Err(SimulationError::EmptySample);
        }
        let mean = sample_mean(&points)?;
        let variance = sample_variance(&points, &mean)?;
        Ok(ReplicationSample {
            points,
            mean,
            variance,
        })
    }

    /// Return the sample median, taken as the point at index `n / 2` of the
    /// ascending sort - for an even point count, the upper of the two middle
    /// points.  The median is robust against the long upper tail of queueing
    /// waits, where a few badly congested replications would drag a mean.
    pub fn median(&self) -> T {
        let mut sorted = self.points.clone();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted[sorted.len() / 2]
    }

    /// Return the sample mean.
    pub fn point_estimate_mean(&self) -> T {
        self.mean
    }

    /// Return the sample variance.
    pub fn variance(&self) -> T {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epsilon() -> f64 {
        1.0e-12
    }

    #[test]
    fn median_of_odd_count_sample() {
        let sample = ReplicationSample::post(vec![5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert!((sample.median() - 3.0).abs() < epsilon());
    }

    #[test]
    fn median_of_even_count_sample_takes_upper_middle() {
        let sample = ReplicationSample::post(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((sample.median() - 3.0).abs() < epsilon());
    }

    #[test]
    fn mean_and_variance_of_sample() {
        let sample = ReplicationSample::post(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((sample.point_estimate_mean() - 2.5).abs() < epsilon());
        assert!((sample.variance() - 1.25).abs() < epsilon());
    }

    #[test]
    fn empty_samples_are_rejected() {
        let sample: Result<ReplicationSample<f64>, SimulationError> =
            ReplicationSample::post(Vec::new());
        assert![matches!(sample, Err(SimulationError::EmptySample))];
    }
}
