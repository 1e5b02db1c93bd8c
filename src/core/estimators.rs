//! This module contains everything related to estimators.
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators<T: Float> {
    /// Returns the mean value.
    fn mean(&self) -> T;

    /// Returns the variance, $V$.
    fn var(&self) -> T;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// More estimators.
pub trait Estimators<T: Float>: BasicEstimators<T> {
    /// Returns the number of trials, $N$, the estimate is normalized to.
    fn trials(&self) -> u64;

    /// Returns the number of trials that were hits.
    fn inside(&self) -> u64;

    /// Returns the number of trials that were misses, $N$ minus the hits.
    fn outside(&self) -> u64;
}

/// The result of an estimation run of $\pi$.
///
/// Every trial contributes the value $4$ if it was a hit and $0$ otherwise, so that the mean of
/// these values is the estimate $4 N_\mathrm{in} / N$.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SampleResult {
    estimate: f64,
    inside: u64,
    outside: u64,
}

impl SampleResult {
    /// Create a result from the number of hits `inside` out of `trials` trials.
    ///
    /// `trials` must be non-zero and not smaller than `inside`.
    pub fn from_counts(inside: u64, trials: u64) -> Self {
        debug_assert!(trials > 0);
        debug_assert!(inside <= trials);

        Self {
            estimate: 4.0 * inside as f64 / trials as f64,
            inside,
            outside: trials - inside,
        }
    }

    /// Returns the estimate of $\pi$.
    pub const fn estimate(&self) -> f64 {
        self.estimate
    }
}

impl BasicEstimators<f64> for SampleResult {
    fn mean(&self) -> f64 {
        self.estimate
    }

    fn var(&self) -> f64 {
        let calls = self.trials() as f64;
        let sum = 4.0 * self.inside as f64;
        let sumsq = 16.0 * self.inside as f64;

        (sumsq - sum * sum / calls) / calls / (calls - 1.0)
    }
}

impl Estimators<f64> for SampleResult {
    fn trials(&self) -> u64 {
        self.inside + self.outside
    }

    fn inside(&self) -> u64 {
        self.inside
    }

    fn outside(&self) -> u64 {
        self.outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_from_counts() {
        let result = SampleResult::from_counts(3, 4);

        assert_eq!(result.estimate(), 3.0);
        assert_eq!(result.inside(), 3);
        assert_eq!(result.outside(), 1);
        assert_eq!(result.trials(), 4);
        assert_eq!(result.mean(), result.estimate());
    }

    #[test]
    fn test_var() {
        // two hits out of four: 16 * p * (1 - p) / (N - 1)
        let result = SampleResult::from_counts(2, 4);
        assert_approx_eq!(result.var(), 4.0 / 3.0);
        assert_approx_eq!(result.std(), (4.0_f64 / 3.0).sqrt());

        // no fluctuations without misses or without hits
        assert_eq!(SampleResult::from_counts(10, 10).var(), 0.0);
        assert_eq!(SampleResult::from_counts(0, 10).var(), 0.0);
    }

    #[test]
    fn test_var_single_trial() {
        assert!(!SampleResult::from_counts(1, 1).var().is_finite());
    }

    #[test]
    fn test_estimate_bounds() {
        for inside in 0..=7 {
            let result = SampleResult::from_counts(inside, 7);
            assert!(result.estimate() >= 0.0 && result.estimate() <= 4.0);
            assert_eq!(result.inside() + result.outside(), 7);
        }
    }
}
