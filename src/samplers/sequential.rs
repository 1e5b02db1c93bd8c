//! Sequential estimator, performing all trials on the calling thread.
use crate::core::estimators::SampleResult;
use crate::core::{count_inside, Trial};
use crate::error::{Error, Result};

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Estimate $\pi$ by performing `trials` trials of `trial` with the random numbers of `rng`.
///
/// # Errors
///
/// Fails if `trials` is zero.
pub fn estimate<T, R, I>(trial: &I, rng: &mut R, trials: u64) -> Result<SampleResult>
where
    I: Trial<T>,
    T: Float,
    R: Rng,
    Standard: Distribution<T>,
{
    if trials == 0 {
        return Err(Error::ZeroTrials);
    }

    log::info!("sequential run with {} trials started", trials);

    let inside = count_inside(trial, rng, trials);

    log::info!("sequential run finished with {} hits", inside);

    Ok(SampleResult::from_counts(inside, trials))
}
