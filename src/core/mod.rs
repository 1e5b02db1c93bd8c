//! The core module
pub mod estimators;

use crate::error::{Error, Result};
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait which every trial must implement.
pub trait Trial<T: Copy>: Send + Sync {
    /// Perform the trial with the point `x` on the unit hypercube, which has as many uniform
    /// random numbers as specified by `dim()`. Returns `true` if the point was a hit.
    fn call(&self, x: &[T]) -> bool;

    /// Returns how many random numbers are needed by the trial.
    fn dim(&self) -> usize;
}

/// The quarter of the unit circle inscribed in the unit square.
///
/// A point $(x, y)$ is a hit if its Euclidean distance from the origin is at most one, which
/// happens with probability $\pi/4$.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuarterCircle;

impl<T: Float> Trial<T> for QuarterCircle {
    fn call(&self, x: &[T]) -> bool {
        x[0].hypot(x[1]) <= T::one()
    }

    fn dim(&self) -> usize {
        2
    }
}

/// Draw a fresh point into `x` and perform a single `trial` with it.
pub fn sample<T, R, I>(trial: &I, rng: &mut R, x: &mut [T]) -> bool
where
    I: Trial<T>,
    T: Copy,
    R: Rng,
    Standard: Distribution<T>,
{
    x.iter_mut().for_each(|v| *v = rng.gen());
    trial.call(x)
}

/// Perform `trials` trials and return how many of them were hits.
pub(crate) fn count_inside<T, R, I>(trial: &I, rng: &mut R, trials: u64) -> u64
where
    I: Trial<T>,
    T: Float,
    R: Rng,
    Standard: Distribution<T>,
{
    // a single buffer for the sampled point, so we do not allocate in every trial
    let mut x = vec![T::zero(); trial.dim()];

    (0..trials).fold(0, |inside, _| {
        if sample(trial, rng, &mut x) {
            inside + 1
        } else {
            inside
        }
    })
}

/// How the trials left over by the integer division `trials / workers` are assigned.
///
/// In both cases every worker but the last receives `batch = trials / workers` trials; the
/// policies only differ in what the last worker receives on top of `batch`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RemainderPolicy {
    /// The last worker receives `batch + trials % workers`, so that all assignments sum up to
    /// `trials` exactly.
    Workers,
    /// The last worker receives `batch + trials % batch`. This reproduces the partitioning of the
    /// program this crate grew out of. The assignments sum up to `trials` only if
    /// `trials / batch == workers`; otherwise fewer trials are performed, but the estimate is
    /// still normalized by `trials`.
    Batch,
}

impl Default for RemainderPolicy {
    fn default() -> Self {
        Self::Workers
    }
}

impl fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workers => f.write_str("workers"),
            Self::Batch => f.write_str("batch"),
        }
    }
}

impl FromStr for RemainderPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "workers" => Ok(Self::Workers),
            "batch" => Ok(Self::Batch),
            _ => Err(Error::UnknownRemainderPolicy(s.to_string())),
        }
    }
}

/// Compute the number of trials of the worker with index `worker` (zero-based), given the total
/// number of workers `workers`, the total number of trials `trials` to perform combined on all
/// workers and the `policy` for the remainder.
///
/// # Errors
///
/// Fails if `trials` or `workers` is zero, or if `policy` is [`RemainderPolicy::Batch`] and there
/// are fewer trials than workers.
pub fn compute_trials_for_worker(
    worker: usize,
    workers: usize,
    trials: u64,
    policy: RemainderPolicy,
) -> Result<u64> {
    if trials == 0 {
        return Err(Error::ZeroTrials);
    }

    if workers == 0 {
        return Err(Error::ZeroWorkers);
    }

    // make sure passed data is valid
    debug_assert!(worker < workers);

    let workers_u64 = workers as u64;
    let batch = trials / workers_u64;

    // only the last worker gets the leftover trials
    if worker + 1 != workers {
        return Ok(batch);
    }

    match policy {
        RemainderPolicy::Workers => Ok(batch + trials % workers_u64),
        RemainderPolicy::Batch if batch == 0 => Err(Error::EmptyBatch { trials, workers }),
        RemainderPolicy::Batch => Ok(batch + trials % batch),
    }
}

/// Split `trials` across `workers` workers, see [`compute_trials_for_worker`].
///
/// # Errors
///
/// Fails for the same reasons as [`compute_trials_for_worker`].
pub fn partition(trials: u64, workers: usize, policy: RemainderPolicy) -> Result<Vec<u64>> {
    if workers == 0 {
        return Err(Error::ZeroWorkers);
    }

    (0..workers)
        .map(|worker| compute_trials_for_worker(worker, workers, trials, policy))
        .collect()
}
