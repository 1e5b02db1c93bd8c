//! Parallel estimator, splitting the trials across a fixed number of worker threads.
use crate::core::estimators::{Estimators, SampleResult};
use crate::core::{count_inside, partition, RemainderPolicy, Trial};
use crate::error::{Error, Result};

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crossbeam as cb;

/// What a single worker contributed to a parallel run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WorkerReport {
    worker: usize,
    assigned: u64,
    inside: Option<u64>,
}

impl WorkerReport {
    /// Returns the zero-based index of the worker.
    pub const fn worker(&self) -> usize {
        self.worker
    }

    /// Returns the number of trials the worker was assigned.
    pub const fn assigned(&self) -> u64 {
        self.assigned
    }

    /// Returns the number of hits of the worker, or `None` if the worker did not finish.
    pub const fn inside(&self) -> Option<u64> {
        self.inside
    }

    /// Returns `true` if the worker performed all of its trials.
    pub const fn completed(&self) -> bool {
        self.inside.is_some()
    }
}

/// Returns the name of the thread running the worker with index `worker`.
pub fn worker_name(worker: usize) -> String {
    format!("point generator #{}", worker)
}

/// Perform `trials` trials of `trial` on `workers` freshly spawned threads and report what each
/// worker contributed, in worker order.
///
/// The trials are split according to `policy`, see [`partition`]. Every worker gets its own
/// random number generator, seeded from `rng`. A worker that panics is reported with no hits.
///
/// # Errors
///
/// Fails if the trials cannot be partitioned, if a worker generator cannot be seeded or if a
/// worker thread cannot be spawned.
pub fn run_workers<T, R, I>(
    trial: &I,
    rng: &mut R,
    trials: u64,
    workers: usize,
    policy: RemainderPolicy,
) -> Result<Vec<WorkerReport>>
where
    I: Trial<T>,
    T: Float,
    R: Rng + SeedableRng + Send,
    Standard: Distribution<T>,
{
    let assignments = partition(trials, workers, policy)?;

    // seed the generators in worker order so that seeded runs are reproducible
    let rngs = assignments
        .iter()
        .map(|_| R::from_rng(&mut *rng))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    cb::thread::scope(|s| -> Result<Vec<WorkerReport>> {
        let mut handles = Vec::with_capacity(workers);

        for (worker, (assigned, mut rng_local)) in assignments.into_iter().zip(rngs).enumerate() {
            log::debug!("spawning worker {} with {} trials", worker, assigned);

            let handle = s
                .builder()
                .name(worker_name(worker))
                .spawn(move |_| count_inside(trial, &mut rng_local, assigned))?;

            handles.push((worker, assigned, handle));
        }

        // wait for the workers in index order, which is not necessarily the order they finish in
        Ok(handles
            .into_iter()
            .map(|(worker, assigned, handle)| {
                let inside = match handle.join() {
                    Ok(inside) => {
                        log::debug!("worker {} finished with {} hits", worker, inside);
                        Some(inside)
                    }
                    Err(_) => {
                        log::error!(
                            "worker {} did not finish, dropping its {} trials",
                            worker,
                            assigned
                        );
                        None
                    }
                };

                WorkerReport {
                    worker,
                    assigned,
                    inside,
                }
            })
            .collect())
    })
    .map_err(|_| Error::WorkerScope)?
}

/// Combine the hits of all finished workers into an estimate normalized to `trials`.
///
/// Workers that did not finish contribute no hits; their trials count as misses.
pub fn aggregate(reports: &[WorkerReport], trials: u64) -> SampleResult {
    let inside = reports.iter().filter_map(WorkerReport::inside).sum();

    SampleResult::from_counts(inside, trials)
}

/// Estimate $\pi$ by performing `trials` trials of `trial` on `workers` threads.
///
/// # Errors
///
/// Fails for the same reasons as [`run_workers`].
pub fn estimate<T, R, I>(
    trial: &I,
    rng: &mut R,
    trials: u64,
    workers: usize,
    policy: RemainderPolicy,
) -> Result<SampleResult>
where
    I: Trial<T>,
    T: Float,
    R: Rng + SeedableRng + Send,
    Standard: Distribution<T>,
{
    log::info!(
        "parallel run with {} trials on {} workers started",
        trials,
        workers
    );

    let reports = run_workers(trial, rng, trials, workers, policy)?;
    let result = aggregate(&reports, trials);

    log::info!(
        "parallel run finished with {} hits, {} of {} workers completed",
        result.inside(),
        reports.iter().filter(|r| r.completed()).count(),
        workers
    );

    Ok(result)
}
