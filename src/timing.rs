//! Timing of estimation runs.
use crate::callbacks::Callback;
use crate::core::estimators::SampleResult;
use crate::error::Result;

use std::time::{Duration, Instant};

/// A labelled estimation result together with the time it took to compute it.
#[derive(Clone, Debug)]
pub struct TimedRun {
    label: String,
    elapsed: Duration,
    result: SampleResult,
}

impl TimedRun {
    /// Constructor.
    pub fn new(label: &str, elapsed: Duration, result: SampleResult) -> Self {
        Self {
            label: label.to_string(),
            elapsed,
            result,
        }
    }

    /// Returns the label of the run.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the wall-clock time spent in the estimator.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the result of the run.
    pub const fn result(&self) -> &SampleResult {
        &self.result
    }
}

/// Time the estimator `f`, hand the run labelled with `label` to `callback` and return it.
///
/// Only the call of `f` is timed, reporting happens afterwards.
///
/// # Errors
///
/// Returns the error of `f`, in which case `callback` is not called.
pub fn run_with_timing<F>(label: &str, callback: &impl Callback, f: F) -> Result<TimedRun>
where
    F: FnOnce() -> Result<SampleResult>,
{
    let start = Instant::now();
    let result = f()?;
    let elapsed = start.elapsed();

    log::debug!("{} took {:?}", label, elapsed);

    let run = TimedRun::new(label, elapsed, result);
    callback.print(&run);

    Ok(run)
}
