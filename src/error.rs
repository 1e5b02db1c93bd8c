//! Error types.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can prevent an estimation run from producing a result.
///
/// A worker that panics is *not* an error: its contribution is dropped and the run completes.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested number of trials was zero.
    #[error("the number of trials must be positive")]
    ZeroTrials,

    /// The requested number of workers was zero.
    #[error("the number of workers must be positive")]
    ZeroWorkers,

    /// Batch remainders need at least one trial per worker.
    #[error("{trials} trials cannot be split into batches for {workers} workers")]
    EmptyBatch {
        /// Requested number of trials.
        trials: u64,
        /// Requested number of workers.
        workers: usize,
    },

    /// An unrecognized remainder policy name.
    #[error("unknown remainder policy '{0}', expected 'workers' or 'batch'")]
    UnknownRemainderPolicy(String),

    /// Seeding a worker's random number generator failed.
    #[error("failed to seed worker generator: {0}")]
    Rng(#[from] rand::Error),

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A worker thread panicked without being joined.
    #[error("worker scope terminated with an unjoined panicking thread")]
    WorkerScope,
}
