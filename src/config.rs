//! Command-line configuration.
use crate::core::RemainderPolicy;

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Estimate Pi with Monte Carlo trials, once sequentially and once on worker threads.
#[derive(Clone, Debug, Parser)]
#[command(name = "mcpi", version, about)]
pub struct Config {
    /// Total number of trials of each run
    #[arg(default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub trials: u64,

    /// Number of worker threads of the parallel run
    #[arg(
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub workers: usize,

    /// Which worker receives the trials left over by an uneven split: 'workers' or 'batch'
    #[arg(long, default_value_t = RemainderPolicy::Workers)]
    pub remainder: RemainderPolicy,

    /// Seed of the random number generator, seeded by the operating system if missing
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// Create the random number generator all runs draw from.
    pub fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        }
    }
}
