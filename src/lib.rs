#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcpi` estimates $\pi$ with the [Monte Carlo method]: points are sampled uniformly
//! in the unit square, and the fraction of them inside the quarter of the unit circle,
//! $N_\mathrm{in} / N$, approaches $\pi / 4$.
//!
//! # Features
//!
//! - **Two estimators**. The [sequential](samplers::sequential) estimator performs all trials on
//! the calling thread, the [parallel](samplers::parallel) estimator splits them across a fixed
//! number of freshly spawned worker threads and adds up their hits once each worker is joined.
//! Both produce a [`SampleResult`](core::estimators::SampleResult).
//! - **Generic random number generator**. Every random number generator that implements the `Rng`
//! trait from the `rand` crate can be used. Each parallel worker owns a generator seeded from the
//! one passed in, so seeded runs are reproducible for a fixed number of workers.
//! - **Generic trials**. A trial is anything implementing [`Trial`](core::Trial);
//! [`QuarterCircle`](core::QuarterCircle) is the one estimating $\pi$.
//! - **Failing workers**. A worker thread that panics contributes no hits, the run still
//! completes and the failure is logged.
//!
//! # What is ...?
//!
//! - a *trial* is a single random point $(x, y)$ tested against the unit circle,
//! - the *estimate* is $4 N_\mathrm{in} / N$,
//! - a *worker* is a thread performing a part of the trials,
//! - the *batch* is the number of trials per worker before the remainder of an uneven split is
//! added to the last worker, see [`RemainderPolicy`](core::RemainderPolicy).
//!
//! [Monte Carlo method]: https://en.wikipedia.org/wiki/Monte_Carlo_method

pub mod callbacks;
pub mod config;
pub mod core;
pub mod error;
pub mod samplers;
pub mod timing;

pub use crate::core::*;
