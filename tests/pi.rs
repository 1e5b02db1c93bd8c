use mcpi::callbacks::SinkCallback;
use mcpi::core::estimators::*;
use mcpi::core::*;
use mcpi::samplers::{parallel, sequential};
use mcpi::timing::run_with_timing;

use assert_approx_eq::assert_approx_eq;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::Serialize;
use std::f64::consts::PI;

fn assert_eq_rng<R>(lhs: &R, rhs: &R)
where
    R: Rng + Serialize,
{
    assert_eq!(
        serde_json::to_string(lhs).unwrap(),
        serde_json::to_string(rhs).unwrap()
    );
}

/// A trial in three dimensions: the eighth of the unit ball, which is hit with probability
/// pi/6.
struct EighthBall;

impl Trial<f64> for EighthBall {
    fn call(&self, x: &[f64]) -> bool {
        x.iter().map(|v| v * v).sum::<f64>() <= 1.0
    }

    fn dim(&self) -> usize {
        3
    }
}

#[test]
fn sequential_and_parallel_runs() {
    // TOLERANCE in units of pi, far outside of the statistical fluctuations
    const TOLERANCE: f64 = 0.05;
    // The number of trials of each run
    const TRIALS: u64 = 100_000;

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let callback = SinkCallback {};

    let sequential = run_with_timing("sequential", &callback, || {
        sequential::estimate::<f64, _, _>(&QuarterCircle, &mut rng, TRIALS)
    })
    .unwrap();

    assert_eq!(sequential.label(), "sequential");
    assert_eq!(sequential.result().trials(), TRIALS);
    assert_approx_eq!(sequential.result().estimate(), PI, TOLERANCE);

    for workers in 1..=6 {
        let parallel = run_with_timing("parallel", &callback, || {
            parallel::estimate::<f64, _, _>(
                &QuarterCircle,
                &mut rng,
                TRIALS,
                workers,
                RemainderPolicy::Workers,
            )
        })
        .unwrap();

        assert_eq!(parallel.result().trials(), TRIALS);
        assert_approx_eq!(parallel.result().estimate(), PI, TOLERANCE);
        // the estimate is far more precise than its own error estimate suggests otherwise
        assert!(parallel.result().std() < TOLERANCE);
    }
}

#[test]
fn idempotent_sequential_runs() {
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let first = sequential::estimate::<f64, _, _>(&QuarterCircle, &mut rng, 1_000).unwrap();
    let second = sequential::estimate::<f64, _, _>(&QuarterCircle, &mut rng, 1_000).unwrap();

    for result in &[first, second] {
        assert_eq!(result.inside() + result.outside(), 1_000);
        assert!(result.estimate() >= 0.0 && result.estimate() <= 4.0);
    }
}

#[test]
fn parallel_run_advances_rng_once_per_worker() {
    const WORKERS: usize = 4;

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let mut target = rng.clone();

    let _ = parallel::estimate::<f64, _, _>(
        &QuarterCircle,
        &mut rng,
        1_000,
        WORKERS,
        RemainderPolicy::Workers,
    )
    .unwrap();

    // every worker generator is seeded from the same number of bytes of the caller's generator
    for _ in 0..WORKERS {
        let _: Pcg64 = rand::SeedableRng::from_rng(&mut target).unwrap();
    }
    assert_eq_rng(&rng, &target);
}

#[test]
fn higher_dimensional_trial() {
    const TOLERANCE: f64 = 0.05;
    const TRIALS: u64 = 60_000;

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    // the estimators know nothing about the geometry, so this estimates 4 * pi / 6
    let result =
        parallel::estimate::<f64, _, _>(&EighthBall, &mut rng, TRIALS, 3, RemainderPolicy::Batch)
            .unwrap();

    assert_eq!(result.trials(), TRIALS);
    assert_approx_eq!(result.estimate(), 4.0 * PI / 6.0, TOLERANCE);
}

#[test]
fn single_precision_trials() {
    const TOLERANCE: f64 = 0.05;

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let result = sequential::estimate::<f32, _, _>(&QuarterCircle, &mut rng, 100_000).unwrap();

    assert_approx_eq!(result.estimate(), PI, TOLERANCE);
}

#[test]
fn result_serialization() {
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let reports =
        parallel::run_workers::<f64, _, _>(&QuarterCircle, &mut rng, 10, 3, RemainderPolicy::Batch)
            .unwrap();
    let result = parallel::aggregate(&reports, 10);

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(serde_json::from_str::<SampleResult>(&json).unwrap(), result);

    let json = serde_json::to_string(&reports).unwrap();
    assert_eq!(
        serde_json::from_str::<Vec<parallel::WorkerReport>>(&json).unwrap(),
        reports
    );
}
