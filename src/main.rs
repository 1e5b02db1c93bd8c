use clap::Parser;

use mcpi::callbacks::SimpleCallback;
use mcpi::config::Config;
use mcpi::core::QuarterCircle;
use mcpi::error::Result;
use mcpi::samplers::{parallel, sequential};
use mcpi::timing::run_with_timing;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let callback = SimpleCallback {};
    let mut rng = config.rng();

    println!("trials = {}", config.trials);
    println!("workers = {}", config.workers);
    println!("remainder = {}", config.remainder);

    run_with_timing("sequential", &callback, || {
        sequential::estimate::<f64, _, _>(&QuarterCircle, &mut rng, config.trials)
    })?;

    let label = format!("parallel ({} workers)", config.workers);
    run_with_timing(&label, &callback, || {
        parallel::estimate::<f64, _, _>(
            &QuarterCircle,
            &mut rng,
            config.trials,
            config.workers,
            config.remainder,
        )
    })?;

    Ok(())
}
