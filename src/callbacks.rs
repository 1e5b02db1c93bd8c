//! Implementation of different callback functions.
use crate::core::estimators::{BasicEstimators, Estimators};
use crate::timing::TimedRun;

/// Trait for implementing callbacks for timed estimation runs
pub trait Callback {
    /// This method is called after each successfully finished run and may print information
    /// about it.
    fn print(&self, run: &TimedRun);
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl Callback for SinkCallback {
    fn print(&self, _: &TimedRun) {}
}

/// A callback function that prints a report of each run to standard output
pub struct SimpleCallback {}

impl Callback for SimpleCallback {
    fn print(&self, run: &TimedRun) {
        println!("\n{}", format_report(run));
    }
}

/// Render the human-readable report of `run`: its label, the elapsed seconds, the estimate with
/// its standard deviation and the numbers of hits and misses.
pub fn format_report(run: &TimedRun) -> String {
    let result = run.result();

    format!(
        "{}\nelapsed = {} s\npi_approx = {} \u{b1} {}\nIn = {}\nOut = {}",
        run.label(),
        run.elapsed().as_secs_f64(),
        result.estimate(),
        result.std(),
        result.inside(),
        result.outside()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimators::SampleResult;
    use std::time::Duration;

    #[test]
    fn test_format_report() {
        let run = TimedRun::new(
            "sequential",
            Duration::from_millis(1500),
            SampleResult::from_counts(10, 10),
        );

        assert_eq!(
            format_report(&run),
            "sequential\nelapsed = 1.5 s\npi_approx = 4 \u{b1} 0\nIn = 10\nOut = 0"
        );
    }

    #[test]
    fn test_format_report_lines() {
        let run = TimedRun::new(
            "parallel",
            Duration::from_millis(250),
            SampleResult::from_counts(3, 4),
        );
        let report = format_report(&run);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "parallel");
        assert_eq!(lines[1], "elapsed = 0.25 s");
        assert!(lines[2].starts_with("pi_approx = 3 \u{b1} "));
        assert_eq!(lines[3], "In = 3");
        assert_eq!(lines[4], "Out = 1");
    }
}
