//! The sequential and the parallel estimator.
pub mod parallel;
pub mod sequential;
