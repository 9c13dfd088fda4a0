//! Fit classification.
//!
//! Responsibilities:
//!
//! - band a student's score against a school's 25th–75th percentile range
//! - fall back to the admission rate when no score band applies

pub mod classify;

pub use classify::*;
