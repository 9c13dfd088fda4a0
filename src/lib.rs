//! admit-fit library crate.
//!
//! Keeping the logic in a library (with a thin `main.rs`) means:
//!
//! - unit tests can exercise the classifier and normalization directly,
//!   without spawning processes or talking to the network
//! - the stats resolver and fit classifier stay reusable if we ever grow
//!   another front end

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod report;
