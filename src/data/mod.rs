//! Data access: College Scorecard API client.

pub mod scorecard;

pub use scorecard::*;
