//! Domain types used throughout the advising flow.
//!
//! This module defines:
//!
//! - resolved school statistics (`SchoolStats`, `ScoreRange`)
//! - student inputs (`StudentProfile`, `TestChoice`)
//! - classification output (`FitLabel`)

pub mod types;

pub use types::*;
