//! Command-line parsing for the college-fit advisor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the resolver/classifier code.

use clap::{Parser, Subcommand};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "admit", version, about = "College-fit advisor (College Scorecard-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect a student profile interactively and classify the chosen college.
    Advise,
    /// Print a school's admissions statistics without profile prompts.
    Lookup(LookupArgs),
}

/// Options for a one-shot stats lookup.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// School name to search for (multiple words are joined with spaces).
    #[arg(required = true)]
    pub name: Vec<String>,
}
