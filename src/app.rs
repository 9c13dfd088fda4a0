//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - collects the student profile and college choice
//! - resolves school stats from the Scorecard API
//! - classifies the fit and prints the report

use clap::Parser;

use crate::cli::{prompt, Command, LookupArgs};
use crate::data::ScorecardClient;
use crate::error::AppError;
use crate::fit::classify;
use crate::report::{format_result, format_school_summary};

/// Entry point for the `admit` binary.
pub fn run() -> Result<(), AppError> {
    // We want `admit` to behave like `admit advise`, and `admit Some College`
    // to behave like `admit lookup Some College`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Advise => handle_advise(),
        Command::Lookup(args) => handle_lookup(args),
    }
}

fn handle_advise() -> Result<(), AppError> {
    let profile = prompt::collect_profile()?;
    let college = prompt::choose_college()?;

    println!("\nFetching stats for {college}...");
    let client = ScorecardClient::from_env();
    let stats = client.fetch_stats(&college);

    println!();
    print!("{}", format_school_summary(&stats));

    let label = classify(
        &stats,
        profile.sat_score,
        profile.act_score,
        profile.test_choice,
    );
    println!("\n{}", format_result(label));

    Ok(())
}

fn handle_lookup(args: LookupArgs) -> Result<(), AppError> {
    let query = args.name.join(" ");

    println!("Fetching stats for {query}...");
    let client = ScorecardClient::from_env();
    let stats = client.fetch_stats(&query);

    println!();
    print!("{}", format_school_summary(&stats));

    Ok(())
}

/// Rewrite argv so `admit` defaults to `admit advise` and a bare school name
/// becomes a lookup.
///
/// Rules:
/// - `admit`                     -> `admit advise`
/// - `admit Stanford University` -> `admit lookup Stanford University`
/// - `admit --help/--version`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("advise".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "advise" | "lookup");
    if is_subcommand {
        return argv;
    }

    // Unknown flags are left for clap to report.
    if arg1.starts_with('-') {
        return argv;
    }

    // A bare school name becomes a lookup query.
    argv.insert(1, "lookup".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(args: &[&str]) -> Vec<String> {
        rewrite_args(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn bare_invocation_defaults_to_advise() {
        assert_eq!(rewrite(&["admit"]), vec!["admit", "advise"]);
    }

    #[test]
    fn bare_school_name_becomes_lookup() {
        assert_eq!(
            rewrite(&["admit", "Stanford", "University"]),
            vec!["admit", "lookup", "Stanford", "University"]
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite(&["admit", "advise"]), vec!["admit", "advise"]);
        assert_eq!(rewrite(&["admit", "--help"]), vec!["admit", "--help"]);
        assert_eq!(rewrite(&["admit", "--version"]), vec!["admit", "--version"]);
    }
}
