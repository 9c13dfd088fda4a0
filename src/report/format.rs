//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the resolver and classifier stay clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{FitLabel, SchoolStats, ScoreRange};

/// Format the resolved school statistics block.
///
/// The acceptance-rate line is omitted entirely when the rate is unknown;
/// score ranges always print, with `N/A` standing in for a missing band.
pub fn format_school_summary(stats: &SchoolStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Matched school: {}\n", stats.school_name));

    if let Some(rate) = stats.admission_rate {
        out.push_str(&format!("Acceptance rate: {:.2}%\n", rate * 100.0));
    }

    out.push_str(&format!("SAT 25–75: {}\n", fmt_range(stats.sat_range)));
    out.push_str(&format!("ACT 25–75: {}\n", fmt_range(stats.act_range)));

    out
}

/// Format the final classification line.
pub fn format_result(label: FitLabel) -> String {
    format!("Result: {}", label.display_name())
}

fn fmt_range(range: Option<ScoreRange>) -> String {
    match range {
        Some(r) => format!("{} – {}", r.lower, r.upper),
        None => "N/A".to_string(),
    }
}
