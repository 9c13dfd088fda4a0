//! Fit classification rules.
//!
//! Classification tries score bands first, then the admission-rate fallback:
//! 1. SAT band, when the student submits SAT and the school publishes a range
//! 2. ACT band, same conditions
//! 3. Admission rate below 20% reads "Likely Reach", anything else "Uncertain"
//!
//! Banding is inclusive at both thresholds: a score exactly at the 75th
//! percentile is a Safety, exactly at the 25th a Target.

use crate::domain::{FitLabel, SchoolStats, ScoreRange, TestChoice};

/// Admission rate below which a school without usable score bands is
/// considered a likely reach.
const LIKELY_REACH_RATE: f64 = 0.20;

/// Classify how a student's scores compare to a school's admitted range.
///
/// Each rule only fires when both sides participate: the student must submit
/// the test and the school must publish the band. A submitted-but-missing
/// score simply falls through to the next rule.
pub fn classify(
    stats: &SchoolStats,
    sat_score: Option<u32>,
    act_score: Option<u32>,
    choice: TestChoice,
) -> FitLabel {
    if choice.includes_sat() {
        if let (Some(range), Some(score)) = (stats.sat_range, sat_score) {
            return band(score, range);
        }
    }

    if choice.includes_act() {
        if let (Some(range), Some(score)) = (stats.act_range, act_score) {
            return band(score, range);
        }
    }

    match stats.admission_rate {
        Some(rate) if rate < LIKELY_REACH_RATE => FitLabel::LikelyReach,
        _ => FitLabel::Uncertain,
    }
}

fn band(score: u32, range: ScoreRange) -> FitLabel {
    if score >= range.upper {
        FitLabel::Safety
    } else if score >= range.lower {
        FitLabel::Target
    } else {
        FitLabel::Reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(
        sat_range: Option<ScoreRange>,
        act_range: Option<ScoreRange>,
        admission_rate: Option<f64>,
    ) -> SchoolStats {
        SchoolStats {
            school_name: "Test University".to_string(),
            admission_rate,
            sat_range,
            act_range,
            sat_average: None,
            act_midpoint: None,
        }
    }

    fn range(lower: u32, upper: u32) -> Option<ScoreRange> {
        Some(ScoreRange { lower, upper })
    }

    #[test]
    fn sat_band_boundaries_are_inclusive() {
        let stats = stats_with(range(1300, 1450), None, Some(0.5));

        let at = |score| classify(&stats, Some(score), None, TestChoice::SatOnly);
        assert_eq!(at(1450), FitLabel::Safety);
        assert_eq!(at(1500), FitLabel::Safety);
        assert_eq!(at(1449), FitLabel::Target);
        assert_eq!(at(1400), FitLabel::Target);
        assert_eq!(at(1300), FitLabel::Target);
        assert_eq!(at(1299), FitLabel::Reach);
    }

    #[test]
    fn act_band_boundaries_are_inclusive() {
        let stats = stats_with(None, range(28, 33), Some(0.5));

        let at = |score| classify(&stats, None, Some(score), TestChoice::ActOnly);
        assert_eq!(at(33), FitLabel::Safety);
        assert_eq!(at(28), FitLabel::Target);
        assert_eq!(at(27), FitLabel::Reach);
    }

    #[test]
    fn both_prefers_sat_when_available() {
        // SAT says Safety, ACT would say Reach: SAT wins.
        let stats = stats_with(range(1200, 1350), range(30, 34), Some(0.5));
        let label = classify(&stats, Some(1400), Some(25), TestChoice::Both);
        assert_eq!(label, FitLabel::Safety);
    }

    #[test]
    fn both_falls_to_act_when_sat_range_missing() {
        let stats = stats_with(None, range(28, 33), Some(0.5));
        let label = classify(&stats, Some(1400), Some(30), TestChoice::Both);
        assert_eq!(label, FitLabel::Target);
    }

    #[test]
    fn sat_only_ignores_act_range() {
        // The school only publishes ACT; a SAT-only student gets the fallback.
        let stats = stats_with(None, range(28, 33), Some(0.10));
        let label = classify(&stats, Some(1400), None, TestChoice::SatOnly);
        assert_eq!(label, FitLabel::LikelyReach);
    }

    #[test]
    fn missing_score_falls_through_to_fallback() {
        // Student claims SAT but no score was collected.
        let stats = stats_with(range(1300, 1450), None, Some(0.5));
        let label = classify(&stats, None, None, TestChoice::SatOnly);
        assert_eq!(label, FitLabel::Uncertain);
    }

    #[test]
    fn fallback_thresholds() {
        let at_rate = |rate| {
            let stats = stats_with(None, None, rate);
            classify(&stats, Some(1400), Some(30), TestChoice::Both)
        };
        assert_eq!(at_rate(Some(0.19)), FitLabel::LikelyReach);
        assert_eq!(at_rate(Some(0.05)), FitLabel::LikelyReach);
        assert_eq!(at_rate(Some(0.0)), FitLabel::LikelyReach);
        // Exactly 20% is not below the threshold.
        assert_eq!(at_rate(Some(0.20)), FitLabel::Uncertain);
        assert_eq!(at_rate(Some(0.75)), FitLabel::Uncertain);
        assert_eq!(at_rate(None), FitLabel::Uncertain);
    }

    #[test]
    fn unresolved_school_is_uncertain() {
        let stats = SchoolStats::unresolved("nowhere college");
        let label = classify(&stats, Some(1500), Some(35), TestChoice::Both);
        assert_eq!(label, FitLabel::Uncertain);
    }
}
