//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built from terminal prompts or API responses
//! - passed by value through the classifier
//! - asserted on directly in unit tests

/// An inclusive 25th–75th percentile score band.
///
/// A range only exists when **both** bounds are published; a school reporting a
/// single bound yields no range at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub lower: u32,
    pub upper: u32,
}

impl ScoreRange {
    /// Build a range from optional bounds. `None` if either bound is missing.
    pub fn from_bounds(lower: Option<u32>, upper: Option<u32>) -> Option<Self> {
        Some(Self {
            lower: lower?,
            upper: upper?,
        })
    }
}

/// Admissions statistics for one school, as resolved from the Scorecard API.
///
/// Every statistic is optional: schools publish different subsets, and an
/// unresolved lookup (no match, network failure) yields a value with all
/// statistics absent so the advising flow can still finish.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStats {
    /// Matched school name (falls back to the query string when unresolved).
    pub school_name: String,
    /// Overall admission rate as a fraction in `[0, 1]`.
    pub admission_rate: Option<f64>,
    /// Combined SAT (math + critical reading) 25th–75th percentile band.
    pub sat_range: Option<ScoreRange>,
    /// Cumulative ACT 25th–75th percentile band.
    pub act_range: Option<ScoreRange>,
    /// Overall SAT average (reported but not used by the classifier).
    pub sat_average: Option<u32>,
    /// Cumulative ACT midpoint (reported but not used by the classifier).
    pub act_midpoint: Option<u32>,
}

impl SchoolStats {
    /// Stats value for a school that could not be resolved.
    pub fn unresolved(query: &str) -> Self {
        Self {
            school_name: query.to_string(),
            admission_rate: None,
            sat_range: None,
            act_range: None,
            sat_average: None,
            act_midpoint: None,
        }
    }
}

/// Which standardized test score(s) the student is submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestChoice {
    SatOnly,
    ActOnly,
    Both,
}

impl TestChoice {
    pub fn includes_sat(self) -> bool {
        matches!(self, TestChoice::SatOnly | TestChoice::Both)
    }

    pub fn includes_act(self) -> bool {
        matches!(self, TestChoice::ActOnly | TestChoice::Both)
    }
}

/// Fit classification for a student/school pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitLabel {
    /// Score at or above the school's 75th percentile.
    Safety,
    /// Score at or above the 25th percentile (but below the 75th).
    Target,
    /// Score below the 25th percentile.
    Reach,
    /// No usable score band; admission rate below 20%.
    LikelyReach,
    /// No usable score band and no (or high) admission rate.
    Uncertain,
}

impl FitLabel {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FitLabel::Safety => "Safety",
            FitLabel::Target => "Target",
            FitLabel::Reach => "Reach",
            FitLabel::LikelyReach => "Likely Reach",
            FitLabel::Uncertain => "Uncertain",
        }
    }
}

/// Everything we collect about the student before advising.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub gpa: f64,
    pub test_choice: TestChoice,
    /// Combined SAT score, collected only when `test_choice` includes SAT.
    pub sat_score: Option<u32>,
    /// Cumulative ACT score, collected only when `test_choice` includes ACT.
    pub act_score: Option<u32>,
    pub activities: u32,
    pub leadership: u32,
    pub awards: u32,
}

impl StudentProfile {
    /// Weighted extracurricular involvement score.
    ///
    /// Leadership roles count double and awards triple, relative to plain
    /// activity memberships.
    pub fn extracurricular_score(&self) -> u32 {
        self.activities + 2 * self.leadership + 3 * self.awards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_range_requires_both_bounds() {
        assert_eq!(
            ScoreRange::from_bounds(Some(1300), Some(1450)),
            Some(ScoreRange {
                lower: 1300,
                upper: 1450
            })
        );
        assert_eq!(ScoreRange::from_bounds(Some(1300), None), None);
        assert_eq!(ScoreRange::from_bounds(None, Some(1450)), None);
        assert_eq!(ScoreRange::from_bounds(None, None), None);
    }

    #[test]
    fn extracurricular_score_weights() {
        let profile = StudentProfile {
            gpa: 3.8,
            test_choice: TestChoice::SatOnly,
            sat_score: Some(1400),
            act_score: None,
            activities: 4,
            leadership: 2,
            awards: 1,
        };
        // 4 + 2*2 + 3*1
        assert_eq!(profile.extracurricular_score(), 11);
    }

    #[test]
    fn test_choice_coverage() {
        assert!(TestChoice::SatOnly.includes_sat());
        assert!(!TestChoice::SatOnly.includes_act());
        assert!(TestChoice::Both.includes_sat());
        assert!(TestChoice::Both.includes_act());
    }
}
