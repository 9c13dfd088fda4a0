//! College Scorecard API integration.
//!
//! One name-search request per lookup:
//!
//! - `school.search` matches the query against school names
//! - `fields` trims the response to the admissions statistics we use
//! - `per_page=1` keeps only the best match

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{SchoolStats, ScoreRange};
use crate::error::ResolveError;

const BASE_URL: &str = "https://api.data.gov/ed/collegescorecard/v1/schools";
const API_KEY_VAR: &str = "SCORECARD_API_KEY";

/// Response field selectors, joined into the `fields` query parameter.
const FIELDS: [&str; 10] = [
    "school.name",
    "latest.admissions.admission_rate.overall",
    "latest.admissions.sat_scores.25th_percentile.math",
    "latest.admissions.sat_scores.75th_percentile.math",
    "latest.admissions.sat_scores.25th_percentile.critical_reading",
    "latest.admissions.sat_scores.75th_percentile.critical_reading",
    "latest.admissions.sat_scores.average.overall",
    "latest.admissions.act_scores.25th_percentile.cumulative",
    "latest.admissions.act_scores.75th_percentile.cumulative",
    "latest.admissions.act_scores.midpoint.cumulative",
];

pub struct ScorecardClient {
    client: Client,
    api_key: Option<String>,
}

impl ScorecardClient {
    /// Build a client from the environment (`.env` is honored).
    ///
    /// A missing key is not an error here: it surfaces as
    /// `ResolveError::MissingCredential` on the first lookup, which
    /// `fetch_stats` reports and absorbs like any other resolution failure.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Resolve stats for a school, degrading to an unresolved value on failure.
    ///
    /// Any `ResolveError` is reported on stderr and replaced by
    /// `SchoolStats::unresolved`, so callers always get a value and the
    /// advising flow can fall through to the admission-rate rule.
    pub fn fetch_stats(&self, query: &str) -> SchoolStats {
        match self.try_fetch(query) {
            Ok(stats) => stats,
            Err(err) => {
                eprintln!("{err}");
                SchoolStats::unresolved(query)
            }
        }
    }

    /// Fallible lookup: one API request, parsed and normalized.
    pub fn try_fetch(&self, query: &str) -> Result<SchoolStats, ResolveError> {
        let api_key = self.api_key.as_deref().ok_or(ResolveError::MissingCredential)?;

        let fields = FIELDS.join(",");
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("school.search", query),
                ("fields", fields.as_str()),
                ("per_page", "1"),
                ("api_key", api_key),
            ])
            .send()
            .map_err(|e| ResolveError::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ResolveError::Transport { status, body });
        }

        let body: SearchResponse = resp
            .json()
            .map_err(|e| ResolveError::Upstream(e.to_string()))?;

        let record = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NoMatch {
                query: query.to_string(),
            })?;

        Ok(normalize(record, query))
    }
}

// Wire types mirroring the Scorecard response shape. Every leaf is optional:
// schools publish different subsets, and absent statistics must not fail the
// whole decode.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SchoolRecord>,
}

#[derive(Debug, Deserialize)]
struct SchoolRecord {
    school: Option<SchoolFields>,
    latest: Option<LatestFields>,
}

#[derive(Debug, Deserialize)]
struct SchoolFields {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatestFields {
    admissions: Option<AdmissionsFields>,
}

#[derive(Debug, Deserialize)]
struct AdmissionsFields {
    admission_rate: Option<AdmissionRate>,
    sat_scores: Option<SatScores>,
    act_scores: Option<ActScores>,
}

#[derive(Debug, Deserialize)]
struct AdmissionRate {
    overall: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SatScores {
    #[serde(rename = "25th_percentile")]
    p25: Option<SatSections>,
    #[serde(rename = "75th_percentile")]
    p75: Option<SatSections>,
    average: Option<SatAverage>,
}

#[derive(Debug, Deserialize)]
struct SatSections {
    math: Option<f64>,
    critical_reading: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SatAverage {
    overall: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ActScores {
    #[serde(rename = "25th_percentile")]
    p25: Option<ActSections>,
    #[serde(rename = "75th_percentile")]
    p75: Option<ActSections>,
    midpoint: Option<ActSections>,
}

#[derive(Debug, Deserialize)]
struct ActSections {
    cumulative: Option<f64>,
}

/// Collapse a raw record into `SchoolStats`.
fn normalize(record: SchoolRecord, query: &str) -> SchoolStats {
    let school_name = record
        .school
        .and_then(|s| s.name)
        .unwrap_or_else(|| query.to_string());

    let Some(admissions) = record.latest.and_then(|l| l.admissions) else {
        return SchoolStats {
            school_name,
            ..SchoolStats::unresolved(query)
        };
    };

    // Some records carry negative admission rates as an absent-value marker.
    let admission_rate = admissions
        .admission_rate
        .and_then(|r| r.overall)
        .filter(|r| *r >= 0.0);

    let (sat_range, sat_average) = match admissions.sat_scores {
        Some(sat) => {
            let lower = combined_sat(sat.p25.as_ref());
            let upper = combined_sat(sat.p75.as_ref());
            let average = sat.average.and_then(|a| a.overall).map(to_score);
            (ScoreRange::from_bounds(lower, upper), average)
        }
        None => (None, None),
    };

    let (act_range, act_midpoint) = match admissions.act_scores {
        Some(act) => {
            let lower = act.p25.and_then(|s| s.cumulative).map(to_score);
            let upper = act.p75.and_then(|s| s.cumulative).map(to_score);
            let midpoint = act.midpoint.and_then(|s| s.cumulative).map(to_score);
            (ScoreRange::from_bounds(lower, upper), midpoint)
        }
        None => (None, None),
    };

    SchoolStats {
        school_name,
        admission_rate,
        sat_range,
        act_range,
        sat_average,
        act_midpoint,
    }
}

/// Combined SAT bound: math + critical reading, or `None` if either section
/// is missing.
fn combined_sat(sections: Option<&SatSections>) -> Option<u32> {
    let s = sections?;
    // Wire values are untrusted; saturate instead of overflowing the sum.
    Some(to_score(s.math?).saturating_add(to_score(s.critical_reading?)))
}

fn to_score(value: f64) -> u32 {
    value.round() as u32
}
