//! Error types.
//!
//! `AppError` is the app-level failure: it carries a process exit code and a
//! human-readable message, and is what `app::run` returns to `main`.
//!
//! `ResolveError` is the stats-resolution failure taxonomy. It never crosses
//! `app::run`: the resolver's total entry point catches it, reports it, and
//! degrades to an unresolved stats value so advising can still finish.

use std::fmt;

use reqwest::StatusCode;

/// Application error with an exit code and message.
#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Why a school's stats could not be resolved.
#[derive(Debug)]
pub enum ResolveError {
    /// `SCORECARD_API_KEY` was absent (or blank) in the environment and `.env`.
    MissingCredential,
    /// The API answered with a non-success status.
    Transport { status: StatusCode, body: String },
    /// The API answered, but the result set was empty.
    NoMatch { query: String },
    /// Request could not be sent, or the response body was not the expected JSON.
    Upstream(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingCredential => {
                write!(f, "Missing SCORECARD_API_KEY in environment (.env).")
            }
            ResolveError::Transport { status, body } => {
                write!(f, "API request failed: HTTP {status}\nRaw response: {body}")
            }
            ResolveError::NoMatch { query } => {
                write!(f, "No results found for: {query}")
            }
            ResolveError::Upstream(msg) => {
                write!(f, "Failed to fetch stats: {msg}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
