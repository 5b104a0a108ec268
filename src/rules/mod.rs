pub mod store;
pub mod types;

pub use store::RuleStore;
pub use types::{Rule, Urgency};

use thiserror::Error;

/// Errors raised when an external rule source is found but malformed.
///
/// An absent source is not an error; the store falls back to its built-in
/// defaults in that case.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Rule source is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Rule source must be a JSON object keyed by test name")]
    NotAnObject,

    #[error("Invalid rule for test '{test}': {message}")]
    InvalidRule { test: String, message: String },
}
