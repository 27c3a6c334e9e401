//! Extraction error type.

use thiserror::Error;

/// Failure to locate a draft URL in deploy-log text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No line of the input matched the draft URL pattern.
    /// Carries the whole input so the failure can be diagnosed from CI output alone.
    #[error("Was not able to find Draft URL in the logs:\n{logs}")]
    NoMatchFound { logs: String },
}
