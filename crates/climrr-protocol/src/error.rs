//! Errors raised when parsing protocol strings into typed values.

use thiserror::Error;

/// A string did not name a known variable, season or scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown climate variable: {0}")]
    Variable(String),

    #[error("unknown season: {0}")]
    Season(String),

    #[error("unknown scenario: {0}")]
    Scenario(String),
}
