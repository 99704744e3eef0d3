//! The single failure type surfaced by an analysis.

use listopt_optimizer::OptimizerError;
use listopt_scraper::ScraperError;
use serde::Serialize;
use thiserror::Error;

/// Which stage of the analysis failed, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The input was neither a catalog identifier nor a marketplace address.
    InvalidInput,
    /// The product page could not be retrieved.
    FetchFailed,
    /// The page was retrieved but was not usable markup.
    ExtractionFailed,
    /// The suggestion request failed.
    GenerationFailed,
    /// The caller cancelled the analysis before it finished.
    Cancelled,
}

impl FailureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid-input",
            Self::FetchFailed => "fetch-failed",
            Self::ExtractionFailed => "extraction-failed",
            Self::GenerationFailed => "generation-failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed analysis: a kind plus one human-readable message.
///
/// Displays as the message alone, so it can be shown to an end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct PipelineFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl PipelineFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(FailureKind::Cancelled, "Analysis was cancelled")
    }
}

impl From<ScraperError> for PipelineFailure {
    fn from(error: ScraperError) -> Self {
        let kind = match &error {
            ScraperError::InvalidInput { .. } => FailureKind::InvalidInput,
            ScraperError::Extraction { .. } => FailureKind::ExtractionFailed,
            ScraperError::Http(_)
            | ScraperError::Timeout { .. }
            | ScraperError::UnexpectedStatus { .. }
            | ScraperError::InvalidEndpoint { .. } => FailureKind::FetchFailed,
        };
        Self::new(kind, error.to_string())
    }
}

impl From<OptimizerError> for PipelineFailure {
    fn from(error: OptimizerError) -> Self {
        Self::new(FailureKind::GenerationFailed, error.to_string())
    }
}
