//! Analysis orchestration: fetch a listing, request suggestions, merge.
//!
//! [`Analyzer`] sequences a [`ListingSource`] and a [`SuggestionSource`] and
//! maps any stage failure into a single [`PipelineFailure`]. Production
//! wiring uses [`live_analyzer`]; tests substitute their own sources.

pub mod analyzer;
pub mod failure;
pub mod source;
pub mod stage;

pub use analyzer::{live_analyzer, Analyzer, LiveAnalyzer, SetupError};
pub use failure::{FailureKind, PipelineFailure};
pub use source::{ListingSource, SuggestionSource};
pub use stage::AnalysisStage;
