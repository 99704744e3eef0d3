//! Lifecycle of a single analysis.

use serde::Serialize;

use crate::failure::FailureKind;

/// Where an analysis currently stands.
///
/// Progresses `Idle → Fetching → Generating → Done`. `Failed` is terminal
/// and reachable from either working stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "failure", rename_all = "kebab-case")]
pub enum AnalysisStage {
    Idle,
    Fetching,
    Generating,
    Done,
    Failed(FailureKind),
}

impl AnalysisStage {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Fetching)
                | (Self::Fetching, Self::Generating | Self::Failed(_))
                | (Self::Generating, Self::Done | Self::Failed(_))
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Generating => "generating",
            Self::Done => "done",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(kind) => write!(f, "failed ({kind})"),
            other => f.write_str(other.as_str()),
        }
    }
}
