use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// The listing area an optimization suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    BrandVoice,
    Bullets,
    Description,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 3] = [
        SuggestionKind::BrandVoice,
        SuggestionKind::Bullets,
        SuggestionKind::Description,
    ];

    /// Wire tag used in prompts and replies, e.g. `brand-voice`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::BrandVoice => "brand-voice",
            SuggestionKind::Bullets => "bullets",
            SuggestionKind::Description => "description",
        }
    }

    /// Reads the tag that `text` starts with, case-insensitively. Anything
    /// after the tag is ignored. Returns `None` when `text` does not start
    /// with one of the three known kinds.
    #[must_use]
    pub fn from_tag_prefix(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let tag = kind.as_str();
            text.get(..tag.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(tag))
        })
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One proposed content change.
///
/// `current` and `suggested` are both non-empty for every suggestion the
/// parser emits. `improvements` is a display field filled in by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub current: String,
    pub suggested: String,
    pub reasoning: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Suggestions plus summary metrics derived from one generative reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    pub suggestions: Vec<OptimizationSuggestion>,
    /// Nominally 1-100; passed through unclamped.
    pub seo_score: i64,
    /// Projected BSR improvement in percent; may be negative.
    pub bsr_potential: i64,
    pub keyword_opportunities: Vec<String>,
}

/// One complete analysis: the extracted listing and its suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub product: ProductRecord,
    #[serde(flatten)]
    pub optimization: SuggestionBundle,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(product: ProductRecord, optimization: SuggestionBundle) -> Self {
        Self {
            product,
            optimization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_tag_prefix_is_case_insensitive() {
        assert_eq!(
            SuggestionKind::from_tag_prefix("Brand-Voice"),
            Some(SuggestionKind::BrandVoice)
        );
        assert_eq!(
            SuggestionKind::from_tag_prefix("BULLETS"),
            Some(SuggestionKind::Bullets)
        );
        assert_eq!(
            SuggestionKind::from_tag_prefix("description"),
            Some(SuggestionKind::Description)
        );
    }

    #[test]
    fn kind_from_tag_prefix_rejects_unknown() {
        assert_eq!(SuggestionKind::from_tag_prefix("title"), None);
        assert_eq!(SuggestionKind::from_tag_prefix(""), None);
        assert_eq!(SuggestionKind::from_tag_prefix("brand voice"), None);
        assert_eq!(SuggestionKind::from_tag_prefix(" bullets"), None);
    }

    #[test]
    fn kind_from_tag_prefix_ignores_trailing_text() {
        assert_eq!(
            SuggestionKind::from_tag_prefix("bullets:"),
            Some(SuggestionKind::Bullets)
        );
        assert_eq!(
            SuggestionKind::from_tag_prefix("description (rewrite)"),
            Some(SuggestionKind::Description)
        );
    }

    #[test]
    fn kind_serializes_as_kebab_case() {
        let json = serde_json::to_string(&SuggestionKind::BrandVoice).expect("serialize");
        assert_eq!(json, "\"brand-voice\"");
    }

    #[test]
    fn analysis_result_flattens_bundle() {
        let result = AnalysisResult::new(
            ProductRecord::default(),
            SuggestionBundle {
                suggestions: vec![OptimizationSuggestion {
                    kind: SuggestionKind::Bullets,
                    current: "a".to_string(),
                    suggested: "b".to_string(),
                    reasoning: "c".to_string(),
                    improvements: vec![],
                }],
                seo_score: 61,
                bsr_potential: -5,
                keyword_opportunities: vec!["smart speaker".to_string()],
            },
        );
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json["product"].is_object());
        assert_eq!(json["seo_score"], 61);
        assert_eq!(json["bsr_potential"], -5);
        assert_eq!(json["suggestions"][0]["type"], "bullets");
        assert_eq!(json["keyword_opportunities"][0], "smart speaker");
    }
}
