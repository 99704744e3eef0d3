//! Parser for the generative service's semi-structured optimization reply.
//!
//! The reply is split on `---` into segments. Each segment runs through a
//! small state machine: the first line must carry a `TYPE:` tag naming a known
//! [`SuggestionKind`]; every later line is matched against the `CURRENT:`,
//! `SUGGESTED:` and `REASONING:` prefixes. Summary metrics are scanned over
//! the whole reply, independent of segments.
//!
//! Parsing never fails. Malformed segments are dropped and missing metrics
//! fall back to defaults.

use std::sync::LazyLock;

use listopt_core::{OptimizationSuggestion, SuggestionBundle, SuggestionKind};
use regex::Regex;

const SEGMENT_DELIMITER: &str = "---";

pub const DEFAULT_REASONING: &str = "Optimized for better search visibility and conversion";
pub const DEFAULT_SEO_SCORE: i64 = 50;
pub const DEFAULT_BSR_POTENTIAL: i64 = 20;

static SEO_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SEO Score \(1-100\):\s*([+-]?\d+)").expect("valid SEO score regex")
});

static BSR_POTENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"BSR Potential Improvement:\s*([+-]?\d+)%").expect("valid BSR regex")
});

static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Top Keyword Opportunities:\s*([^\r\n]+)").expect("valid keyword regex")
});

/// Parses a full optimization reply into a [`SuggestionBundle`].
///
/// Suggestions keep their order of appearance. Missing metrics default to
/// an SEO score of 50, a BSR potential of 20 and no keywords. Scores are
/// passed through unclamped.
#[must_use]
pub fn parse_reply(reply: &str) -> SuggestionBundle {
    let suggestions = reply
        .split(SEGMENT_DELIMITER)
        .filter_map(parse_segment)
        .collect();

    SuggestionBundle {
        suggestions,
        seo_score: capture_int(&SEO_SCORE, reply).unwrap_or(DEFAULT_SEO_SCORE),
        bsr_potential: capture_int(&BSR_POTENTIAL, reply).unwrap_or(DEFAULT_BSR_POTENTIAL),
        keyword_opportunities: parse_keywords(reply),
    }
}

enum SegmentState {
    /// Nothing consumed yet; the next line must be a `TYPE:` tag.
    AwaitType,
    /// Tag accepted; scanning for field prefixes.
    Fields(SegmentFields),
}

struct SegmentFields {
    kind: SuggestionKind,
    current: Option<String>,
    suggested: Option<String>,
    reasoning: Option<String>,
}

impl SegmentFields {
    fn new(kind: SuggestionKind) -> Self {
        Self {
            kind,
            current: None,
            suggested: None,
            reasoning: None,
        }
    }

    /// Records `line` if it carries a field prefix. The first occurrence of
    /// each field wins; unprefixed lines (including a repeated `TYPE:`) are
    /// ignored.
    fn accept(&mut self, line: &str) {
        let (slot, value) = if let Some(v) = line.strip_prefix("CURRENT:") {
            (&mut self.current, v)
        } else if let Some(v) = line.strip_prefix("SUGGESTED:") {
            (&mut self.suggested, v)
        } else if let Some(v) = line.strip_prefix("REASONING:") {
            (&mut self.reasoning, v)
        } else {
            return;
        };
        slot.get_or_insert_with(|| value.trim().to_owned());
    }

    fn finish(self) -> Option<OptimizationSuggestion> {
        let current = self.current.filter(|v| !v.is_empty())?;
        let suggested = self.suggested.filter(|v| !v.is_empty())?;
        let reasoning = self
            .reasoning
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REASONING.to_owned());

        Some(OptimizationSuggestion {
            kind: self.kind,
            current,
            suggested,
            reasoning,
            improvements: Vec::new(),
        })
    }
}

fn parse_segment(segment: &str) -> Option<OptimizationSuggestion> {
    let mut state = SegmentState::AwaitType;

    for line in segment.trim().lines().map(str::trim) {
        state = match state {
            SegmentState::AwaitType => match type_tag(line) {
                Some(kind) => SegmentState::Fields(SegmentFields::new(kind)),
                None => return None,
            },
            SegmentState::Fields(mut fields) => {
                fields.accept(line);
                SegmentState::Fields(fields)
            }
        };
    }

    match state {
        SegmentState::AwaitType => None,
        SegmentState::Fields(fields) => fields.finish(),
    }
}

/// Reads a `TYPE: <kind>` tag anywhere in `line`, so list markers and
/// heading prefixes are tolerated. Label and kind are case-insensitive; the
/// kind only has to start the text after the colon.
fn type_tag(line: &str) -> Option<SuggestionKind> {
    const LABEL: &str = "type:";
    let start = line.to_ascii_lowercase().find(LABEL)?;
    SuggestionKind::from_tag_prefix(line[start + LABEL.len()..].trim_start())
}

fn capture_int(pattern: &Regex, reply: &str) -> Option<i64> {
    pattern
        .captures(reply)?
        .get(1)?
        .as_str()
        .parse::<i64>()
        .ok()
}

/// Splits the keyword line on commas, trimming each token.
///
/// The value may start on the line after the label. Empty tokens (e.g. from
/// a trailing comma) are kept. A label with no text after it counts as absent.
fn parse_keywords(reply: &str) -> Vec<String> {
    let Some(raw) = KEYWORDS
        .captures(reply)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
    else {
        return Vec::new();
    };

    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|k| k.trim().to_owned()).collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
