use serde::{Deserialize, Serialize};

/// Length of a marketplace catalog identifier (ASIN).
pub const CATALOG_ID_LEN: usize = 10;

/// Structured content of one product listing, as extracted from its page.
///
/// `asin` is either empty (the page address carried no `/dp/<id>` segment)
/// or exactly [`CATALOG_ID_LEN`] uppercase alphanumeric characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub asin: String,
    pub title: String,
    pub brand: String,
    /// Display price as rendered on the page, e.g. `"49."` or `"$49.99"`.
    pub price: Option<String>,
    pub description: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: Option<f32>,
    pub review_count: Option<u64>,
    pub category: Option<String>,
    /// Best Sellers Rank within the listing's top-level category.
    pub bsr: Option<u64>,
}

/// Returns true when `candidate` is a catalog identifier: exactly ten
/// characters drawn from `A-Z` and `0-9`.
#[must_use]
pub fn is_catalog_id(candidate: &str) -> bool {
    candidate.len() == CATALOG_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_id_accepts_uppercase_alphanumeric() {
        assert!(is_catalog_id("B08N5WRWNW"));
        assert!(is_catalog_id("0123456789"));
    }

    #[test]
    fn catalog_id_rejects_lowercase() {
        assert!(!is_catalog_id("b08n5wrwnw"));
    }

    #[test]
    fn catalog_id_rejects_wrong_length() {
        assert!(!is_catalog_id("B08N5WRWN"));
        assert!(!is_catalog_id("B08N5WRWNWX"));
        assert!(!is_catalog_id(""));
    }

    #[test]
    fn catalog_id_rejects_punctuation_and_non_ascii() {
        assert!(!is_catalog_id("B08N5-RWNW"));
        assert!(!is_catalog_id("B08N5ÉWNW"));
    }

    #[test]
    fn product_record_serializes_optional_fields_as_null() {
        let record = ProductRecord {
            asin: "B08N5WRWNW".to_string(),
            title: "Echo Dot".to_string(),
            ..ProductRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["asin"], "B08N5WRWNW");
        assert!(json["price"].is_null());
        assert!(json["bsr"].is_null());
        assert_eq!(json["bullets"].as_array().map(Vec::len), Some(0));
    }
}
