//! Catalog-identifier and product-page address handling.

use std::sync::LazyLock;

use listopt_core::is_catalog_id;
use regex::Regex;

use crate::error::ScraperError;

/// Marker every accepted product-page address must contain.
pub const MARKETPLACE_DOMAIN: &str = "amazon.com";

const PRODUCT_PAGE_BASE: &str = "https://www.amazon.com/dp/";

static DP_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("valid /dp/ regex"));

/// Resolves raw user input to a product-page address.
///
/// Surrounding whitespace is ignored. A bare catalog identifier becomes
/// `https://www.amazon.com/dp/<id>`; anything else is taken as an address.
/// The result must contain [`MARKETPLACE_DOMAIN`].
///
/// # Errors
///
/// Returns [`ScraperError::InvalidInput`] when the resolved address does not
/// belong to the marketplace.
pub fn resolve_listing_url(input: &str) -> Result<String, ScraperError> {
    let trimmed = input.trim();
    let url = if is_catalog_id(trimmed) {
        format!("{PRODUCT_PAGE_BASE}{trimmed}")
    } else {
        trimmed.to_owned()
    };

    if !url.contains(MARKETPLACE_DOMAIN) {
        return Err(ScraperError::InvalidInput {
            input: input.to_owned(),
        });
    }

    Ok(url)
}

/// Pulls the catalog identifier out of a `/dp/<id>` path segment.
#[must_use]
pub fn extract_asin(url: &str) -> Option<String> {
    DP_SEGMENT
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_owned())
}
