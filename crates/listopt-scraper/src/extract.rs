//! HTML extraction of a [`ProductRecord`] from a product-page document.
//!
//! Every field is located independently. A missing node leaves its field
//! empty rather than failing the whole extraction; only a body that is not
//! markup at all yields `None`.

use std::sync::LazyLock;

use listopt_core::ProductRecord;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::listing_url::extract_asin;

struct PageSelectors {
    title: Selector,
    brand: Selector,
    brand_fallback: Selector,
    price: Selector,
    description: Selector,
    description_fallback: Selector,
    bullets: Selector,
    landing_image: Selector,
    alt_images: Selector,
    rating_popover: Selector,
    rating_alt: Selector,
    review_count: Selector,
    breadcrumbs: Selector,
    body: Selector,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

static SELECTORS: LazyLock<PageSelectors> = LazyLock::new(|| PageSelectors {
    title: selector("#productTitle"),
    brand: selector("#bylineInfo"),
    brand_fallback: selector(".a-link-normal.contributorNameID"),
    price: selector(".a-price-whole"),
    description: selector("#productDescription p"),
    description_fallback: selector("#feature-bullets"),
    bullets: selector("#feature-bullets li"),
    landing_image: selector("#landingImage"),
    alt_images: selector("#altImages img"),
    rating_popover: selector("#acrPopover"),
    rating_alt: selector("span.a-icon-alt"),
    review_count: selector("#acrCustomerReviewText"),
    breadcrumbs: selector("#wayfinding-breadcrumbs_feature_div li a"),
    body: selector("body"),
});

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("valid decimal regex"));

static BEST_SELLERS_RANK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Best Sellers Rank:?\s*#([\d,]+)\s+in").expect("valid best-sellers-rank regex")
});

/// Extracts a product record from `markup` fetched from `source_url`.
///
/// The catalog identifier comes from the `/dp/<id>` segment of `source_url`,
/// never from the markup. Returns `None` only when `markup` is empty or does
/// not start with a tag (plain-text or JSON bodies).
#[must_use]
pub fn extract_product(markup: &str, source_url: &str) -> Option<ProductRecord> {
    if !looks_like_markup(markup) {
        tracing::debug!(url = source_url, "response body is not HTML markup");
        return None;
    }

    let document = Html::parse_document(markup);
    let sel = &*SELECTORS;

    let title = first_text(&document, &sel.title).unwrap_or_default();
    let brand = text_with_fallback(&document, &sel.brand, &sel.brand_fallback);
    let price = first_text(&document, &sel.price);
    let description =
        text_with_fallback(&document, &sel.description, &sel.description_fallback);
    let bullets: Vec<String> = document
        .select(&sel.bullets)
        .map(collapsed_text)
        .filter(|text| !text.is_empty())
        .collect();

    let record = ProductRecord {
        asin: extract_asin(source_url).unwrap_or_default(),
        title,
        brand,
        price,
        description,
        bullets,
        images: extract_images(&document, sel),
        rating: extract_rating(&document, sel),
        review_count: extract_review_count(&document, sel),
        category: first_text(&document, &sel.breadcrumbs),
        bsr: extract_bsr(&document, sel),
    };

    if record.title.is_empty() {
        tracing::debug!(url = source_url, "no product title found");
    }
    tracing::debug!(
        url = source_url,
        asin = %record.asin,
        bullets = record.bullets.len(),
        images = record.images.len(),
        "extracted product record"
    );

    Some(record)
}

fn looks_like_markup(markup: &str) -> bool {
    markup
        .trim_start_matches('\u{feff}')
        .trim_start()
        .starts_with('<')
}

/// Joins an element's text nodes and collapses runs of whitespace.
fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching `selector`, if non-empty.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(collapsed_text)
        .filter(|text| !text.is_empty())
}

/// Text of the first `primary` node, or of the first `fallback` node when the
/// page has no `primary` node at all. An empty `primary` node is still used.
fn text_with_fallback(document: &Html, primary: &Selector, fallback: &Selector) -> String {
    document
        .select(primary)
        .next()
        .or_else(|| document.select(fallback).next())
        .map(collapsed_text)
        .unwrap_or_default()
}

fn extract_images(document: &Html, sel: &PageSelectors) -> Vec<String> {
    let landing = document.select(&sel.landing_image).filter_map(|img| {
        img.value()
            .attr("data-old-hires")
            .filter(|src| !src.trim().is_empty())
            .or_else(|| img.value().attr("src"))
    });
    let alternates = document
        .select(&sel.alt_images)
        .filter_map(|img| img.value().attr("src"));

    let mut images: Vec<String> = Vec::new();
    for src in landing.chain(alternates) {
        let src = src.trim();
        if src.starts_with("http") && !images.iter().any(|seen| seen == src) {
            images.push(src.to_owned());
        }
    }
    images
}

/// Star rating out of five, from the popover title or the icon's alt text.
fn extract_rating(document: &Html, sel: &PageSelectors) -> Option<f32> {
    let raw = document
        .select(&sel.rating_popover)
        .next()
        .and_then(|el| el.value().attr("title").map(str::to_owned))
        .or_else(|| first_text(document, &sel.rating_alt))?;

    DECIMAL
        .captures(&raw)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .filter(|rating| (0.0..=5.0).contains(rating))
}

fn extract_review_count(document: &Html, sel: &PageSelectors) -> Option<u64> {
    let raw = first_text(document, &sel.review_count)?;
    let digits: String = raw
        .split_whitespace()
        .next()?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn extract_bsr(document: &Html, sel: &PageSelectors) -> Option<u64> {
    let body = document.select(&sel.body).next().map(collapsed_text)?;
    let rank = BEST_SELLERS_RANK.captures(&body)?.get(1)?.as_str();
    rank.replace(',', "").parse().ok()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
