//! Listing retrieval for the listing optimizer.
//!
//! Resolves a catalog identifier or product URL to a canonical product page,
//! fetches its markup through a scraping proxy, and extracts a
//! [`ProductRecord`](listopt_core::ProductRecord) from the HTML.

pub mod client;
pub mod error;
pub mod extract;
pub mod listing_url;

pub use client::ListingFetcher;
pub use error::ScraperError;
pub use extract::extract_product;
pub use listing_url::{extract_asin, resolve_listing_url, MARKETPLACE_DOMAIN};
