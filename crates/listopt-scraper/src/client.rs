//! HTTP client for the scraping proxy that serves product-page markup.

use std::time::Duration;

use listopt_core::{AppConfig, ProductRecord};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ScraperError;
use crate::extract::extract_product;
use crate::listing_url::resolve_listing_url;

const DEFAULT_BASE_URL: &str = "https://app.scrapingbee.com/api/v1/";

/// Fixed proxy options: plain HTML, US storefront, premium proxy pool.
const PROXY_OPTIONS: &[(&str, &str)] = &[
    ("render_js", "false"),
    ("country_code", "us"),
    ("premium_proxy", "true"),
];

/// Error body shape returned by the proxy on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Fetches product pages through the scraping proxy and extracts them.
///
/// One instance can serve any number of concurrent [`ListingFetcher::fetch`]
/// calls; it holds no per-request state.
#[derive(Clone)]
pub struct ListingFetcher {
    client: Client,
    api_key: String,
    endpoint: Url,
    timeout_secs: u64,
}

impl std::fmt::Debug for ListingFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingFetcher")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ListingFetcher {
    /// Creates a fetcher pointed at the production scraping proxy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a fetcher from application config.
    ///
    /// # Errors
    ///
    /// Same as [`ListingFetcher::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_base_url(
            &config.scraping_api_key,
            config.fetch_timeout_secs,
            &config.user_agent,
            &config.scraping_base_url,
        )
    }

    /// Creates a fetcher with a custom proxy endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(base_url).map_err(|e| ScraperError::InvalidEndpoint {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            timeout_secs,
        })
    }

    /// Resolves `input`, fetches the product page, and extracts its record.
    ///
    /// Invalid input is rejected before any request is sent.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidInput`]: not a catalog ID or marketplace URL.
    /// - [`ScraperError::Timeout`]: the proxy did not answer in time.
    /// - [`ScraperError::Http`]: network or TLS failure.
    /// - [`ScraperError::UnexpectedStatus`]: the proxy returned non-2xx.
    /// - [`ScraperError::Extraction`]: the body was not usable markup.
    pub async fn fetch(&self, input: &str) -> Result<ProductRecord, ScraperError> {
        let listing_url = resolve_listing_url(input)?;
        tracing::info!(url = %listing_url, "fetching product page");

        let markup = self.fetch_markup(&listing_url).await?;

        match extract_product(&markup, &listing_url) {
            Some(record) => {
                tracing::info!(
                    url = %listing_url,
                    asin = %record.asin,
                    bytes = markup.len(),
                    "product page extracted"
                );
                Ok(record)
            }
            None => {
                tracing::warn!(url = %listing_url, bytes = markup.len(), "product page unparseable");
                Err(ScraperError::Extraction { url: listing_url })
            }
        }
    }

    /// Retrieves the raw markup for an already-resolved product-page address.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Timeout`]: the proxy did not answer in time.
    /// - [`ScraperError::Http`]: network or TLS failure.
    /// - [`ScraperError::UnexpectedStatus`]: the proxy returned non-2xx.
    pub async fn fetch_markup(&self, listing_url: &str) -> Result<String, ScraperError> {
        let request_url = self.proxy_url(listing_url);

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| self.classify(e, listing_url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = proxy_error_message(&body)
                .unwrap_or_else(|| format!("Scraping failed with status: {}", status.as_u16()));
            tracing::warn!(
                url = listing_url,
                status = status.as_u16(),
                message = %message,
                "scraping proxy returned an error"
            );
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: listing_url.to_owned(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.classify(e, listing_url))
    }

    /// Builds the proxy request URL with percent-encoded query parameters.
    fn proxy_url(&self, listing_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("url", listing_url);
            for (k, v) in PROXY_OPTIONS {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Returned and logged errors never include the request URL, which
    /// carries the API key.
    fn classify(&self, error: reqwest::Error, listing_url: &str) -> ScraperError {
        let error = error.without_url();
        if error.is_timeout() {
            tracing::warn!(
                url = listing_url,
                timeout_secs = self.timeout_secs,
                "scraping request timed out"
            );
            ScraperError::Timeout {
                url: listing_url.to_owned(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            tracing::warn!(url = listing_url, error = %error, "scraping request failed");
            ScraperError::Http(error)
        }
    }
}

/// Pulls a human-readable message out of a JSON error body, if any.
fn proxy_error_message(body: &str) -> Option<String> {
    let parsed: ProxyErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
