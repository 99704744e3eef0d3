use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Please provide a valid product URL or catalog identifier")]
    InvalidInput { input: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scraping request for {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// Non-2xx from the scraping proxy. `message` is the proxy's own error
    /// text when it sent one.
    #[error("{message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Failed to extract product data from the page")]
    Extraction { url: String },

    #[error("invalid scraping endpoint \"{base_url}\": {reason}")]
    InvalidEndpoint { base_url: String, reason: String },
}
