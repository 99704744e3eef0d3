use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    /// Transport failure; displays the underlying error text.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("generation request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-2xx from the service. `message` is the service's `error.message`
    /// when present, else a generic fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("generation response contained no completion text")]
    EmptyReply,

    #[error("invalid generation endpoint \"{base_url}\": {reason}")]
    InvalidEndpoint { base_url: String, reason: String },
}
