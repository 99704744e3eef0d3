//! HTTP client for the chat-completions endpoint.

use std::time::Duration;

use listopt_core::{AppConfig, ProductRecord, SuggestionBundle};
use reqwest::{Client, Url};

use crate::error::OptimizerError;
use crate::parse::parse_reply;
use crate::prompt::{
    build_brand_voice_prompt, build_bullets_prompt, build_description_prompt,
    build_optimization_prompt, SYSTEM_PROMPT,
};
use crate::types::{ApiErrorEnvelope, ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.7;
const FALLBACK_ERROR_MESSAGE: &str = "generation request failed";

/// Client for the generative-text service.
///
/// Every call is a single request/response round trip with no session
/// state, so one instance can be shared across concurrent analyses.
#[derive(Clone)]
pub struct OptimizationClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for OptimizationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptimizationClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("api_key", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl OptimizationClient {
    /// Creates a client pointed at the production endpoint with the default model.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, OptimizerError> {
        Self::with_base_url(api_key, DEFAULT_MODEL, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// Same as [`OptimizationClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OptimizerError> {
        Self::with_base_url(
            &config.generation_api_key,
            &config.generation_model,
            config.generation_timeout_secs,
            &config.generation_base_url,
        )
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OptimizerError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OptimizerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let endpoint = Url::parse(base_url).map_err(|e| OptimizerError::InvalidEndpoint {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            model: model.to_owned(),
            timeout_secs,
        })
    }

    /// Requests optimization suggestions for a full listing.
    ///
    /// Sends one prompt built from `product` and parses the reply. Parsing
    /// cannot fail; a reply with no recognizable sections yields an empty
    /// suggestion list with default metrics.
    ///
    /// # Errors
    ///
    /// - [`OptimizerError::Api`]: the service returned non-2xx.
    /// - [`OptimizerError::Timeout`] / [`OptimizerError::Http`]: transport failure.
    /// - [`OptimizerError::Deserialize`] / [`OptimizerError::EmptyReply`]:
    ///   the 2xx body carried no completion text.
    pub async fn request_optimizations(
        &self,
        product: &ProductRecord,
    ) -> Result<SuggestionBundle, OptimizerError> {
        let prompt = build_optimization_prompt(product);
        tracing::info!(asin = %product.asin, model = %self.model, "requesting optimizations");

        let reply = self.complete(&prompt).await?;
        let bundle = parse_reply(&reply);

        tracing::info!(
            asin = %product.asin,
            suggestions = bundle.suggestions.len(),
            seo_score = bundle.seo_score,
            "optimization reply parsed"
        );
        Ok(bundle)
    }

    /// Rewrites a brand voice statement.
    ///
    /// # Errors
    ///
    /// Same as [`OptimizationClient::request_optimizations`].
    pub async fn rewrite_brand_voice(
        &self,
        current: &str,
        context: &str,
    ) -> Result<String, OptimizerError> {
        let reply = self
            .complete(&build_brand_voice_prompt(current, context))
            .await?;
        Ok(reply.trim().to_owned())
    }

    /// Rewrites a set of bullet points. Each non-blank reply line becomes
    /// one bullet.
    ///
    /// # Errors
    ///
    /// Same as [`OptimizationClient::request_optimizations`].
    pub async fn rewrite_bullets(
        &self,
        bullets: &[String],
        context: &str,
    ) -> Result<Vec<String>, OptimizerError> {
        let reply = self.complete(&build_bullets_prompt(bullets, context)).await?;
        Ok(reply
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    /// Rewrites a product description.
    ///
    /// # Errors
    ///
    /// Same as [`OptimizationClient::request_optimizations`].
    pub async fn rewrite_description(
        &self,
        current: &str,
        context: &str,
    ) -> Result<String, OptimizerError> {
        let reply = self
            .complete(&build_description_prompt(current, context))
            .await?;
        Ok(reply.trim().to_owned())
    }

    /// Sends one chat-completions request and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String, OptimizerError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body)
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
            tracing::warn!(
                status = status.as_u16(),
                message = %message,
                "generation service returned an error"
            );
            return Err(OptimizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OptimizerError::Deserialize {
                context: "chat completion".to_owned(),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(OptimizerError::EmptyReply)
    }

    fn classify(&self, error: reqwest::Error) -> OptimizerError {
        if error.is_timeout() {
            tracing::warn!(timeout_secs = self.timeout_secs, "generation request timed out");
            OptimizerError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            tracing::warn!(error = %error, "generation request failed");
            OptimizerError::Http(error)
        }
    }
}

/// Pulls `error.message` out of an error body, if any.
fn api_error_message(body: &str) -> Option<String> {
    let envelope: ApiErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope
        .error
        .message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
