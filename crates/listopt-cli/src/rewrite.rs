//! Single-field rewrite command handler.

use clap::ValueEnum;
use listopt_core::AppConfig;
use listopt_optimizer::OptimizationClient;

/// Listing field targeted by `rewrite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RewriteKind {
    BrandVoice,
    Bullets,
    Description,
}

/// Joins free-text fragments into one value. Only bullets keep them apart.
fn joined(text: &[String]) -> String {
    text.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sends one rewrite request and prints the result to stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub(crate) async fn run_rewrite(
    config: &AppConfig,
    kind: RewriteKind,
    text: &[String],
    context: &str,
) -> anyhow::Result<()> {
    if config.generation_key_is_placeholder() {
        tracing::warn!("GENERATION_API_KEY is not set; the request will be rejected upstream");
    }
    let client = OptimizationClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build optimization client: {e}"))?;

    tracing::info!(?kind, "requesting rewrite");
    match kind {
        RewriteKind::BrandVoice => {
            println!("{}", client.rewrite_brand_voice(&joined(text), context).await?);
        }
        RewriteKind::Description => {
            println!("{}", client.rewrite_description(&joined(text), context).await?);
        }
        RewriteKind::Bullets => {
            for bullet in client.rewrite_bullets(text, context).await? {
                println!("{bullet}");
            }
        }
    }
    Ok(())
}
