//! Sequences fetch and generation into one analysis.

use listopt_core::{AnalysisResult, AppConfig};
use listopt_optimizer::{OptimizationClient, OptimizerError};
use listopt_scraper::{ListingFetcher, ScraperError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::failure::PipelineFailure;
use crate::source::{ListingSource, SuggestionSource};
use crate::stage::AnalysisStage;

/// The analyzer wired to the real scraping proxy and generation service.
pub type LiveAnalyzer = Analyzer<ListingFetcher, OptimizationClient>;

/// Failure to construct the live collaborators.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to build listing fetcher: {0}")]
    Scraper(#[from] ScraperError),

    #[error("failed to build optimization client: {0}")]
    Optimizer(#[from] OptimizerError),
}

/// Builds a [`LiveAnalyzer`] from application config.
///
/// Placeholder API keys are accepted with a warning; requests made with
/// them fail upstream.
///
/// # Errors
///
/// Returns [`SetupError`] if either HTTP client cannot be constructed or a
/// configured base URL is invalid.
pub fn live_analyzer(config: &AppConfig) -> Result<LiveAnalyzer, SetupError> {
    if config.scraping_key_is_placeholder() {
        tracing::warn!("SCRAPING_API_KEY is not set; listing fetches will be rejected upstream");
    }
    if config.generation_key_is_placeholder() {
        tracing::warn!("GENERATION_API_KEY is not set; suggestion requests will be rejected upstream");
    }

    let fetcher = ListingFetcher::from_config(config)?;
    let optimizer = OptimizationClient::from_config(config)?;
    Ok(Analyzer::new(fetcher, optimizer))
}

/// Runs one fetch followed by one generation request per analysis.
///
/// Holds no per-analysis state, so a single instance may serve concurrent
/// calls. There are no retries: a failed fetch means generation is never
/// attempted.
#[derive(Debug, Clone)]
pub struct Analyzer<L, S> {
    listings: L,
    suggestions: S,
}

impl<L, S> Analyzer<L, S>
where
    L: ListingSource,
    S: SuggestionSource,
{
    pub fn new(listings: L, suggestions: S) -> Self {
        Self {
            listings,
            suggestions,
        }
    }

    /// Analyzes the listing named by `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineFailure`] whose kind names the failing stage.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisResult, PipelineFailure> {
        self.analyze_observed(input, |_| {}).await
    }

    /// Like [`Analyzer::analyze`], reporting every stage entered to `on_stage`.
    ///
    /// The final reported stage is always `Done` or `Failed`.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze`].
    pub async fn analyze_observed<F>(
        &self,
        input: &str,
        on_stage: F,
    ) -> Result<AnalysisResult, PipelineFailure>
    where
        F: FnMut(AnalysisStage) + Send,
    {
        let mut stage = StageTracker::new(on_stage);

        stage.advance(AnalysisStage::Fetching);
        let product = match self.listings.fetch_listing(input).await {
            Ok(product) => product,
            Err(failure) => return Err(stage.fail(failure)),
        };

        stage.advance(AnalysisStage::Generating);
        let optimization = match self.suggestions.suggest(&product).await {
            Ok(bundle) => bundle,
            Err(failure) => return Err(stage.fail(failure)),
        };

        stage.advance(AnalysisStage::Done);
        tracing::info!(
            asin = %product.asin,
            suggestions = optimization.suggestions.len(),
            seo_score = optimization.seo_score,
            "analysis complete"
        );
        Ok(AnalysisResult::new(product, optimization))
    }

    /// Like [`Analyzer::analyze`], but abandons the in-flight request as soon
    /// as `cancel` fires.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze`], plus a `Cancelled` failure when the
    /// token fires first.
    pub async fn analyze_cancellable(
        &self,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, PipelineFailure> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::warn!(input, "analysis cancelled");
                Err(PipelineFailure::cancelled())
            }
            result = self.analyze(input) => result,
        }
    }
}

/// Tracks the current stage and forwards transitions to the observer.
struct StageTracker<F> {
    current: AnalysisStage,
    on_stage: F,
}

impl<F: FnMut(AnalysisStage)> StageTracker<F> {
    fn new(on_stage: F) -> Self {
        Self {
            current: AnalysisStage::Idle,
            on_stage,
        }
    }

    fn advance(&mut self, next: AnalysisStage) {
        debug_assert!(
            self.current.can_advance_to(next),
            "illegal stage transition {} -> {next}",
            self.current
        );
        tracing::debug!(from = %self.current, to = %next, "analysis stage");
        self.current = next;
        (self.on_stage)(next);
    }

    fn fail(&mut self, failure: PipelineFailure) -> PipelineFailure {
        tracing::warn!(
            stage = self.current.as_str(),
            kind = %failure.kind,
            message = %failure.message,
            "analysis failed"
        );
        self.advance(AnalysisStage::Failed(failure.kind));
        failure
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
