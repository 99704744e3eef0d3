//! The two collaborators an [`Analyzer`](crate::Analyzer) sequences.

use std::future::Future;

use listopt_core::{ProductRecord, SuggestionBundle};
use listopt_optimizer::OptimizationClient;
use listopt_scraper::ListingFetcher;

use crate::failure::PipelineFailure;

/// Produces a product record from user input.
pub trait ListingSource: Send + Sync {
    fn fetch_listing(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<ProductRecord, PipelineFailure>> + Send;
}

/// Produces optimization suggestions for a product record.
pub trait SuggestionSource: Send + Sync {
    fn suggest(
        &self,
        product: &ProductRecord,
    ) -> impl Future<Output = Result<SuggestionBundle, PipelineFailure>> + Send;
}

impl ListingSource for ListingFetcher {
    async fn fetch_listing(&self, input: &str) -> Result<ProductRecord, PipelineFailure> {
        self.fetch(input).await.map_err(PipelineFailure::from)
    }
}

impl SuggestionSource for OptimizationClient {
    async fn suggest(&self, product: &ProductRecord) -> Result<SuggestionBundle, PipelineFailure> {
        self.request_optimizations(product)
            .await
            .map_err(PipelineFailure::from)
    }
}
