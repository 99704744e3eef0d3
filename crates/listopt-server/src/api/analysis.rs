//! Listing analysis handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use listopt_core::AnalysisResult;
use listopt_pipeline::{FailureKind, PipelineFailure};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub input: String,
}

/// Error code reported to API clients for each failure kind.
fn failure_code(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::InvalidInput => "invalid_input",
        FailureKind::FetchFailed => "fetch_failed",
        FailureKind::ExtractionFailed => "extraction_failed",
        FailureKind::GenerationFailed => "generation_failed",
        FailureKind::Cancelled => "cancelled",
    }
}

fn map_failure(request_id: String, failure: PipelineFailure) -> ApiError {
    ApiError::new(request_id, failure_code(failure.kind), failure.message)
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisResult>>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected analyze request body");
        ApiError::new(
            req_id.0.clone(),
            "bad_request",
            "request body must be JSON of the form {\"input\": \"...\"}",
        )
    })?;

    tracing::info!(request_id = %req_id.0, input = %request.input, "analysis requested");
    let result = state
        .analyzer
        .analyze(&request.input)
        .await
        .map_err(|failure| map_failure(req_id.0.clone(), failure))?;

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn sample_analysis(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<AnalysisResult>> {
    Json(ApiResponse {
        data: listopt_core::demo::sample_analysis(),
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_codes_are_snake_case_kinds() {
        for kind in [
            FailureKind::InvalidInput,
            FailureKind::FetchFailed,
            FailureKind::ExtractionFailed,
            FailureKind::GenerationFailed,
            FailureKind::Cancelled,
        ] {
            assert_eq!(failure_code(kind), kind.as_str().replace('-', "_"));
        }
    }

    #[test]
    fn map_failure_keeps_message() {
        let error = map_failure(
            "req-1".to_string(),
            PipelineFailure::new(FailureKind::FetchFailed, "Scraping failed with status: 503"),
        );
        assert_eq!(error.error.code, "fetch_failed");
        assert_eq!(error.error.message, "Scraping failed with status: 503");
        assert_eq!(error.meta.request_id, "req-1");
    }
}
