use axum::{body::Bytes, http::StatusCode, response::Response};
use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::metrics::HitCounter;
use crate::response::{json_response, CleanedChirpResponse};
use crate::validation::{ChirpValidator, ValidationOutcome};

/// Application state shared by every handler.
///
/// Requests run concurrently on the tokio worker pool; the hit counter is
/// the only state they share.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub hits: Arc<HitCounter>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counter(hits: Arc<HitCounter>) -> Self {
        Self { hits }
    }
}

/// Validate a chirp and return its cleaned body
pub async fn validate_chirp(payload: Bytes) -> Result<Response> {
    let submission = ChirpValidator::decode(&payload)?;

    match ChirpValidator::validate(&submission) {
        ValidationOutcome::Accepted { cleaned_body } => {
            json_response(StatusCode::OK, &CleanedChirpResponse::new(cleaned_body))
        }
        ValidationOutcome::Rejected { reason } => {
            tracing::debug!(reason = %reason, "Chirp rejected");
            Err(ApiError::Rejected(reason))
        }
    }
}
