use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{ApiError, Result};

#[derive(Debug, Serialize)]
pub struct CleanedChirpResponse {
    pub cleaned_body: String,
}

impl CleanedChirpResponse {
    pub fn new(cleaned_body: String) -> Self {
        Self { cleaned_body }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Encodes `payload` as a JSON response with the given status.
///
/// Encoding happens before any part of the response is built, so a failure
/// can still be reported as [`ApiError::Encode`].
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response> {
    let body = serde_json::to_vec(payload).map_err(ApiError::Encode)?;

    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(response)
}
