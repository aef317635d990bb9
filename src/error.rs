use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::{json_response, ErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be decoded into a chirp.
    #[error("Error decoding request body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The chirp was decoded but failed validation.
    #[error("{0}")]
    Rejected(String),

    /// The response payload could not be encoded.
    #[error("Error marshalling JSON response: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Decode(_) | ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected(reason) => {
                json_response(StatusCode::BAD_REQUEST, &ErrorResponse::new(reason))
                    .unwrap_or_else(|err| {
                        tracing::error!(error = %err, "Failed to encode rejection");
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    })
            }
            err => {
                tracing::error!(error = %err, "Request failed");
                err.status_code().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Rejected("Chirp is too long".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Decode(decode_error()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Encode(decode_error()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejection_message_is_the_reason() {
        let err = ApiError::Rejected("Chirp is too long".to_string());
        assert_eq!(err.to_string(), "Chirp is too long");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Rejected("Chirp is too long".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let response = ApiError::Decode(decode_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
