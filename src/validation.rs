use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::filter;

/// Longest accepted chirp, counted in Unicode scalar values.
pub const MAX_CHIRP_LENGTH: usize = 140;

pub const CHIRP_TOO_LONG: &str = "Chirp is too long";

/// Incoming chirp payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChirpSubmission {
    #[serde(default)]
    pub body: String,
}

impl ChirpSubmission {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Rejected { reason: String },
    Accepted { cleaned_body: String },
}

/// Chirp validation pipeline: decode, length check, then word filter.
pub struct ChirpValidator;

impl ChirpValidator {
    /// Decodes a raw JSON payload into a submission
    pub fn decode(payload: &[u8]) -> Result<ChirpSubmission> {
        serde_json::from_slice(payload).map_err(ApiError::Decode)
    }

    /// Checks the length limit first, then masks forbidden words
    pub fn validate(submission: &ChirpSubmission) -> ValidationOutcome {
        if submission.body.chars().count() > MAX_CHIRP_LENGTH {
            return ValidationOutcome::Rejected {
                reason: CHIRP_TOO_LONG.to_string(),
            };
        }

        ValidationOutcome::Accepted {
            cleaned_body: filter::filter(&submission.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> ValidationOutcome {
        ValidationOutcome::Rejected {
            reason: CHIRP_TOO_LONG.to_string(),
        }
    }

    #[test]
    fn test_decode_valid_payload() {
        let submission = ChirpValidator::decode(br#"{"body": "hello world"}"#).unwrap();
        assert_eq!(submission, ChirpSubmission::new("hello world"));
    }

    #[test]
    fn test_decode_missing_body_defaults_to_empty() {
        let submission = ChirpValidator::decode(br#"{"extra": 1}"#).unwrap();
        assert_eq!(submission.body, "");
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        let payloads: [&[u8]; 3] = [b"not json", br#"{"body": 42}"#, b""];
        for payload in payloads {
            let result = ChirpValidator::decode(payload);
            assert!(matches!(result, Err(ApiError::Decode(_))));
        }
    }

    #[test]
    fn test_accepts_up_to_limit() {
        let body = "a".repeat(MAX_CHIRP_LENGTH);
        let outcome = ChirpValidator::validate(&ChirpSubmission::new(body.clone()));
        assert_eq!(outcome, ValidationOutcome::Accepted { cleaned_body: body });
    }

    #[test]
    fn test_rejects_over_limit() {
        let body = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(ChirpValidator::validate(&ChirpSubmission::new(body)), rejected());
    }

    #[test]
    fn test_length_check_runs_before_filter() {
        let body = format!("{} kerfuffle", "a".repeat(MAX_CHIRP_LENGTH));
        assert_eq!(ChirpValidator::validate(&ChirpSubmission::new(body)), rejected());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 140 two-byte characters: 280 bytes but still within the limit
        let body = "é".repeat(MAX_CHIRP_LENGTH);
        let outcome = ChirpValidator::validate(&ChirpSubmission::new(body.clone()));
        assert_eq!(outcome, ValidationOutcome::Accepted { cleaned_body: body });

        let body = "é".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(ChirpValidator::validate(&ChirpSubmission::new(body)), rejected());
    }

    #[test]
    fn test_empty_and_whitespace_bodies_are_accepted() {
        for body in ["", "   "] {
            let outcome = ChirpValidator::validate(&ChirpSubmission::new(body));
            assert_eq!(
                outcome,
                ValidationOutcome::Accepted {
                    cleaned_body: filter::filter(body)
                }
            );
        }
    }

    #[test]
    fn test_accepted_body_is_filtered() {
        let outcome = ChirpValidator::validate(&ChirpSubmission::new("what a Sharbert day"));
        assert_eq!(
            outcome,
            ValidationOutcome::Accepted {
                cleaned_body: "what a **** day".to_string()
            }
        );
    }
}
