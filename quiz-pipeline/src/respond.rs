//! Maps pipeline outcomes onto the external response envelope.

use http::StatusCode;
use serde_json::{Value, json};
use tracing::error;

use crate::Outcome;

/// Generic message returned for all server-side failures. Internal detail
/// is logged, never sent to the caller.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when the provider's answer could not be parsed.
const UNPARSABLE_MESSAGE: &str = "Failed to parse model response";

/// Transport-agnostic response envelope: a status code plus a JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// Maps an outcome to its response. Total over all six variants; no
    /// variant falls through to a default arm.
    #[must_use]
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success(set) => Self {
                status: StatusCode::OK,
                body: json!({ "result": set }),
            },
            Outcome::Invalid(err) => Self {
                status: StatusCode::BAD_REQUEST,
                body: json!({ "error": err.to_string() }),
            },
            Outcome::CountMismatch { actual, partial } => Self {
                status: StatusCode::BAD_REQUEST,
                body: json!({
                    "error": format!("Expected 10 questions, but received {actual}."),
                    "partialResult": { "questions": partial },
                }),
            },
            Outcome::Unparsable => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: json!({ "error": UNPARSABLE_MESSAGE }),
            },
            Outcome::GenerationFailure(reason) => {
                error!(reason = %reason, "generation failure");
                Self::internal_error()
            }
            Outcome::Internal(detail) => {
                error!(detail = %detail, "internal pipeline error");
                Self::internal_error()
            }
        }
    }

    fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": INTERNAL_ERROR_MESSAGE }),
        }
    }

    /// Returns the response status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the JSON response body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response and returns its JSON body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use quiz_primitives::{QuestionAnswer, QuestionSet, ValidationError};

    use super::*;

    fn pairs(count: usize) -> Vec<QuestionAnswer> {
        (0..count)
            .map(|i| QuestionAnswer::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn success_maps_to_ok_with_result() {
        let set = QuestionSet::new(pairs(10)).unwrap();
        let response = ApiResponse::from_outcome(Outcome::Success(set));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body()["result"]["questions"].as_array().unwrap().len(),
            10
        );
    }

    #[test]
    fn missing_field_maps_to_bad_request() {
        let response = ApiResponse::from_outcome(Outcome::Invalid(ValidationError::MissingField));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body()["error"],
            "Lesson plan and Bloom's Taxonomy level are required"
        );
    }

    #[test]
    fn unknown_level_maps_to_bad_request() {
        let response = ApiResponse::from_outcome(Outcome::Invalid(ValidationError::UnknownLevel));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body()["error"], "Invalid Bloom's Taxonomy level");
    }

    #[test]
    fn count_mismatch_carries_partial_result() {
        let response = ApiResponse::from_outcome(Outcome::CountMismatch {
            actual: 7,
            partial: pairs(7),
        });

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body()["error"],
            "Expected 10 questions, but received 7."
        );
        let partial = response.body()["partialResult"]["questions"]
            .as_array()
            .unwrap();
        assert_eq!(partial.len(), 7);
        assert_eq!(partial[0]["question"], "q0");
    }

    #[test]
    fn unparsable_maps_to_server_error_without_detail() {
        let response = ApiResponse::from_outcome(Outcome::Unparsable);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body()["error"], UNPARSABLE_MESSAGE);
    }

    #[test]
    fn provider_failures_stay_opaque() {
        let response = ApiResponse::from_outcome(Outcome::GenerationFailure(
            "OpenAI returned 503: upstream exploded".to_owned(),
        ));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body()["error"], INTERNAL_ERROR_MESSAGE);
        assert!(!response.body().to_string().contains("upstream"));
    }

    #[test]
    fn internal_errors_stay_opaque() {
        let response =
            ApiResponse::from_outcome(Outcome::Internal("secret stack trace".to_owned()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body()["error"], INTERNAL_ERROR_MESSAGE);
    }
}
