//! Sequential pipeline orchestration.

use std::sync::Arc;

use quiz_adapters::traits::{OutputSchema, StructuredModel, StructuredRequest};
use quiz_primitives::{QuestionSet, RawQuizRequest, RequestId};
use quiz_prompts::QuizPrompt;
use tracing::{debug, info, warn};

use crate::respond::ApiResponse;
use crate::verify::verify;
use crate::Outcome;

/// Name under which the question-set schema is registered with the provider.
const SCHEMA_NAME: &str = "question_set";

/// Runs one generation request end to end against an injected provider.
///
/// The pipeline owns no mutable state; a single instance can serve
/// concurrent requests, each isolated run producing exactly one
/// [`Outcome`].
pub struct QuizPipeline {
    model: Arc<dyn StructuredModel>,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl QuizPipeline {
    /// Creates a pipeline backed by the supplied generation provider.
    #[must_use]
    pub fn new(model: Arc<dyn StructuredModel>) -> Self {
        Self {
            model,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Sets the sampling temperature passed to the provider.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum output token budget passed to the provider.
    #[must_use]
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    /// Executes the pipeline stages for one request.
    ///
    /// Validate, build the prompt, call the provider once, verify. The
    /// first failing stage short-circuits to its terminal outcome.
    pub async fn run(&self, raw: RawQuizRequest) -> Outcome {
        let request_id = RequestId::random();

        let request = match raw.validate() {
            Ok(request) => request,
            Err(err) => {
                info!(%request_id, error = %err, "request rejected before generation");
                return Outcome::Invalid(err);
            }
        };

        let prompt = QuizPrompt::for_request(&request);

        let schema = match OutputSchema::new(SCHEMA_NAME, QuestionSet::json_schema()) {
            Ok(schema) => schema,
            Err(err) => return Outcome::Internal(err.to_string()),
        };
        let mut structured = match StructuredRequest::new(prompt.system(), prompt.user()) {
            Ok(structured) => structured,
            Err(err) => return Outcome::Internal(err.to_string()),
        };
        if let Some(temperature) = self.temperature {
            structured = structured.with_temperature(temperature);
        }
        if let Some(tokens) = self.max_output_tokens {
            structured = structured.with_max_output_tokens(tokens);
        }

        debug!(
            %request_id,
            provider = self.model.metadata().provider(),
            model = self.model.metadata().model(),
            level = %request.level(),
            "invoking generation provider"
        );

        let result = match self.model.generate(structured, &schema).await {
            Ok(result) => result,
            Err(err) => {
                warn!(%request_id, error = %err, "generation provider failed");
                return Outcome::GenerationFailure(err.to_string());
            }
        };

        let outcome = verify(result);
        info!(%request_id, outcome = outcome.label(), "pipeline finished");
        outcome
    }

    /// Parses a raw JSON request body and runs the pipeline.
    ///
    /// An empty body is treated as an empty object; a body that is not
    /// valid JSON maps to the internal-error response class.
    pub async fn handle(&self, body: &[u8]) -> ApiResponse {
        let raw = if body.is_empty() {
            RawQuizRequest::default()
        } else {
            match serde_json::from_slice::<RawQuizRequest>(body) {
                Ok(raw) => raw,
                Err(err) => {
                    return ApiResponse::from_outcome(Outcome::Internal(format!(
                        "malformed request body: {err}"
                    )));
                }
            }
        };

        ApiResponse::from_outcome(self.run(raw).await)
    }
}

impl std::fmt::Debug for QuizPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizPipeline")
            .field("provider", &self.model.metadata().provider())
            .field("model", &self.model.metadata().model())
            .finish_non_exhaustive()
    }
}
