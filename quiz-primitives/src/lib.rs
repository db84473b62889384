//! Core shared types for the quiz generation pipeline.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod ids;
mod level;
mod question;
mod request;

/// Validation error type and result alias shared across the pipeline.
pub use error::{ValidationError, ValidationResult};
/// Correlation identifier attached to each pipeline run.
pub use ids::RequestId;
/// Closed set of Bloom's taxonomy cognitive levels.
pub use level::BloomsLevel;
/// Question/answer pairs and the count-enforced question set.
pub use question::{EXPECTED_QUESTIONS, QuestionAnswer, QuestionSet, WrongQuestionCount};
/// Untrusted and validated views of an inbound generation request.
pub use request::{QuizRequest, RawQuizRequest};
