//! Question/answer pairs and the count-enforced question set.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Number of question/answer pairs every generated set must contain.
pub const EXPECTED_QUESTIONS: usize = 10;

/// A single generated question with its correct answer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuestionAnswer {
    question: String,
    answer: String,
}

impl QuestionAnswer {
    /// Creates a new question/answer pair.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Returns the question text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Rejection raised when a generated set does not contain exactly
/// [`EXPECTED_QUESTIONS`] entries.
///
/// Carries the offending questions untouched so callers can surface the
/// partial result for diagnostics. The Display string is the client-facing
/// message and is kept stable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Expected 10 questions, but received {actual}.")]
pub struct WrongQuestionCount {
    actual: usize,
    questions: Vec<QuestionAnswer>,
}

impl WrongQuestionCount {
    /// Returns the number of questions actually received.
    #[must_use]
    pub const fn actual(&self) -> usize {
        self.actual
    }

    /// Returns the rejected questions, order and content preserved.
    #[must_use]
    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.questions
    }

    /// Consumes the rejection and returns the rejected questions.
    #[must_use]
    pub fn into_questions(self) -> Vec<QuestionAnswer> {
        self.questions
    }
}

/// An ordered set of exactly [`EXPECTED_QUESTIONS`] question/answer pairs.
///
/// The count invariant is enforced at construction; a value of this type
/// always holds exactly ten entries in generator order.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<QuestionAnswer>,
}

impl QuestionSet {
    /// Builds a set from the supplied questions.
    ///
    /// # Errors
    ///
    /// Returns [`WrongQuestionCount`] when the length is not exactly
    /// [`EXPECTED_QUESTIONS`]; the rejected questions travel with the error.
    pub fn new(questions: Vec<QuestionAnswer>) -> Result<Self, WrongQuestionCount> {
        if questions.len() == EXPECTED_QUESTIONS {
            Ok(Self { questions })
        } else {
            Err(WrongQuestionCount {
                actual: questions.len(),
                questions,
            })
        }
    }

    /// Returns the questions in generator order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.questions
    }

    /// Strict JSON schema describing the structured output expected from
    /// the generation provider.
    #[must_use]
    pub fn json_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "answer": { "type": "string" }
                        },
                        "required": ["question", "answer"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["questions"],
            "additionalProperties": false
        })
    }
}
