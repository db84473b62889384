//! Terminal outcome of a pipeline run.

use quiz_primitives::{QuestionAnswer, QuestionSet, ValidationError};

/// Terminal result of processing one generation request.
///
/// Exactly one variant is produced per request, and each variant maps to
/// exactly one response class in [`ApiResponse`](crate::ApiResponse).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Generation succeeded and the verified set holds exactly ten pairs.
    Success(QuestionSet),
    /// The inbound request was rejected before any generation was attempted.
    Invalid(ValidationError),
    /// The provider returned a well-formed set with the wrong question count.
    CountMismatch {
        /// Number of questions actually received.
        actual: usize,
        /// The rejected questions, order and content preserved.
        partial: Vec<QuestionAnswer>,
    },
    /// The provider call itself failed (transport or provider error).
    GenerationFailure(String),
    /// The provider answered but no structured value could be extracted.
    Unparsable,
    /// A runtime fault outside the provider call.
    Internal(String),
}

impl Outcome {
    /// Short stable label used in log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Invalid(_) => "invalid",
            Self::CountMismatch { .. } => "count_mismatch",
            Self::GenerationFailure(_) => "generation_failure",
            Self::Unparsable => "unparsable",
            Self::Internal(_) => "internal",
        }
    }
}
