//! Composes the system and user instructions for a generation request.

use quiz_primitives::{EXPECTED_QUESTIONS, QuizRequest};
use tracing::debug;

use crate::catalog;

/// Prompt pair sent to the generation provider.
///
/// Built from a validated request; construction cannot fail and performs no
/// generation itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPrompt {
    system: String,
    user: String,
}

impl QuizPrompt {
    /// Builds the prompt pair for the supplied request.
    #[must_use]
    pub fn for_request(request: &QuizRequest) -> Self {
        let level = request.level();
        let fragment = catalog::instruction_fragment(level);

        let system = format!(
            "You are an expert educator specializing in creating questions \
             that target specific cognitive skills based on Bloom's Taxonomy. \
             Your task is to generate {EXPECTED_QUESTIONS} questions and \
             their correct answers based on the given lesson plan, focusing \
             on the \"{level}\" level of Bloom's Taxonomy.\n\n\
             For the \"{level}\" level, create questions that:\n{fragment}\n\n\
             Ensure that the questions are diverse and cover different \
             aspects of the lesson plan. You must generate exactly \
             {EXPECTED_QUESTIONS} questions, no more and no less."
        );
        let user = format!("Here's the lesson plan: {}", request.lesson_plan());

        debug!(level = %level, "built quiz prompt");

        Self { system, user }
    }

    /// Returns the system instruction.
    #[must_use]
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Returns the user instruction carrying the lesson plan.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}
