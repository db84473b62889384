//! Hard verification gate for the provider's structured result.

use quiz_primitives::{QuestionAnswer, QuestionSet};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::Outcome;

/// Loose view of the structured result, before the count gate.
#[derive(Debug, Deserialize)]
struct QuestionSetDraft {
    questions: Vec<QuestionAnswer>,
}

/// Verifies the raw structured result from the generation provider.
///
/// The provider is asked for exactly ten questions but is not trusted to
/// comply: an absent value or one that does not match the question-set
/// shape is [`Outcome::Unparsable`], a parsable set with the wrong length
/// is [`Outcome::CountMismatch`] carrying the untouched questions, and
/// only an exact-count set becomes [`Outcome::Success`]. No reordering,
/// mutation, or deduplication happens on any path.
#[must_use]
pub fn verify(result: Option<Value>) -> Outcome {
    let Some(value) = result else {
        warn!("provider returned no structured result");
        return Outcome::Unparsable;
    };

    let draft: QuestionSetDraft = match serde_json::from_value(value) {
        Ok(draft) => draft,
        Err(err) => {
            warn!(error = %err, "structured result did not match the question-set shape");
            return Outcome::Unparsable;
        }
    };

    match QuestionSet::new(draft.questions) {
        Ok(set) => Outcome::Success(set),
        Err(rejected) => {
            warn!(actual = rejected.actual(), "provider returned wrong question count");
            Outcome::CountMismatch {
                actual: rejected.actual(),
                partial: rejected.into_questions(),
            }
        }
    }
}
