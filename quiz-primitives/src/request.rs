//! Inbound generation request, before and after validation.

use serde::Deserialize;

use crate::{BloomsLevel, ValidationError, ValidationResult};

/// Untrusted view of an inbound request body.
///
/// Both fields are optional at this layer; [`RawQuizRequest::validate`]
/// is the only path to a usable [`QuizRequest`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawQuizRequest {
    /// Lesson plan text as supplied by the caller.
    #[serde(default)]
    pub lesson_plan: Option<String>,
    /// Bloom's taxonomy level name as supplied by the caller.
    #[serde(default)]
    pub blooms_level: Option<String>,
}

impl RawQuizRequest {
    /// Creates a raw request from the supplied field values.
    #[must_use]
    pub fn new(lesson_plan: impl Into<String>, blooms_level: impl Into<String>) -> Self {
        Self {
            lesson_plan: Some(lesson_plan.into()),
            blooms_level: Some(blooms_level.into()),
        }
    }

    /// Validates the raw fields into a [`QuizRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when either field is absent
    /// or empty, and [`ValidationError::UnknownLevel`] when the level is not
    /// one of the six canonical names (case-sensitive).
    pub fn validate(self) -> ValidationResult<QuizRequest> {
        let lesson_plan = self
            .lesson_plan
            .filter(|plan| !plan.is_empty())
            .ok_or(ValidationError::MissingField)?;
        let level_name = self
            .blooms_level
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingField)?;

        Ok(QuizRequest {
            lesson_plan,
            level: level_name.parse::<BloomsLevel>()?,
        })
    }
}

/// A validated generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    lesson_plan: String,
    level: BloomsLevel,
}

impl QuizRequest {
    /// Creates a validated request directly from typed parts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when the lesson plan is
    /// empty.
    pub fn new(lesson_plan: impl Into<String>, level: BloomsLevel) -> ValidationResult<Self> {
        let lesson_plan = lesson_plan.into();
        if lesson_plan.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(Self { lesson_plan, level })
    }

    /// Returns the lesson plan text.
    #[must_use]
    pub fn lesson_plan(&self) -> &str {
        &self.lesson_plan
    }

    /// Returns the target taxonomy level.
    #[must_use]
    pub const fn level(&self) -> BloomsLevel {
        self.level
    }
}
