//! Bloom's taxonomy cognitive levels.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Cognitive skill level from Bloom's revised taxonomy.
///
/// The set is closed: six levels, fixed at compile time, matched
/// case-sensitively against their canonical names on parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum BloomsLevel {
    /// Recall of facts, terms, and basic concepts.
    Remember,
    /// Demonstrating comprehension of facts and ideas.
    Understand,
    /// Applying acquired knowledge in new situations.
    Apply,
    /// Breaking information into parts and finding relationships.
    Analyze,
    /// Making and defending judgments against criteria.
    Evaluate,
    /// Combining elements into a new pattern or solution.
    Create,
}

impl BloomsLevel {
    /// All six levels in taxonomy order.
    pub const ALL: [Self; 6] = [
        Self::Remember,
        Self::Understand,
        Self::Apply,
        Self::Analyze,
        Self::Evaluate,
        Self::Create,
    ];

    /// Returns the canonical level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Remember => "Remember",
            Self::Understand => "Understand",
            Self::Apply => "Apply",
            Self::Analyze => "Analyze",
            Self::Evaluate => "Evaluate",
            Self::Create => "Create",
        }
    }
}

impl Display for BloomsLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BloomsLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or(ValidationError::UnknownLevel)
    }
}
