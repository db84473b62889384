//! Quiz generation pipeline facade.
//!
//! Depend on this crate via `cargo add quizgen`. It bundles the internal
//! pipeline crates behind feature flags so hosts can pull in only the
//! pieces they embed.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared domain types for convenience.
pub use quiz_primitives as primitives;

/// Taxonomy catalog and prompt construction (enabled by `prompts` feature).
#[cfg(feature = "prompts")]
pub use quiz_prompts as prompts;

/// Generation provider adapters (enabled by `adapters` feature).
#[cfg(feature = "adapters")]
pub use quiz_adapters as adapters;

/// Request pipeline and response mapping (enabled by `pipeline` feature).
#[cfg(feature = "pipeline")]
pub use quiz_pipeline as pipeline;
