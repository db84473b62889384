//! Prompt construction for the quiz generation pipeline.
//!
//! [`catalog`] holds the per-level instruction fragments; [`QuizPrompt`]
//! composes them with a validated request into the system and user
//! instructions sent to the generation provider.

#![warn(missing_docs, clippy::pedantic)]

pub mod catalog;

mod builder;

pub use builder::QuizPrompt;
