//! Generation provider adapters used by the quiz pipeline.
//!
//! Providers are reached through the trait-based interface in [`traits`];
//! every adapter requests *structured* output governed by a named JSON
//! schema rather than free text.

#![warn(missing_docs, clippy::pedantic)]

pub mod openai;
pub mod traits;

mod https;
