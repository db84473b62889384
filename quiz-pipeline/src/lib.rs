//! Request pipeline turning a lesson plan and a Bloom's taxonomy level into
//! a verified set of exactly ten question/answer pairs.
//!
//! Stages run strictly in sequence: validate the request, build the prompt,
//! invoke the generation provider once, verify the structured result, and
//! present the outcome as a response envelope. Each stage can short-circuit
//! to a terminal [`Outcome`]; nothing retries or loops back.

#![warn(missing_docs, clippy::pedantic)]

mod outcome;
mod pipeline;
mod respond;
mod verify;

pub use outcome::Outcome;
pub use pipeline::QuizPipeline;
pub use respond::ApiResponse;
pub use verify::verify;
