//! Sends one lesson plan through the full pipeline against OpenAI.
//!
//! Requires `OPENAI_API_KEY` in the environment.

use std::sync::Arc;

use anyhow::Result;
use quiz_adapters::openai::{OpenAiAdapter, OpenAiConfig};
use quiz_pipeline::QuizPipeline;
use quiz_primitives::RawQuizRequest;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let adapter = OpenAiAdapter::new(OpenAiConfig::from_env())?;
    let pipeline = QuizPipeline::new(Arc::new(adapter));

    let request = RawQuizRequest::new(
        "Photosynthesis converts light energy into chemical energy. \
         Chlorophyll in the chloroplasts absorbs light, water is split to \
         release oxygen, and carbon dioxide is fixed into glucose during \
         the Calvin cycle.",
        "Understand",
    );

    info!("running quiz generation pipeline");
    let outcome = pipeline.run(request).await;
    let response = quiz_pipeline::ApiResponse::from_outcome(outcome);

    info!(status = %response.status(), "pipeline finished");
    println!("{}", serde_json::to_string_pretty(response.body())?);

    Ok(())
}
