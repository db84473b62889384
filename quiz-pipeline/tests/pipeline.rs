use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use http::StatusCode;
use quiz_adapters::traits::{
    AdapterError, AdapterMetadata, AdapterResult, OutputSchema, StructuredModel, StructuredRequest,
};
use quiz_pipeline::QuizPipeline;
use serde_json::{Value, json};

/// Canned provider behaviour for one scenario.
enum Script {
    Questions(usize),
    NoContent,
    Fail,
}

struct ScriptedModel {
    metadata: AdapterMetadata,
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl ScriptedModel {
    fn new(script: Script) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = Arc::new(Self {
            metadata: AdapterMetadata::new("test", "scripted"),
            script,
            calls: Arc::clone(&calls),
        });
        (model, calls)
    }
}

#[async_trait]
impl StructuredModel for ScriptedModel {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    async fn generate(
        &self,
        _request: StructuredRequest,
        _schema: &OutputSchema,
    ) -> AdapterResult<Option<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Questions(count) => {
                let questions: Vec<Value> = (0..*count)
                    .map(|i| json!({"question": format!("q{i}"), "answer": format!("a{i}")}))
                    .collect();
                Ok(Some(json!({ "questions": questions })))
            }
            Script::NoContent => Ok(None),
            Script::Fail => Err(AdapterError::transport("connection reset by provider")),
        }
    }
}

fn body(lesson_plan: &str, level: &str) -> Vec<u8> {
    json!({ "lessonPlan": lesson_plan, "bloomsLevel": level })
        .to_string()
        .into_bytes()
}

#[tokio::test]
async fn valid_request_returns_ten_questions_in_order() {
    let (model, calls) = ScriptedModel::new(Script::Questions(10));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline
        .handle(&body("Photosynthesis converts light to energy", "Remember"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let questions = response.body()["result"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["question"], "q0");
    assert_eq!(questions[9]["answer"], "a9");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_canonical_level_is_rejected_without_calling_provider() {
    let (model, calls) = ScriptedModel::new(Script::Questions(10));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline
        .handle(&body("Photosynthesis converts light to energy", "Memorize"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body()["error"], "Invalid Bloom's Taxonomy level");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn short_set_returns_count_mismatch_with_partial_result() {
    let (model, calls) = ScriptedModel::new(Script::Questions(7));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline.handle(&body("The water cycle", "Analyze")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body()["error"],
        "Expected 10 questions, but received 7."
    );
    let partial = response.body()["partialResult"]["questions"]
        .as_array()
        .unwrap();
    assert_eq!(partial.len(), 7);
    assert_eq!(partial[0]["question"], "q0");
    assert_eq!(partial[6]["question"], "q6");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_failure_returns_opaque_server_error() {
    let (model, _calls) = ScriptedModel::new(Script::Fail);
    let pipeline = QuizPipeline::new(model);

    let response = pipeline
        .handle(&body("Secret lesson about volcanoes", "Evaluate"))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body()["error"], "Internal server error");
    // No request fields echoed back.
    assert!(!response.body().to_string().contains("volcanoes"));
    assert!(!response.body().to_string().contains("connection reset"));
}

#[tokio::test]
async fn missing_lesson_plan_is_rejected_before_prompting() {
    let (model, calls) = ScriptedModel::new(Script::Questions(10));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline
        .handle(json!({"bloomsLevel": "Create"}).to_string().as_bytes())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body()["error"],
        "Lesson plan and Bloom's Taxonomy level are required"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn absent_structured_result_returns_parse_failure() {
    let (model, calls) = ScriptedModel::new(Script::NoContent);
    let pipeline = QuizPipeline::new(model);

    let response = pipeline.handle(&body("Plate tectonics", "Understand")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body()["error"], "Failed to parse model response");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_body_is_treated_as_missing_fields() {
    let (model, calls) = ScriptedModel::new(Script::Questions(10));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline.handle(b"").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body()["error"],
        "Lesson plan and Bloom's Taxonomy level are required"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_body_maps_to_server_error() {
    let (model, calls) = ScriptedModel::new(Script::Questions(10));
    let pipeline = QuizPipeline::new(model);

    let response = pipeline.handle(b"{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body()["error"], "Internal server error");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
