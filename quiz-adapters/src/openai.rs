//! `OpenAI` adapter requesting schema-constrained structured output.

use std::{env, fmt, time::Duration};

use async_trait::async_trait;
use hyper::body::to_bytes;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::{Body, Request, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::timeout;
use tracing::warn;

use crate::https::{HttpsClient, build_https_client};
use crate::traits::{
    AdapterError, AdapterMetadata, AdapterResult, OutputSchema, StructuredModel, StructuredRequest,
};

/// Environment variable used when loading configuration automatically.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Model used when the configuration does not override it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini-2024-07-18";

/// Configuration for the `OpenAI` adapter.
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
    default_temperature: Option<f32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAiConfig {
    /// Creates a configuration using [`DEFAULT_MODEL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: "https://api.openai.com/".to_owned(),
            timeout: Duration::from_secs(60),
            default_temperature: None,
        }
    }

    /// Loads the API key from the `OPENAI_API_KEY` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::new();
        cfg.api_key = env::var(OPENAI_API_KEY_ENV).ok();
        cfg
    }

    /// Overrides the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the base URL used for API calls.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] if the supplied URL is invalid.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> AdapterResult<Self> {
        self.base_url = sanitize_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Sets the default sampling temperature used when requests omit it.
    #[must_use]
    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = Some(temperature);
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supplies an explicit API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// `OpenAI` adapter that calls the chat completions API over HTTPS.
pub struct OpenAiAdapter {
    client: HttpsClient,
    endpoint: Uri,
    metadata: AdapterMetadata,
    api_key: String,
    timeout: Duration,
    default_temperature: Option<f32>,
}

impl fmt::Debug for OpenAiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiAdapter")
            .field("model", &self.metadata.model())
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiAdapter {
    /// Constructs a new adapter with the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] if the API key is missing.
    pub fn new(config: OpenAiConfig) -> AdapterResult<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| AdapterError::configuration("OpenAI adapter requires an API key"))?;

        let metadata = AdapterMetadata::new("openai", config.model.clone());
        let endpoint = format!("{}v1/chat/completions", config.base_url)
            .parse::<Uri>()
            .map_err(|err| {
                AdapterError::configuration(format!("invalid OpenAI endpoint: {err}"))
            })?;

        let client = build_https_client()?;

        Ok(Self {
            client,
            endpoint,
            metadata,
            api_key,
            timeout: config.timeout,
            default_temperature: config.default_temperature,
        })
    }

    fn build_payload(
        &self,
        request: &StructuredRequest,
        schema: &OutputSchema,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.metadata.model().to_owned(),
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: request.system_prompt().to_owned(),
                },
                OpenAiMessage {
                    role: "user",
                    content: request.user_prompt().to_owned(),
                },
            ],
            temperature: request.temperature().or(self.default_temperature),
            max_tokens: request.max_output_tokens(),
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: schema.name().to_owned(),
                    strict: schema.strict(),
                    schema: schema.schema().clone(),
                },
            },
        }
    }
}

#[async_trait]
impl StructuredModel for OpenAiAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    async fn generate(
        &self,
        request: StructuredRequest,
        schema: &OutputSchema,
    ) -> AdapterResult<Option<Value>> {
        let payload = self.build_payload(&request, schema);
        let body = serde_json::to_vec(&payload).map_err(|err| {
            AdapterError::invalid_request(format!("failed to encode OpenAI request: {err}"))
        })?;

        let mut builder = Request::post(self.endpoint.clone());
        builder = builder.header(CONTENT_TYPE, "application/json");
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", self.api_key));

        let request = builder.body(Body::from(body)).map_err(|err| {
            AdapterError::transport(format!("failed to build OpenAI request: {err}"))
        })?;

        let response = timeout(self.timeout, self.client.request(request))
            .await
            .map_err(|_| AdapterError::transport("OpenAI request timed out"))?
            .map_err(|err| AdapterError::transport(format!("OpenAI request failed: {err}")))?;

        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.map_err(|err| {
            AdapterError::transport(format!("failed to read OpenAI response: {err}"))
        })?;

        if !status.is_success() {
            let reason = String::from_utf8_lossy(&bytes).to_string();
            return Err(AdapterError::response(format!(
                "OpenAI returned {status}: {reason}"
            )));
        }

        let envelope: ChatCompletionResponse =
            serde_json::from_slice(&bytes).map_err(|err| {
                AdapterError::response(format!("failed to decode OpenAI response: {err}"))
            })?;

        Ok(extract_structured_content(envelope))
    }
}

/// Pulls the structured value out of a decoded completion envelope.
///
/// Refusals, missing content, and content that is not valid JSON all map to
/// `None`: the provider call succeeded but structured extraction did not.
fn extract_structured_content(envelope: ChatCompletionResponse) -> Option<Value> {
    let message = envelope
        .choices
        .into_iter()
        .find_map(|choice| choice.message)?;

    if let Some(refusal) = message.refusal {
        warn!(refusal = %refusal, "OpenAI refused the generation request");
        return None;
    }

    let content = message.content?;
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "OpenAI content was not valid JSON");
            None
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "max_tokens")]
    max_tokens: Option<u32>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

fn sanitize_base_url(input: &str) -> AdapterResult<String> {
    let mut base = input.trim().to_owned();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(AdapterError::configuration(
            "OpenAI base URL must start with http:// or https://",
        ));
    }
    if !base.ends_with('/') {
        base.push('/');
    }
    base.parse::<Uri>()
        .map_err(|err| AdapterError::configuration(format!("invalid OpenAI base URL: {err}")))?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema() -> OutputSchema {
        OutputSchema::new("question_set", json!({"type": "object"})).unwrap()
    }

    #[test]
    fn base_url_requires_scheme() {
        let err = OpenAiConfig::new()
            .with_base_url("api.openai.com")
            .expect_err("missing scheme should error");

        assert!(matches!(err, AdapterError::Configuration { .. }));
    }

    #[test]
    fn sanitize_appends_trailing_slash() {
        let cfg = OpenAiConfig::new()
            .with_base_url("https://example.com/openai")
            .expect("valid URL");
        assert_eq!(cfg.base_url, "https://example.com/openai/");
    }

    #[test]
    fn adapter_requires_api_key() {
        let err = OpenAiAdapter::new(OpenAiConfig::new()).expect_err("key required");
        assert!(matches!(err, AdapterError::Configuration { .. }));
    }

    #[test]
    fn payload_carries_schema_and_prompts() {
        let adapter = OpenAiAdapter::new(OpenAiConfig::new().with_api_key("test_key")).unwrap();
        let request = StructuredRequest::new("be an educator", "the lesson").unwrap();

        let payload = adapter.build_payload(&request, &schema());
        assert_eq!(payload.model, DEFAULT_MODEL);
        assert_eq!(payload.messages.len(), 2);
        assert_eq!(payload.messages[0].role, "system");
        assert_eq!(payload.messages[1].content, "the lesson");
        assert_eq!(payload.response_format.kind, "json_schema");
        assert_eq!(payload.response_format.json_schema.name, "question_set");
        assert!(payload.response_format.json_schema.strict);
    }

    #[test]
    fn payload_uses_default_temperature() {
        let adapter = OpenAiAdapter::new(
            OpenAiConfig::new()
                .with_default_temperature(0.2)
                .with_api_key("test_key"),
        )
        .unwrap();
        let request = StructuredRequest::new("system", "user").unwrap();

        let payload = adapter.build_payload(&request, &schema());
        assert_eq!(payload.temperature, Some(0.2));
    }

    #[test]
    fn extracts_structured_json_content() {
        let envelope: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "content": "{\"questions\": []}" } }
            ]
        }))
        .unwrap();

        let value = extract_structured_content(envelope).expect("structured value");
        assert_eq!(value, json!({"questions": []}));
    }

    #[test]
    fn refusal_yields_no_content() {
        let envelope: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "refusal": "cannot comply" } }
            ]
        }))
        .unwrap();

        assert!(extract_structured_content(envelope).is_none());
    }

    #[test]
    fn non_json_content_yields_no_content() {
        let envelope: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "content": "plain prose" } }
            ]
        }))
        .unwrap();

        assert!(extract_structured_content(envelope).is_none());
    }

    #[test]
    fn empty_choices_yield_no_content() {
        let envelope: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_structured_content(envelope).is_none());
    }
}
