//! Shared generation adapter traits and data structures.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Result alias used by generation adapters.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Error type shared by adapter implementations.
///
/// An `Err` from [`StructuredModel::generate`] always means a
/// provider/transport-level failure; a provider call that succeeded but
/// yielded no usable structured value is reported as `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Adapter is misconfigured or missing credentials.
    #[error("adapter not configured: {reason}")]
    Configuration {
        /// Additional context for the failure.
        reason: String,
    },

    /// The supplied request was invalid for the target provider.
    #[error("invalid generation request: {reason}")]
    InvalidRequest {
        /// Reason describing why the request could not be processed.
        reason: String,
    },

    /// Transport-level failures (network, timeout, protocol).
    #[error("adapter transport error: {reason}")]
    Transport {
        /// Additional context about the error.
        reason: String,
    },

    /// The provider returned a non-success status or malformed envelope.
    #[error("adapter response error: {reason}")]
    Response {
        /// Additional context about the response failure.
        reason: String,
    },
}

impl AdapterError {
    /// Convenience constructor for invalid requests.
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for configuration issues.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for transport failures.
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for provider response failures.
    #[must_use]
    pub fn response(reason: impl Into<String>) -> Self {
        Self::Response {
            reason: reason.into(),
        }
    }
}

/// Minimal metadata describing an adapter instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterMetadata {
    provider: &'static str,
    model: String,
}

impl AdapterMetadata {
    /// Creates metadata for the supplied provider and model identifier.
    #[must_use]
    pub fn new(provider: &'static str, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Returns the provider identifier (e.g., "openai").
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        self.provider
    }

    /// Returns the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Named JSON schema constraining the provider's structured output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSchema {
    name: String,
    schema: Value,
    strict: bool,
}

impl OutputSchema {
    /// Creates a strict schema with the supplied name.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidRequest`] if the name is empty.
    pub fn new(name: impl Into<String>, schema: Value) -> AdapterResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AdapterError::invalid_request(
                "output schema requires a name",
            ));
        }
        Ok(Self {
            name,
            schema,
            strict: true,
        })
    }

    /// Relaxes strict schema enforcement for providers that reject it.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the schema name reported to the provider.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the JSON schema value.
    #[must_use]
    pub const fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns whether strict enforcement is requested.
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }
}

/// Request submitted to a generation adapter.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredRequest {
    system_prompt: String,
    user_prompt: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl StructuredRequest {
    /// Creates a request with the supplied system and user instructions.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidRequest`] if the user prompt is empty.
    pub fn new(
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> AdapterResult<Self> {
        let user_prompt = user_prompt.into();
        if user_prompt.is_empty() {
            return Err(AdapterError::invalid_request(
                "generation request requires a user prompt",
            ));
        }

        Ok(Self {
            system_prompt: system_prompt.into(),
            user_prompt,
            temperature: None,
            max_output_tokens: None,
        })
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum output token budget.
    #[must_use]
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    /// Returns the system instruction.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns the user instruction.
    #[must_use]
    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    /// Returns the configured sampling temperature.
    #[must_use]
    pub const fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Returns the configured maximum output tokens.
    #[must_use]
    pub const fn max_output_tokens(&self) -> Option<u32> {
        self.max_output_tokens
    }
}

/// Trait implemented by all generation adapters.
///
/// One call to [`generate`](Self::generate) makes exactly one outbound
/// provider request; adapters never retry, batch, or cache.
#[async_trait]
pub trait StructuredModel: Send + Sync {
    /// Returns basic metadata describing the adapter instance.
    fn metadata(&self) -> &AdapterMetadata;

    /// Executes the generation request against the provider.
    ///
    /// Returns `Ok(Some(value))` with a value intended to conform to
    /// `schema`, `Ok(None)` when the provider answered but structured
    /// extraction failed (refusal, empty or non-JSON content), and `Err`
    /// for provider/transport failures.
    async fn generate(
        &self,
        request: StructuredRequest,
        schema: &OutputSchema,
    ) -> AdapterResult<Option<Value>>;
}
