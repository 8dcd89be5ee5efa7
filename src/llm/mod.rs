//! LLM — multi-provider collaborator adapter.
//!
//! DESIGN
//! ======
//! One configured client, created once at startup and injected into the
//! pipeline as `Arc<dyn LlmChat>`. The `LlmClient` enum dispatches to
//! Anthropic or an OpenAI-compatible endpoint (OpenAI, OpenRouter) based on
//! `LLM_PROVIDER`. No retry/backoff here — a failed call surfaces
//! immediately as a collaborator error.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::{ChatResponse, LlmChat, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client. Configured from environment variables by
/// [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables (see
    /// [`LlmConfig::from_env`] for the variable set).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.timeouts)?)
            }
            LlmProviderKind::OpenAi | LlmProviderKind::OpenRouter => LlmProvider::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.openai_mode,
                config.base_url,
                config.timeouts,
                config.attribution,
            )?),
        };
        Ok(Self { inner, model })
    }

    /// Return the configured model name (e.g. `"openai/gpt-4o-mini"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, user: &str) -> Result<ChatResponse, LlmError> {
        match &self.inner {
            LlmProvider::Anthropic(c) => c.chat(&self.model, max_tokens, system, user).await,
            LlmProvider::OpenAi(c) => c.chat(&self.model, max_tokens, system, user).await,
        }
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================
