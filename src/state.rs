//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the LLM collaborator behind a trait object so handlers and tests
//! never care which provider backs it. The pipeline itself is stateless per
//! request; there is nothing else to share.

use std::sync::Arc;

use crate::llm::LlmChat;

#[derive(Clone)]
pub struct AppState {
    /// LLM collaborator, absent when startup configuration failed.
    /// Generation requests are refused until one is configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}
