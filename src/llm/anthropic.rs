//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`. Pure parsing in `parse_response`
//! for testability.

use std::time::Duration;

use serde_json::Value;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    pub async fn chat(&self, model: &str, max_tokens: u32, system: &str, user: &str) -> Result<ChatResponse, LlmError> {
        let body = ApiRequest {
            model,
            max_tokens,
            system,
            messages: vec![WireMessage { role: "user", content: user }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(serde::Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let input_tokens = root
        .get("usage")
        .and_then(|u| u.get("input_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let output_tokens = root
        .get("usage")
        .and_then(|u| u.get("output_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(blocks) = root.get("content").and_then(Value::as_array) else {
        return Err(LlmError::ApiParse("messages: missing content array".to_string()));
    };

    // Join text blocks; thinking and other block kinds are ignored.
    let text: String = blocks
        .iter()
        .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|b| b.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ChatResponse { text, model, input_tokens, output_tokens })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_response() {
        let json = serde_json::json!({
            "model": "claude-sonnet-4-5-20250929",
            "content": [{ "type": "text", "text": "{\"layout\":\"centered\"}" }],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 12, "output_tokens": 7 }
        })
        .to_string();
        let resp = parse_response(&json).unwrap();
        assert_eq!(resp.text, "{\"layout\":\"centered\"}");
        assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
        assert_eq!(resp.input_tokens, 12);
        assert_eq!(resp.output_tokens, 7);
    }

    #[test]
    fn parse_skips_non_text_blocks() {
        let json = serde_json::json!({
            "model": "m",
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "text", "text": "answer" }
            ],
            "usage": { "input_tokens": 1, "output_tokens": 1 }
        })
        .to_string();
        let resp = parse_response(&json).unwrap();
        assert_eq!(resp.text, "answer");
    }

    #[test]
    fn parse_missing_content_errors() {
        let json = serde_json::json!({ "model": "m" }).to_string();
        assert!(parse_response(&json).is_err());
    }
}
