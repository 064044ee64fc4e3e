//! OpenAI-compatible chat completions gateway.
//!
//! Works against any server exposing `POST {endpoint}/chat/completions` with bearer auth.
//! Calls block; the configured timeout bounds each one.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GatewayError, ModelGateway};
use crate::config::ModelConfig;
use crate::prompts::ANALYST_SYSTEM;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiGateway {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiGateway {
    pub fn new(config: &ModelConfig) -> Result<Self, GatewayError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self {
            client,
            url: chat_completions_url(&config.endpoint),
            api_key: api_key.to_string(),
            model: config.name.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ModelGateway for OpenAiGateway {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: ANALYST_SYSTEM },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending model request");
        let res = self.client.post(&self.url).bearer_auth(&self.api_key).json(&body).send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(GatewayError::Status { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = res.json()?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GatewayError::EmptyReply)?;

        debug!(reply_chars = reply.len(), "model replied");
        Ok(reply)
    }
}

fn chat_completions_url(endpoint: &str) -> String {
    format!("{}/chat/completions", endpoint.trim().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completions_url() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://localhost:11434/v1/"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = OpenAiGateway::new(&ModelConfig::default());
        assert!(matches!(result, Err(GatewayError::MissingApiKey)));
    }

    #[test]
    fn test_new_with_key() {
        let config = ModelConfig { api_key: "sk-test".to_string(), ..ModelConfig::default() };
        let gateway = OpenAiGateway::new(&config).unwrap();
        assert_eq!(gateway.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let config = ModelConfig {
            api_key: "sk-test".to_string(),
            endpoint: "http://127.0.0.1:9/v1".to_string(),
            timeout_secs: 5,
            ..ModelConfig::default()
        };
        let gateway = OpenAiGateway::new(&config).unwrap();
        assert!(matches!(gateway.complete("hello"), Err(GatewayError::Transport(_))));
    }

    #[test]
    fn test_chat_response_decoding() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"[Learning Goal 1]"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("[Learning Goal 1]"));
    }
}
