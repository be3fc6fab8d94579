//! OpenAI-compatible chat-completions client

use crate::config::LlmConfig;
use crate::error::{PilotError, Result};
use crate::instruction::{Step, parse_step_list};
use crate::llm::{InstructionProvider, RefinementProvider, prompts, strip_code_fences};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Blocking client for any `/chat/completions` endpoint (OpenAI, Ollama, vLLM, ...)
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| PilotError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system + user exchange and return the assistant's text
    pub fn complete(&self, system: &str, user: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: 0.2,
        };

        let mut request = self.client.post(format!("{}/chat/completions", self.base_url)).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        log::debug!("Requesting completion from {} ({})", self.base_url, self.model);
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(PilotError::Llm(format!("{} returned {}: {}", self.base_url, status, text)));
        }

        let data: ChatResponse = response.json()?;
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PilotError::Llm("response contained no message content".to_string()))
    }
}

impl InstructionProvider for OpenAiClient {
    fn generate_instructions(&self, command: &str) -> Result<Vec<Step>> {
        let content = self.complete(&prompts::planner_system_prompt(), command)?;
        parse_step_list(strip_code_fences(&content))
    }
}

impl RefinementProvider for OpenAiClient {
    fn refine_code(&self, code: &str, refinement: &str) -> Result<String> {
        let content = self
            .complete(prompts::refiner_system_prompt(), &prompts::refiner_user_prompt(code, refinement))?;

        let refined = strip_code_fences(&content);
        if refined.is_empty() {
            return Err(PilotError::RefinementFailed("model returned an empty document".to_string()));
        }
        Ok(refined.to_string())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
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
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
