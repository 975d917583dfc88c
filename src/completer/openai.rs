use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::{Completer, Completion, TokenUsage};

/// A completer that calls the OpenAI Chat Completions API, or any endpoint
/// speaking the same protocol.
pub struct OpenAiCompleter {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompleter {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, system: &'a str, user: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        }
    }

    fn parse_response(body: &str) -> Result<Completion> {
        let api_resp: ApiResponse = serde_json::from_str(body)
            .with_context(|| format!("failed to parse completion response\nraw: {body}"))?;

        let Some(choice) = api_resp.choices.into_iter().next() else {
            bail!("OpenAI API returned no choices");
        };

        let text = match (choice.message.content, choice.message.refusal) {
            (Some(text), _) => text,
            (None, Some(refusal)) => bail!("model refused the request: {refusal}"),
            (None, None) => bail!("OpenAI API returned a choice without content"),
        };

        let usage = api_resp.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        });

        Ok(Completion { text, usage })
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn submit(&self, system: &str, user: &str) -> Result<Completion> {
        let body = self.build_request(system, user);
        let url = self.endpoint();

        tracing::debug!(%url, model = %self.model, "sending chat completion request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("request to OpenAI API failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("failed to read OpenAI API response")?;

        if !status.is_success() {
            bail!("OpenAI API error ({}): {}", status, text);
        }

        Self::parse_response(&text)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}
