//! OpenAI-compatible chat-completion client, pointed at OpenRouter by default.

use crate::core::credentials::ApiKey;
use crate::domain::model::{ChatMessage, ProjectPlan};
use crate::utils::error::{PlannerError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-preview-05-20";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default, deserialize_with = "lenient_usage")]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

// Kept as a raw value so a non-string content is reported instead of coerced.
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: serde_json::Value,
}

// Informational only; providers report partial or no usage.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl CompletionClient {
    /// No explicit timeout; the request runs until reqwest gives up.
    pub fn new(base_url: &str, api_key: ApiKey) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Single request, single choice. Failures are returned as-is, never retried.
    pub async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<ProjectPlan> {
        let url = self.endpoint();
        tracing::debug!("Sending {} messages to {} (model {})", messages.len(), url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&ChatCompletionRequest { model, messages })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error response body: {}", e);
                    String::new()
                }
            };
            return Err(PlannerError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

fn lenient_usage<'de, D>(deserializer: D) -> std::result::Result<Option<Usage>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn parse_completion(body: &str) -> Result<ProjectPlan> {
    let completion: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| PlannerError::MalformedResponse {
            reason: format!("invalid JSON body: {}", e),
        })?;

    if let Some(usage) = &completion.usage {
        tracing::debug!(
            "Token usage for {}: {:?} prompt, {:?} completion",
            completion.model.as_deref().unwrap_or("unknown model"),
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::MalformedResponse {
            reason: "response contained no choices".to_string(),
        })?;

    match choice.message.content {
        serde_json::Value::String(text) => Ok(ProjectPlan::new(text)),
        serde_json::Value::Null => Err(PlannerError::MalformedResponse {
            reason: "message content is missing".to_string(),
        }),
        other => Err(PlannerError::MalformedResponse {
            reason: format!("message content is not text: {}", other),
        }),
    }
}
