/// Oracle adapter — the single point of entry for all generative-AI calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All oracle interactions MUST go through this module.
///
/// Every call is attempted exactly ONCE — no retry loop, no backoff. A
/// transport or parse failure propagates to the caller as a request failure.
/// The only place a failure is absorbed is the best-effort research call,
/// and that absorption lives at the call site (`actions::research`), not
/// here.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all oracle calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("oracle unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("oracle API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("oracle response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("oracle returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single oracle client shared by all use-cases.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes one call to the oracle, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "oracle call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }

    /// Calls the oracle and parses the text content as JSON, returning the
    /// parsed value together with the raw text — every use-case response
    /// carries the raw oracle text for diagnostics.
    ///
    /// Syntactic invalidity is fatal here. Semantic sparseness is not our
    /// concern — the merge engine handles it per field.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<(T, String), LlmError> {
        let response = self.call(prompt, system).await?;

        let raw = response.text().ok_or(LlmError::EmptyContent)?.to_string();

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&raw);

        let parsed = serde_json::from_str(text).map_err(LlmError::Parse)?;
        Ok((parsed, raw))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from oracle output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response = LlmResponse {
            content: vec![
                ContentBlock {
                    block_type: "thinking".to_string(),
                    text: None,
                },
                ContentBlock {
                    block_type: "text".to_string(),
                    text: Some("hello".to_string()),
                },
            ],
            usage: Usage {
                input_tokens: 1,
                output_tokens: 1,
            },
        };
        assert_eq!(response.text(), Some("hello"));
    }
}
