//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls `models/{model}:generateContent` with the conversation history, the
//! advisor system instruction and a fixed sampling temperature.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use showcase_core::advisor::{AdvisorBackend, AdvisorRequest, ConversationTurn, Speaker};
use showcase_core::config::{AdvisorSettings, DEFAULT_GEMINI_BASE_URL};
use showcase_core::secret::SecretService;
use showcase_core::{Result, ShowcaseError};
use std::time::Duration;

/// Backend implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Builds an agent from secret.json plus the `[advisor]` settings.
    ///
    /// The model named in secret.json wins over `settings.model`.
    pub async fn try_from_secrets(
        secrets: &dyn SecretService,
        settings: &AdvisorSettings,
    ) -> Result<Self> {
        let secret_config = secrets.load_secrets().await?;
        let gemini_config = secret_config.gemini.ok_or_else(|| {
            ShowcaseError::config(
                "Gemini configuration not found in secret.json (or GEMINI_API_KEY)",
            )
        })?;

        let model = gemini_config
            .model_name
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| settings.model.clone());

        let mut agent = Self::new(gemini_config.api_key, model).with_base_url(&settings.base_url);
        if let Some(timeout) = settings.request_timeout() {
            agent = agent.with_timeout(timeout)?;
        }
        Ok(agent)
    }

    /// Points the agent at another endpoint root (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the HTTP client with one that enforces `timeout` per request.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShowcaseError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(self)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body(request: &AdvisorRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request.history.iter().map(Content::from_turn).collect();
        contents.push(Content {
            role: Some(Speaker::User.as_str().to_string()),
            parts: vec![Part {
                text: request.user_text.clone(),
            }],
        });

        let system_instruction = (!request.system_instruction.trim().is_empty()).then(|| Content {
            role: None,
            parts: vec![Part {
                text: request.system_instruction.clone(),
            }],
        });

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent",
            self.base_url,
            model = self.model
        );

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            // the URL carries the API key
            .map_err(|err| {
                ShowcaseError::gateway(format!("Gemini API request failed: {}", err.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ShowcaseError::gateway(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl AdvisorBackend for GeminiApiAgent {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &AdvisorRequest) -> Result<String> {
        let body = Self::build_body(request);
        tracing::debug!(
            "[GeminiApiAgent] generateContent model={} history_turns={}",
            self.model,
            request.history.len()
        );
        self.send_request(&body).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn from_turn(turn: &ConversationTurn) -> Self {
        Self {
            role: Some(turn.speaker.as_str().to_string()),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    let content = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .ok_or_else(|| ShowcaseError::gateway("Gemini API returned no candidates"))?;

    let texts: Vec<String> = content.parts.into_iter().filter_map(|part| part.text).collect();
    if texts.is_empty() {
        return Err(ShowcaseError::gateway(
            "Gemini API returned no text in the response candidates",
        ));
    }
    Ok(texts.concat())
}

fn map_http_error(status: StatusCode, body: String) -> ShowcaseError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    ShowcaseError::gateway_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AdvisorRequest {
        AdvisorRequest {
            system_instruction: "persona".to_string(),
            history: vec![
                ConversationTurn::new(Speaker::Model, "• 歡迎"),
                ConversationTurn::new(Speaker::User, "hi"),
                ConversationTurn::new(Speaker::Model, "• 請問產業別？"),
            ],
            user_text: "金融業".to_string(),
            temperature: 0.5,
        }
    }

    #[test]
    fn test_body_orders_history_then_new_user_text() {
        let body = serde_json::to_value(GeminiApiAgent::build_body(&request())).unwrap();

        let contents = body["contents"].as_array().unwrap();
        let roles: Vec<&str> = contents.iter().map(|c| c["role"].as_str().unwrap()).collect();
        assert_eq!(roles, vec!["model", "user", "model", "user"]);
        assert_eq!(contents[3]["parts"][0]["text"], "金融業");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "persona");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_blank_system_instruction_is_omitted() {
        let mut req = request();
        req.system_instruction = "  ".to_string();
        let body = serde_json::to_value(GeminiApiAgent::build_body(&req)).unwrap();
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_extract_concatenates_first_candidate_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"a "},{"text":"b"}]}},{"content":{"parts":[{"text":"other"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "a b");
    }

    #[test]
    fn test_extract_without_candidates_fails() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_text_response(parsed).unwrap_err().is_gateway_unavailable());
    }

    #[test]
    fn test_map_http_error_uses_error_envelope() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        assert_eq!(
            err,
            ShowcaseError::gateway_status(429, "RESOURCE_EXHAUSTED: Quota exceeded")
        );
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err, ShowcaseError::gateway_status(502, "upstream down"));
    }
}
