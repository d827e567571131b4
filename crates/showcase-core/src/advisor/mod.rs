//! Advisor backend contract.
//!
//! An [`AdvisorBackend`] is the fallible, provider-specific half of the AI
//! gateway: it turns one [`AdvisorRequest`] into raw model text. The
//! degrade-to-fallback policy lives one layer up, in the gateway.

use crate::chat::{ChatMessage, MessageRole};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling temperature used for every advisor call.
pub const ADVISOR_TEMPERATURE: f32 = 0.5;

/// Reply returned in place of any gateway failure.
pub const GATEWAY_FALLBACK_REPLY: &str =
    "• 系統連線繁忙\n• TPI 專業顧問隨時待命：service@tpisoftware.com";

/// Speaker of a history turn, in the model's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Model,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Model => "model",
        }
    }
}

/// One prior transcript entry sent as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

impl From<&ChatMessage> for ConversationTurn {
    fn from(message: &ChatMessage) -> Self {
        let speaker = match message.role {
            MessageRole::User => Speaker::User,
            MessageRole::Assistant => Speaker::Model,
        };
        Self::new(speaker, message.content.clone())
    }
}

/// Everything a backend needs for one completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorRequest {
    pub system_instruction: String,
    /// Transcript up to, but excluding, the new user text.
    pub history: Vec<ConversationTurn>,
    pub user_text: String,
    pub temperature: f32,
}

/// Hosted text-generation endpoint.
///
/// Implementations report every transport, auth, or provider problem as
/// [`crate::ShowcaseError::GatewayUnavailable`].
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// Short description used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, request: &AdvisorRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_messages_become_model_turns() {
        let user = ChatMessage::user("我想了解雲地混合佈署");
        let assistant = ChatMessage::assistant("• 請問數據量體？");

        let turns: Vec<ConversationTurn> = [&user, &assistant].into_iter().map(Into::into).collect();

        assert_eq!(turns[0], ConversationTurn::new(Speaker::User, "我想了解雲地混合佈署"));
        assert_eq!(turns[1].speaker, Speaker::Model);
        assert_eq!(turns[1].speaker.as_str(), "model");
    }
}
