//! AdvisorGateway - the single outbound call behind the chat.
//!
//! Builds the advisor request (system instruction, history, new query,
//! temperature 0.5), hands it to an [`AdvisorBackend`] and turns every failure
//! into the fixed fallback reply. Callers always get renderable text back.

use crate::advisor_prompt::render_system_instruction;
use showcase_core::Result;
use showcase_core::advisor::{
    ADVISOR_TEMPERATURE, AdvisorBackend, AdvisorRequest, ConversationTurn, GATEWAY_FALLBACK_REPLY,
};
use showcase_core::case::SuccessCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdvisorGateway {
    backend: Arc<dyn AdvisorBackend>,
    temperature: f32,
    fallback_reply: String,
}

impl AdvisorGateway {
    pub fn new(backend: Arc<dyn AdvisorBackend>) -> Self {
        Self {
            backend,
            temperature: ADVISOR_TEMPERATURE,
            fallback_reply: GATEWAY_FALLBACK_REPLY.to_string(),
        }
    }

    /// Asks the advisor about `query` given the known cases and prior turns.
    ///
    /// Returns the raw reply, which may contain directive markers. Never
    /// fails: any error is logged and replaced with the fallback reply.
    pub async fn ask(
        &self,
        query: &str,
        known_cases: &[SuccessCase],
        history: &[ConversationTurn],
    ) -> String {
        match self.try_ask(query, known_cases, history).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(
                    "[AdvisorGateway] {} failed, replying with fallback: {}",
                    self.backend.name(),
                    err
                );
                self.fallback_reply.clone()
            }
        }
    }

    async fn try_ask(
        &self,
        query: &str,
        known_cases: &[SuccessCase],
        history: &[ConversationTurn],
    ) -> Result<String> {
        let request = AdvisorRequest {
            system_instruction: render_system_instruction(known_cases)?,
            history: history.to_vec(),
            user_text: query.to_string(),
            temperature: self.temperature,
        };

        tracing::info!(
            "[AdvisorGateway] Asking {} (history: {} turns, cases: {})",
            self.backend.name(),
            request.history.len(),
            known_cases.len()
        );
        self.backend.generate(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use showcase_core::ShowcaseError;
    use showcase_core::advisor::Speaker;
    use showcase_core::case::seed_cases;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        requests: Mutex<Vec<AdvisorRequest>>,
    }

    #[async_trait]
    impl AdvisorBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, request: &AdvisorRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            Ok("• 請問您的產業別？".to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AdvisorBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _request: &AdvisorRequest) -> Result<String> {
            Err(ShowcaseError::gateway_status(503, "UNAVAILABLE"))
        }
    }

    #[tokio::test]
    async fn test_ask_builds_request_and_returns_raw_text() {
        let backend = Arc::new(RecordingBackend::default());
        let gateway = AdvisorGateway::new(backend.clone());
        let history = vec![ConversationTurn::new(Speaker::Model, "• 歡迎")];

        let reply = gateway.ask("我想了解雲地混合佈署", &seed_cases(), &history).await;

        assert_eq!(reply, "• 請問您的產業別？");
        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].user_text, "我想了解雲地混合佈署");
        assert_eq!(requests[0].history, history);
        assert_eq!(requests[0].temperature, 0.5);
        assert!(requests[0].system_instruction.contains("[ID: 6]"));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let gateway = AdvisorGateway::new(Arc::new(FailingBackend));
        let reply = gateway.ask("hello", &[], &[]).await;
        assert_eq!(reply, GATEWAY_FALLBACK_REPLY);
        assert!(reply.contains("service@tpisoftware.com"));
    }
}
