#![allow(dead_code)]

use async_trait::async_trait;
use showcase_application::{ChatSession, ChatSessionConfig};
use showcase_core::advisor::{AdvisorBackend, AdvisorRequest};
use showcase_core::case::CaseRepository;
use showcase_core::{Result, ShowcaseError};
use showcase_infrastructure::InMemoryCaseRepository;
use showcase_interaction::AdvisorGateway;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Backend that replays scripted replies and records every request.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<AdvisorRequest>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn failing() -> Arc<Self> {
        Self::new(vec![Err(ShowcaseError::gateway_status(503, "UNAVAILABLE"))])
    }

    pub fn requests(&self) -> Vec<AdvisorRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvisorBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &AdvisorRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ShowcaseError::gateway("script exhausted")))
    }
}

/// Backend that blocks each call until released.
#[derive(Default)]
pub struct GatedBackend {
    pub started: Notify,
    pub release: Notify,
    calls: Mutex<usize>,
    reply: String,
}

impl GatedBackend {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AdvisorBackend for GatedBackend {
    fn name(&self) -> &str {
        "gated"
    }

    async fn generate(&self, _request: &AdvisorRequest) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}

pub fn seeded_cases() -> Arc<dyn CaseRepository> {
    Arc::new(InMemoryCaseRepository::seeded())
}

pub fn session_with(backend: Arc<dyn AdvisorBackend>, config: ChatSessionConfig) -> ChatSession {
    ChatSession::new(
        "test-session",
        AdvisorGateway::new(backend),
        seeded_cases(),
        config,
    )
}
