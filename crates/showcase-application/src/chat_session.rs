//! Chat session controller.
//!
//! `ChatSession` owns the transcript, the request phase and the single pending
//! framework. It guarantees at most one advisor request in flight: a
//! submission made while `Awaiting` is rejected, not queued.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --submit_query--> Awaiting --reply or fallback--> Idle
//! ```
//!
//! The framework hand-off is a sub-flow on the pending framework:
//! `Pending --confirm--> Submitting --latency--> (cleared)`.
//!
//! Both transitions finish on a spawned task once started, so dropping the
//! caller's future (a timeout, a cancelled prompt) never strands the session
//! in `Awaiting` or the framework in `Submitting`.

use showcase_core::advisor::ConversationTurn;
use showcase_core::case::{CaseRepository, SuccessCase};
use showcase_core::chat::{
    ChatMessage, DEFAULT_GREETING, EMPTY_REPLY_FALLBACK, HANDOFF_CONFIRMATION, HandoffStatus,
    ParsedResponse, PendingFramework, QuickReply, Segment, segment_content, split_framework,
};
use showcase_core::config::AdvisorSettings;
use showcase_core::latency::SimulatedLatency;
use showcase_interaction::AdvisorGateway;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Request phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Awaiting,
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input was empty after trimming.
    Empty,
    /// An advisor request is already in flight.
    Busy,
    /// The session has been closed.
    Closed,
}

/// Result of [`ChatSession::submit_query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was made.
    Rejected(SubmitRejection),
    /// The assistant message appended for this turn, plus the framework it
    /// carried, if any.
    Answered {
        reply: ChatMessage,
        framework: Option<PendingFramework>,
    },
    /// The session was closed while the request was in flight; the reply
    /// was dropped.
    Discarded,
}

/// Result of [`ChatSession::confirm_framework_handoff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// No pending framework, or it was already submitted.
    Ignored,
    /// The confirmation message appended to the transcript.
    Confirmed(ChatMessage),
    /// The session was closed before the confirmation arrived.
    Discarded,
}

/// Point-in-time copy of the observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSnapshot {
    pub transcript: Vec<ChatMessage>,
    pub phase: ChatPhase,
    /// Hidden while a request is in flight.
    pub framework: Option<PendingFramework>,
}

/// Construction options for a [`ChatSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSessionConfig {
    /// Assistant message placed in the transcript at creation.
    pub greeting: Option<String>,
    /// Delay before the hand-off confirmation is appended.
    pub handoff_latency: SimulatedLatency,
}

impl Default for ChatSessionConfig {
    fn default() -> Self {
        Self {
            greeting: None,
            handoff_latency: AdvisorSettings::default().handoff_latency(),
        }
    }
}

impl ChatSessionConfig {
    /// No greeting and no simulated delay.
    pub fn immediate() -> Self {
        Self {
            greeting: None,
            handoff_latency: SimulatedLatency::none(),
        }
    }

    /// Interactive defaults from the `[advisor]` settings.
    ///
    /// An unset greeting falls back to [`DEFAULT_GREETING`]; an empty one
    /// disables it.
    pub fn from_settings(settings: &AdvisorSettings) -> Self {
        let greeting = match settings.greeting.as_deref() {
            None => Some(DEFAULT_GREETING.to_string()),
            Some(text) if text.trim().is_empty() => None,
            Some(text) => Some(text.to_string()),
        };
        Self {
            greeting,
            handoff_latency: settings.handoff_latency(),
        }
    }

    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }
}

struct ChatState {
    transcript: Vec<ChatMessage>,
    phase: ChatPhase,
    pending_framework: Option<PendingFramework>,
    closed: bool,
}

/// A single visitor conversation with the advisor.
pub struct ChatSession {
    session_id: String,
    state: Arc<RwLock<ChatState>>,
    gateway: AdvisorGateway,
    cases: Arc<dyn CaseRepository>,
    handoff_latency: SimulatedLatency,
}

impl ChatSession {
    pub fn new(
        session_id: impl Into<String>,
        gateway: AdvisorGateway,
        cases: Arc<dyn CaseRepository>,
        config: ChatSessionConfig,
    ) -> Self {
        let transcript = config
            .greeting
            .map(|greeting| vec![ChatMessage::assistant(greeting)])
            .unwrap_or_default();

        Self {
            session_id: session_id.into(),
            state: Arc::new(RwLock::new(ChatState {
                transcript,
                phase: ChatPhase::Idle,
                pending_framework: None,
                closed: false,
            })),
            gateway,
            cases,
            handoff_latency: config.handoff_latency,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Sends `input` to the advisor and appends both sides of the turn.
    ///
    /// The user message is appended before the request is made. The history
    /// sent is the transcript as it stood before that append. Gateway
    /// failures surface as the fallback reply, so an accepted submission
    /// always ends with one assistant message unless the session is closed.
    pub async fn submit_query(&self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Rejected(SubmitRejection::Empty);
        }

        let history: Vec<ConversationTurn> = {
            let mut state = self.state.write().await;
            if state.closed {
                return SubmitOutcome::Rejected(SubmitRejection::Closed);
            }
            if state.phase == ChatPhase::Awaiting {
                tracing::debug!(
                    "[ChatSession] {} busy, rejecting submission",
                    self.session_id
                );
                return SubmitOutcome::Rejected(SubmitRejection::Busy);
            }

            let history = state.transcript.iter().map(ConversationTurn::from).collect();
            state.transcript.push(ChatMessage::user(text));
            state.phase = ChatPhase::Awaiting;
            history
        };

        // The turn completes in its own task so a dropped caller cannot leave
        // the session stuck in `Awaiting`.
        let turn = complete_turn(
            Arc::clone(&self.state),
            self.session_id.clone(),
            self.gateway.clone(),
            self.cases.list_all(),
            text.to_string(),
            history,
        );
        match tokio::spawn(turn).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("[ChatSession] {} turn task failed: {}", self.session_id, err);
                SubmitOutcome::Discarded
            }
        }
    }

    /// Submits a canned prompt exactly as if it had been typed.
    pub async fn submit_quick_reply(&self, quick_reply: &QuickReply) -> SubmitOutcome {
        self.submit_query(&quick_reply.prompt).await
    }

    /// Hands the pending framework off to a consultant.
    ///
    /// Marks it `Submitting`, waits out the simulated latency, then appends
    /// the confirmation and clears it. A framework that replaced the
    /// submitted one in the meantime is kept. Ignored while a reply is in
    /// flight, since the framework card is hidden then.
    pub async fn confirm_framework_handoff(&self) -> HandoffOutcome {
        {
            let mut state = self.state.write().await;
            if state.closed || state.phase == ChatPhase::Awaiting {
                return HandoffOutcome::Ignored;
            }
            match state.pending_framework.as_mut() {
                Some(pending) if pending.status == HandoffStatus::Pending => {
                    pending.status = HandoffStatus::Submitting;
                }
                _ => return HandoffOutcome::Ignored,
            }
        }
        tracing::info!("[ChatSession] {} submitting framework", self.session_id);

        let handoff = complete_handoff(Arc::clone(&self.state), self.handoff_latency);
        match tokio::spawn(handoff).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("[ChatSession] {} hand-off task failed: {}", self.session_id, err);
                HandoffOutcome::Discarded
            }
        }
    }

    pub async fn snapshot(&self) -> ChatSnapshot {
        let state = self.state.read().await;
        ChatSnapshot {
            transcript: state.transcript.clone(),
            phase: state.phase,
            framework: match state.phase {
                ChatPhase::Idle => state.pending_framework.clone(),
                ChatPhase::Awaiting => None,
            },
        }
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.state.read().await.transcript.clone()
    }

    pub async fn phase(&self) -> ChatPhase {
        self.state.read().await.phase
    }

    /// The pending framework, regardless of phase.
    pub async fn pending_framework(&self) -> Option<PendingFramework> {
        self.state.read().await.pending_framework.clone()
    }

    /// Splits a message into text and resolvable case references.
    pub fn render(&self, message: &ChatMessage) -> Vec<Segment> {
        segment_content(&message.content, self.cases.as_ref())
    }

    /// Closes the session. In-flight results are discarded on arrival.
    pub async fn close(&self) {
        let mut state = self.state.write().await;
        if !state.closed {
            state.closed = true;
            tracing::info!("[ChatSession] {} closed", self.session_id);
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.state.read().await.closed
    }
}

/// Second half of a turn: ask the advisor, then apply the reply.
async fn complete_turn(
    state: Arc<RwLock<ChatState>>,
    session_id: String,
    gateway: AdvisorGateway,
    known_cases: Vec<SuccessCase>,
    text: String,
    history: Vec<ConversationTurn>,
) -> SubmitOutcome {
    let raw = gateway.ask(&text, &known_cases, &history).await;

    let mut state = state.write().await;
    if state.closed {
        tracing::info!("[ChatSession] {} closed during request, reply discarded", session_id);
        return SubmitOutcome::Discarded;
    }

    let ParsedResponse { reply, framework } = split_framework(&raw);
    let reply = if reply.trim().is_empty() {
        ChatMessage::assistant(EMPTY_REPLY_FALLBACK)
    } else {
        ChatMessage::assistant(reply)
    };
    state.transcript.push(reply.clone());

    let framework = framework.map(PendingFramework::new);
    if let Some(pending) = &framework {
        tracing::info!("[ChatSession] {} received a framework", session_id);
        state.pending_framework = Some(pending.clone());
    }
    state.phase = ChatPhase::Idle;

    SubmitOutcome::Answered { reply, framework }
}

/// Second half of a hand-off: wait, confirm, clear the submitted framework.
async fn complete_handoff(
    state: Arc<RwLock<ChatState>>,
    latency: SimulatedLatency,
) -> HandoffOutcome {
    latency.elapse().await;

    let mut state = state.write().await;
    if state.closed {
        return HandoffOutcome::Discarded;
    }

    let confirmation = ChatMessage::assistant(HANDOFF_CONFIRMATION);
    state.transcript.push(confirmation.clone());
    if state
        .pending_framework
        .as_ref()
        .is_some_and(PendingFramework::is_submitting)
    {
        state.pending_framework = None;
    }
    HandoffOutcome::Confirmed(confirmation)
}
