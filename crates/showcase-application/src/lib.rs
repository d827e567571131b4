//! Application layer for the showcase.
//!
//! Coordinates the case repository, the advisor gateway and the chat state
//! machine behind the operations a front end calls.

pub mod chat_session;
pub mod showcase_usecase;

pub use chat_session::{
    ChatPhase, ChatSession, ChatSessionConfig, ChatSnapshot, HandoffOutcome, SubmitOutcome,
    SubmitRejection,
};
pub use showcase_usecase::ShowcaseUseCase;
