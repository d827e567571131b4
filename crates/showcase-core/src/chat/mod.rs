//! Chat domain module.
//!
//! # Module Structure
//!
//! - `message`: transcript message types (`MessageRole`, `ChatMessage`)
//! - `directive`: `[FRAME_GEN]` / `[案例: id]` parsing and render segments
//! - `framework`: pending framework and hand-off status
//! - `quick_reply`: canned prompts

pub mod directive;
mod framework;
mod message;
mod quick_reply;

pub use directive::{
    ParsedResponse, ReferenceLabel, Segment, render_plain, segment_content, split_framework,
};
pub use framework::{HANDOFF_CONFIRMATION, HandoffStatus, PendingFramework};
pub use message::{ChatMessage, MessageRole};
pub use quick_reply::{DEFAULT_QUICK_REPLIES, QuickReply, default_quick_replies};

/// First assistant message of a fresh session.
pub const DEFAULT_GREETING: &str = "• 歡迎來到 TPI 智慧架構室\n• 我是您的 AI 轉型顧問\n• 請問您目前計畫將 AI 應用於哪些核心業務場景？";

/// Assistant message used when the advisor returned blank text.
pub const EMPTY_REPLY_FALLBACK: &str = "• 了解您的需求，請繼續描述";
