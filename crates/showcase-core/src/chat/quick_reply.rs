//! Quick reply shortcuts shown under the chat input.

use serde::{Deserialize, Serialize};

/// A canned prompt the visitor can send with one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Short chip label.
    pub label: String,
    /// Text submitted as the user message.
    pub prompt: String,
}

impl QuickReply {
    pub fn new(label: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prompt: prompt.into(),
        }
    }
}

/// Default chips, in display order.
pub const DEFAULT_QUICK_REPLIES: [(&str, &str); 3] = [
    ("雲地混合建議", "我想了解雲地混合佈署"),
    ("AI 管理平台", "如何用 APIM 管理 AI Agent?"),
    ("RAG 性能提升", "大數據量體下的 RAG 優化"),
];

pub fn default_quick_replies() -> Vec<QuickReply> {
    DEFAULT_QUICK_REPLIES
        .iter()
        .map(|&(label, prompt)| QuickReply::new(label, prompt))
        .collect()
}
