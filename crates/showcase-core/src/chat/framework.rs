//! Pending solution framework state.

use serde::{Deserialize, Serialize};

/// Confirmation appended once a framework has been handed off to a consultant.
pub const HANDOFF_CONFIRMATION: &str = "• 框架建議書已同步至顧問終端\n• 我們將針對此架構進行可行性評估\n• 感謝信任 TPI Mission-Critical 服務";

/// Where a pending framework is in the hand-off sub-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffStatus {
    /// Displayed and waiting for the visitor to submit it.
    Pending,
    /// Submitted; the confirmation is on its way.
    Submitting,
}

/// The single framework card a session may display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFramework {
    /// Framework body extracted after `[FRAME_GEN]`, trimmed, possibly empty.
    pub body: String,
    pub status: HandoffStatus,
}

impl PendingFramework {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: HandoffStatus::Pending,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == HandoffStatus::Submitting
    }

    /// Label for the submit button.
    pub fn action_label(&self) -> &'static str {
        match self.status {
            HandoffStatus::Pending => "一鍵送出並申請技術驗證",
            HandoffStatus::Submitting => "已提交至技術團隊",
        }
    }
}
