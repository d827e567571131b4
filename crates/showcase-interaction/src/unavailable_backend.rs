//! Stand-in backend used when no credentials are configured.
//!
//! Every call fails with the recorded reason, so the gateway answers with its
//! fallback reply and the chat stays usable offline.

use async_trait::async_trait;
use showcase_core::advisor::{AdvisorBackend, AdvisorRequest};
use showcase_core::{Result, ShowcaseError};

pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AdvisorBackend for UnavailableBackend {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn generate(&self, _request: &AdvisorRequest) -> Result<String> {
        Err(ShowcaseError::gateway(self.reason.clone()))
    }
}
