//! Domain core of the success-case showcase.
//!
//! Holds the case model and gallery filter, the chat transcript types, the
//! response directive parser, and the contracts (`CaseRepository`,
//! `AdvisorBackend`, `SecretService`) implemented by the outer crates.

pub mod advisor;
pub mod case;
pub mod chat;
pub mod config;
pub mod error;
pub mod latency;
pub mod secret;

// Re-export common error type
pub use error::{Result, ShowcaseError};
