//! Outbound advisor interaction: prompt, gateway and the advisor backends.

pub mod advisor_gateway;
pub mod advisor_prompt;
pub mod gemini_api_agent;
pub mod unavailable_backend;

pub use advisor_gateway::AdvisorGateway;
pub use advisor_prompt::render_system_instruction;
pub use gemini_api_agent::GeminiApiAgent;
pub use unavailable_backend::UnavailableBackend;
