use anyhow::{Context, Result};
use colored::Colorize;
use showcase_application::{ChatSessionConfig, ShowcaseUseCase};
use showcase_core::advisor::AdvisorBackend;
use showcase_core::case::{CaseRepository, Facet, Industry, Role, SuccessCase};
use showcase_core::config::AdvisorSettings;
use showcase_infrastructure::{ConfigService, InMemoryCaseRepository, SecretServiceImpl};
use showcase_interaction::{AdvisorGateway, GeminiApiAgent, UnavailableBackend};
use std::env;
use std::path::Path;
use std::sync::Arc;

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub fn env_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

pub fn parse_role(value: &str) -> Result<Facet<Role>> {
    value
        .parse()
        .with_context(|| format!("Unknown role '{value}' (see `showcase cases --facets`)"))
}

pub fn parse_industry(value: &str) -> Result<Facet<Industry>> {
    value
        .parse()
        .with_context(|| format!("Unknown industry '{value}' (see `showcase cases --facets`)"))
}

pub fn seeded_repository() -> Arc<dyn CaseRepository> {
    Arc::new(InMemoryCaseRepository::seeded())
}

/// Wires config, secrets, the Gemini backend and the seeded repository.
pub async fn build_showcase(config_dir: Option<&Path>, no_greeting: bool) -> Result<ShowcaseUseCase> {
    let config_service = ConfigService::new(config_dir)?;
    let config = config_service
        .load()
        .await
        .with_context(|| format!("Failed to load {}", config_service.file_path().display()))?;

    let secrets = SecretServiceImpl::new(config_dir)?.with_env_api_key(env_api_key());
    let backend = advisor_backend(&secrets, &config.advisor).await;

    let mut session_config = ChatSessionConfig::from_settings(&config.advisor);
    if no_greeting {
        session_config = session_config.with_greeting(None);
    }

    Ok(ShowcaseUseCase::new(
        seeded_repository(),
        AdvisorGateway::new(backend),
        session_config,
    ))
}

/// Builds the Gemini backend, or one that always fails when no key is set.
///
/// The chat still starts without credentials; every reply is the fallback.
pub async fn advisor_backend(
    secrets: &SecretServiceImpl,
    settings: &AdvisorSettings,
) -> Arc<dyn AdvisorBackend> {
    match GeminiApiAgent::try_from_secrets(secrets, settings).await {
        Ok(agent) => {
            tracing::info!("[Showcase] Using model {}", agent.model());
            Arc::new(agent)
        }
        Err(err) => {
            tracing::warn!(
                "[Showcase] Advisor unavailable, replies will use the fallback: {}. \
                 Set GEMINI_API_KEY or add a gemini section to {}",
                err,
                secrets.file_path().display()
            );
            Arc::new(UnavailableBackend::new(err.to_string()))
        }
    }
}

pub fn print_case_row(case: &SuccessCase) {
    println!(
        "{} {} {}",
        format!("#{}", case.id).bright_black(),
        case.title.bold(),
        format!(
            "[{} {} / {} {}]",
            case.role.icon(),
            case.role.label(),
            case.industry.icon(),
            case.industry.label()
        )
        .cyan()
    );
    println!("   {}", case.summary);
}

pub fn print_case_detail(case: &SuccessCase) {
    println!("{}", case.title.bright_magenta().bold());
    println!(
        "{} {}  {} {} {}",
        case.client.bold(),
        case.date.bright_black(),
        case.role.label().cyan(),
        "·".bright_black(),
        case.industry.label().cyan()
    );
    println!("{}", case.tags.join(", ").bright_black());
    println!();
    println!("{}", case.summary);
    println!();
    println!("{}", case.detailed_content);
    println!();
    println!("{} {}", "成效:".green().bold(), case.results.green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_falls_back_to_unavailable_backend() {
        let dir = tempfile::tempdir().unwrap();
        let secrets = SecretServiceImpl::new(Some(dir.path())).unwrap();

        let backend = advisor_backend(&secrets, &AdvisorSettings::default()).await;

        assert_eq!(backend.name(), "unavailable");
    }

    #[tokio::test]
    async fn test_configured_key_builds_gemini_backend() {
        let dir = tempfile::tempdir().unwrap();
        let secrets = SecretServiceImpl::new(Some(dir.path()))
            .unwrap()
            .with_env_api_key(Some("test-key".to_string()));

        let backend = advisor_backend(&secrets, &AdvisorSettings::default()).await;

        assert_ne!(backend.name(), "unavailable");
    }
}
