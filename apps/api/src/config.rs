use anyhow::{bail, Context, Result};

use crate::survey::policy::QuestionDistributionPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Which distribution preset shapes prompts and decode validation.
    pub distribution_policy: QuestionDistributionPolicy,
    /// When true, decode/generation failures return 422 instead of the
    /// historical 200-with-error-field contract.
    pub strict_decode_failures: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let policy_name = std::env::var("SURVEY_DISTRIBUTION_POLICY")
            .unwrap_or_else(|_| "balanced-mix".to_string());
        let Some(distribution_policy) = QuestionDistributionPolicy::by_name(&policy_name) else {
            bail!(
                "SURVEY_DISTRIBUTION_POLICY '{policy_name}' is not a known preset \
                 (balanced-mix, burning-problem-focus)"
            );
        };

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            distribution_policy,
            strict_decode_failures: std::env::var("SURVEY_STRICT_ERRORS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
