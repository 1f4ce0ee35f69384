use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::SurveyGenerator;
use crate::survey::policy::QuestionDistributionPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable generator. Production: AnthropicClient. Tests: stubs.
    pub generator: Arc<dyn SurveyGenerator>,
    /// Active distribution policy, resolved once at startup from config.
    pub policy: QuestionDistributionPolicy,
}
