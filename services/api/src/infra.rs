use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use purchase_check::config::AdvisorConfig;
use purchase_check::workflows::affordability::{
    AdvisorError, AdvisoryGenerator, AffordabilityService, DisabledAdvisor, GeminiAdvisor,
    PromptContext,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Advisory generator chosen at startup from configuration.
pub(crate) enum ConfiguredAdvisor {
    Gemini(GeminiAdvisor),
    Disabled(DisabledAdvisor),
}

impl ConfiguredAdvisor {
    pub(crate) fn from_config(config: &AdvisorConfig) -> Self {
        if !config.is_enabled() {
            info!("GEMINI_API_KEY not set; guidance will fall back to defaults");
            return Self::Disabled(DisabledAdvisor);
        }

        match GeminiAdvisor::from_config(config) {
            Ok(advisor) => {
                info!(model = advisor.model(), "advisory generator configured");
                Self::Gemini(advisor)
            }
            Err(err) => {
                warn!(error = %err, "advisory generator unavailable; guidance will fall back to defaults");
                Self::Disabled(DisabledAdvisor)
            }
        }
    }

    pub(crate) fn offline() -> Self {
        Self::Disabled(DisabledAdvisor)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ConfiguredAdvisor::Gemini(_) => "gemini",
            ConfiguredAdvisor::Disabled(_) => "disabled",
        }
    }
}

#[async_trait]
impl AdvisoryGenerator for ConfiguredAdvisor {
    async fn generate(&self, context: &PromptContext) -> Result<String, AdvisorError> {
        match self {
            ConfiguredAdvisor::Gemini(advisor) => advisor.generate(context).await,
            ConfiguredAdvisor::Disabled(advisor) => advisor.generate(context).await,
        }
    }
}

pub(crate) fn build_service(
    advisor: ConfiguredAdvisor,
    config: &AdvisorConfig,
) -> AffordabilityService<ConfiguredAdvisor> {
    AffordabilityService::new(Arc::new(advisor), config.timeout)
}
