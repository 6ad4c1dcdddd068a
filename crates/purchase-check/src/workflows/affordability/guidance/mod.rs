//! Advisory guidance: prompt assembly, generator invocation and sanitization of
//! whatever text comes back.

mod advisor;
mod gemini;
mod parser;
mod prompt;

pub use advisor::{AdvisorError, AdvisoryGenerator, DisabledAdvisor};
pub use gemini::GeminiAdvisor;
pub use prompt::PromptContext;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::domain::{FinancialMetrics, HouseholdProfile, RiskLevel};

pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Titled observation about the household's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInsight {
    pub title: String,
    pub detail: String,
}

/// Client-safe guidance block returned alongside the metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceResult {
    pub assessment_title: String,
    pub risk_level: RiskLevel,
    pub guidance: String,
    pub key_insights: Vec<KeyInsight>,
    pub safer_alternatives: Vec<String>,
}

impl GuidanceResult {
    /// Guidance carrying only what can be derived without the generator.
    pub fn fallback(risk_level: RiskLevel) -> Self {
        Self {
            assessment_title: risk_level.assessment_title().to_string(),
            risk_level,
            guidance: String::new(),
            key_insights: Vec::new(),
            safer_alternatives: Vec::new(),
        }
    }
}

/// Invokes the advisory generator and coerces its output into a [`GuidanceResult`].
///
/// Generator errors, timeouts and malformed output all degrade to defaults;
/// `normalize` itself cannot fail.
pub struct GuidanceNormalizer<A> {
    advisor: Arc<A>,
    timeout: Duration,
}

impl<A> GuidanceNormalizer<A>
where
    A: AdvisoryGenerator + 'static,
{
    pub fn new(advisor: Arc<A>) -> Self {
        Self::with_timeout(advisor, DEFAULT_ADVISOR_TIMEOUT)
    }

    pub fn with_timeout(advisor: Arc<A>, timeout: Duration) -> Self {
        Self { advisor, timeout }
    }

    pub async fn normalize(
        &self,
        profile: &HouseholdProfile,
        metrics: &FinancialMetrics,
    ) -> GuidanceResult {
        let risk_level = metrics.risk_level;
        let context = PromptContext::assemble(profile, metrics);

        let raw = match tokio::time::timeout(self.timeout, self.advisor.generate(&context)).await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(err)) => {
                warn!(error = %err, risk_level = risk_level.as_str(), "advisory generator failed");
                return GuidanceResult::fallback(risk_level);
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    risk_level = risk_level.as_str(),
                    "advisory generator timed out"
                );
                return GuidanceResult::fallback(risk_level);
            }
        };

        let sanitized = parser::sanitize(&raw);

        GuidanceResult {
            assessment_title: risk_level.assessment_title().to_string(),
            risk_level,
            guidance: sanitized.guidance,
            key_insights: sanitized.key_insights,
            safer_alternatives: sanitized.safer_alternatives,
        }
    }
}
