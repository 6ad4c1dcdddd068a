use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::domain::{FinancialMetrics, SimulationRequest};
use super::engine::{CalculationEngine, RiskPolicy};
use super::guidance::{AdvisoryGenerator, GuidanceNormalizer, GuidanceResult};
use super::validation::{ProfileGuard, ProfileViolation};

/// Combined response body: computed metrics plus sanitized guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub calculation: FinancialMetrics,
    pub ai_guidance: GuidanceResult,
}

/// Service composing the profile guard, calculation engine and guidance normalizer.
///
/// Holds no per-request state; concurrent simulations share only the immutable
/// policy and the advisor handle.
pub struct AffordabilityService<A> {
    guard: ProfileGuard,
    engine: CalculationEngine,
    normalizer: GuidanceNormalizer<A>,
}

impl<A> AffordabilityService<A>
where
    A: AdvisoryGenerator + 'static,
{
    pub fn new(advisor: Arc<A>, advisor_timeout: Duration) -> Self {
        Self::with_policy(advisor, advisor_timeout, RiskPolicy::default())
    }

    pub fn with_policy(advisor: Arc<A>, advisor_timeout: Duration, policy: RiskPolicy) -> Self {
        Self {
            guard: ProfileGuard::new(),
            engine: CalculationEngine::new(policy),
            normalizer: GuidanceNormalizer::with_timeout(advisor, advisor_timeout),
        }
    }

    /// Validate, compute and attach guidance for a single purchase.
    pub async fn simulate(
        &self,
        request: SimulationRequest,
    ) -> Result<SimulationReport, SimulationError> {
        let profile = self.guard.profile_from_request(request).map_err(|violation| {
            info!(error = %violation, "simulation request rejected");
            violation
        })?;

        let calculation = self.engine.compute(&profile);
        let ai_guidance = self.normalizer.normalize(&profile, &calculation).await;

        info!(
            risk_level = calculation.risk_level.as_str(),
            payment_type = profile.payment.payment_type().as_str(),
            insights = ai_guidance.key_insights.len(),
            "simulation completed"
        );

        Ok(SimulationReport {
            calculation,
            ai_guidance,
        })
    }
}

/// Error raised by the affordability service.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ProfileViolation),
}
