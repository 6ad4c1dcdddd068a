mod config;
mod policy;
mod rules;

pub use config::RiskPolicy;

use super::domain::{FinancialMetrics, HouseholdProfile};
use policy::classify;

/// Stateless engine turning a validated profile into affordability metrics.
#[derive(Debug, Clone, Default)]
pub struct CalculationEngine {
    policy: RiskPolicy,
}

impl CalculationEngine {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn compute(&self, profile: &HouseholdProfile) -> FinancialMetrics {
        let signals = rules::measure(profile, &self.policy);
        let risk_level = classify(&signals, &self.policy);

        FinancialMetrics {
            fixed_expenses: round_cents(signals.fixed_expenses),
            baseline_disposable_income: round_cents(signals.disposable_income),
            monthly_payment: round_cents(signals.monthly_payment),
            new_disposable_income: round_cents(signals.new_disposable_income),
            savings_after_purchase: round_cents(signals.savings_after_purchase),
            emergency_buffer: round_cents(signals.emergency_buffer),
            risk_level,
            recovery_months: round_cents(signals.recovery_months),
        }
    }
}

/// Computes metrics under the default [`RiskPolicy`].
pub fn compute(profile: &HouseholdProfile) -> FinancialMetrics {
    CalculationEngine::default().compute(profile)
}

/// Rounds to cents, ties to even. Amounts too large to carry a cent digit are
/// returned unchanged, so the result is finite whenever `value` is.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round_ties_even() / 100.0
}

// Every f64 at or above 2^52 is already integral.
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;
