//! Purchase affordability pipeline: validation, calculation and advisory guidance.

pub mod domain;
pub mod engine;
pub mod guidance;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    FinancialMetrics, FixedCosts, GoalPlan, HouseholdProfile, HouseholdResponsibility,
    IncomeStability, PaymentTerms, PaymentType, RiskLevel, RiskTolerance, SimulationRequest,
};
pub use engine::{compute, CalculationEngine, RiskPolicy};
pub use guidance::{
    AdvisorError, AdvisoryGenerator, DisabledAdvisor, GeminiAdvisor, GuidanceNormalizer,
    GuidanceResult, KeyInsight, PromptContext,
};
pub use router::affordability_router;
pub use service::{AffordabilityService, SimulationError, SimulationReport};
pub use validation::{ProfileGuard, ProfileViolation};
