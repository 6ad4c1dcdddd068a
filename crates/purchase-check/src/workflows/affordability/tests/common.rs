use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::affordability::domain::{
    HouseholdProfile, HouseholdResponsibility, IncomeStability, PaymentType, RiskTolerance,
    SimulationRequest,
};
use crate::workflows::affordability::guidance::{AdvisorError, AdvisoryGenerator, PromptContext};
use crate::workflows::affordability::validation::ProfileGuard;
use crate::workflows::affordability::{affordability_router, AffordabilityService};

pub(super) const WELL_FORMED_ADVICE: &str = r#"Sure! Here is my assessment:
```json
{
  "guidance": "You can afford this purchase while keeping a healthy buffer.",
  "key_insights": [
    {"title": "Strong buffer", "detail": "Savings stay above three months of expenses."},
    {"title": "Quick recovery", "detail": "Disposable income rebuilds the purchase in under a month."}
  ],
  "safer_alternatives": ["Pay from savings earmarked for discretionary spending"]
}
```"#;

pub(super) const MALFORMED_ADVICE: &str =
    "{\"guidance\": \"Trim spending first\", \"key_insights\": [ {\"title\": \"oops\" ";

pub(super) const PROSE_ADVICE: &str =
    "\n  This purchase is tight. Consider waiting two months before buying.  \n";

/// Reference household: 5000 income, 2000 baseline expenses, 10000 savings.
pub(super) fn request() -> SimulationRequest {
    SimulationRequest {
        monthly_income: 5000.0,
        rent: 1000.0,
        utilities: 200.0,
        subscriptions_insurance: 100.0,
        existing_loans: 300.0,
        variable_expenses: 400.0,
        current_savings: 10000.0,
        dependents: 2,
        household_responsibility_level: HouseholdResponsibility::AllOrMost,
        income_stability: IncomeStability::VeryStable,
        risk_tolerance: RiskTolerance::Balanced,
        purchase_amount: 2000.0,
        payment_type: PaymentType::Full,
        loan_duration: None,
        interest_rate: None,
        plan_name: None,
        target_amount: None,
        target_date: None,
        goal_description: None,
    }
}

pub(super) fn loan_request() -> SimulationRequest {
    SimulationRequest {
        payment_type: PaymentType::Loan,
        loan_duration: Some(12),
        interest_rate: Some(12.0),
        ..request()
    }
}

pub(super) fn goal_request() -> SimulationRequest {
    SimulationRequest {
        plan_name: Some("  House deposit ".to_string()),
        target_amount: Some(25000.0),
        target_date: Some(NaiveDate::from_ymd_opt(2027, 6, 1).expect("valid date")),
        goal_description: Some("   ".to_string()),
        ..request()
    }
}

/// Household earning 1000 with `disposable` left after expenses and ample savings,
/// so the disposable-income ratio is `disposable / 1000`.
pub(super) fn ratio_request(disposable: f64) -> SimulationRequest {
    SimulationRequest {
        monthly_income: 1000.0,
        rent: 1000.0 - disposable,
        utilities: 0.0,
        subscriptions_insurance: 0.0,
        existing_loans: 0.0,
        variable_expenses: 0.0,
        current_savings: 50000.0,
        purchase_amount: 500.0,
        ..request()
    }
}

pub(super) fn profile(request: SimulationRequest) -> HouseholdProfile {
    ProfileGuard::new()
        .profile_from_request(request)
        .expect("fixture profile is valid")
}

/// Returns the same canned text for every call and records the contexts it saw.
pub(super) struct CannedAdvisor {
    text: String,
    seen: Mutex<Vec<PromptContext>>,
}

impl CannedAdvisor {
    pub(super) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn contexts(&self) -> Vec<PromptContext> {
        self.seen.lock().expect("advisor mutex poisoned").clone()
    }
}

#[async_trait]
impl AdvisoryGenerator for CannedAdvisor {
    async fn generate(&self, context: &PromptContext) -> Result<String, AdvisorError> {
        self.seen
            .lock()
            .expect("advisor mutex poisoned")
            .push(context.clone());
        Ok(self.text.clone())
    }
}

pub(super) struct FailingAdvisor;

#[async_trait]
impl AdvisoryGenerator for FailingAdvisor {
    async fn generate(&self, _context: &PromptContext) -> Result<String, AdvisorError> {
        Err(AdvisorError::Transport("connection reset".to_string()))
    }
}

pub(super) struct SlowAdvisor {
    pub(super) delay: Duration,
}

#[async_trait]
impl AdvisoryGenerator for SlowAdvisor {
    async fn generate(&self, _context: &PromptContext) -> Result<String, AdvisorError> {
        tokio::time::sleep(self.delay).await;
        Ok(WELL_FORMED_ADVICE.to_string())
    }
}

pub(super) fn service_with<A>(advisor: A) -> AffordabilityService<A>
where
    A: AdvisoryGenerator + 'static,
{
    AffordabilityService::new(Arc::new(advisor), Duration::from_secs(5))
}

pub(super) fn router_with<A>(advisor: A) -> axum::Router
where
    A: AdvisoryGenerator + 'static,
{
    affordability_router(Arc::new(service_with(advisor)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
