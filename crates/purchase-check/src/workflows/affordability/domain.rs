use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Share of household costs the applicant personally covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdResponsibility {
    AllOrMost,
    Half,
    SmallPart,
    NotApplicable,
}

impl HouseholdResponsibility {
    pub fn label(&self) -> &'static str {
        match self {
            HouseholdResponsibility::AllOrMost => "All or Most of It",
            HouseholdResponsibility::Half => "About Half",
            HouseholdResponsibility::SmallPart => "A Small Part",
            HouseholdResponsibility::NotApplicable => "Not Applicable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStability {
    VeryStable,
    MostlyStable,
    SometimesChanges,
    Unpredictable,
}

impl IncomeStability {
    pub fn label(&self) -> &'static str {
        match self {
            IncomeStability::VeryStable => "Very Stable",
            IncomeStability::MostlyStable => "Mostly Stable",
            IncomeStability::SometimesChanges => "Sometimes Changes",
            IncomeStability::Unpredictable => "Unpredictable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Safety,
    Balanced,
    RiskOk,
}

impl RiskTolerance {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Safety => "I Prefer Safety",
            RiskTolerance::Balanced => "Balanced",
            RiskTolerance::RiskOk => "I'm Okay With Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Full,
    Loan,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Full => "full",
            PaymentType::Loan => "loan",
        }
    }
}

/// Inbound simulation form as submitted by a client, before validation.
///
/// Field names follow the camelCase wire contract; the snake_case names used by
/// the original web form are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    #[serde(alias = "monthly_income")]
    pub monthly_income: f64,
    #[serde(alias = "rent_mortgage")]
    pub rent: f64,
    #[serde(alias = "utilities_internet")]
    pub utilities: f64,
    #[serde(alias = "subscriptions_insurance")]
    pub subscriptions_insurance: f64,
    #[serde(alias = "existing_loan_payment")]
    pub existing_loans: f64,
    #[serde(alias = "variable_expenses")]
    pub variable_expenses: f64,
    #[serde(alias = "current_savings")]
    pub current_savings: f64,
    pub dependents: u32,
    #[serde(alias = "household_responsibility")]
    pub household_responsibility_level: HouseholdResponsibility,
    #[serde(alias = "income_stability")]
    pub income_stability: IncomeStability,
    #[serde(alias = "risk_tolerance")]
    pub risk_tolerance: RiskTolerance,
    #[serde(alias = "purchase_amount")]
    pub purchase_amount: f64,
    #[serde(alias = "payment_type")]
    pub payment_type: PaymentType,
    #[serde(default, alias = "loan_duration", skip_serializing_if = "Option::is_none")]
    pub loan_duration: Option<u32>,
    #[serde(default, alias = "interest_rate", skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, alias = "plan_name", skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(default, alias = "target_amount", skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(default, alias = "target_date", skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "goal_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal_description: Option<String>,
}

/// Recurring housing-related costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedCosts {
    pub rent: f64,
    pub utilities: f64,
    pub subscriptions_insurance: f64,
}

impl FixedCosts {
    pub fn total(&self) -> f64 {
        self.rent + self.utilities + self.subscriptions_insurance
    }
}

/// How the purchase is paid for. Loan terms only exist for loan purchases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "payment_type", rename_all = "snake_case")]
pub enum PaymentTerms {
    Full,
    Loan {
        duration_months: u32,
        annual_interest_rate: f64,
    },
}

impl PaymentTerms {
    pub fn payment_type(&self) -> PaymentType {
        match self {
            PaymentTerms::Full => PaymentType::Full,
            PaymentTerms::Loan { .. } => PaymentType::Loan,
        }
    }
}

/// Optional savings goal the household is working towards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalPlan {
    pub plan_name: Option<String>,
    pub target_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub goal_description: Option<String>,
}

impl GoalPlan {
    pub fn is_empty(&self) -> bool {
        self.plan_name.is_none()
            && self.target_amount.is_none()
            && self.target_date.is_none()
            && self.goal_description.is_none()
    }
}

/// Validated household and purchase snapshot consumed by the calculation engine.
///
/// Only [`ProfileGuard`](super::validation::ProfileGuard) produces these, so every
/// amount is finite and non-negative, income is positive and loan terms are present
/// exactly when the purchase is financed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdProfile {
    pub monthly_income: f64,
    pub fixed_costs: FixedCosts,
    pub existing_loans: f64,
    pub variable_expenses: f64,
    pub current_savings: f64,
    pub dependents: u32,
    pub household_responsibility: HouseholdResponsibility,
    pub income_stability: IncomeStability,
    pub risk_tolerance: RiskTolerance,
    pub purchase_amount: f64,
    pub payment: PaymentTerms,
    pub goal: GoalPlan,
}

/// Affordability tier reported for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Tight,
    Risky,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Tight => "TIGHT",
            RiskLevel::Risky => "RISKY",
        }
    }

    /// Headline shown to the client. Never depends on the advisory service.
    pub fn assessment_title(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "You're in Good Shape!",
            RiskLevel::Tight => "Proceed with Caution",
            RiskLevel::Risky => "High Financial Risk",
        }
    }
}

/// Calculation output, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub fixed_expenses: f64,
    pub baseline_disposable_income: f64,
    pub monthly_payment: f64,
    pub new_disposable_income: f64,
    pub savings_after_purchase: f64,
    pub emergency_buffer: f64,
    pub risk_level: RiskLevel,
    pub recovery_months: f64,
}
