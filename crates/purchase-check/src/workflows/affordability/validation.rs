use super::domain::{
    FixedCosts, GoalPlan, HouseholdProfile, PaymentTerms, PaymentType, SimulationRequest,
};

/// Validation errors raised before a profile reaches the calculation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("{field} must be a finite, non-negative amount (found {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("monthlyIncome must be greater than zero to assess affordability")]
    ZeroIncome,
    #[error("loanDuration and interestRate are required for a loan purchase")]
    MissingLoanTerms,
    #[error("{field} must be greater than zero for a loan purchase")]
    InvalidLoanTerm { field: &'static str },
}

impl ProfileViolation {
    /// Wire name of the offending field, when a single field is at fault.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProfileViolation::InvalidAmount { field, .. }
            | ProfileViolation::InvalidLoanTerm { field } => Some(field),
            ProfileViolation::ZeroIncome => Some("monthlyIncome"),
            ProfileViolation::MissingLoanTerms => None,
        }
    }
}

/// Guard responsible for producing `HouseholdProfile` instances.
///
/// Zero income is rejected here rather than classified: the disposable-income
/// ratio is undefined without income and no tier would be truthful.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert an inbound request into a validated household profile.
    pub fn profile_from_request(
        &self,
        request: SimulationRequest,
    ) -> Result<HouseholdProfile, ProfileViolation> {
        let monthly_income = amount("monthlyIncome", request.monthly_income)?;
        let rent = amount("rent", request.rent)?;
        let utilities = amount("utilities", request.utilities)?;
        let subscriptions_insurance =
            amount("subscriptionsInsurance", request.subscriptions_insurance)?;
        let existing_loans = amount("existingLoans", request.existing_loans)?;
        let variable_expenses = amount("variableExpenses", request.variable_expenses)?;
        let current_savings = amount("currentSavings", request.current_savings)?;
        let purchase_amount = amount("purchaseAmount", request.purchase_amount)?;

        if monthly_income == 0.0 {
            return Err(ProfileViolation::ZeroIncome);
        }

        let payment = match request.payment_type {
            PaymentType::Full => PaymentTerms::Full,
            PaymentType::Loan => {
                let (duration, rate) = match (request.loan_duration, request.interest_rate) {
                    (Some(duration), Some(rate)) => (duration, rate),
                    _ => return Err(ProfileViolation::MissingLoanTerms),
                };
                if duration == 0 {
                    return Err(ProfileViolation::InvalidLoanTerm {
                        field: "loanDuration",
                    });
                }
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(ProfileViolation::InvalidLoanTerm {
                        field: "interestRate",
                    });
                }
                PaymentTerms::Loan {
                    duration_months: duration,
                    annual_interest_rate: rate,
                }
            }
        };

        let target_amount = request
            .target_amount
            .map(|value| amount("targetAmount", value))
            .transpose()?;

        let goal = GoalPlan {
            plan_name: non_empty(request.plan_name),
            target_amount,
            target_date: request.target_date,
            goal_description: non_empty(request.goal_description),
        };

        Ok(HouseholdProfile {
            monthly_income,
            fixed_costs: FixedCosts {
                rent,
                utilities,
                subscriptions_insurance,
            },
            existing_loans,
            variable_expenses,
            current_savings,
            dependents: request.dependents,
            household_responsibility: request.household_responsibility_level,
            income_stability: request.income_stability,
            risk_tolerance: request.risk_tolerance,
            purchase_amount,
            payment,
            goal,
        })
    }
}

fn amount(field: &'static str, value: f64) -> Result<f64, ProfileViolation> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ProfileViolation::InvalidAmount { field, value })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
