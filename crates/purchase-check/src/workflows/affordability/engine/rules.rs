use super::super::domain::{HouseholdProfile, IncomeStability, PaymentTerms, RiskTolerance};
use super::config::RiskPolicy;

/// Unrounded intermediate figures. Rounding happens once, when metrics are built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CashFlowSignals {
    pub fixed_expenses: f64,
    pub disposable_income: f64,
    pub monthly_payment: f64,
    pub new_disposable_income: f64,
    pub savings_after_purchase: f64,
    pub emergency_buffer: f64,
    pub adjusted_ratio: f64,
    pub recovery_months: f64,
}

pub(crate) fn measure(profile: &HouseholdProfile, policy: &RiskPolicy) -> CashFlowSignals {
    let fixed_expenses = profile.fixed_costs.total();
    let baseline_expenses = fixed_expenses + profile.existing_loans + profile.variable_expenses;
    let disposable_income = profile.monthly_income - baseline_expenses;

    let monthly_payment = match profile.payment {
        PaymentTerms::Full => 0.0,
        PaymentTerms::Loan {
            duration_months,
            annual_interest_rate,
        } => {
            let months = f64::from(duration_months);
            let total_payable =
                profile.purchase_amount * (1.0 + (annual_interest_rate / 100.0) * (months / 12.0));
            total_payable / months
        }
    };

    let new_disposable_income = disposable_income - monthly_payment;

    // Financed purchases leave savings untouched at purchase time.
    let savings_after_purchase = match profile.payment {
        PaymentTerms::Full => profile.current_savings - profile.purchase_amount,
        PaymentTerms::Loan { .. } => profile.current_savings,
    };

    let emergency_buffer = baseline_expenses * policy.emergency_buffer_months;

    let income_ratio = new_disposable_income / profile.monthly_income;
    let adjusted_ratio = income_ratio * risk_multiplier(profile, policy);

    let recovery_months = match profile.payment {
        PaymentTerms::Full if new_disposable_income > 0.0 => {
            profile.purchase_amount / new_disposable_income
        }
        _ => 0.0,
    };

    CashFlowSignals {
        fixed_expenses,
        disposable_income,
        monthly_payment,
        new_disposable_income,
        savings_after_purchase,
        emergency_buffer,
        adjusted_ratio,
        recovery_months,
    }
}

pub(crate) fn risk_multiplier(profile: &HouseholdProfile, policy: &RiskPolicy) -> f64 {
    let mut multiplier = 1.0;
    if profile.income_stability == IncomeStability::Unpredictable {
        multiplier += policy.unpredictable_income_surcharge;
    }
    if profile.risk_tolerance == RiskTolerance::Safety {
        multiplier += policy.safety_preference_surcharge;
    }
    multiplier
}
