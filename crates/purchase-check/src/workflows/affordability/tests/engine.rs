use super::common::*;
use crate::workflows::affordability::domain::{
    IncomeStability, PaymentType, RiskLevel, RiskTolerance, SimulationRequest,
};
use crate::workflows::affordability::engine::{compute, CalculationEngine, RiskPolicy};

#[test]
fn cash_purchase_matches_worked_example() {
    let metrics = compute(&profile(request()));

    assert_eq!(metrics.fixed_expenses, 1300.0);
    assert_eq!(metrics.baseline_disposable_income, 3000.0);
    assert_eq!(metrics.monthly_payment, 0.0);
    assert_eq!(metrics.new_disposable_income, 3000.0);
    assert_eq!(metrics.savings_after_purchase, 8000.0);
    assert_eq!(metrics.emergency_buffer, 6000.0);
    assert_eq!(metrics.risk_level, RiskLevel::Safe);
    assert_eq!(metrics.recovery_months, 0.67);
}

#[test]
fn loan_purchase_matches_worked_example() {
    let metrics = compute(&profile(loan_request()));

    assert_eq!(metrics.monthly_payment, 186.67);
    assert_eq!(metrics.new_disposable_income, 2813.33);
    assert_eq!(metrics.savings_after_purchase, 10000.0);
    assert_eq!(metrics.risk_level, RiskLevel::Safe);
    assert_eq!(metrics.recovery_months, 0.0);
}

#[test]
fn loan_purchases_never_report_recovery_months() {
    for duration in [1, 6, 36, 360] {
        let metrics = compute(&profile(SimulationRequest {
            loan_duration: Some(duration),
            interest_rate: Some(4.5),
            ..loan_request()
        }));
        assert_eq!(metrics.recovery_months, 0.0, "duration {duration}");
    }
}

#[test]
fn cash_purchase_without_surplus_reports_zero_recovery() {
    let metrics = compute(&profile(SimulationRequest {
        monthly_income: 1500.0,
        ..request()
    }));

    assert_eq!(metrics.new_disposable_income, -500.0);
    assert_eq!(metrics.recovery_months, 0.0);
    assert_eq!(metrics.risk_level, RiskLevel::Risky);
}

#[test]
fn ratio_exactly_at_safe_threshold_is_tight() {
    let metrics = compute(&profile(ratio_request(300.0)));
    assert!(metrics.savings_after_purchase > metrics.emergency_buffer);
    assert_eq!(metrics.risk_level, RiskLevel::Tight);
}

#[test]
fn ratio_just_above_safe_threshold_is_safe() {
    let metrics = compute(&profile(ratio_request(301.0)));
    assert_eq!(metrics.risk_level, RiskLevel::Safe);
}

#[test]
fn ratio_exactly_at_tight_threshold_is_risky() {
    let metrics = compute(&profile(ratio_request(100.0)));
    assert_eq!(metrics.risk_level, RiskLevel::Risky);
}

#[test]
fn ratio_just_above_tight_threshold_is_tight() {
    let metrics = compute(&profile(ratio_request(101.0)));
    assert_eq!(metrics.risk_level, RiskLevel::Tight);
}

#[test]
fn thin_savings_cap_a_strong_ratio_at_tight() {
    let metrics = compute(&profile(SimulationRequest {
        current_savings: 7000.0,
        ..request()
    }));

    // 7000 - 2000 leaves 5000, below the 6000 buffer.
    assert_eq!(metrics.savings_after_purchase, 5000.0);
    assert_eq!(metrics.risk_level, RiskLevel::Tight);
}

#[test]
fn savings_equal_to_buffer_are_not_enough_for_safe() {
    let metrics = compute(&profile(SimulationRequest {
        current_savings: 8000.0,
        ..request()
    }));

    assert_eq!(metrics.savings_after_purchase, metrics.emergency_buffer);
    assert_eq!(metrics.risk_level, RiskLevel::Tight);
}

#[test]
fn surcharges_lift_a_borderline_ratio() {
    // Ratio 0.25 alone is TIGHT; 0.25 * 1.3 = 0.325 clears the SAFE threshold.
    let borderline = ratio_request(250.0);
    assert_eq!(compute(&profile(borderline.clone())).risk_level, RiskLevel::Tight);

    let cautious = SimulationRequest {
        income_stability: IncomeStability::Unpredictable,
        risk_tolerance: RiskTolerance::Safety,
        ..borderline
    };
    assert_eq!(compute(&profile(cautious)).risk_level, RiskLevel::Safe);
}

#[test]
fn fixed_expenses_sum_the_three_fixed_costs() {
    let metrics = compute(&profile(SimulationRequest {
        rent: 1234.56,
        utilities: 78.9,
        subscriptions_insurance: 0.12,
        ..request()
    }));

    assert_eq!(metrics.fixed_expenses, 1313.58);
}

#[test]
fn custom_policy_moves_thresholds() {
    let engine = CalculationEngine::new(RiskPolicy {
        safe_ratio_threshold: 0.7,
        ..RiskPolicy::default()
    });

    let metrics = engine.compute(&profile(request()));
    assert_eq!(metrics.risk_level, RiskLevel::Tight);
    assert_eq!(engine.policy().tight_ratio_threshold, 0.10);
}

#[test]
fn full_payment_ignores_supplied_loan_fields() {
    let metrics = compute(&profile(SimulationRequest {
        payment_type: PaymentType::Full,
        loan_duration: Some(24),
        interest_rate: Some(9.0),
        ..request()
    }));

    assert_eq!(metrics.monthly_payment, 0.0);
    assert_eq!(metrics.recovery_months, 0.67);
}
