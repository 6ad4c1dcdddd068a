use super::super::domain::RiskLevel;
use super::config::RiskPolicy;
use super::rules::CashFlowSignals;

/// Thresholds are strict: a ratio sitting exactly on a threshold drops a tier.
pub(crate) fn classify(signals: &CashFlowSignals, policy: &RiskPolicy) -> RiskLevel {
    if signals.adjusted_ratio > policy.safe_ratio_threshold
        && signals.savings_after_purchase > signals.emergency_buffer
    {
        RiskLevel::Safe
    } else if signals.adjusted_ratio > policy.tight_ratio_threshold {
        RiskLevel::Tight
    } else {
        RiskLevel::Risky
    }
}
