use serde::{Deserialize, Serialize};

/// Thresholds and surcharges used to classify a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Adjusted ratio must exceed this (and savings must cover the buffer) for SAFE.
    pub safe_ratio_threshold: f64,
    /// Adjusted ratio must exceed this for TIGHT; anything at or below is RISKY.
    pub tight_ratio_threshold: f64,
    pub emergency_buffer_months: f64,
    pub unpredictable_income_surcharge: f64,
    pub safety_preference_surcharge: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            safe_ratio_threshold: 0.30,
            tight_ratio_threshold: 0.10,
            emergency_buffer_months: 3.0,
            unpredictable_income_surcharge: 0.2,
            safety_preference_surcharge: 0.1,
        }
    }
}
