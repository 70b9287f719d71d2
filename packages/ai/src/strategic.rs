// ABOUTME: Strategic procurement classification
// ABOUTME: Pure predicates over budget range and urgency

use specgen_core::types::{BudgetRange, UrgencyLevel};

/// A submission is strategic when its budget falls in the top two buckets or
/// its urgency is critical.
pub fn is_strategic(budget_range: BudgetRange, urgency: UrgencyLevel) -> bool {
    matches!(budget_range, BudgetRange::Range500k1m | BudgetRange::Over1m)
        || urgency == UrgencyLevel::Critical
}

/// Risk assessment is requested for exactly the strategic submissions.
/// Intentionally the same predicate as [`is_strategic`].
pub fn requires_risk_assessment(budget_range: BudgetRange, urgency: UrgencyLevel) -> bool {
    is_strategic(budget_range, urgency)
}
