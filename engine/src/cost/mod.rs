//! Cost and utilization model
//!
//! Converts population composition and utilization inputs into spend by
//! service category. For each of the five categories and three risk tiers:
//!
//! ```text
//! spend += member_count × tier_rate × category_utilization
//!          × tier_utilization_factor × desired_cents_per_utilization
//! ```
//!
//! Zero or missing sub-fields contribute zero rather than failing, so
//! partial inputs degrade to partial or zero costs.

use crate::models::inputs::{Inputs, RiskLevel, ServiceCategory};
use crate::models::results::CostByCategory;

/// Spend by service category for one simulated period (cents)
///
/// Returns all zeros when `member_count` is zero.
pub fn cost_cents_by_category(inputs: &Inputs) -> CostByCategory {
    let mut costs = CostByCategory::default();
    if inputs.member_count == 0.0 {
        return costs;
    }

    for category in ServiceCategory::ALL {
        for level in RiskLevel::ALL {
            let members = inputs.member_count * inputs.member_rate(level);
            let utilization = inputs.utilization_base(category) * inputs.utilization_factor(level);
            let cents = inputs.desired_cents_per_utilization(category) * utilization * members;
            *costs.get_mut(category) += cents;
        }
    }
    costs
}

/// Total reimbursement providers desire: the sum of all category spend (cents)
pub fn desired_reimbursement_cents(costs: &CostByCategory) -> f64 {
    costs.total_cents()
}
