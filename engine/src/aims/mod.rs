//! Quintuple-aim scoring
//!
//! The five outcome scores of a population-health contract:
//! member experience, health outcomes, cost of healthcare (incurred and
//! paid), provider experience, and health equity. Every score is a total
//! function: missing or degenerate inputs produce a defined default rather
//! than an error.

use crate::inequity::{gini_index, palma_fraction, PalmaInputs};
use crate::models::inputs::{Inputs, RiskLevel};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Quality-of-life bounds the Palma distribution is anchored to
pub const MIN_QUALITY_OF_LIFE: f64 = 0.0;
pub const MAX_QUALITY_OF_LIFE: f64 = 1.0;

const PROVIDER_AUTONOMY_WEIGHT: f64 = 0.25;
const PAYMENT_RATIO_WEIGHT: f64 = 0.5;
const REPORTING_BURDEN_WEIGHT: f64 = 0.25;

/// The six factors behind the member satisfaction score
///
/// `Default` is the best case — higher-is-better factors at 1, lower-is-better
/// factors at 0 — so partial fixtures only state what hurts satisfaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberSatisfactionFactors {
    pub care_accessibility_factor: f64,
    pub provider_trust_factor: f64,
    pub conditions_managed_rate: f64,
    pub well_managed_rate: f64,
    // Lower is better
    pub cost_aversion_factor: f64,
    pub readmission_rate: f64,
}

impl Default for MemberSatisfactionFactors {
    fn default() -> Self {
        Self {
            care_accessibility_factor: 1.0,
            provider_trust_factor: 1.0,
            conditions_managed_rate: 1.0,
            well_managed_rate: 1.0,
            cost_aversion_factor: 0.0,
            readmission_rate: 0.0,
        }
    }
}

impl From<&Inputs> for MemberSatisfactionFactors {
    fn from(inputs: &Inputs) -> Self {
        Self {
            care_accessibility_factor: inputs.care_accessibility_factor,
            provider_trust_factor: inputs.provider_trust_factor,
            conditions_managed_rate: inputs.conditions_managed_rate,
            well_managed_rate: inputs.well_managed_rate,
            cost_aversion_factor: inputs.cost_aversion_factor,
            readmission_rate: inputs.readmission_rate,
        }
    }
}

/// Member satisfaction score (0-1)
///
/// Equal-weighted average of the six factors, lower-is-better factors
/// inverted before averaging.
pub fn member_satisfaction(factors: &MemberSatisfactionFactors) -> f64 {
    let sum = factors.care_accessibility_factor
        + factors.provider_trust_factor
        + factors.conditions_managed_rate
        + factors.well_managed_rate
        + (1.0 - factors.cost_aversion_factor)
        + (1.0 - factors.readmission_rate);
    (sum / 6.0).clamp(0.0, 1.0)
}

/// Provider satisfaction score (0-1)
///
/// Weighted average of provider autonomy (0.25), the payment ratio
/// actual/desired (0.5), and inverted reporting burden (0.25). A zero
/// desired reimbursement is an undefined contract and scores 0 — not an
/// error, and never a division fault.
pub fn provider_satisfaction(
    provider_autonomy_factor: f64,
    provider_reporting_burden: f64,
    desired_reimbursement_cents: f64,
    actual_reimbursement_cents: f64,
) -> f64 {
    if desired_reimbursement_cents == 0.0 {
        return 0.0;
    }

    let payment_ratio = actual_reimbursement_cents / desired_reimbursement_cents;
    let weighted = PROVIDER_AUTONOMY_WEIGHT * provider_autonomy_factor
        + PAYMENT_RATIO_WEIGHT * payment_ratio
        + REPORTING_BURDEN_WEIGHT * (1.0 - provider_reporting_burden);
    weighted.clamp(0.0, 1.0)
}

/// Quality of life score (0-1): tier values weighted by population fraction
pub fn quality_of_life(inputs: &Inputs) -> f64 {
    let weighted: f64 = RiskLevel::ALL
        .iter()
        .map(|level| inputs.quality_of_life(*level) * inputs.member_rate(*level))
        .sum();
    weighted.clamp(0.0, 1.0)
}

/// Cost per member per month (cents, floored)
///
/// Returns 0 when either the member count or the cents total is zero. The
/// floor to integer cents is part of the contract and must stay exact.
pub fn cents_per_member_per_month(total_cents: f64, member_count: f64) -> i64 {
    if member_count == 0.0 || total_cents == 0.0 {
        return 0;
    }
    let cents_per_member_per_year = total_cents / member_count;
    (cents_per_member_per_year / MONTHS_PER_YEAR).floor() as i64
}

/// Gini index of the three tiers' quality of life
pub fn quality_of_life_gini_index(inputs: &Inputs) -> f64 {
    gini_index(&[
        inputs.quality_of_life_low_risk,
        inputs.quality_of_life_medium_risk,
        inputs.quality_of_life_high_risk,
    ])
}

/// Palma fraction of the three tiers' quality of life
pub fn quality_of_life_palma_fraction(inputs: &Inputs) -> f64 {
    palma_fraction(&PalmaInputs {
        member_rate_low_risk: inputs.member_rate_low_risk,
        member_rate_medium_risk: inputs.member_rate_medium_risk,
        member_rate_high_risk: inputs.member_rate_high_risk,
        quality_of_life_low_risk: inputs.quality_of_life_low_risk,
        quality_of_life_medium_risk: inputs.quality_of_life_medium_risk,
        quality_of_life_high_risk: inputs.quality_of_life_high_risk,
        min_quality_of_life: MIN_QUALITY_OF_LIFE,
        max_quality_of_life: MAX_QUALITY_OF_LIFE,
    })
}
