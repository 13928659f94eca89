//! Simulation pass
//!
//! One call computes a complete contract-period outcome:
//!
//! ```text
//! 1. Apply same-period feedback adjustments to the inputs
//! 2. Compute spend by category and desired reimbursement
//! 3. Run every active payment model, sum to actual reimbursement
//! 4. Score the five aims and the two inequality statistics
//! 5. Merge derived fields over the original inputs
//! ```
//!
//! Everything is deterministic and allocation-only; the only observable
//! side effect is an optional `tracing` event carrying the payment
//! breakdown when `debug` is set.

use crate::aims;
use crate::aims::MemberSatisfactionFactors;
use crate::cost::{cost_cents_by_category, desired_reimbursement_cents};
use crate::models::inputs::{Inputs, ServiceCategory};
use crate::models::results::{Outputs, PmpmByCategory, SimulationResults};
use crate::payment::{
    actual_reimbursement_cents, payment_breakdown, run_payment_models, PaymentContext,
    PaymentModel,
};

/// Apply the same-period feedback adjustments to an input record
///
/// None of these effects persist from period to period; each simulation
/// call re-derives them from the unadjusted inputs.
///
/// - Primary-care participation, scaled by its quality-improvement factor,
///   lifts low-risk quality of life, provider trust, and the well-managed
///   rate.
/// - A reduced readmission rate, scaled by its own improvement factor,
///   lifts high-risk quality of life.
///   TODO: reducing readmissions appears to *lower* high-risk quality of
///   life here whenever the improvement factor is below 1; revisit the
///   direction of this feedback before rebalancing scenario content.
/// - Readmissions inflate inpatient utilization by `(1 + rate)`.
/// - Participation scales primary-care utilization.
/// - Generic prescribing discounts the drug unit cost and softens member
///   cost aversion, each through its own achieved-improvement factor.
pub fn apply_feedback(inputs: &Inputs) -> Inputs {
    let mut adjusted = inputs.clone();

    // Increased primary care helps low risk members stay healthy, builds
    // trust, and makes members feel well managed
    let primary_improvement_achieved =
        inputs.primary_care_participation_rate * inputs.primary_care_quality_improvement_factor;
    adjusted.quality_of_life_low_risk =
        primary_improvement_achieved * inputs.quality_of_life_low_risk;
    adjusted.provider_trust_factor = primary_improvement_achieved * inputs.provider_trust_factor;
    adjusted.well_managed_rate = primary_improvement_achieved * inputs.well_managed_rate;

    // Reduced readmission rate helps high risk members stay healthy
    let reverse_readmission_rate = 1.0 - inputs.readmission_rate;
    let readmission_improvement_achieved =
        reverse_readmission_rate * inputs.readmission_reduction_quality_improvement_factor;
    adjusted.quality_of_life_high_risk =
        readmission_improvement_achieved * inputs.quality_of_life_high_risk;

    // Not every member who needs primary care participates
    adjusted.utilization_per_member_per_year_primary =
        inputs.primary_care_participation_rate * inputs.utilization_per_member_per_year_primary;

    // More readmissions mean more inpatient stays
    adjusted.utilization_per_member_per_year_inpatient =
        (1.0 + inputs.readmission_rate) * inputs.utilization_per_member_per_year_inpatient;

    // Generic prescribing unlocks drug cost savings: providers do not expect
    // to be reimbursed as much for generics
    let generic_discount_achieved =
        inputs.generic_prescription_rate * inputs.generic_drug_cost_discount_factor;
    adjusted.provider_desired_cents_per_utilization_drugs =
        (1.0 - generic_discount_achieved) * inputs.provider_desired_cents_per_utilization_drugs;

    // Members getting the drugs they need at an affordable price are less
    // cost averse
    let generic_perception_achieved =
        inputs.generic_prescription_rate * inputs.generic_drug_perception_factor;
    adjusted.cost_aversion_factor =
        (1.0 - generic_perception_achieved) * inputs.cost_aversion_factor;

    adjusted
}

/// Run one full simulation pass
///
/// Returns the original inputs merged with every derived output; the
/// feedback-adjusted values are used for all derivations but are not
/// persisted into the result's input half.
pub fn simulate(
    inputs: &Inputs,
    models: &[Box<dyn PaymentModel>],
    debug: bool,
) -> SimulationResults {
    let adjusted = apply_feedback(inputs);

    // Costs from the adjusted utilization and pricing
    let cost_cents = cost_cents_by_category(&adjusted);
    let desired_cents = desired_reimbursement_cents(&cost_cents);

    // Every model sees the same adjusted + derived record
    let ctx = PaymentContext {
        inputs: &adjusted,
        cost_cents: &cost_cents,
        desired_reimbursement_cents: desired_cents,
    };
    let payments = run_payment_models(&ctx, models);
    let actual_cents = actual_reimbursement_cents(&payments);

    if debug {
        let breakdown = payment_breakdown(&payments, adjusted.member_count);
        tracing::debug!(?breakdown, "payment breakdown");
    }

    let member_count = adjusted.member_count;
    let pmpm_for = |category: ServiceCategory| {
        aims::cents_per_member_per_month(cost_cents.get(category), member_count)
    };

    let outputs = Outputs {
        cost_cents,
        incurred_pmpm_cents: PmpmByCategory {
            inpatient: pmpm_for(ServiceCategory::Inpatient),
            outpatient: pmpm_for(ServiceCategory::Outpatient),
            primary: pmpm_for(ServiceCategory::Primary),
            specialty: pmpm_for(ServiceCategory::Specialty),
            drugs: pmpm_for(ServiceCategory::Drugs),
        },
        desired_reimbursement_cents: desired_cents,
        actual_reimbursement_cents: actual_cents,
        member_satisfaction: aims::member_satisfaction(&MemberSatisfactionFactors::from(&adjusted)),
        quality_of_life: aims::quality_of_life(&adjusted),
        incurred_cents_per_member_per_month: aims::cents_per_member_per_month(
            desired_cents,
            member_count,
        ),
        paid_cents_per_member_per_month: aims::cents_per_member_per_month(
            actual_cents,
            member_count,
        ),
        provider_satisfaction: aims::provider_satisfaction(
            adjusted.provider_autonomy_factor,
            adjusted.provider_reporting_burden,
            desired_cents,
            actual_cents,
        ),
        quality_of_life_gini_index: aims::quality_of_life_gini_index(&adjusted),
        quality_of_life_palma_fraction: aims::quality_of_life_palma_fraction(&adjusted),
    };

    SimulationResults {
        inputs: inputs.clone(),
        outputs,
    }
}
