//! Payment model protocol
//!
//! A payment model is a named, immutable unit of reimbursement logic. Each
//! model sees the full derived input record and answers with a payment
//! amount; the active models are invoked independently — never observing
//! each other's output — and their payments sum to the actual reimbursement.
//!
//! Four formula implementations live in this module's submodules:
//! - [`fee_for_service`]: rate × included category spend
//! - [`care_coordination`]: flat per-member-per-month fee
//! - [`threshold_bonus`]: all-or-nothing bonuses gated on quality measures
//! - [`shared_savings`]: target-vs-actual spend split with a stop-loss cap
//!
//! Model sets are held as name-keyed [`config::PaymentModelConfig`] entries:
//! serializable, cloneable handles that `build()` into trait objects on
//! demand.

use serde::Serialize;

use crate::aims::cents_per_member_per_month;
use crate::models::inputs::{Inputs, ServiceCategory};
use crate::models::results::CostByCategory;

pub mod care_coordination;
pub mod config;
pub mod fee_for_service;
pub mod shared_savings;
pub mod threshold_bonus;

// Re-exports
pub use care_coordination::CareCoordinationModel;
pub use config::PaymentModelConfig;
pub use fee_for_service::FeeForServiceModel;
pub use shared_savings::SharedSavingsModel;
pub use threshold_bonus::{ThresholdBonusModel, ThresholdConfig};

/// The record a payment model is invoked with
///
/// The period's (feedback-adjusted) inputs extended with the derived
/// category spend and the desired-reimbursement total.
#[derive(Debug, Clone, Copy)]
pub struct PaymentContext<'a> {
    pub inputs: &'a Inputs,
    pub cost_cents: &'a CostByCategory,
    pub desired_reimbursement_cents: f64,
}

/// One model's answer: a payment amount, echoing the model's own name
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentModelOutput {
    pub payment_cents: f64,
    pub name: String,
}

/// Reimbursement logic invoked once per simulation call
///
/// Implementations must be pure over the context: no shared state, no
/// visibility into other models' output.
pub trait PaymentModel: Send + Sync {
    /// The model's name, echoed into its output
    fn name(&self) -> &str;

    /// Compute this model's payment for the period
    fn run(&self, ctx: &PaymentContext<'_>) -> PaymentModelOutput;
}

/// Spend summed over a set of included service categories (cents)
pub fn included_spend_cents(costs: &CostByCategory, categories: &[ServiceCategory]) -> f64 {
    categories.iter().map(|category| costs.get(*category)).sum()
}

/// Invoke every active model independently against one context
pub fn run_payment_models(
    ctx: &PaymentContext<'_>,
    models: &[Box<dyn PaymentModel>],
) -> Vec<PaymentModelOutput> {
    models.iter().map(|model| model.run(ctx)).collect()
}

/// Actual reimbursement: the sum of all model payments (cents)
pub fn actual_reimbursement_cents(outputs: &[PaymentModelOutput]) -> f64 {
    outputs.iter().map(|output| output.payment_cents).sum()
}

/// One model's totals normalized for diagnostic reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentBreakdownEntry {
    pub name: String,
    pub payment_cents: f64,
    /// Per member per year (cents, floored)
    pub pmpy_cents: i64,
    /// Per member per month: PMPY / 12 (cents, floored)
    pub pmpm_cents: i64,
}

/// Per-model payment totals with PMPY/PMPM figures
///
/// Purely observational; nothing downstream consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub entries: Vec<PaymentBreakdownEntry>,
}

/// Aggregate model outputs into the diagnostic breakdown
pub fn payment_breakdown(outputs: &[PaymentModelOutput], member_count: f64) -> PaymentBreakdown {
    let entries = outputs
        .iter()
        .map(|output| {
            let pmpy_cents = if member_count == 0.0 || output.payment_cents == 0.0 {
                0
            } else {
                (output.payment_cents / member_count).floor() as i64
            };
            PaymentBreakdownEntry {
                name: output.name.clone(),
                payment_cents: output.payment_cents,
                pmpy_cents,
                pmpm_cents: cents_per_member_per_month(output.payment_cents, member_count),
            }
        })
        .collect();
    PaymentBreakdown { entries }
}
