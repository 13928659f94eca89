//! Care coordination fee payment model
//!
//! A flat per-member-per-month fee paid regardless of utilization, funding
//! coordination work that fee-for-service never reimburses:
//! `payment = 12 × fee × (population_fraction × member_count)`.

use crate::payment::{PaymentContext, PaymentModel, PaymentModelOutput};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Pays a flat monthly fee for every covered member
#[derive(Debug, Clone)]
pub struct CareCoordinationModel {
    name: String,
    fee_per_member_per_month_cents: i64,
    fraction_of_population: f64,
}

impl CareCoordinationModel {
    /// `fraction_of_population` of 1.0 covers the whole population
    pub fn new(
        name: impl Into<String>,
        fee_per_member_per_month_cents: i64,
        fraction_of_population: f64,
    ) -> Self {
        Self {
            name: name.into(),
            fee_per_member_per_month_cents,
            fraction_of_population,
        }
    }
}

impl PaymentModel for CareCoordinationModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &PaymentContext<'_>) -> PaymentModelOutput {
        let pmpy_cents = MONTHS_PER_YEAR * self.fee_per_member_per_month_cents as f64;
        let covered_members = self.fraction_of_population * ctx.inputs.member_count;
        PaymentModelOutput {
            payment_cents: pmpy_cents * covered_members,
            name: self.name.clone(),
        }
    }
}
