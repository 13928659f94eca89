//! Fee-for-service payment model
//!
//! The plan reimburses a fixed fraction of whatever the included service
//! categories cost: `payment = rate × Σ included category spend`.

use crate::models::inputs::ServiceCategory;
use crate::payment::{included_spend_cents, PaymentContext, PaymentModel, PaymentModelOutput};

/// Reimburses a flat fraction of included category spend
#[derive(Debug, Clone)]
pub struct FeeForServiceModel {
    name: String,
    reimbursement_rate: f64,
    included_categories: Vec<ServiceCategory>,
}

impl FeeForServiceModel {
    pub fn new(
        name: impl Into<String>,
        reimbursement_rate: f64,
        included_categories: Vec<ServiceCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            reimbursement_rate,
            included_categories,
        }
    }
}

impl PaymentModel for FeeForServiceModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &PaymentContext<'_>) -> PaymentModelOutput {
        let actual_spend_cents = included_spend_cents(ctx.cost_cents, &self.included_categories);
        PaymentModelOutput {
            payment_cents: self.reimbursement_rate * actual_spend_cents,
            name: self.name.clone(),
        }
    }
}
