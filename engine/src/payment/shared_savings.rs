//! Shared savings payment model
//!
//! The plan and provider agree on a spend target; the gap between target and
//! actual spend is split between them. Under target, the provider keeps
//! `net × savings_rate` on top of actual spend. Over target, the provider
//! absorbs `net × loss_rate`, floored (least-negative) at an optional
//! stop-loss cap.

use crate::models::inputs::ServiceCategory;
use crate::payment::{included_spend_cents, PaymentContext, PaymentModel, PaymentModelOutput};

/// Splits the target-vs-actual spend gap with the provider
#[derive(Debug, Clone)]
pub struct SharedSavingsModel {
    name: String,
    target_spend_cents_per_member_per_year: i64,
    provider_savings_rate: f64,
    provider_loss_rate: f64,
    /// Most-negative adjustment the provider can absorb; unbounded when None
    stop_loss_cap_cents: f64,
    fraction_of_cost_covered: f64,
    fraction_of_population_covered: f64,
    included_categories: Vec<ServiceCategory>,
}

impl SharedSavingsModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        target_spend_cents_per_member_per_year: i64,
        provider_savings_rate: f64,
        provider_loss_rate: f64,
        provider_stop_loss_cap_cents: Option<i64>,
        fraction_of_cost_covered: f64,
        fraction_of_population_covered: f64,
        included_categories: Vec<ServiceCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            target_spend_cents_per_member_per_year,
            provider_savings_rate,
            provider_loss_rate,
            stop_loss_cap_cents: provider_stop_loss_cap_cents
                .map_or(f64::NEG_INFINITY, |cap| cap as f64),
            fraction_of_cost_covered,
            fraction_of_population_covered,
            included_categories,
        }
    }
}

impl PaymentModel for SharedSavingsModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &PaymentContext<'_>) -> PaymentModelOutput {
        let actual_spend_cents = self.fraction_of_cost_covered
            * included_spend_cents(ctx.cost_cents, &self.included_categories);

        let target_spend_cents = self.target_spend_cents_per_member_per_year as f64
            * self.fraction_of_population_covered
            * ctx.inputs.member_count;

        // Positive net is savings, negative net is loss
        let net_cents = target_spend_cents - actual_spend_cents;

        let mut payment_cents = actual_spend_cents;
        if net_cents > 0.0 {
            payment_cents += net_cents * self.provider_savings_rate;
        } else {
            let shared_loss_cents = net_cents * self.provider_loss_rate;
            // Both values are negative; max picks the smaller loss
            payment_cents += shared_loss_cents.max(self.stop_loss_cap_cents);
        }

        PaymentModelOutput {
            payment_cents,
            name: self.name.clone(),
        }
    }
}
