//! Threshold bonus payment model
//!
//! Performance incentives gated on quality measures. Each configured measure
//! names an input field and a threshold; meeting the threshold pays the full
//! per-member-per-year bonus, missing it pays exactly nothing. There is no
//! partial credit and no clawback — a failing measure contributes 0, never a
//! negative amount.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::inputs::InputField;
use crate::payment::{PaymentContext, PaymentModel, PaymentModelOutput};

/// One measure's gate
///
/// Normally the measured value must be greater than or equal to the
/// threshold to earn the bonus. For reverse measures (lower is better, e.g.
/// readmission rate) the value must be less than or equal to the threshold.
/// The boundary is inclusive in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub is_reverse_measure: bool,
    pub minimum_threshold: f64,
    pub bonus_per_member_per_year_cents: i64,
}

/// Pays all-or-nothing bonuses per quality measure
#[derive(Debug, Clone)]
pub struct ThresholdBonusModel {
    name: String,
    measures: BTreeMap<InputField, ThresholdConfig>,
}

impl ThresholdBonusModel {
    pub fn new(name: impl Into<String>, measures: BTreeMap<InputField, ThresholdConfig>) -> Self {
        Self {
            name: name.into(),
            measures,
        }
    }
}

impl PaymentModel for ThresholdBonusModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &PaymentContext<'_>) -> PaymentModelOutput {
        let member_count = ctx.inputs.member_count;
        let payment_cents = self
            .measures
            .iter()
            .map(|(field, config)| {
                let value = field.get(ctx.inputs);
                let met_threshold = if config.is_reverse_measure {
                    value <= config.minimum_threshold
                } else {
                    value >= config.minimum_threshold
                };
                if met_threshold {
                    config.bonus_per_member_per_year_cents as f64 * member_count
                } else {
                    0.0
                }
            })
            .sum();
        PaymentModelOutput {
            payment_cents,
            name: self.name.clone(),
        }
    }
}
