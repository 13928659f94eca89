//! Payment model configuration
//!
//! `PaymentModelConfig` is the serializable, cloneable handle scenario
//! content holds in its name-keyed model set. Configs are plain data —
//! authored in JSON, edited by rounds and decisions — and `build()` into
//! live [`PaymentModel`] instances when a simulation runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::inputs::{InputField, ServiceCategory};
use crate::payment::{
    CareCoordinationModel, FeeForServiceModel, PaymentModel, SharedSavingsModel,
    ThresholdBonusModel, ThresholdConfig,
};

fn full_fraction() -> f64 {
    1.0
}

/// Configuration for one payment model, tagged by formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentModelConfig {
    /// Rate × included category spend
    FeeForService {
        reimbursement_rate: f64,
        included_categories: Vec<ServiceCategory>,
    },

    /// Flat per-member-per-month fee
    CareCoordination {
        fee_per_member_per_month_cents: i64,
        #[serde(default = "full_fraction")]
        fraction_of_population: f64,
    },

    /// All-or-nothing bonuses gated on quality measures
    ThresholdBonus {
        measures: BTreeMap<InputField, ThresholdConfig>,
    },

    /// Target-vs-actual spend split with optional stop-loss cap
    SharedSavings {
        target_spend_cents_per_member_per_year: i64,
        provider_savings_rate: f64,
        provider_loss_rate: f64,
        /// Most-negative adjustment the provider can absorb; None = unbounded
        #[serde(default)]
        provider_stop_loss_cap_cents: Option<i64>,
        #[serde(default = "full_fraction")]
        fraction_of_cost_covered: f64,
        #[serde(default = "full_fraction")]
        fraction_of_population_covered: f64,
        included_categories: Vec<ServiceCategory>,
    },
}

impl PaymentModelConfig {
    /// Build the live model this config describes
    ///
    /// `name` is the model's key in the active set; the built model echoes
    /// it in every output.
    pub fn build(&self, name: &str) -> Box<dyn PaymentModel> {
        match self {
            PaymentModelConfig::FeeForService {
                reimbursement_rate,
                included_categories,
            } => Box::new(FeeForServiceModel::new(
                name,
                *reimbursement_rate,
                included_categories.clone(),
            )),
            PaymentModelConfig::CareCoordination {
                fee_per_member_per_month_cents,
                fraction_of_population,
            } => Box::new(CareCoordinationModel::new(
                name,
                *fee_per_member_per_month_cents,
                *fraction_of_population,
            )),
            PaymentModelConfig::ThresholdBonus { measures } => {
                Box::new(ThresholdBonusModel::new(name, measures.clone()))
            }
            PaymentModelConfig::SharedSavings {
                target_spend_cents_per_member_per_year,
                provider_savings_rate,
                provider_loss_rate,
                provider_stop_loss_cap_cents,
                fraction_of_cost_covered,
                fraction_of_population_covered,
                included_categories,
            } => Box::new(SharedSavingsModel::new(
                name,
                *target_spend_cents_per_member_per_year,
                *provider_savings_rate,
                *provider_loss_rate,
                *provider_stop_loss_cap_cents,
                *fraction_of_cost_covered,
                *fraction_of_population_covered,
                included_categories.clone(),
            )),
        }
    }
}
