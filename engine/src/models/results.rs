//! Derived result records
//!
//! `CostByCategory` is recomputed from scratch on every simulation call.
//! `SimulationResults` is the unit persisted across rounds: the original
//! input record plus everything derived from it. The `inputs` half is the
//! *pre-feedback* record, so same-period adjustments never leak into the
//! next round's starting state.

use serde::{Deserialize, Serialize};

use crate::models::inputs::{InputField, Inputs, ServiceCategory};

/// Spend per service category (cents)
///
/// Derived spend is real-valued: fractional population tiers make category
/// spend non-integral by construction. Flooring to integer cents happens
/// only at the per-member-per-month reporting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostByCategory {
    pub inpatient: f64,
    pub outpatient: f64,
    pub primary: f64,
    pub specialty: f64,
    pub drugs: f64,
}

impl CostByCategory {
    /// Spend for one category (cents)
    pub fn get(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Inpatient => self.inpatient,
            ServiceCategory::Outpatient => self.outpatient,
            ServiceCategory::Primary => self.primary,
            ServiceCategory::Specialty => self.specialty,
            ServiceCategory::Drugs => self.drugs,
        }
    }

    /// Mutable spend accumulator for one category
    pub(crate) fn get_mut(&mut self, category: ServiceCategory) -> &mut f64 {
        match category {
            ServiceCategory::Inpatient => &mut self.inpatient,
            ServiceCategory::Outpatient => &mut self.outpatient,
            ServiceCategory::Primary => &mut self.primary,
            ServiceCategory::Specialty => &mut self.specialty,
            ServiceCategory::Drugs => &mut self.drugs,
        }
    }

    /// Total spend across all five categories (cents)
    pub fn total_cents(&self) -> f64 {
        ServiceCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }
}

/// Per-member-per-month spend per service category (cents, floored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PmpmByCategory {
    pub inpatient: i64,
    pub outpatient: i64,
    pub primary: i64,
    pub specialty: i64,
    pub drugs: i64,
}

impl PmpmByCategory {
    /// PMPM figure for one category (cents)
    pub fn get(&self, category: ServiceCategory) -> i64 {
        match category {
            ServiceCategory::Inpatient => self.inpatient,
            ServiceCategory::Outpatient => self.outpatient,
            ServiceCategory::Primary => self.primary,
            ServiceCategory::Specialty => self.specialty,
            ServiceCategory::Drugs => self.drugs,
        }
    }
}

/// Everything one simulation call derives from its inputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Spend by service category (cents)
    pub cost_cents: CostByCategory,
    /// Incurred spend by category, per member per month (cents, floored)
    pub incurred_pmpm_cents: PmpmByCategory,
    /// Full cost as priced by providers (cents)
    pub desired_reimbursement_cents: f64,
    /// Sum of what the active payment models actually pay out (cents)
    pub actual_reimbursement_cents: f64,

    // Quintuple aim scores
    /// Member experience score (0-1)
    pub member_satisfaction: f64,
    /// Health outcomes: population-weighted quality of life (0-1)
    pub quality_of_life: f64,
    /// Incurred cost per member per month (cents, floored)
    pub incurred_cents_per_member_per_month: i64,
    /// Paid cost per member per month (cents, floored)
    pub paid_cents_per_member_per_month: i64,
    /// Provider experience score (0-1)
    pub provider_satisfaction: f64,
    /// Health equity: Gini index of quality of life (0 equal, 1 inequal)
    pub quality_of_life_gini_index: f64,
    /// Health equity: Palma fraction of quality of life (1 equal, <1 inequal)
    pub quality_of_life_palma_fraction: f64,
}

/// One round's complete result record
///
/// The input record unioned with all derived fields; each round's results
/// become part of the next round's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub inputs: Inputs,
    pub outputs: Outputs,
}

/// Typed name of a displayable result field
///
/// The presentation boundary looks up result fields by these names; integer
/// cent figures widen to `f64` for uniform display handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultField {
    MemberSatisfaction,
    QualityOfLife,
    IncurredCentsPerMemberPerMonth,
    PaidCentsPerMemberPerMonth,
    ProviderSatisfaction,
    QualityOfLifeGiniIndex,
    QualityOfLifePalmaFraction,
    DesiredReimbursementCents,
    ActualReimbursementCents,
    CostCents(ServiceCategory),
    IncurredPmpmCents(ServiceCategory),
    Input(InputField),
}

impl SimulationResults {
    /// Look up one displayable field of this record
    pub fn value(&self, field: ResultField) -> f64 {
        match field {
            ResultField::MemberSatisfaction => self.outputs.member_satisfaction,
            ResultField::QualityOfLife => self.outputs.quality_of_life,
            ResultField::IncurredCentsPerMemberPerMonth => {
                self.outputs.incurred_cents_per_member_per_month as f64
            }
            ResultField::PaidCentsPerMemberPerMonth => {
                self.outputs.paid_cents_per_member_per_month as f64
            }
            ResultField::ProviderSatisfaction => self.outputs.provider_satisfaction,
            ResultField::QualityOfLifeGiniIndex => self.outputs.quality_of_life_gini_index,
            ResultField::QualityOfLifePalmaFraction => self.outputs.quality_of_life_palma_fraction,
            ResultField::DesiredReimbursementCents => self.outputs.desired_reimbursement_cents,
            ResultField::ActualReimbursementCents => self.outputs.actual_reimbursement_cents,
            ResultField::CostCents(category) => self.outputs.cost_cents.get(category),
            ResultField::IncurredPmpmCents(category) => {
                self.outputs.incurred_pmpm_cents.get(category) as f64
            }
            ResultField::Input(field) => field.get(&self.inputs),
        }
    }
}
