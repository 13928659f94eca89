//! Value-Based Care Contract Simulator - Core Engine
//!
//! Models the economics and outcomes of a population-health payment
//! contract between a health plan and providers. One pure `simulate` call
//! turns a population's risk mix, utilization, and unit costs into
//! categorized spend, runs a pluggable set of payment models to determine
//! actual reimbursement, and scores the quintuple aim: member satisfaction,
//! quality of life, cost per member, provider satisfaction, and health
//! equity.
//!
//! # Architecture
//!
//! - **models**: Domain records (Inputs, CostByCategory, SimulationResults)
//! - **cost**: Cost and utilization model
//! - **inequity**: Gini index and Palma fraction
//! - **aims**: The five outcome scores
//! - **payment**: Payment model protocol and the four formulas
//! - **orchestrator**: The `simulate` pass wiring everything together
//! - **scenario**: Round/decision content, state transition, what-if tree
//! - **metrics**: Display formatting and trend classification
//!
//! # Critical Invariants
//!
//! 1. All money values are cents; configured amounts are i64, derived spend
//!    is f64 (fractional population tiers make it non-integral), and the
//!    floor to integer cents happens exactly once, at the PMPM boundary
//! 2. Every formula is a total function: missing data degrades to defined
//!    defaults, guarded divisions short-circuit to zero, nothing throws
//! 3. Simulation is deterministic and single-threaded; each round depends
//!    on the full result of the previous round

// Module declarations
pub mod aims;
pub mod cost;
pub mod inequity;
pub mod metrics;
pub mod models;
pub mod orchestrator;
pub mod payment;
pub mod scenario;

// Re-exports for convenience
pub use cost::{cost_cents_by_category, desired_reimbursement_cents};
pub use inequity::{gini_index, palma_fraction, PalmaInputs};
pub use metrics::{format_value, trend, MetricDescriptor, MetricFormat, Trend, TrendDirection};
pub use models::{
    inputs::{InputField, Inputs, RiskLevel, ServiceCategory},
    results::{CostByCategory, Outputs, PmpmByCategory, ResultField, SimulationResults},
};
pub use orchestrator::{apply_feedback, simulate};
pub use payment::{
    actual_reimbursement_cents, payment_breakdown, run_payment_models, CareCoordinationModel,
    FeeForServiceModel, PaymentBreakdown, PaymentContext, PaymentModel, PaymentModelConfig,
    PaymentModelOutput, SharedSavingsModel, ThresholdBonusModel, ThresholdConfig,
};
pub use scenario::{
    apply_round, build_models, explore, explore_pathway, Decision, DecisionOption, Game,
    InputModifiers, ModelEdit, ModelEdits, ModelSet, OptionChoice, PathwayOutcome, Playthrough,
    Round, ScenarioError,
};
