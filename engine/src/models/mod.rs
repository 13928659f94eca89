//! Domain models for the contract simulator

pub mod inputs;
pub mod results;

// Re-exports
pub use inputs::{InputField, Inputs, RiskLevel, ServiceCategory};
pub use results::{CostByCategory, Outputs, SimulationResults};
