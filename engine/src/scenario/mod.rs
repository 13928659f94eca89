//! Scenario content and the round/decision layer
//!
//! All scenario content — initial inputs, the initial payment-model set,
//! rounds, decisions, metric descriptors — is externally supplied, immutable
//! configuration: plain serde data an authoring tool emits as JSON. The
//! engine never embeds or mutates content.
//!
//! A round carries baseline model-set edits and input modifiers plus exactly
//! two decisions; each decision carries exactly two mutually exclusive
//! options with their own edits and modifiers. Choosing one option per
//! decision resolves the round; the transition in [`transition`] turns the
//! current state plus those choices into the next round's inputs and model
//! set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metrics::MetricDescriptor;
use crate::models::inputs::{InputField, Inputs};
use crate::payment::{PaymentModel, PaymentModelConfig};

pub mod engine;
pub mod explore;
pub mod transition;

// Re-exports
pub use engine::{Playthrough, ScenarioError};
pub use explore::{explore, explore_pathway, PathwayOutcome};
pub use transition::apply_round;

/// The active payment models, keyed by name
///
/// Ordered by key so model invocation and payment summation are
/// deterministic run to run.
pub type ModelSet = BTreeMap<String, PaymentModelConfig>;

/// Edits a round or option applies to the model set, keyed by model name
pub type ModelEdits = BTreeMap<String, ModelEdit>;

/// Percentage-point input modifiers, keyed by field
pub type InputModifiers = BTreeMap<InputField, f64>;

/// Build live models from a model set, in key order
pub fn build_models(models: &ModelSet) -> Vec<Box<dyn PaymentModel>> {
    models
        .iter()
        .map(|(name, config)| config.build(name))
        .collect()
}

/// One edit to a named model-set entry
///
/// Intent is explicit and exhaustively checked: `Keep` carries the current
/// entry (and is what an authoring tool emits for an untouched key),
/// `Replace` installs a new configuration whether or not the key existed,
/// and `Remove` deletes the entry regardless of prior presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelEdit {
    Keep,
    Replace(PaymentModelConfig),
    Remove,
}

/// Which of a decision's two options was chosen
///
/// Passing a choice per decision is what resolves a round; an unresolved
/// decision cannot be expressed at the transition API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionChoice {
    First,
    Second,
}

impl OptionChoice {
    pub const ALL: [OptionChoice; 2] = [OptionChoice::First, OptionChoice::Second];

    pub(crate) fn index(self) -> usize {
        match self {
            OptionChoice::First => 0,
            OptionChoice::Second => 1,
        }
    }
}

/// One selectable side of a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// Short label presented to the player (e.g. the advising character)
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub model_edits: ModelEdits,
    #[serde(default)]
    pub input_modifiers: InputModifiers,
}

/// A two-option decision presented during a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub description: String,
    pub options: [DecisionOption; 2],
}

/// One turn of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub title: String,
    pub description: String,
    /// Edits applied before any decision's edits
    #[serde(default)]
    pub model_edits: ModelEdits,
    /// Modifiers combined with the chosen options' modifiers
    #[serde(default)]
    pub input_modifiers: InputModifiers,
    pub decisions: [Decision; 2],
}

/// A complete scenario definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub initial_inputs: Inputs,
    pub initial_models: ModelSet,
    pub metrics: Vec<MetricDescriptor>,
    pub rounds: Vec<Round>,
}
