//! Stateful scenario driver
//!
//! `Playthrough` holds what the external driver needs between turns: the
//! scenario definition, the current results record, the current model set,
//! and the round cursor. Each `advance` resolves the next round with the
//! supplied choices and re-simulates.

use thiserror::Error;

use crate::models::results::SimulationResults;
use crate::orchestrator::simulate;
use crate::scenario::{build_models, Game, ModelSet, OptionChoice, Round};
use crate::scenario::transition::apply_round;

/// Errors from driving a scenario
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("no round remains at index {round_index}")]
    NoMoreRounds { round_index: usize },
}

/// One session of playing a scenario front to back
pub struct Playthrough {
    game: Game,
    models: ModelSet,
    current: SimulationResults,
    round_index: usize,
    debug: bool,
}

impl Playthrough {
    /// Start a playthrough by simulating the initial state
    pub fn new(game: Game, debug: bool) -> Self {
        let models = game.initial_models.clone();
        let current = simulate(&game.initial_inputs, &build_models(&models), debug);
        Self {
            game,
            models,
            current,
            round_index: 0,
            debug,
        }
    }

    /// The latest results record
    pub fn current_results(&self) -> &SimulationResults {
        &self.current
    }

    /// The current active model set
    pub fn current_models(&self) -> &ModelSet {
        &self.models
    }

    /// Index of the next round to play
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// The next round's content, if any remains
    pub fn current_round(&self) -> Option<&Round> {
        self.game.rounds.get(self.round_index)
    }

    /// The scenario's metric descriptors
    pub fn metrics(&self) -> &[crate::metrics::MetricDescriptor] {
        &self.game.metrics
    }

    /// Resolve the next round with one choice per decision and re-simulate
    ///
    /// The new results record becomes the base state for the following
    /// round.
    pub fn advance(
        &mut self,
        choices: [OptionChoice; 2],
    ) -> Result<&SimulationResults, ScenarioError> {
        let round = self
            .game
            .rounds
            .get(self.round_index)
            .ok_or(ScenarioError::NoMoreRounds {
                round_index: self.round_index,
            })?;

        let (new_inputs, new_models) =
            apply_round(&self.current.inputs, &self.models, round, choices);
        self.current = simulate(&new_inputs, &build_models(&new_models), self.debug);
        self.models = new_models;
        self.round_index += 1;
        Ok(&self.current)
    }
}
