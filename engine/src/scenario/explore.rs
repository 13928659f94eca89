//! What-if pathway exploration
//!
//! Simulates every combination of decision choices across all rounds —
//! 4^rounds independent simulate-chains. Branches share no mutable state,
//! so callers are free to run `explore_pathway` chains on their own threads;
//! the engine itself stays single-threaded.

use serde::Serialize;

use crate::models::results::SimulationResults;
use crate::scenario::engine::{Playthrough, ScenarioError};
use crate::scenario::{Game, OptionChoice};

/// The four ways one round's two decisions can resolve
const ROUND_COMBINATIONS: [[OptionChoice; 2]; 4] = [
    [OptionChoice::First, OptionChoice::First],
    [OptionChoice::Second, OptionChoice::First],
    [OptionChoice::First, OptionChoice::Second],
    [OptionChoice::Second, OptionChoice::Second],
];

/// One fully-resolved pathway through a scenario
#[derive(Debug, Clone, Serialize)]
pub struct PathwayOutcome {
    /// Per-round choices, in round order
    pub choices: Vec<[OptionChoice; 2]>,
    /// The pre-round baseline results
    pub initial: SimulationResults,
    /// Results after each round, in round order
    pub results: Vec<SimulationResults>,
}

/// Simulate a single pathway of choices front to back
pub fn explore_pathway(
    game: &Game,
    choices: &[[OptionChoice; 2]],
) -> Result<PathwayOutcome, ScenarioError> {
    let mut playthrough = Playthrough::new(game.clone(), false);
    let initial = playthrough.current_results().clone();
    let mut results = Vec::with_capacity(choices.len());
    for combo in choices {
        results.push(playthrough.advance(*combo)?.clone());
    }
    Ok(PathwayOutcome {
        choices: choices.to_vec(),
        initial,
        results,
    })
}

/// Simulate every combination of decision choices across all rounds
pub fn explore(game: &Game) -> Result<Vec<PathwayOutcome>, ScenarioError> {
    let mut pathways: Vec<Vec<[OptionChoice; 2]>> = vec![Vec::new()];
    for _ in &game.rounds {
        let mut extended = Vec::with_capacity(pathways.len() * ROUND_COMBINATIONS.len());
        for pathway in &pathways {
            for combo in ROUND_COMBINATIONS {
                let mut next = pathway.clone();
                next.push(combo);
                extended.push(next);
            }
        }
        pathways = extended;
    }

    pathways
        .iter()
        .map(|choices| explore_pathway(game, choices))
        .collect()
}
