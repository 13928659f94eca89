//! Scenario driver CLI
//!
//! Loads a scenario definition from JSON, plays every round, and prints the
//! configured metrics with period-over-period trends.
//!
//! ```text
//! vbc-sim <scenario.json> [--choices ff,sf,...] [--explore] [--debug]
//! ```
//!
//! Each `--choices` token resolves one round's two decisions: `f` picks a
//! decision's first option, `s` its second. Rounds without a token default
//! to first options. `--explore` simulates every decision combination and
//! reports the final metrics per pathway. With `--debug` (or
//! `RUST_LOG=debug`) the engine's payment breakdown is logged per pass.

use std::env;
use std::fs;
use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use vbc_simulator_core_rs::{
    explore, format_value, trend, Game, MetricDescriptor, OptionChoice, Playthrough,
    SimulationResults, TrendDirection,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid choices token {0:?}: expected two letters from [fs], e.g. \"fs\"")]
    InvalidChoices(String),

    #[error(transparent)]
    Scenario(#[from] vbc_simulator_core_rs::ScenarioError),
}

struct Args {
    scenario_path: String,
    choices: Vec<[OptionChoice; 2]>,
    explore: bool,
    debug: bool,
}

fn parse_choice_token(token: &str) -> Result<[OptionChoice; 2], CliError> {
    fn choice(letter: Option<char>) -> Option<OptionChoice> {
        match letter {
            Some('f') => Some(OptionChoice::First),
            Some('s') => Some(OptionChoice::Second),
            _ => None,
        }
    }

    let mut letters = token.chars();
    let parsed = (choice(letters.next()), choice(letters.next()));
    match parsed {
        (Some(first), Some(second)) if letters.next().is_none() => Ok([first, second]),
        _ => Err(CliError::InvalidChoices(token.to_string())),
    }
}

fn parse_args() -> Result<Option<Args>, CliError> {
    let mut scenario_path = None;
    let mut choices = Vec::new();
    let mut explore = false;
    let mut debug = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--explore" => explore = true,
            "--debug" => debug = true,
            "--choices" => {
                let Some(tokens) = args.next() else {
                    return Ok(None);
                };
                for token in tokens.split(',') {
                    choices.push(parse_choice_token(token)?);
                }
            }
            _ if scenario_path.is_none() => scenario_path = Some(arg),
            _ => return Ok(None),
        }
    }

    Ok(scenario_path.map(|scenario_path| Args {
        scenario_path,
        choices,
        explore,
        debug,
    }))
}

fn load_game(path: &str) -> Result<Game, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn trend_label(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Better => "better",
        TrendDirection::Worse => "worse",
        TrendDirection::Negligible => "steady",
    }
}

fn print_metrics(
    metrics: &[MetricDescriptor],
    previous: Option<&SimulationResults>,
    current: &SimulationResults,
) {
    for metric in metrics {
        let value = current.value(metric.field);
        let formatted = format_value(metric.format, value);
        match previous {
            Some(previous_results) => {
                let movement = trend(
                    previous_results.value(metric.field),
                    value,
                    metric.higher_is_better,
                );
                println!(
                    "  {:<24} {:>12}  {:+.1}% ({})",
                    metric.name,
                    formatted,
                    movement.percent_change,
                    trend_label(movement.direction)
                );
            }
            None => println!("  {:<24} {:>12}", metric.name, formatted),
        }
    }
}

fn choices_label(choices: &[[OptionChoice; 2]]) -> String {
    choices
        .iter()
        .map(|combo| {
            combo
                .iter()
                .map(|choice| match choice {
                    OptionChoice::First => 'f',
                    OptionChoice::Second => 's',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn play(game: Game, choices: &[[OptionChoice; 2]], debug: bool) -> Result<(), CliError> {
    let rounds: Vec<_> = game.rounds.clone();
    let mut playthrough = Playthrough::new(game, debug);

    println!("Baseline");
    print_metrics(playthrough.metrics(), None, playthrough.current_results());

    for (index, round) in rounds.iter().enumerate() {
        let combo = choices
            .get(index)
            .copied()
            .unwrap_or([OptionChoice::First, OptionChoice::First]);
        let previous = playthrough.current_results().clone();
        let metrics = playthrough.metrics().to_vec();
        let results = playthrough.advance(combo)?;

        println!();
        println!("{} [{}]", round.title, choices_label(&[combo]));
        print_metrics(&metrics, Some(&previous), results);
    }
    Ok(())
}

fn explore_game(game: &Game) -> Result<(), CliError> {
    let outcomes = explore(game)?;
    println!(
        "{} pathways over {} rounds",
        outcomes.len(),
        game.rounds.len()
    );
    for outcome in &outcomes {
        let final_results = outcome.results.last().unwrap_or(&outcome.initial);
        println!();
        println!("Pathway [{}]", choices_label(&outcome.choices));
        print_metrics(&game.metrics, None, final_results);
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let game = load_game(&args.scenario_path)?;
    if args.explore {
        explore_game(&game)
    } else {
        play(game, &args.choices, args.debug)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            eprintln!("usage: vbc-sim <scenario.json> [--choices ff,sf,...] [--explore] [--debug]");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
