//! Scenario driver and what-if exploration tests

use vbc_simulator_core_rs::{
    explore, explore_pathway, format_value, trend, Decision, DecisionOption, Game, InputField,
    InputModifiers, Inputs, MetricDescriptor, MetricFormat, ModelEdit, ModelEdits, ModelSet,
    OptionChoice, PaymentModelConfig, Playthrough, ResultField, Round, ScenarioError,
    ServiceCategory, TrendDirection,
};

fn baseline_inputs() -> Inputs {
    Inputs {
        member_count: 10.0,
        member_rate_low_risk: 0.8,
        member_rate_high_risk: 0.2,
        quality_of_life_low_risk: 1.0,
        quality_of_life_medium_risk: 1.0,
        quality_of_life_high_risk: 1.0,
        utilization_per_member_per_year_inpatient: 1.0,
        utilization_factor_high_risk: 1.0,
        provider_desired_cents_per_utilization_inpatient: 120_000.0,
        primary_care_participation_rate: 1.0,
        primary_care_quality_improvement_factor: 1.0,
        readmission_reduction_quality_improvement_factor: 1.0,
        provider_autonomy_factor: 1.0,
        ..Default::default()
    }
}

fn full_fee_for_service(rate: f64) -> PaymentModelConfig {
    PaymentModelConfig::FeeForService {
        reimbursement_rate: rate,
        included_categories: ServiceCategory::ALL.to_vec(),
    }
}

fn noop_option(label: &str) -> DecisionOption {
    DecisionOption {
        label: label.to_string(),
        description: String::new(),
        model_edits: ModelEdits::new(),
        input_modifiers: InputModifiers::new(),
    }
}

fn decision(id: &str, options: [DecisionOption; 2]) -> Decision {
    Decision {
        id: id.to_string(),
        title: String::new(),
        description: String::new(),
        options,
    }
}

/// Two rounds. Round 1 grows the population 10% and lets the first decision
/// either raise the fee-for-service rate to 1.0 or drop the model entirely.
/// Round 2 is all no-ops.
fn two_round_game() -> Game {
    let raise_rate = DecisionOption {
        model_edits: ModelEdits::from([(
            "ffs".to_string(),
            ModelEdit::Replace(full_fee_for_service(1.0)),
        )]),
        ..noop_option("contract manager")
    };
    let drop_model = DecisionOption {
        model_edits: ModelEdits::from([("ffs".to_string(), ModelEdit::Remove)]),
        ..noop_option("plan actuary")
    };

    Game {
        initial_inputs: baseline_inputs(),
        initial_models: ModelSet::from([("ffs".to_string(), full_fee_for_service(0.5))]),
        metrics: vec![
            MetricDescriptor {
                name: "Provider Satisfaction".to_string(),
                field: ResultField::ProviderSatisfaction,
                format: MetricFormat::Percent,
                higher_is_better: true,
            },
            MetricDescriptor {
                name: "Cost PMPM".to_string(),
                field: ResultField::IncurredCentsPerMemberPerMonth,
                format: MetricFormat::Currency,
                higher_is_better: false,
            },
        ],
        rounds: vec![
            Round {
                title: "Contract Year 2024".to_string(),
                description: String::new(),
                model_edits: ModelEdits::new(),
                input_modifiers: InputModifiers::from([(InputField::MemberCount, 0.1)]),
                decisions: [
                    decision("revise-ffs-contract", [raise_rate, drop_model]),
                    decision(
                        "require-coordination-plan",
                        [noop_option("compliance"), noop_option("medical director")],
                    ),
                ],
            },
            Round {
                title: "Contract Year 2025".to_string(),
                description: String::new(),
                model_edits: ModelEdits::new(),
                input_modifiers: InputModifiers::new(),
                decisions: [
                    decision(
                        "expand-geo-attribution",
                        [noop_option("data scientist"), noop_option("member services")],
                    ),
                    decision(
                        "prior-year-benchmarks",
                        [noop_option("medical director"), noop_option("economist")],
                    ),
                ],
            },
        ],
    }
}

#[test]
fn test_playthrough_runs_the_initial_simulation() {
    let playthrough = Playthrough::new(two_round_game(), false);
    let initial = playthrough.current_results();
    assert_eq!(initial.outputs.desired_reimbursement_cents, 240_000.0);
    // Half-rate fee for service
    assert_eq!(initial.outputs.actual_reimbursement_cents, 120_000.0);
    assert_eq!(playthrough.round_index(), 0);
}

#[test]
fn test_advancing_applies_modifiers_and_edits() {
    let mut playthrough = Playthrough::new(two_round_game(), false);
    let results = playthrough
        .advance([OptionChoice::First, OptionChoice::First])
        .unwrap()
        .clone();

    // 10 members grew by the round's +0.1 modifier
    assert_eq!(results.inputs.member_count, 10.0 * (1.0 + 0.1));
    // Raised to full fee for service: paid equals desired
    assert_eq!(
        results.outputs.actual_reimbursement_cents,
        results.outputs.desired_reimbursement_cents
    );
    assert_eq!(results.outputs.provider_satisfaction, 1.0);
    assert_eq!(playthrough.round_index(), 1);
}

#[test]
fn test_dropping_the_only_model_zeroes_reimbursement() {
    let mut playthrough = Playthrough::new(two_round_game(), false);
    let results = playthrough
        .advance([OptionChoice::Second, OptionChoice::First])
        .unwrap();
    assert_eq!(results.outputs.actual_reimbursement_cents, 0.0);
    assert!(playthrough.current_models().is_empty());
}

#[test]
fn test_each_round_builds_on_the_previous_results() {
    let mut playthrough = Playthrough::new(two_round_game(), false);
    let after_first = playthrough
        .advance([OptionChoice::First, OptionChoice::First])
        .unwrap()
        .clone();
    let after_second = playthrough
        .advance([OptionChoice::First, OptionChoice::First])
        .unwrap()
        .clone();
    // Round 2 has no modifiers: the input record carries straight over
    assert_eq!(after_second.inputs, after_first.inputs);

    let exhausted = playthrough.advance([OptionChoice::First, OptionChoice::First]);
    assert_eq!(
        exhausted.unwrap_err(),
        ScenarioError::NoMoreRounds { round_index: 2 }
    );
}

#[test]
fn test_explore_enumerates_every_choice_combination() {
    let game = two_round_game();
    let outcomes = explore(&game).unwrap();
    // 4 combinations per round, 2 rounds
    assert_eq!(outcomes.len(), 16);

    // The first pathway picks the first option everywhere and must match a
    // manual playthrough
    let first = &outcomes[0];
    assert_eq!(
        first.choices,
        vec![
            [OptionChoice::First, OptionChoice::First],
            [OptionChoice::First, OptionChoice::First],
        ]
    );
    let mut playthrough = Playthrough::new(game.clone(), false);
    for (step, combo) in first.choices.iter().enumerate() {
        let expected = playthrough.advance(*combo).unwrap();
        assert_eq!(&first.results[step], expected);
    }

    // Pathways diverge where the dropped model zeroes reimbursement
    let dropped = outcomes
        .iter()
        .find(|outcome| outcome.choices[0] == [OptionChoice::Second, OptionChoice::First])
        .unwrap();
    assert_eq!(dropped.results[0].outputs.actual_reimbursement_cents, 0.0);
}

#[test]
fn test_explore_pathway_rejects_too_many_choices() {
    let game = two_round_game();
    let too_many = vec![[OptionChoice::First, OptionChoice::First]; 3];
    let result = explore_pathway(&game, &too_many);
    assert_eq!(
        result.unwrap_err(),
        ScenarioError::NoMoreRounds { round_index: 2 }
    );
}

#[test]
fn test_metrics_round_trip_through_the_descriptors() {
    let game = two_round_game();
    let mut playthrough = Playthrough::new(game, false);
    let initial = playthrough.current_results().clone();
    let after = playthrough
        .advance([OptionChoice::First, OptionChoice::First])
        .unwrap()
        .clone();

    let satisfaction = playthrough.metrics()[0].clone();
    let previous = initial.value(satisfaction.field);
    let current = after.value(satisfaction.field);
    assert_eq!(format_value(satisfaction.format, previous), "75%");
    assert_eq!(format_value(satisfaction.format, current), "100%");

    // 0.75 -> 1.0 is a 33% improvement
    let movement = trend(previous, current, satisfaction.higher_is_better);
    assert_eq!(movement.direction, TrendDirection::Better);
    assert!((movement.percent_change - 100.0 / 3.0).abs() < 1e-9);
}
