//! Round/decision state transition
//!
//! Combines a round's baseline edits and modifiers with the two chosen
//! options' edits and modifiers, producing the next period's input record
//! and model set. The caller feeds both into the orchestrator to get the
//! next results record.

use std::collections::BTreeMap;

use crate::models::inputs::{InputField, Inputs};
use crate::scenario::{ModelEdit, ModelSet, OptionChoice, Round};

/// Resolve one round against the current state
///
/// Model-set edits apply in source order — round base edits, then the first
/// decision's chosen option, then the second's — with later edits
/// overwriting earlier ones under the same key. `Remove` deletes its key
/// regardless of prior presence; keys absent from every edit set carry over
/// unchanged.
///
/// Input modifiers are percentage points, not multiplicative factors: every
/// source's modifier for a field is summed first, and the combined modifier
/// applies once as `new = current × (1 + combined)`. A round's `+0.01` and
/// an option's `−0.05` on the same field net to `−0.04`.
pub fn apply_round(
    inputs: &Inputs,
    models: &ModelSet,
    round: &Round,
    choices: [OptionChoice; 2],
) -> (Inputs, ModelSet) {
    let chosen = [
        &round.decisions[0].options[choices[0].index()],
        &round.decisions[1].options[choices[1].index()],
    ];

    let mut new_models = models.clone();
    for edits in [
        &round.model_edits,
        &chosen[0].model_edits,
        &chosen[1].model_edits,
    ] {
        for (name, edit) in edits {
            match edit {
                ModelEdit::Keep => {}
                ModelEdit::Replace(config) => {
                    new_models.insert(name.clone(), config.clone());
                }
                ModelEdit::Remove => {
                    new_models.remove(name);
                }
            }
        }
    }

    let mut combined: BTreeMap<InputField, f64> = BTreeMap::new();
    for modifiers in [
        &round.input_modifiers,
        &chosen[0].input_modifiers,
        &chosen[1].input_modifiers,
    ] {
        for (field, modifier) in modifiers {
            *combined.entry(*field).or_insert(0.0) += modifier;
        }
    }

    let mut new_inputs = inputs.clone();
    for (field, modifier) in &combined {
        let current = field.get(inputs);
        field.set(&mut new_inputs, current * (1.0 + modifier));
    }

    (new_inputs, new_models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentModelConfig;
    use crate::scenario::{Decision, DecisionOption, InputModifiers, ModelEdits};

    fn coordination_fee(cents: i64) -> PaymentModelConfig {
        PaymentModelConfig::CareCoordination {
            fee_per_member_per_month_cents: cents,
            fraction_of_population: 1.0,
        }
    }

    fn option(model_edits: ModelEdits, input_modifiers: InputModifiers) -> DecisionOption {
        DecisionOption {
            label: String::new(),
            description: String::new(),
            model_edits,
            input_modifiers,
        }
    }

    fn round_with(
        model_edits: ModelEdits,
        input_modifiers: InputModifiers,
        first_options: [DecisionOption; 2],
        second_options: [DecisionOption; 2],
    ) -> Round {
        Round {
            title: String::new(),
            description: String::new(),
            model_edits,
            input_modifiers,
            decisions: [
                Decision {
                    id: "d1".to_string(),
                    title: String::new(),
                    description: String::new(),
                    options: first_options,
                },
                Decision {
                    id: "d2".to_string(),
                    title: String::new(),
                    description: String::new(),
                    options: second_options,
                },
            ],
        }
    }

    fn noop_option() -> DecisionOption {
        option(ModelEdits::new(), InputModifiers::new())
    }

    #[test]
    fn test_modifiers_combine_additively() {
        let inputs = Inputs {
            member_count: 100.0,
            ..Default::default()
        };
        let round = round_with(
            ModelEdits::new(),
            InputModifiers::from([(InputField::MemberCount, 0.01)]),
            [
                option(
                    ModelEdits::new(),
                    InputModifiers::from([(InputField::MemberCount, -0.05)]),
                ),
                noop_option(),
            ],
            [noop_option(), noop_option()],
        );
        let (new_inputs, _) = apply_round(
            &inputs,
            &ModelSet::new(),
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        // 100 × (1 + (0.01 − 0.05)) = 96
        assert_eq!(new_inputs.member_count, 96.0);
    }

    #[test]
    fn test_unchosen_option_modifiers_do_not_apply() {
        let inputs = Inputs {
            member_count: 100.0,
            ..Default::default()
        };
        let round = round_with(
            ModelEdits::new(),
            InputModifiers::new(),
            [
                option(
                    ModelEdits::new(),
                    InputModifiers::from([(InputField::MemberCount, 1.0)]),
                ),
                option(
                    ModelEdits::new(),
                    InputModifiers::from([(InputField::MemberCount, -0.5)]),
                ),
            ],
            [noop_option(), noop_option()],
        );
        let (new_inputs, _) = apply_round(
            &inputs,
            &ModelSet::new(),
            &round,
            [OptionChoice::Second, OptionChoice::First],
        );
        assert_eq!(new_inputs.member_count, 50.0);
    }

    #[test]
    fn test_untouched_fields_pass_through() {
        let inputs = Inputs {
            member_count: 100.0,
            readmission_rate: 0.25,
            ..Default::default()
        };
        let round = round_with(
            ModelEdits::new(),
            InputModifiers::from([(InputField::MemberCount, 0.1)]),
            [noop_option(), noop_option()],
            [noop_option(), noop_option()],
        );
        let (new_inputs, _) = apply_round(
            &inputs,
            &ModelSet::new(),
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        assert_eq!(new_inputs.readmission_rate, 0.25);
    }

    #[test]
    fn test_later_edits_overwrite_earlier_ones() {
        let models = ModelSet::from([("ccf".to_string(), coordination_fee(100))]);
        let round = round_with(
            ModelEdits::from([("ccf".to_string(), ModelEdit::Replace(coordination_fee(200)))]),
            InputModifiers::new(),
            [
                option(
                    ModelEdits::from([(
                        "ccf".to_string(),
                        ModelEdit::Replace(coordination_fee(300)),
                    )]),
                    InputModifiers::new(),
                ),
                noop_option(),
            ],
            [noop_option(), noop_option()],
        );
        let (_, new_models) = apply_round(
            &Inputs::default(),
            &models,
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        assert_eq!(new_models.get("ccf"), Some(&coordination_fee(300)));
    }

    #[test]
    fn test_remove_deletes_regardless_of_prior_presence() {
        let models = ModelSet::from([("ccf".to_string(), coordination_fee(100))]);
        let round = round_with(
            ModelEdits::from([
                ("ccf".to_string(), ModelEdit::Remove),
                ("never-existed".to_string(), ModelEdit::Remove),
            ]),
            InputModifiers::new(),
            [noop_option(), noop_option()],
            [noop_option(), noop_option()],
        );
        let (_, new_models) = apply_round(
            &Inputs::default(),
            &models,
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        assert!(new_models.is_empty());
    }

    #[test]
    fn test_keep_and_absent_keys_carry_over() {
        let models = ModelSet::from([
            ("ccf".to_string(), coordination_fee(100)),
            ("ffs".to_string(), coordination_fee(999)),
        ]);
        let round = round_with(
            ModelEdits::from([("ccf".to_string(), ModelEdit::Keep)]),
            InputModifiers::new(),
            [noop_option(), noop_option()],
            [noop_option(), noop_option()],
        );
        let (_, new_models) = apply_round(
            &Inputs::default(),
            &models,
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        assert_eq!(new_models, models);
    }

    #[test]
    fn test_option_can_reinstate_removed_model() {
        let models = ModelSet::from([("ccf".to_string(), coordination_fee(100))]);
        let round = round_with(
            ModelEdits::from([("ccf".to_string(), ModelEdit::Remove)]),
            InputModifiers::new(),
            [
                option(
                    ModelEdits::from([(
                        "ccf".to_string(),
                        ModelEdit::Replace(coordination_fee(150)),
                    )]),
                    InputModifiers::new(),
                ),
                noop_option(),
            ],
            [noop_option(), noop_option()],
        );
        let (_, new_models) = apply_round(
            &Inputs::default(),
            &models,
            &round,
            [OptionChoice::First, OptionChoice::First],
        );
        assert_eq!(new_models.get("ccf"), Some(&coordination_fee(150)));
    }
}
