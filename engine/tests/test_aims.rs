//! Quintuple-aim scoring tests

use vbc_simulator_core_rs::aims::{
    cents_per_member_per_month, member_satisfaction, provider_satisfaction, quality_of_life,
    quality_of_life_gini_index, quality_of_life_palma_fraction, MemberSatisfactionFactors,
};
use vbc_simulator_core_rs::Inputs;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

// ==========================================
// Member satisfaction
// ==========================================

#[test]
fn test_default_factors_give_perfect_member_satisfaction() {
    assert_eq!(member_satisfaction(&MemberSatisfactionFactors::default()), 1.0);
}

#[test]
fn test_midpoint_factors_give_half_member_satisfaction() {
    let factors = MemberSatisfactionFactors {
        care_accessibility_factor: 0.5,
        provider_trust_factor: 0.5,
        conditions_managed_rate: 0.5,
        well_managed_rate: 0.5,
        cost_aversion_factor: 0.5,
        readmission_rate: 0.5,
    };
    assert_eq!(member_satisfaction(&factors), 0.5);
}

#[test]
fn test_worst_factors_give_zero_member_satisfaction() {
    let factors = MemberSatisfactionFactors {
        care_accessibility_factor: 0.0,
        provider_trust_factor: 0.0,
        conditions_managed_rate: 0.0,
        well_managed_rate: 0.0,
        cost_aversion_factor: 1.0,
        readmission_rate: 1.0,
    };
    assert_eq!(member_satisfaction(&factors), 0.0);
}

#[test]
fn test_member_satisfaction_clamps_to_unit_interval() {
    let above = MemberSatisfactionFactors {
        care_accessibility_factor: 3.0,
        ..Default::default()
    };
    assert_eq!(member_satisfaction(&above), 1.0);

    let below = MemberSatisfactionFactors {
        care_accessibility_factor: -30.0,
        ..Default::default()
    };
    assert_eq!(member_satisfaction(&below), 0.0);
}

// ==========================================
// Provider satisfaction
// ==========================================

#[test]
fn test_zero_desired_reimbursement_is_an_undefined_contract() {
    assert_eq!(provider_satisfaction(1.0, 0.0, 0.0, 50_000.0), 0.0);
}

#[test]
fn test_full_payment_and_perfect_factors_give_full_satisfaction() {
    assert_eq!(provider_satisfaction(1.0, 0.0, 100_000.0, 100_000.0), 1.0);
}

#[test]
fn test_worst_factors_give_zero_satisfaction() {
    assert_eq!(provider_satisfaction(0.0, 1.0, 100_000.0, 0.0), 0.0);
}

#[test]
fn test_underpaid_provider_with_perfect_factors_scores_half() {
    // The payment ratio carries half the weight, so a zero payment against
    // otherwise perfect factors lands exactly on 0.5
    assert_eq!(provider_satisfaction(1.0, 0.0, 100_000.0, 0.0), 0.5);
}

#[test]
fn test_half_payment_ratio_with_perfect_factors_scores_three_quarters() {
    assert_eq!(provider_satisfaction(1.0, 0.0, 100_000.0, 50_000.0), 0.75);
}

#[test]
fn test_provider_satisfaction_clamps_to_unit_interval() {
    assert_eq!(provider_satisfaction(3.0, 0.0, 100_000.0, 100_000.0), 1.0);
    assert_eq!(provider_satisfaction(-4.0, 4.0, 100_000.0, 0.0), 0.0);
}

// ==========================================
// Quality of life
// ==========================================

#[test]
fn test_quality_of_life_weights_by_population() {
    let inputs = Inputs {
        quality_of_life_low_risk: 1.0,
        quality_of_life_medium_risk: 1.0,
        quality_of_life_high_risk: 0.5,
        member_rate_low_risk: 0.25,
        member_rate_medium_risk: 0.25,
        member_rate_high_risk: 0.5,
        ..Default::default()
    };
    assert_eq!(quality_of_life(&inputs), 0.75);
}

#[test]
fn test_quality_of_life_with_mostly_low_risk_members() {
    let inputs = Inputs {
        quality_of_life_low_risk: 0.8,
        quality_of_life_medium_risk: 0.55,
        quality_of_life_high_risk: 0.4,
        member_rate_low_risk: 0.9,
        member_rate_medium_risk: 0.05,
        member_rate_high_risk: 0.05,
        ..Default::default()
    };
    assert_close(quality_of_life(&inputs), 0.7675);
}

// ==========================================
// Cost per member per month
// ==========================================

#[test]
fn test_pmpm_divides_by_members_then_months() {
    // 2400 / 10 = 240 / 12 = 20
    assert_eq!(cents_per_member_per_month(2_400.0, 10.0), 20);
}

#[test]
fn test_pmpm_floor_is_exact() {
    // 2509 / 10 = 250.9 / 12 = 20.908... -> 20
    assert_eq!(cents_per_member_per_month(2_509.0, 10.0), 20);
}

#[test]
fn test_no_members_no_pmpm() {
    assert_eq!(cents_per_member_per_month(2_400.0, 0.0), 0);
}

#[test]
fn test_no_cost_no_pmpm() {
    assert_eq!(cents_per_member_per_month(0.0, 10.0), 0);
}

// ==========================================
// Health equity wrappers
// ==========================================

#[test]
fn test_equal_tiers_have_zero_gini() {
    let inputs = Inputs {
        quality_of_life_low_risk: 0.2,
        quality_of_life_medium_risk: 0.2,
        quality_of_life_high_risk: 0.2,
        ..Default::default()
    };
    assert_eq!(quality_of_life_gini_index(&inputs), 0.0);
}

#[test]
fn test_unequal_tiers_have_positive_gini() {
    let inputs = Inputs {
        quality_of_life_low_risk: 0.8,
        quality_of_life_medium_risk: 0.6,
        quality_of_life_high_risk: 0.6,
        ..Default::default()
    };
    assert_close(quality_of_life_gini_index(&inputs), 0.13333);
}

#[test]
fn test_single_healthy_tier_is_perfect_inequality() {
    let inputs = Inputs {
        quality_of_life_low_risk: 1.0,
        ..Default::default()
    };
    assert_eq!(quality_of_life_gini_index(&inputs), 1.0);
}

#[test]
fn test_equal_tiers_have_unit_palma_fraction() {
    let inputs = Inputs {
        member_rate_low_risk: 0.6,
        member_rate_medium_risk: 0.2,
        member_rate_high_risk: 0.2,
        quality_of_life_low_risk: 0.7,
        quality_of_life_medium_risk: 0.7,
        quality_of_life_high_risk: 0.7,
        ..Default::default()
    };
    assert_eq!(quality_of_life_palma_fraction(&inputs), 1.0);
}
