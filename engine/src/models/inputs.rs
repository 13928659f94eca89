//! Population input record
//!
//! One flat record of named numeric fields describes the contracted
//! population for a single simulated period:
//! - Composition (member count, three risk-tier population fractions)
//! - Utilization and pricing (per-category utilization, per-tier multipliers,
//!   provider-desired unit costs)
//! - Behavioral/quality rates (higher-is-better and lower-is-better)
//! - Same-period feedback factors
//!
//! All money values are cents. Population fractions and rates are unitless.
//! The record is immutable per simulation call; round transitions produce a
//! new record rather than mutating in place.

use serde::{Deserialize, Serialize};

/// Service category for utilization and spend
///
/// Every cost figure in the simulator is broken down by these five
/// categories of care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Inpatient,
    Outpatient,
    Primary,
    Specialty,
    Drugs,
}

impl ServiceCategory {
    /// All categories, in spend-breakdown order
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Inpatient,
        ServiceCategory::Outpatient,
        ServiceCategory::Primary,
        ServiceCategory::Specialty,
        ServiceCategory::Drugs,
    ];
}

/// Population risk tier
///
/// The population is segmented into exactly three tiers with distinct
/// utilization multipliers and quality-of-life baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All risk tiers, low to high
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

/// Population and contract inputs for one simulated period
///
/// `Default` zeroes every field; partial fixtures use struct-update syntax:
///
/// ```
/// use vbc_simulator_core_rs::Inputs;
///
/// let inputs = Inputs {
///     member_count: 100.0,
///     member_rate_high_risk: 1.0,
///     ..Default::default()
/// };
/// assert_eq!(inputs.member_rate_low_risk, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    // Composition
    /// Total attributed members
    pub member_count: f64,
    /// Fraction of members in the low-risk tier
    pub member_rate_low_risk: f64,
    /// Fraction of members in the medium-risk tier
    pub member_rate_medium_risk: f64,
    /// Fraction of members in the high-risk tier
    pub member_rate_high_risk: f64,

    // Utilization and pricing
    /// Quality-of-life baseline per tier (0-1)
    pub quality_of_life_low_risk: f64,
    pub quality_of_life_medium_risk: f64,
    pub quality_of_life_high_risk: f64,
    /// Utilizations per member per year, by service category
    pub utilization_per_member_per_year_inpatient: f64,
    pub utilization_per_member_per_year_outpatient: f64,
    pub utilization_per_member_per_year_primary: f64,
    pub utilization_per_member_per_year_specialty: f64,
    pub utilization_per_member_per_year_drugs: f64,
    /// Tier multiplier applied to every category's utilization
    pub utilization_factor_low_risk: f64,
    pub utilization_factor_medium_risk: f64,
    pub utilization_factor_high_risk: f64,
    /// Unit price providers want per utilization (cents), by category
    pub provider_desired_cents_per_utilization_inpatient: f64,
    pub provider_desired_cents_per_utilization_outpatient: f64,
    pub provider_desired_cents_per_utilization_primary: f64,
    pub provider_desired_cents_per_utilization_specialty: f64,
    pub provider_desired_cents_per_utilization_drugs: f64,
    /// Discount on drug unit cost unlocked by generic prescribing
    pub generic_drug_cost_discount_factor: f64,

    // Quality factors, higher is better
    pub care_accessibility_factor: f64,
    pub provider_trust_factor: f64,
    pub primary_care_participation_rate: f64,
    pub prevention_rate: f64,
    pub conditions_managed_rate: f64,
    pub well_managed_rate: f64,
    pub care_gap_closure_rate: f64,
    pub medication_adherence_rate: f64,
    pub generic_prescription_rate: f64,
    pub provider_efficiency_factor: f64,

    // Quality factors, lower is better
    pub cost_aversion_factor: f64,
    pub length_of_stay: f64,
    pub readmission_rate: f64,

    // Same-period feedback factors
    /// Scales how much primary-care participation improves low-risk quality
    /// of life, provider trust, and the well-managed rate
    pub primary_care_quality_improvement_factor: f64,
    /// Scales how much a reduced readmission rate improves high-risk quality
    /// of life
    pub readmission_reduction_quality_improvement_factor: f64,
    /// Scales how much generic prescribing reduces member cost aversion
    pub generic_drug_perception_factor: f64,

    // Provider factors
    pub patients_per_provider: f64,
    pub provider_autonomy_factor: f64,
    pub provider_reporting_burden: f64,
}

impl Inputs {
    /// Population fraction for a risk tier
    pub fn member_rate(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.member_rate_low_risk,
            RiskLevel::Medium => self.member_rate_medium_risk,
            RiskLevel::High => self.member_rate_high_risk,
        }
    }

    /// Quality-of-life baseline for a risk tier
    pub fn quality_of_life(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.quality_of_life_low_risk,
            RiskLevel::Medium => self.quality_of_life_medium_risk,
            RiskLevel::High => self.quality_of_life_high_risk,
        }
    }

    /// Utilization multiplier for a risk tier
    pub fn utilization_factor(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.utilization_factor_low_risk,
            RiskLevel::Medium => self.utilization_factor_medium_risk,
            RiskLevel::High => self.utilization_factor_high_risk,
        }
    }

    /// Base utilizations per member per year for a service category
    pub fn utilization_base(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Inpatient => self.utilization_per_member_per_year_inpatient,
            ServiceCategory::Outpatient => self.utilization_per_member_per_year_outpatient,
            ServiceCategory::Primary => self.utilization_per_member_per_year_primary,
            ServiceCategory::Specialty => self.utilization_per_member_per_year_specialty,
            ServiceCategory::Drugs => self.utilization_per_member_per_year_drugs,
        }
    }

    /// Provider-desired unit cost (cents) for a service category
    pub fn desired_cents_per_utilization(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Inpatient => self.provider_desired_cents_per_utilization_inpatient,
            ServiceCategory::Outpatient => self.provider_desired_cents_per_utilization_outpatient,
            ServiceCategory::Primary => self.provider_desired_cents_per_utilization_primary,
            ServiceCategory::Specialty => self.provider_desired_cents_per_utilization_specialty,
            ServiceCategory::Drugs => self.provider_desired_cents_per_utilization_drugs,
        }
    }
}

/// Typed identifier for a single `Inputs` field
///
/// Threshold-bonus measures and round/decision input modifiers reference
/// input fields by name in scenario content. `InputField` is the lookup
/// table that resolves those references without stringly-typed access:
/// `get` reads the field, `set` writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    MemberCount,
    MemberRateLowRisk,
    MemberRateMediumRisk,
    MemberRateHighRisk,
    QualityOfLifeLowRisk,
    QualityOfLifeMediumRisk,
    QualityOfLifeHighRisk,
    UtilizationPerMemberPerYearInpatient,
    UtilizationPerMemberPerYearOutpatient,
    UtilizationPerMemberPerYearPrimary,
    UtilizationPerMemberPerYearSpecialty,
    UtilizationPerMemberPerYearDrugs,
    UtilizationFactorLowRisk,
    UtilizationFactorMediumRisk,
    UtilizationFactorHighRisk,
    ProviderDesiredCentsPerUtilizationInpatient,
    ProviderDesiredCentsPerUtilizationOutpatient,
    ProviderDesiredCentsPerUtilizationPrimary,
    ProviderDesiredCentsPerUtilizationSpecialty,
    ProviderDesiredCentsPerUtilizationDrugs,
    GenericDrugCostDiscountFactor,
    CareAccessibilityFactor,
    ProviderTrustFactor,
    PrimaryCareParticipationRate,
    PreventionRate,
    ConditionsManagedRate,
    WellManagedRate,
    CareGapClosureRate,
    MedicationAdherenceRate,
    GenericPrescriptionRate,
    ProviderEfficiencyFactor,
    CostAversionFactor,
    LengthOfStay,
    ReadmissionRate,
    PrimaryCareQualityImprovementFactor,
    ReadmissionReductionQualityImprovementFactor,
    GenericDrugPerceptionFactor,
    PatientsPerProvider,
    ProviderAutonomyFactor,
    ProviderReportingBurden,
}

impl InputField {
    /// Read this field from an input record
    pub fn get(&self, inputs: &Inputs) -> f64 {
        match self {
            InputField::MemberCount => inputs.member_count,
            InputField::MemberRateLowRisk => inputs.member_rate_low_risk,
            InputField::MemberRateMediumRisk => inputs.member_rate_medium_risk,
            InputField::MemberRateHighRisk => inputs.member_rate_high_risk,
            InputField::QualityOfLifeLowRisk => inputs.quality_of_life_low_risk,
            InputField::QualityOfLifeMediumRisk => inputs.quality_of_life_medium_risk,
            InputField::QualityOfLifeHighRisk => inputs.quality_of_life_high_risk,
            InputField::UtilizationPerMemberPerYearInpatient => {
                inputs.utilization_per_member_per_year_inpatient
            }
            InputField::UtilizationPerMemberPerYearOutpatient => {
                inputs.utilization_per_member_per_year_outpatient
            }
            InputField::UtilizationPerMemberPerYearPrimary => {
                inputs.utilization_per_member_per_year_primary
            }
            InputField::UtilizationPerMemberPerYearSpecialty => {
                inputs.utilization_per_member_per_year_specialty
            }
            InputField::UtilizationPerMemberPerYearDrugs => {
                inputs.utilization_per_member_per_year_drugs
            }
            InputField::UtilizationFactorLowRisk => inputs.utilization_factor_low_risk,
            InputField::UtilizationFactorMediumRisk => inputs.utilization_factor_medium_risk,
            InputField::UtilizationFactorHighRisk => inputs.utilization_factor_high_risk,
            InputField::ProviderDesiredCentsPerUtilizationInpatient => {
                inputs.provider_desired_cents_per_utilization_inpatient
            }
            InputField::ProviderDesiredCentsPerUtilizationOutpatient => {
                inputs.provider_desired_cents_per_utilization_outpatient
            }
            InputField::ProviderDesiredCentsPerUtilizationPrimary => {
                inputs.provider_desired_cents_per_utilization_primary
            }
            InputField::ProviderDesiredCentsPerUtilizationSpecialty => {
                inputs.provider_desired_cents_per_utilization_specialty
            }
            InputField::ProviderDesiredCentsPerUtilizationDrugs => {
                inputs.provider_desired_cents_per_utilization_drugs
            }
            InputField::GenericDrugCostDiscountFactor => inputs.generic_drug_cost_discount_factor,
            InputField::CareAccessibilityFactor => inputs.care_accessibility_factor,
            InputField::ProviderTrustFactor => inputs.provider_trust_factor,
            InputField::PrimaryCareParticipationRate => inputs.primary_care_participation_rate,
            InputField::PreventionRate => inputs.prevention_rate,
            InputField::ConditionsManagedRate => inputs.conditions_managed_rate,
            InputField::WellManagedRate => inputs.well_managed_rate,
            InputField::CareGapClosureRate => inputs.care_gap_closure_rate,
            InputField::MedicationAdherenceRate => inputs.medication_adherence_rate,
            InputField::GenericPrescriptionRate => inputs.generic_prescription_rate,
            InputField::ProviderEfficiencyFactor => inputs.provider_efficiency_factor,
            InputField::CostAversionFactor => inputs.cost_aversion_factor,
            InputField::LengthOfStay => inputs.length_of_stay,
            InputField::ReadmissionRate => inputs.readmission_rate,
            InputField::PrimaryCareQualityImprovementFactor => {
                inputs.primary_care_quality_improvement_factor
            }
            InputField::ReadmissionReductionQualityImprovementFactor => {
                inputs.readmission_reduction_quality_improvement_factor
            }
            InputField::GenericDrugPerceptionFactor => inputs.generic_drug_perception_factor,
            InputField::PatientsPerProvider => inputs.patients_per_provider,
            InputField::ProviderAutonomyFactor => inputs.provider_autonomy_factor,
            InputField::ProviderReportingBurden => inputs.provider_reporting_burden,
        }
    }

    /// Write this field on an input record
    pub fn set(&self, inputs: &mut Inputs, value: f64) {
        match self {
            InputField::MemberCount => inputs.member_count = value,
            InputField::MemberRateLowRisk => inputs.member_rate_low_risk = value,
            InputField::MemberRateMediumRisk => inputs.member_rate_medium_risk = value,
            InputField::MemberRateHighRisk => inputs.member_rate_high_risk = value,
            InputField::QualityOfLifeLowRisk => inputs.quality_of_life_low_risk = value,
            InputField::QualityOfLifeMediumRisk => inputs.quality_of_life_medium_risk = value,
            InputField::QualityOfLifeHighRisk => inputs.quality_of_life_high_risk = value,
            InputField::UtilizationPerMemberPerYearInpatient => {
                inputs.utilization_per_member_per_year_inpatient = value
            }
            InputField::UtilizationPerMemberPerYearOutpatient => {
                inputs.utilization_per_member_per_year_outpatient = value
            }
            InputField::UtilizationPerMemberPerYearPrimary => {
                inputs.utilization_per_member_per_year_primary = value
            }
            InputField::UtilizationPerMemberPerYearSpecialty => {
                inputs.utilization_per_member_per_year_specialty = value
            }
            InputField::UtilizationPerMemberPerYearDrugs => {
                inputs.utilization_per_member_per_year_drugs = value
            }
            InputField::UtilizationFactorLowRisk => inputs.utilization_factor_low_risk = value,
            InputField::UtilizationFactorMediumRisk => {
                inputs.utilization_factor_medium_risk = value
            }
            InputField::UtilizationFactorHighRisk => inputs.utilization_factor_high_risk = value,
            InputField::ProviderDesiredCentsPerUtilizationInpatient => {
                inputs.provider_desired_cents_per_utilization_inpatient = value
            }
            InputField::ProviderDesiredCentsPerUtilizationOutpatient => {
                inputs.provider_desired_cents_per_utilization_outpatient = value
            }
            InputField::ProviderDesiredCentsPerUtilizationPrimary => {
                inputs.provider_desired_cents_per_utilization_primary = value
            }
            InputField::ProviderDesiredCentsPerUtilizationSpecialty => {
                inputs.provider_desired_cents_per_utilization_specialty = value
            }
            InputField::ProviderDesiredCentsPerUtilizationDrugs => {
                inputs.provider_desired_cents_per_utilization_drugs = value
            }
            InputField::GenericDrugCostDiscountFactor => {
                inputs.generic_drug_cost_discount_factor = value
            }
            InputField::CareAccessibilityFactor => inputs.care_accessibility_factor = value,
            InputField::ProviderTrustFactor => inputs.provider_trust_factor = value,
            InputField::PrimaryCareParticipationRate => {
                inputs.primary_care_participation_rate = value
            }
            InputField::PreventionRate => inputs.prevention_rate = value,
            InputField::ConditionsManagedRate => inputs.conditions_managed_rate = value,
            InputField::WellManagedRate => inputs.well_managed_rate = value,
            InputField::CareGapClosureRate => inputs.care_gap_closure_rate = value,
            InputField::MedicationAdherenceRate => inputs.medication_adherence_rate = value,
            InputField::GenericPrescriptionRate => inputs.generic_prescription_rate = value,
            InputField::ProviderEfficiencyFactor => inputs.provider_efficiency_factor = value,
            InputField::CostAversionFactor => inputs.cost_aversion_factor = value,
            InputField::LengthOfStay => inputs.length_of_stay = value,
            InputField::ReadmissionRate => inputs.readmission_rate = value,
            InputField::PrimaryCareQualityImprovementFactor => {
                inputs.primary_care_quality_improvement_factor = value
            }
            InputField::ReadmissionReductionQualityImprovementFactor => {
                inputs.readmission_reduction_quality_improvement_factor = value
            }
            InputField::GenericDrugPerceptionFactor => {
                inputs.generic_drug_perception_factor = value
            }
            InputField::PatientsPerProvider => inputs.patients_per_provider = value,
            InputField::ProviderAutonomyFactor => inputs.provider_autonomy_factor = value,
            InputField::ProviderReportingBurden => inputs.provider_reporting_burden = value,
        }
    }
}
