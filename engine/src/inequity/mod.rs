//! Inequality statistics
//!
//! Two measures of how unevenly an outcome is distributed across the
//! population:
//!
//! - **Gini index**: 0 = perfect equality, 1 = perfect inequality, computed
//!   with the discrete weighted-sum formula over a small value set.
//!   <https://www.statsdirect.com/help/nonparametric_methods/gini_coefficient.htm>
//! - **Palma fraction**: the ratio of the estimated 40th-percentile value to
//!   the estimated 90th-percentile value over the three-tier population
//!   distribution. 1 = the bottom 40% matches the top 10%; smaller values
//!   mean inequality favoring the top decile. <https://uncounted.org/palma/>

/// Gini index over a value set
///
/// The methodology does not support non-positive values; they are discarded
/// before computing. Two deliberate edge cases:
/// - no positive values left: returns 0 (the raw formula would be 0/0)
/// - exactly one positive value left: returns 1, perfect inequality
///
/// The result is invariant to input order.
pub fn gini_index(values: &[f64]) -> f64 {
    let mut ordered: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
    let n = ordered.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return 1.0;
    }
    ordered.sort_by(f64::total_cmp);

    let mut weighted_sum = 0.0;
    let mut total_sum = 0.0;
    for (j, x) in ordered.iter().enumerate() {
        // 1-indexed position in the ascending order
        let i = (j + 1) as f64;
        weighted_sum += (2.0 * i - n as f64 - 1.0) * x;
        total_sum += x;
    }

    (2.0 * weighted_sum) / (n as f64 * total_sum)
}

/// Three-tier distribution the Palma fraction is estimated over
///
/// Each tier pairs its population fraction with its outcome value. The
/// configured minimum and maximum extend the distribution with a floor point
/// (rate 0) and a ceiling point (rate 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalmaInputs {
    pub member_rate_low_risk: f64,
    pub member_rate_medium_risk: f64,
    pub member_rate_high_risk: f64,
    pub quality_of_life_low_risk: f64,
    pub quality_of_life_medium_risk: f64,
    pub quality_of_life_high_risk: f64,
    pub min_quality_of_life: f64,
    pub max_quality_of_life: f64,
}

#[derive(Debug, Clone, Copy)]
struct HistogramStep {
    rate: f64,
    value: f64,
}

#[derive(Debug, Clone, Copy)]
struct HistogramBin {
    rate_start: f64,
    rate_end: f64,
    value_start: f64,
    value_end: f64,
}

/// Estimate the outcome value at a population percentile
///
/// The five points are stably sorted by value ascending and converted into
/// cumulative-population bins, each interpolating value linearly over its
/// population share. The walk consumes whole bins until the remaining share
/// fits inside one, then takes a fractional position within it.
///
/// The bin boundaries are load-bearing: expected percentile estimates depend
/// on this exact construction, ties included.
fn percentile_value(inputs: &PalmaInputs, percentile: f64) -> f64 {
    let mut steps = [
        HistogramStep {
            rate: 0.0,
            value: inputs.min_quality_of_life,
        },
        HistogramStep {
            rate: inputs.member_rate_high_risk,
            value: inputs.quality_of_life_high_risk,
        },
        HistogramStep {
            rate: inputs.member_rate_medium_risk,
            value: inputs.quality_of_life_medium_risk,
        },
        HistogramStep {
            rate: inputs.member_rate_low_risk,
            value: inputs.quality_of_life_low_risk,
        },
        HistogramStep {
            rate: 1.0,
            value: inputs.max_quality_of_life,
        },
    ];
    // Stable sort: ties keep floor/high/medium/low/ceiling insertion order
    steps.sort_by(|a, b| a.value.total_cmp(&b.value));
    let [s0, s1, s2, s3, _] = &steps;

    let bins = [
        HistogramBin {
            rate_start: s0.rate,
            rate_end: s1.rate,
            value_start: s0.value,
            value_end: s1.value,
        },
        HistogramBin {
            rate_start: s1.rate,
            rate_end: s0.rate + s1.rate + s2.rate,
            value_start: s1.value,
            value_end: s2.value,
        },
        HistogramBin {
            rate_start: s0.rate + s1.rate + s2.rate,
            rate_end: s0.rate + s1.rate + s2.rate + s3.rate,
            value_start: s2.value,
            value_end: s3.value,
        },
    ];

    let mut accumulated_rate = 0.0;
    let mut estimated_value = 0.0;
    for bin in &bins {
        // Stop accumulating once we have amassed the desired percentile
        if accumulated_rate >= percentile {
            break;
        }

        // If this bin gets us no further than the remaining rate, take it all
        let bin_rate = bin.rate_end - bin.rate_start;
        let remaining_rate = percentile - accumulated_rate;
        if bin_rate <= remaining_rate {
            accumulated_rate += bin_rate;
            estimated_value = bin.value_end;
            continue;
        }

        // Otherwise take the fraction of the bin that lands on the percentile
        let fraction_of_rate = remaining_rate / bin_rate;
        let bin_height = bin.value_end - bin.value_start;
        estimated_value = bin.value_start + fraction_of_rate * bin_height;
        accumulated_rate += remaining_rate;
    }

    estimated_value
}

/// Palma fraction: value at the 40th percentile over value at the 90th
pub fn palma_fraction(inputs: &PalmaInputs) -> f64 {
    let top_value_90th = percentile_value(inputs, 0.9);
    let bottom_value_40th = percentile_value(inputs, 0.4);
    bottom_value_40th / top_value_90th
}
