//! Metric boundary
//!
//! The presentation collaborator consumes plain records: which result field
//! to display, how to format it, and whether higher values are better. The
//! engine also classifies period-over-period trends so every consumer agrees
//! on what counts as an improvement.

use serde::{Deserialize, Serialize};

pub use crate::models::results::ResultField;

/// Display formatting for a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFormat {
    /// Cents rendered as whole dollars with comma grouping
    Currency,
    /// Unit fraction rendered as a whole percentage
    Percent,
    /// Unitless score rendered to two decimals
    Rate,
    /// Comma-grouped integer
    Count,
}

/// One displayable output metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub name: String,
    pub field: ResultField,
    pub format: MetricFormat,
    pub higher_is_better: bool,
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a raw result value for display
pub fn format_value(format: MetricFormat, value: f64) -> String {
    match format {
        MetricFormat::Currency => {
            let dollars = (value / 100.0).round() as i64;
            format!("${}", group_thousands(dollars))
        }
        MetricFormat::Percent => format!("{}%", (value * 100.0).round() as i64),
        MetricFormat::Rate => format!("{value:.2}"),
        MetricFormat::Count => group_thousands(value.round() as i64),
    }
}

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Better,
    Worse,
    /// Absolute change under 1%, or an undefined zero baseline
    Negligible,
}

/// Period-over-period movement of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    /// Signed percent change from the previous value
    pub percent_change: f64,
    pub direction: TrendDirection,
}

/// Classify the change between two periods of a metric
///
/// Changes under 1% in magnitude are negligible rather than directional. A
/// zero previous value has no defined percent change and also reports
/// negligible.
pub fn trend(previous: f64, current: f64, higher_is_better: bool) -> Trend {
    if previous == 0.0 {
        return Trend {
            percent_change: 0.0,
            direction: TrendDirection::Negligible,
        };
    }

    let percent_change = (current - previous) / previous.abs() * 100.0;
    let direction = if percent_change.abs() < 1.0 {
        TrendDirection::Negligible
    } else if (percent_change > 0.0) == higher_is_better {
        TrendDirection::Better
    } else {
        TrendDirection::Worse
    };

    Trend {
        percent_change,
        direction,
    }
}
