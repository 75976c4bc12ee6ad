use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::DeliveryRecord;

/// Cities shown on the dashboard bar chart.
pub const CITY_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub city_counts: Vec<LabelCount>,
    pub state_counts: Vec<LabelCount>,
    pub total_deliveries: usize,
    pub average_weight: f64,
}

/// Per-city and per-state frequency tables plus weight statistics.
///
/// Labels are grouped by exact string equality. Ties keep the order in
/// which the labels were first seen.
pub fn aggregate(deliveries: &[DeliveryRecord]) -> AggregationResult {
    let mut city_counts = tally(deliveries.iter().map(|delivery| delivery.cidade.as_str()));
    city_counts.truncate(CITY_LIMIT);
    let state_counts = tally(deliveries.iter().map(|delivery| delivery.estado.as_str()));

    let total_deliveries = deliveries.len();
    let average_weight = if total_deliveries == 0 {
        0.0
    } else {
        round_one_decimal(total_weight(deliveries) / total_deliveries as f64)
    };

    AggregationResult {
        city_counts,
        state_counts,
        total_deliveries,
        average_weight,
    }
}

pub(crate) fn total_weight(deliveries: &[DeliveryRecord]) -> f64 {
    deliveries.iter().map(|delivery| delivery.peso).sum()
}

/// Rounds to one decimal from the exact binary value, so 1.45 (stored as
/// 1.4499…) becomes 1.4. Exact midpoints are multiples of 0.25 with an odd
/// quarter count; those go away from zero.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for label in labels {
        match slots.get(label) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(label, counts.len());
                counts.push(LabelCount::new(label, 1));
            }
        }
    }

    // `sort_by` is stable, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
