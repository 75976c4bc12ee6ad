use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregate::{aggregate, round_one_decimal, total_weight, AggregationResult};
use super::domain::DeliveryRecord;

/// Deliveries listed in the "recent deliveries" card.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentDelivery {
    pub id: i64,
    pub cidade: String,
    pub estado: String,
}

/// Everything the dashboard and statistics pages render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub aggregation: AggregationResult,
    pub total_weight: f64,
    pub deliveries_per_client: f64,
    pub states_served: usize,
    pub top_city: Option<String>,
    pub top_state: Option<String>,
    pub recent_deliveries: Vec<RecentDelivery>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSummary {
    pub fn build(deliveries: &[DeliveryRecord], client_count: usize) -> Self {
        Self::build_at(deliveries, client_count, Utc::now())
    }

    pub fn build_at(
        deliveries: &[DeliveryRecord],
        client_count: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let aggregation = aggregate(deliveries);

        let deliveries_per_client = if client_count == 0 {
            0.0
        } else {
            round_one_decimal(deliveries.len() as f64 / client_count as f64)
        };
        let top_city = aggregation
            .city_counts
            .first()
            .map(|entry| entry.label.clone());
        let top_state = aggregation
            .state_counts
            .first()
            .map(|entry| entry.label.clone());
        let recent_deliveries = deliveries
            .iter()
            .take(RECENT_LIMIT)
            .map(|delivery| RecentDelivery {
                id: delivery.id,
                cidade: delivery.cidade.clone(),
                estado: delivery.estado.clone(),
            })
            .collect();

        Self {
            total_weight: round_one_decimal(total_weight(deliveries)),
            deliveries_per_client,
            states_served: aggregation.state_counts.len(),
            top_city,
            top_state,
            recent_deliveries,
            generated_at,
            aggregation,
        }
    }
}
