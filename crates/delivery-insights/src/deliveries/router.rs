use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::aggregate::{aggregate, AggregationResult};
use super::backend::{BackendError, DeliverySource};
use super::domain::DeliveryRecord;
use super::summary::DashboardSummary;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub deliveries: Vec<DeliveryRecord>,
    #[serde(default)]
    pub client_count: usize,
}

pub(crate) struct DeliveriesState<S> {
    source: Option<Arc<S>>,
}

impl<S> Clone for DeliveriesState<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

/// Router builder exposing aggregation over posted records and the
/// backend-fed statistics endpoint.
pub fn deliveries_router<S>(source: Option<Arc<S>>) -> Router
where
    S: DeliverySource + 'static,
{
    Router::new()
        .route("/api/v1/deliveries/aggregate", post(aggregate_handler))
        .route("/api/v1/deliveries/summary", post(summary_handler))
        .route("/api/v1/statistics", get(statistics_handler::<S>))
        .with_state(DeliveriesState { source })
}

fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Input(rejection.body_text()))
}

pub(crate) async fn aggregate_handler(
    payload: Result<Json<Vec<DeliveryRecord>>, JsonRejection>,
) -> Result<Json<AggregationResult>, AppError> {
    let deliveries = read_body(payload)?;
    let result = aggregate(&deliveries);
    info!(
        deliveries = result.total_deliveries,
        cities = result.city_counts.len(),
        states = result.state_counts.len(),
        "aggregated posted deliveries"
    );
    Ok(Json(result))
}

pub(crate) async fn summary_handler(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<DashboardSummary>, AppError> {
    let SummaryRequest {
        deliveries,
        client_count,
    } = read_body(payload)?;
    Ok(Json(DashboardSummary::build(&deliveries, client_count)))
}

pub(crate) async fn statistics_handler<S>(
    State(state): State<DeliveriesState<S>>,
) -> Result<Json<DashboardSummary>, AppError>
where
    S: DeliverySource + 'static,
{
    let source = state.source.ok_or(BackendError::NotConfigured)?;
    let (deliveries, clients) =
        tokio::try_join!(source.fetch_deliveries(), source.fetch_clients()).map_err(|err| {
            warn!(error = %err, "unable to load dashboard data from backend");
            err
        })?;

    info!(
        deliveries = deliveries.len(),
        clients = clients.len(),
        "dashboard statistics refreshed"
    );
    Ok(Json(DashboardSummary::build(&deliveries, clients.len())))
}
