use crate::cli::ServeArgs;
use crate::infra::{build_delivery_source, build_resolver, build_suggester, AppState};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use delivery_insights::config::AppConfig;
use delivery_insights::error::AppError;
use delivery_insights::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let resolver = build_resolver(&config.geocoder);
    let suggester = build_suggester(&config.geocoder);
    let source = build_delivery_source(&config.backend)?;
    match source.as_ref() {
        Some(source) => info!(backend = source.base_url(), "statistics backed by REST API"),
        None => warn!("APP_BACKEND_URL not set; /api/v1/statistics will answer 502"),
    }

    let app = app_router(resolver, suggester, source)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        geocoder_latency_ms = config.geocoder.latency.as_millis() as u64,
        suggestion_latency_ms = config.geocoder.suggestion_latency.as_millis() as u64,
        "delivery insights service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
