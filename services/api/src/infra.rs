use delivery_insights::config::{BackendConfig, GeocoderConfig};
use delivery_insights::deliveries::HttpDeliverySource;
use delivery_insights::error::AppError;
use delivery_insights::geocoding::{AddressResolver, AddressSuggester};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_resolver(config: &GeocoderConfig) -> Arc<AddressResolver> {
    Arc::new(AddressResolver::new(config.latency))
}

pub(crate) fn build_suggester(config: &GeocoderConfig) -> Arc<AddressSuggester> {
    Arc::new(AddressSuggester::new(config.suggestion_latency))
}

pub(crate) fn build_delivery_source(
    config: &BackendConfig,
) -> Result<Option<Arc<HttpDeliverySource>>, AppError> {
    Ok(HttpDeliverySource::from_config(config)?.map(Arc::new))
}
