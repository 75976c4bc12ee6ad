use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::domain::{ClientRecord, DeliveryRecord};
use crate::config::BackendConfig;

/// Failures talking to the external clients/deliveries backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("deliveries backend is not configured (set APP_BACKEND_URL)")]
    NotConfigured,
    #[error("backend request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend answered {path} with status {status}")]
    Status { path: String, status: u16 },
    #[error("backend payload could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Read access to the records the dashboard aggregates.
pub trait DeliverySource: Send + Sync {
    fn fetch_deliveries(
        &self,
    ) -> impl Future<Output = Result<Vec<DeliveryRecord>, BackendError>> + Send;
    fn fetch_clients(&self) -> impl Future<Output = Result<Vec<ClientRecord>, BackendError>> + Send;
}

/// `DeliverySource` backed by the REST API on `GET /deliveries` and `GET /clients`.
#[derive(Debug, Clone)]
pub struct HttpDeliverySource {
    client: Client,
    base_url: String,
}

impl HttpDeliverySource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::Transport)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Returns `None` when no backend URL is configured.
    pub fn from_config(config: &BackendConfig) -> Result<Option<Self>, BackendError> {
        config
            .base_url
            .as_deref()
            .map(|url| Self::new(url, config.timeout))
            .transpose()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(BackendError::Decode)
    }
}

impl DeliverySource for HttpDeliverySource {
    async fn fetch_deliveries(&self) -> Result<Vec<DeliveryRecord>, BackendError> {
        self.get_json("deliveries").await
    }

    async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, BackendError> {
        self.get_json("clients").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub backend runs");
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetches_deliveries_and_clients() {
        let router = Router::new()
            .route(
                "/deliveries",
                get(|| async {
                    Json(json!([
                        { "id": 1, "cliente_id": 9, "peso": 2.0, "cidade": "Recife", "estado": "PE" },
                        { "id": 2, "cliente_id": 9, "peso": 3.5, "cidade": "Manaus", "estado": "AM" }
                    ]))
                }),
            )
            .route(
                "/clients",
                get(|| async {
                    Json(json!([
                        { "id": 9, "nome": "Maria Souza", "cpf": "529.982.247-25",
                          "email": "maria@example.com", "telefone": "81999990000" }
                    ]))
                }),
            );
        let base_url = spawn_backend(router).await;
        let source =
            HttpDeliverySource::new(format!("{base_url}/"), Duration::from_secs(5)).expect("client");

        let deliveries = source.fetch_deliveries().await.expect("deliveries load");
        assert_eq!(deliveries.len(), 2);
        assert_eq!(deliveries[1].cidade, "Manaus");

        let clients = source.fetch_clients().await.expect("clients load");
        assert_eq!(clients[0].nome, "Maria Souza");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let router = Router::new().route(
            "/deliveries",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        );
        let base_url = spawn_backend(router).await;
        let source = HttpDeliverySource::new(base_url, Duration::from_secs(5)).expect("client");

        let err = source.fetch_deliveries().await.expect_err("status surfaces");
        assert!(matches!(
            err,
            BackendError::Status { status: 500, ref path } if path == "deliveries"
        ));
    }

    #[tokio::test]
    async fn unexpected_payload_is_a_decode_error() {
        let router = Router::new().route(
            "/clients",
            get(|| async { Json(json!({ "clients": [] })) }),
        );
        let base_url = spawn_backend(router).await;
        let source = HttpDeliverySource::new(base_url, Duration::from_secs(5)).expect("client");

        let err = source.fetch_clients().await.expect_err("object is not a list");
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn from_config_without_url_is_none() {
        let config = BackendConfig {
            base_url: None,
            timeout: Duration::from_secs(1),
        };
        assert!(HttpDeliverySource::from_config(&config)
            .expect("no client needed")
            .is_none());
    }
}
