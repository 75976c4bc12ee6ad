use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::resolver::{AddressResolver, ResolvedAddress};
use super::suggestions::{AddressSuggester, AddressSuggestion};

const GEOCODE_FAILURE: &str = "Failed to geocode address";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeRequest {
    pub address: String,
}

/// Response shape expected by the dashboard forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResolvedAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeocodeEnvelope {
    pub fn success(address: ResolvedAddress) -> Self {
        Self {
            success: true,
            data: Some(address),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionList {
    pub suggestions: Vec<AddressSuggestion>,
}

#[derive(Clone)]
struct GeocodeState {
    resolver: Arc<AddressResolver>,
    suggester: Arc<AddressSuggester>,
}

/// Router builder exposing address resolution and typeahead suggestions.
pub fn geocode_router(resolver: Arc<AddressResolver>, suggester: Arc<AddressSuggester>) -> Router {
    Router::new()
        .route("/api/geocode", post(geocode_handler))
        .route("/api/geocode/suggestions", get(suggestions_handler))
        .with_state(GeocodeState {
            resolver,
            suggester,
        })
}

async fn suggestions_handler(
    State(state): State<GeocodeState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<SuggestionList> {
    let suggestions = state.suggester.lookup(&query.q).await;
    debug!(matches = suggestions.len(), "address suggestions served");
    Json(SuggestionList { suggestions })
}

async fn geocode_handler(
    State(GeocodeState { resolver, .. }): State<GeocodeState>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "rejected geocode request");
            let envelope = GeocodeEnvelope::failure(GEOCODE_FAILURE);
            return (StatusCode::BAD_REQUEST, Json(envelope)).into_response();
        }
    };

    let resolution = resolver.lookup(&request.address).await;
    match resolution.matched {
        Some(hit) => debug!(
            keyword = hit.keyword,
            position = hit.position,
            cidade = %resolution.address.cidade,
            "address resolved from gazetteer"
        ),
        None => debug!("no gazetteer keyword matched; returning placeholder address"),
    }

    let envelope = GeocodeEnvelope::success(resolution.address);
    (StatusCode::OK, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn router() -> Router {
        geocode_router(
            Arc::new(AddressResolver::instant()),
            Arc::new(AddressSuggester::instant()),
        )
    }

    async fn suggestions_for(uri: &str) -> (StatusCode, SuggestionList) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let list = serde_json::from_slice(&bytes).expect("suggestion json");
        (status, list)
    }

    async fn post_raw(body: &'static str) -> (StatusCode, GeocodeEnvelope) {
        let response = router()
            .oneshot(
                Request::post("/api/geocode")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let envelope = serde_json::from_slice(&bytes).expect("envelope json");
        (status, envelope)
    }

    #[tokio::test]
    async fn known_address_returns_success_envelope() {
        let (status, envelope) = post_raw(r#"{"address":"Avenida Paulista, São Paulo"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(envelope.success);
        let data = envelope.data.expect("data present");
        assert_eq!(data.logradouro, "Avenida Paulista");
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn unknown_address_still_succeeds_with_placeholder() {
        let (status, envelope) = post_raw(r#"{"address":"algum lugar desconhecido"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(ResolvedAddress::fallback()));
    }

    #[tokio::test]
    async fn missing_address_field_is_a_client_error() {
        let (status, envelope) = post_raw(r#"{"endereco":"Recife"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some(GEOCODE_FAILURE));
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let (status, envelope) = post_raw("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!envelope.success);
    }

    #[tokio::test]
    async fn suggestions_filter_by_query() {
        let (status, list) = suggestions_for("/api/geocode/suggestions?q=paulo").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = list.suggestions.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn short_or_missing_query_returns_empty_list() {
        let (status, list) = suggestions_for("/api/geocode/suggestions?q=rj").await;
        assert_eq!(status, StatusCode::OK);
        assert!(list.suggestions.is_empty());

        let (status, list) = suggestions_for("/api/geocode/suggestions").await;
        assert_eq!(status, StatusCode::OK);
        assert!(list.suggestions.is_empty());
    }

    #[tokio::test]
    async fn percent_encoded_query_is_decoded() {
        let (_, list) = suggestions_for("/api/geocode/suggestions?q=Bras%C3%ADlia").await;
        assert_eq!(list.suggestions.len(), 1);
        assert_eq!(list.suggestions[0].place_id, "6");
    }
}
