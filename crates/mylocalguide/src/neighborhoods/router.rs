use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{ResolutionResult, VenueAddressInput};
use super::resolver::NeighborhoodResolver;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchResolveRequest {
    pub(crate) venues: Vec<VenueAddressInput>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResolveResponse {
    pub(crate) results: Vec<ResolutionResult>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NeighborhoodView {
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) description: String,
}

/// Router exposing the resolver and the neighborhood reference list.
pub fn neighborhood_router(resolver: Arc<NeighborhoodResolver>) -> Router {
    Router::new()
        .route("/api/v1/neighborhoods", get(list_handler))
        .route("/api/v1/neighborhoods/resolve", post(resolve_handler))
        .route(
            "/api/v1/neighborhoods/resolve/batch",
            post(resolve_batch_handler),
        )
        .with_state(resolver)
}

pub(crate) async fn resolve_handler(
    State(resolver): State<Arc<NeighborhoodResolver>>,
    Json(input): Json<VenueAddressInput>,
) -> Json<ResolutionResult> {
    Json(resolver.resolve_input(&input))
}

pub(crate) async fn resolve_batch_handler(
    State(resolver): State<Arc<NeighborhoodResolver>>,
    Json(request): Json<BatchResolveRequest>,
) -> Json<BatchResolveResponse> {
    Json(BatchResolveResponse {
        results: resolver.resolve_batch(&request.venues),
    })
}

pub(crate) async fn list_handler(
    State(resolver): State<Arc<NeighborhoodResolver>>,
) -> Json<Vec<NeighborhoodView>> {
    let views = resolver
        .tables()
        .neighborhoods
        .iter()
        .map(|profile| NeighborhoodView {
            name: profile.name.clone(),
            slug: profile.slug(),
            description: profile.description.clone(),
        })
        .collect();
    Json(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhoods::ResolverConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        let resolver =
            NeighborhoodResolver::san_francisco(ResolverConfig::default()).expect("resolver");
        neighborhood_router(Arc::new(resolver))
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn resolve_route_returns_wire_labels() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/neighborhoods/resolve",
                json!({ "name": "Anything", "address": "3599 24th St, San Francisco, CA 94110" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(
            payload,
            json!({ "neighborhood": "The Mission", "confidence": "high", "method": "zip" })
        );
    }

    #[tokio::test]
    async fn resolve_route_treats_missing_address_as_empty() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/neighborhoods/resolve",
                json!({ "name": "Test Venue" }),
            ))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload["method"], "default");
        assert_eq!(payload["confidence"], "low");
    }

    #[tokio::test]
    async fn batch_route_resolves_every_venue() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/neighborhoods/resolve/batch",
                json!({ "venues": [
                    { "name": "A", "address": "Pier 39, San Francisco, CA 94133" },
                    { "name": "B", "address": "" },
                ]}),
            ))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        let results = payload["results"].as_array().expect("results array");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["neighborhood"], "Fisherman's Wharf");
        assert_eq!(results[1]["method"], "default");
    }

    #[tokio::test]
    async fn list_route_includes_slugs() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/neighborhoods")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        let entries = payload.as_array().expect("array");
        assert!(entries
            .iter()
            .any(|entry| entry["name"] == "North Beach" && entry["slug"] == "north-beach"));
    }
}
