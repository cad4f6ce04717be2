use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::VenueCandidate;
use super::repository::{NeighborhoodRepository, VenueRepository};
use super::service::{IngestionError, IngestionService};

/// Import payload: either structured candidates or a raw CSV export.
#[derive(Debug, Deserialize)]
pub(crate) struct ImportRequest {
    #[serde(default)]
    pub(crate) venues: Vec<VenueCandidate>,
    #[serde(default)]
    pub(crate) csv: Option<String>,
}

/// Router builder exposing venue ingestion and listing.
pub fn venue_router<N, V>(service: Arc<IngestionService<N, V>>) -> Router
where
    N: NeighborhoodRepository + 'static,
    V: VenueRepository + 'static,
{
    Router::new()
        .route("/api/v1/venues", get(list_handler::<N, V>))
        .route("/api/v1/venues/import", post(import_handler::<N, V>))
        .with_state(service)
}

pub(crate) async fn import_handler<N, V>(
    State(service): State<Arc<IngestionService<N, V>>>,
    axum::Json(request): axum::Json<ImportRequest>,
) -> Response
where
    N: NeighborhoodRepository + 'static,
    V: VenueRepository + 'static,
{
    let now = Utc::now();
    let result = match request.csv {
        Some(csv) => service.import_csv(Cursor::new(csv.into_bytes()), now),
        None => service.run(request.venues, now),
    };

    match result {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(IngestionError::Import(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<N, V>(
    State(service): State<Arc<IngestionService<N, V>>>,
) -> Response
where
    N: NeighborhoodRepository + 'static,
    V: VenueRepository + 'static,
{
    match service.venues() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
