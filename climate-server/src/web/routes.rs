//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(recent_temperatures))
        .route("/api/v1.0/:start", get(summary_from))
        .route("/api/v1.0/:start/:end", get(summary_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the API routes.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::default()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Precipitation for every measurement, one object per row.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationEntry>>, AppError> {
    let mut session = state.store.session().await?;
    let records = session.precipitation().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Names of all stations.
///
/// A station whose name is NULL appears as `null`.
async fn stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Option<String>>>, AppError> {
    let mut session = state.store.session().await?;
    let names = session.station_names().await?;

    Ok(Json(names))
}

/// Non-zero temperature observations from the last 365 days of data.
async fn recent_temperatures(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureEntry>>, AppError> {
    let mut session = state.store.session().await?;
    let records = session.recent_temperatures().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Min/avg/max temperature from `start` onwards.
///
/// `start` is not validated; text that is not a date matches nothing.
async fn summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummaryResponse>, AppError> {
    let mut session = state.store.session().await?;
    let summary = session.temperature_summary(&start, None).await?;

    Ok(Json(summary.into()))
}

/// Min/avg/max temperature between `start` and `end`, inclusive.
async fn summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummaryResponse>, AppError> {
    let mut session = state.store.session().await?;
    let summary = session.temperature_summary(&start, Some(&end)).await?;

    Ok(Json(summary.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmptyDataset => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
