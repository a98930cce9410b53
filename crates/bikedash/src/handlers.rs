//! HTTP handlers.
//!
//! Every request re-runs the whole pipeline: filter, aggregate, render.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use bikedash_data::DashboardData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::app::AppState;
use crate::error::{AppError, PageError};
use crate::page;
use crate::query::RangeQuery;

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` once the server is up.
    pub status: String,
    /// Rows in the dataset.
    pub records: usize,
    /// Earliest date.
    pub min_date: NaiveDate,
    /// Latest date.
    pub max_date: NaiveDate,
    /// Rows failing `casual + registered == cnt`.
    pub inconsistent_rows: usize,
}

/// GET /
///
/// The dashboard page for the requested date range.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Html<String>, PageError> {
    let bounds = state.dataset.full_range();
    let range = query.resolve(&bounds)?;
    let data = state.dataset.dashboard(range);
    let charts = state.graphs.render_all(&data).await.map_err(AppError::from)?;

    Ok(Html(page::render_dashboard(
        &state.config.page,
        &bounds,
        &data,
        &charts,
    )))
}

/// GET /api/dashboard
///
/// The aggregate tables for the requested date range.
#[instrument(skip(state))]
pub async fn api_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<DashboardData> {
    let range = query.resolve(&state.dataset.full_range())?;
    Ok(Json(state.dataset.dashboard(range)))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = &state.dataset;
    Json(HealthResponse {
        status: "ok".to_string(),
        records: dataset.len(),
        min_date: dataset.min_date(),
        max_date: dataset.max_date(),
        inconsistent_rows: dataset.quality().inconsistent_rows,
    })
}
