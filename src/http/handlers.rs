//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. All chart handlers share the same year-range query so the four
//! views stay linked.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{HealthResponse, YearRangeQuery};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset
/// is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        rows: state.dataset.rows.len(),
    }))
}

/// GET /v1/dataset/summary
///
/// Dataset bounds, counts, and the shared chart legend.
pub async fn get_dataset_summary(
    State(state): State<AppState>,
) -> HandlerResult<crate::api::DatasetSummary> {
    Ok(Json(services::get_dataset_summary(&state.dataset)))
}

/// GET /v1/clusters
///
/// Full filtered labeled table for the cluster scatter view.
pub async fn get_cluster_overview(
    State(state): State<AppState>,
    Query(query): Query<YearRangeQuery>,
) -> HandlerResult<crate::api::ClusterOverviewData> {
    let (min_year, max_year) = query.resolve(&state.dataset);
    Ok(Json(services::get_cluster_overview(
        &state.dataset,
        min_year,
        max_year,
    )))
}

/// GET /v1/clusters/sizes
///
/// Per-label row counts for the cluster sizes bar view.
pub async fn get_cluster_sizes(
    State(state): State<AppState>,
    Query(query): Query<YearRangeQuery>,
) -> HandlerResult<crate::api::ClusterSizesData> {
    let (min_year, max_year) = query.resolve(&state.dataset);
    Ok(Json(services::get_cluster_sizes(
        &state.dataset,
        min_year,
        max_year,
    )))
}

/// GET /v1/clusters/distributions
///
/// Per-label incident statistics for the box view.
pub async fn get_incident_distributions(
    State(state): State<AppState>,
    Query(query): Query<YearRangeQuery>,
) -> HandlerResult<crate::api::DistributionData> {
    let (min_year, max_year) = query.resolve(&state.dataset);
    Ok(Json(services::get_incident_distributions(
        &state.dataset,
        min_year,
        max_year,
    )))
}

/// GET /v1/countries/{country}/timeline
///
/// Incident time series for one country within the filtered range.
pub async fn get_country_timeline(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(query): Query<YearRangeQuery>,
) -> HandlerResult<crate::api::CountryTimelineData> {
    let (min_year, max_year) = query.resolve(&state.dataset);
    let timeline = services::get_country_timeline(&state.dataset, &country, min_year, max_year)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "country '{}' has no rows in years {}-{}",
                country, min_year, max_year
            ))
        })?;

    Ok(Json(timeline))
}
