//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/dataset/summary", get(handlers::get_dataset_summary))
        // Chart endpoints, all linked through the same year-range filter
        .route("/clusters", get(handlers::get_cluster_overview))
        .route("/clusters/sizes", get(handlers::get_cluster_sizes))
        .route(
            "/clusters/distributions",
            get(handlers::get_incident_distributions),
        )
        .route(
            "/countries/{country}/timeline",
            get(handlers::get_country_timeline),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{build_labeled_dataset, PipelineConfig};
    use crate::io::RawRecord;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let records = vec![
            RawRecord {
                country: Some("Norway".to_string()),
                year: Some(2000.0),
                pr_rating: Some(1.0),
                cl_rating: Some(1.0),
                incidents: Some(0.0),
            },
            RawRecord {
                country: Some("Iraq".to_string()),
                year: Some(2007.0),
                pr_rating: Some(6.0),
                cl_rating: Some(6.0),
                incidents: Some(3425.0),
            },
        ];
        let dataset = Arc::new(
            build_labeled_dataset(records, "test".to_string(), &PipelineConfig::default())
                .unwrap(),
        );

        let state = AppState::new(dataset);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
