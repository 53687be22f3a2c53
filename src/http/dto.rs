//! Data Transfer Objects for the HTTP API.
//!
//! The visualization DTOs live with their services and are re-exported here;
//! this module adds the request-side types.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Sizes
    ClusterSizeEntry,
    ClusterSizesData,
    // Overview
    ClusterOverviewData,
    // Distributions
    ClusterDistributionEntry,
    DistributionData,
    DistributionStats,
    // Summary
    DatasetSummary,
    LegendEntry,
    // Timeline
    CountryTimelineData,
    TimelinePoint,
};

use crate::dataset::LabeledDataset;

/// Query parameters for the year-range filter shared by all chart
/// endpoints. Missing bounds default to the dataset's own year range; the
/// sidebar control is responsible for clamping, not the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct YearRangeQuery {
    #[serde(default)]
    pub min_year: Option<i32>,
    #[serde(default)]
    pub max_year: Option<i32>,
}

impl YearRangeQuery {
    /// Resolve the inclusive bounds against the dataset defaults.
    pub fn resolve(&self, dataset: &LabeledDataset) -> (i32, i32) {
        (
            self.min_year.unwrap_or(dataset.year_min),
            self.max_year.unwrap_or(dataset.year_max),
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of labeled rows held in memory
    pub rows: usize,
}
