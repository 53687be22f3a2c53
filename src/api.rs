//! Public API surface for the backend.
//!
//! Consolidates the DTO types served to the dashboard frontend. All types
//! derive Serialize/Deserialize for JSON serialization.

pub use crate::services::cluster_sizes::ClusterSizeEntry;
pub use crate::services::cluster_sizes::ClusterSizesData;
pub use crate::services::distributions::ClusterDistributionEntry;
pub use crate::services::distributions::DistributionData;
pub use crate::services::distributions::DistributionStats;
pub use crate::services::overview::ClusterOverviewData;
pub use crate::services::summary::DatasetSummary;
pub use crate::services::summary::LegendEntry;
pub use crate::services::timeline::CountryTimelineData;
pub use crate::services::timeline::TimelinePoint;

pub use crate::models::{ClusterLabel, LabeledObservation, Observation, LABEL_ORDER, NUM_CLUSTERS};
