//! Service layer assembling chart-facing data from the labeled dataset.
//!
//! One module per dashboard view. Every service filters the cached dataset
//! through the same year-range engine and reports labels in the fixed
//! display order with the fixed colors, so all charts stay in sync.

pub mod cluster_sizes;
pub mod distributions;
pub mod overview;
pub mod summary;
pub mod timeline;

pub use cluster_sizes::get_cluster_sizes;
pub use distributions::get_incident_distributions;
pub use overview::get_cluster_overview;
pub use summary::get_dataset_summary;
pub use timeline::get_country_timeline;
