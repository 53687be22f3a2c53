//! Feature preparation and standardization ahead of clustering.

pub mod pipeline;
pub mod standardize;

pub use pipeline::prepare_observations;
pub use standardize::{ColumnStats, Standardizer};
