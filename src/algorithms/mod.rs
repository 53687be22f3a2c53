//! Clustering algorithms and label derivation.

pub mod kmeans;
pub mod labeling;

pub use kmeans::{KMeans, MAX_ITERATIONS};
pub use labeling::derive_label_mapping;
