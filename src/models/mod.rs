//! Domain model types for country-year observations and cluster labels.

pub mod labels;
pub mod observation;

pub use labels::{ClusterLabel, LABEL_ORDER, NUM_CLUSTERS};
pub use observation::{LabeledObservation, Observation};
