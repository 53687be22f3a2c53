//! Cluster overview: the full filtered labeled table for the scatter view.

use serde::{Deserialize, Serialize};

use crate::dataset::LabeledDataset;
use crate::models::LabeledObservation;
use crate::transformations::filter_by_year_range;

/// Data for the country-year cluster scatter (PR rating vs incidents,
/// colored by label) and the country selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterOverviewData {
    /// Filtered labeled rows, in dataset order.
    pub rows: Vec<LabeledObservation>,
    /// Distinct countries present in the filtered view, sorted.
    pub countries: Vec<String>,
    pub total: usize,
    pub min_year: i32,
    pub max_year: i32,
}

/// Assemble the overview for an inclusive year range.
pub fn get_cluster_overview(
    dataset: &LabeledDataset,
    min_year: i32,
    max_year: i32,
) -> ClusterOverviewData {
    let rows = filter_by_year_range(&dataset.rows, min_year, max_year);

    let mut countries: Vec<String> = rows.iter().map(|r| r.country.clone()).collect();
    countries.sort();
    countries.dedup();

    let total = rows.len();
    ClusterOverviewData {
        rows,
        countries,
        total,
        min_year,
        max_year,
    }
}
