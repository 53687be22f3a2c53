//! Cluster sizes: per-label row counts for the bar view.

use serde::{Deserialize, Serialize};

use crate::dataset::LabeledDataset;
use crate::models::{ClusterLabel, LABEL_ORDER, NUM_CLUSTERS};
use crate::transformations::filter_by_year_range;

/// Count of filtered rows carrying one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSizeEntry {
    pub label: ClusterLabel,
    pub color: String,
    pub count: usize,
}

/// Per-label counts, always all five labels in display order; labels absent
/// from the filtered view report zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSizesData {
    pub entries: Vec<ClusterSizeEntry>,
    pub total: usize,
}

/// Assemble per-label counts for an inclusive year range.
pub fn get_cluster_sizes(
    dataset: &LabeledDataset,
    min_year: i32,
    max_year: i32,
) -> ClusterSizesData {
    let rows = filter_by_year_range(&dataset.rows, min_year, max_year);

    let mut counts = [0usize; NUM_CLUSTERS];
    for row in &rows {
        counts[row.label.display_rank()] += 1;
    }

    let entries = LABEL_ORDER
        .iter()
        .map(|label| ClusterSizeEntry {
            label: *label,
            color: label.color().to_string(),
            count: counts[label.display_rank()],
        })
        .collect();

    ClusterSizesData {
        entries,
        total: rows.len(),
    }
}
