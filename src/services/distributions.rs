//! Incident distributions: per-label summary statistics for the box view.

use serde::{Deserialize, Serialize};

use crate::dataset::LabeledDataset;
use crate::models::{ClusterLabel, LABEL_ORDER};
use crate::transformations::filter_by_year_range;

/// Summary statistics for a set of values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    /// Lower quartile (linear interpolation between order statistics).
    pub q1: f64,
    /// Upper quartile.
    pub q3: f64,
}

/// Incident statistics for one cluster label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterDistributionEntry {
    pub label: ClusterLabel,
    pub color: String,
    pub stats: DistributionStats,
}

/// Per-label incident distributions, all five labels in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionData {
    pub entries: Vec<ClusterDistributionEntry>,
}

/// Compute statistics for a set of values.
pub(crate) fn compute_stats(values: &[f64]) -> DistributionStats {
    if values.is_empty() {
        return DistributionStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sum: 0.0,
            q1: 0.0,
            q3: 0.0,
        };
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    DistributionStats {
        count,
        mean,
        median: quantile(&sorted, 0.5),
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
        sum,
        q1: quantile(&sorted, 0.25),
        q3: quantile(&sorted, 0.75),
    }
}

/// Quantile of a sorted slice with linear interpolation.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Assemble per-label incident statistics for an inclusive year range.
pub fn get_incident_distributions(
    dataset: &LabeledDataset,
    min_year: i32,
    max_year: i32,
) -> DistributionData {
    let rows = filter_by_year_range(&dataset.rows, min_year, max_year);

    let entries = LABEL_ORDER
        .iter()
        .map(|label| {
            let incidents: Vec<f64> = rows
                .iter()
                .filter(|r| r.label == *label)
                .map(|r| r.incidents as f64)
                .collect();
            ClusterDistributionEntry {
                label: *label,
                color: label.color().to_string(),
                stats: compute_stats(&incidents),
            }
        })
        .collect();

    DistributionData { entries }
}
