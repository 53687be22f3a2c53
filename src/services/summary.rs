//! Dataset summary: bounds, counts, and the shared chart legend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::LabeledDataset;
use crate::models::{ClusterLabel, LABEL_ORDER};

/// One legend entry; the same order and colors apply to every chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: ClusterLabel,
    pub color: String,
}

/// Dataset-level summary for the dashboard header and sidebar bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub year_min: i32,
    pub year_max: i32,
    pub country_count: usize,
    pub legend: Vec<LegendEntry>,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Assemble the dataset summary.
pub fn get_dataset_summary(dataset: &LabeledDataset) -> DatasetSummary {
    DatasetSummary {
        total_rows: dataset.rows.len(),
        year_min: dataset.year_min,
        year_max: dataset.year_max,
        country_count: dataset.countries.len(),
        legend: LABEL_ORDER
            .iter()
            .map(|label| LegendEntry {
                label: *label,
                color: label.color().to_string(),
            })
            .collect(),
        checksum: dataset.checksum.clone(),
        loaded_at: dataset.loaded_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::sample_dataset;

    #[test]
    fn test_summary_reflects_dataset_bounds() {
        let dataset = sample_dataset();
        let summary = get_dataset_summary(&dataset);

        assert_eq!(summary.total_rows, dataset.rows.len());
        assert_eq!(summary.year_min, dataset.year_min);
        assert_eq!(summary.year_max, dataset.year_max);
        assert_eq!(summary.country_count, dataset.countries.len());
    }

    #[test]
    fn test_legend_is_fixed_display_order() {
        let dataset = sample_dataset();
        let summary = get_dataset_summary(&dataset);

        assert_eq!(summary.legend.len(), LABEL_ORDER.len());
        for (entry, expected) in summary.legend.iter().zip(LABEL_ORDER.iter()) {
            assert_eq!(entry.label, *expected);
            assert_eq!(entry.color, expected.color());
        }
    }
}
