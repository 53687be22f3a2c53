//! Memoized dataset pipeline.
//!
//! The full load-prepare-standardize-cluster-label pipeline runs once per
//! (file checksum, seed, cluster count) key and the result is held for the
//! life of the process. Filter-driven requests never re-run clustering; they
//! only re-run the filter engine over the cached, read-only result.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use parking_lot::RwLock;
use serde::Serialize;

use crate::algorithms::{derive_label_mapping, KMeans};
use crate::errors::DataError;
use crate::io::{calculate_checksum, DatasetLoader, RawRecord};
use crate::models::{ClusterLabel, LabeledObservation, NUM_CLUSTERS};
use crate::preprocessing::{prepare_observations, Standardizer};

/// Default seed for the k-means initialization.
pub const DEFAULT_SEED: u64 = 42;

/// Cache key: clustering output is valid for exactly this input identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetKey {
    pub checksum: String,
    pub seed: u64,
    pub n_clusters: usize,
}

/// The fully prepared, clustered, and labeled dataset.
///
/// Built once per cache key and immutable afterwards; shared behind `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledDataset {
    /// Cleaned rows with cluster assignments, in input order.
    pub rows: Vec<LabeledObservation>,
    /// Identifier-to-label mapping derived from centroid ranks.
    pub label_mapping: [ClusterLabel; NUM_CLUSTERS],
    /// Earliest year present in the cleaned data.
    pub year_min: i32,
    /// Latest year present in the cleaned data.
    pub year_max: i32,
    /// Distinct countries, sorted, feeding the country selector.
    pub countries: Vec<String>,
    /// SHA-256 of the input file bytes.
    pub checksum: String,
    /// When this dataset was built.
    pub loaded_at: DateTime<Utc>,
}

/// Pipeline options.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Random seed for k-means initialization.
    pub seed: u64,
    /// When true, a zero-variance feature column fails the load instead of
    /// standardizing to zeros.
    pub strict_standardization: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            strict_standardization: false,
        }
    }
}

/// Session cache around the dataset pipeline.
///
/// Holds at most one labeled dataset; a load with a matching key returns the
/// cached `Arc`, a differing key rebuilds and replaces it.
#[derive(Default)]
pub struct DatasetStore {
    slot: RwLock<Option<(DatasetKey, Arc<LabeledDataset>)>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset from `path`, reusing the cached result when the file
    /// contents, seed, and cluster count are unchanged.
    pub fn load(
        &self,
        path: &Path,
        config: &PipelineConfig,
    ) -> Result<Arc<LabeledDataset>, DataError> {
        let bytes = std::fs::read(path)?;
        let key = DatasetKey {
            checksum: calculate_checksum(&bytes),
            seed: config.seed,
            n_clusters: NUM_CLUSTERS,
        };

        if let Some((cached_key, dataset)) = self.slot.read().as_ref() {
            if *cached_key == key {
                return Ok(Arc::clone(dataset));
            }
        }

        let records = DatasetLoader::parse_csv(bytes.as_slice())?;
        let dataset = Arc::new(build_labeled_dataset(records, key.checksum.clone(), config)?);

        info!(
            "dataset loaded: {} rows, years {}-{}, {} countries",
            dataset.rows.len(),
            dataset.year_min,
            dataset.year_max,
            dataset.countries.len()
        );

        *self.slot.write() = Some((key, Arc::clone(&dataset)));
        Ok(dataset)
    }
}

/// Run the pipeline over already-parsed records.
pub fn build_labeled_dataset(
    records: Vec<RawRecord>,
    checksum: String,
    config: &PipelineConfig,
) -> Result<LabeledDataset, DataError> {
    let observations = prepare_observations(records);
    if observations.is_empty() {
        return Err(DataError::Format(
            "dataset contains no complete rows".to_string(),
        ));
    }

    let scaler = Standardizer::fit(&observations);
    for column in scaler.degenerate_columns() {
        if config.strict_standardization {
            return Err(DataError::DegenerateColumn(column.to_string()));
        }
        warn!(
            "column '{}' has zero variance; standardizing to zeros",
            column
        );
    }

    let vectors = scaler.transform(&observations);
    let km = KMeans::fit(&vectors, NUM_CLUSTERS, config.seed);
    let label_mapping = derive_label_mapping(&vectors, &km.assignments);

    let rows: Vec<LabeledObservation> = observations
        .into_iter()
        .zip(&km.assignments)
        .map(|(obs, &cluster)| LabeledObservation::new(obs, cluster, label_mapping[cluster]))
        .collect();

    let mut year_min = i32::MAX;
    let mut year_max = i32::MIN;
    for row in &rows {
        year_min = year_min.min(row.year);
        year_max = year_max.max(row.year);
    }

    let mut countries: Vec<String> = rows.iter().map(|r| r.country.clone()).collect();
    countries.sort();
    countries.dedup();

    Ok(LabeledDataset {
        rows,
        label_mapping,
        year_min,
        year_max,
        countries,
        checksum,
        loaded_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(country: &str, year: f64, pr: f64, cl: f64, incidents: f64) -> RawRecord {
        RawRecord {
            country: Some(country.to_string()),
            year: Some(year),
            pr_rating: Some(pr),
            cl_rating: Some(cl),
            incidents: Some(incidents),
        }
    }

    fn sample_records() -> Vec<RawRecord> {
        vec![
            record("Norway", 2000.0, 1.0, 1.0, 0.0),
            record("Norway", 2001.0, 1.0, 1.0, 1.0),
            record("Chile", 2000.0, 2.0, 3.0, 10.0),
            record("Belarus", 2000.0, 6.0, 6.0, 2.0),
            record("Iraq", 2007.0, 6.0, 6.0, 3425.0),
            record("Iraq", 2008.0, 6.0, 6.0, 2900.0),
            record("Peru", 1992.0, 5.0, 4.0, 580.0),
            RawRecord {
                country: Some("Dropped".to_string()),
                year: Some(2000.0),
                pr_rating: None,
                cl_rating: Some(1.0),
                incidents: Some(0.0),
            },
        ]
    }

    #[test]
    fn test_build_assigns_every_row_a_label() {
        let config = PipelineConfig::default();
        let dataset = build_labeled_dataset(sample_records(), "abc".to_string(), &config).unwrap();

        assert_eq!(dataset.rows.len(), 7);
        assert_eq!(dataset.year_min, 1992);
        assert_eq!(dataset.year_max, 2008);
        assert_eq!(
            dataset.countries,
            vec!["Belarus", "Chile", "Iraq", "Norway", "Peru"]
        );
        for row in &dataset.rows {
            assert_eq!(row.label, dataset.label_mapping[row.cluster_id]);
        }
    }

    #[test]
    fn test_build_is_deterministic_for_fixed_seed() {
        let config = PipelineConfig::default();
        let a = build_labeled_dataset(sample_records(), "abc".to_string(), &config).unwrap();
        let b = build_labeled_dataset(sample_records(), "abc".to_string(), &config).unwrap();

        let ids_a: Vec<usize> = a.rows.iter().map(|r| r.cluster_id).collect();
        let ids_b: Vec<usize> = b.rows.iter().map(|r| r.cluster_id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.label_mapping, b.label_mapping);
    }

    #[test]
    fn test_build_with_no_complete_rows_is_format_error() {
        let records = vec![RawRecord {
            country: Some("Norway".to_string()),
            year: None,
            pr_rating: Some(1.0),
            cl_rating: Some(1.0),
            incidents: Some(0.0),
        }];
        let err =
            build_labeled_dataset(records, "abc".to_string(), &PipelineConfig::default())
                .unwrap_err();
        assert!(matches!(err, DataError::Format(_)));
    }

    #[test]
    fn test_strict_mode_rejects_zero_variance_column() {
        let records = vec![
            record("A", 2000.0, 3.0, 1.0, 0.0),
            record("B", 2001.0, 3.0, 2.0, 5.0),
            record("C", 2002.0, 3.0, 5.0, 9.0),
        ];
        let config = PipelineConfig {
            strict_standardization: true,
            ..PipelineConfig::default()
        };

        let err = build_labeled_dataset(records, "abc".to_string(), &config).unwrap_err();
        match err {
            DataError::DegenerateColumn(column) => assert_eq!(column, "PR rating"),
            other => panic!("expected DegenerateColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_store_returns_cached_dataset_for_same_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Country/Territory,year,PR rating,CL rating,incidents").unwrap();
        for (country, year, pr, cl, inc) in [
            ("Norway", 2000, 1.0, 1.0, 0),
            ("Chile", 2000, 2.0, 3.0, 10),
            ("Belarus", 2000, 6.0, 6.0, 2),
            ("Iraq", 2007, 6.0, 6.0, 3425),
            ("Peru", 1992, 5.0, 4.0, 580),
        ] {
            writeln!(file, "{},{},{},{},{}", country, year, pr, cl, inc).unwrap();
        }
        file.flush().unwrap();

        let store = DatasetStore::new();
        let config = PipelineConfig::default();
        let first = store.load(file.path(), &config).unwrap();
        let second = store.load(file.path(), &config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // A different seed is a different key and rebuilds.
        let other = store
            .load(
                file.path(),
                &PipelineConfig {
                    seed: 7,
                    ..PipelineConfig::default()
                },
            )
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_store_invalidates_on_file_change() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Country/Territory,year,PR rating,CL rating,incidents").unwrap();
        writeln!(file, "Norway,2000,1,1,0").unwrap();
        writeln!(file, "Iraq,2007,6,6,3425").unwrap();
        file.flush().unwrap();

        let store = DatasetStore::new();
        let config = PipelineConfig::default();
        let first = store.load(file.path(), &config).unwrap();

        writeln!(file, "Peru,1992,5,4,580").unwrap();
        file.flush().unwrap();

        let second = store.load(file.path(), &config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.rows.len(), 3);
    }
}
