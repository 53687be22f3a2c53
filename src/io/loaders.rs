//! CSV loading for the merged freedom/terrorism dataset.
//!
//! The input is a CSV export of the merged spreadsheet. Only the five columns
//! used by the clustering pipeline are read; any other columns are ignored.
//! Values may be missing in any column - dropping incomplete rows is the
//! preparer's job, so every field deserializes as an `Option`.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::DataError;

/// Columns the pipeline requires in the input file.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Country/Territory",
    "year",
    "PR rating",
    "CL rating",
    "incidents",
];

/// One raw row as read from the file, before incomplete-row removal.
///
/// `year` and `incidents` are read as floats because spreadsheet exports
/// frequently render integers as `2000.0`; the preparer narrows them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Country/Territory")]
    pub country: Option<String>,
    #[serde(rename = "year")]
    pub year: Option<f64>,
    #[serde(rename = "PR rating")]
    pub pr_rating: Option<f64>,
    #[serde(rename = "CL rating")]
    pub cl_rating: Option<f64>,
    #[serde(rename = "incidents")]
    pub incidents: Option<f64>,
}

/// Loader for the merged dataset file.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load raw records from a CSV file.
    ///
    /// Fails with [`DataError::Io`] if the file is missing or unreadable and
    /// [`DataError::Format`] if it cannot be parsed or lacks a required
    /// column. Row order is preserved.
    pub fn load_from_csv(path: &Path) -> Result<Vec<RawRecord>, DataError> {
        let file = fs::File::open(path)?;
        Self::parse_csv(file)
    }

    /// Parse raw records from any CSV reader (used directly by tests and by
    /// the dataset store, which reads the file once for checksumming).
    pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, DataError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| DataError::Format(format!("cannot read CSV header: {}", e)))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(DataError::Format(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: RawRecord =
                result.map_err(|e| DataError::Format(format!("cannot parse CSV row: {}", e)))?;
            records.push(record);
        }

        Ok(records)
    }
}
