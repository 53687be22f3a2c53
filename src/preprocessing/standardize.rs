//! Z-score standardization of the three clustering features.
//!
//! Means and standard deviations are computed over the full cleaned dataset
//! (population variance, matching the usual scaler convention). A column
//! with zero variance standardizes to all zeros; callers that need to treat
//! that as an error check [`Standardizer::degenerate_columns`].

use crate::models::Observation;

/// Per-column mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ColumnStats {
    fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    fn zscore(&self, value: f64) -> f64 {
        if self.std_dev == 0.0 {
            // Zero-variance column: every value equals the mean, so the
            // centered value is exactly zero.
            0.0
        } else {
            (value - self.mean) / self.std_dev
        }
    }
}

/// Fitted scaler for the {PR rating, CL rating, incidents} feature columns.
#[derive(Debug, Clone)]
pub struct Standardizer {
    pub pr_rating: ColumnStats,
    pub cl_rating: ColumnStats,
    pub incidents: ColumnStats,
}

impl Standardizer {
    /// Fit column statistics over the full cleaned dataset.
    pub fn fit(observations: &[Observation]) -> Self {
        let pr: Vec<f64> = observations.iter().map(|o| o.pr_rating).collect();
        let cl: Vec<f64> = observations.iter().map(|o| o.cl_rating).collect();
        let incidents: Vec<f64> = observations.iter().map(|o| o.incidents as f64).collect();

        Self {
            pr_rating: ColumnStats::fit(&pr),
            cl_rating: ColumnStats::fit(&cl),
            incidents: ColumnStats::fit(&incidents),
        }
    }

    /// Names of columns whose standard deviation is zero.
    pub fn degenerate_columns(&self) -> Vec<&'static str> {
        let mut degenerate = Vec::new();
        if self.pr_rating.std_dev == 0.0 {
            degenerate.push("PR rating");
        }
        if self.cl_rating.std_dev == 0.0 {
            degenerate.push("CL rating");
        }
        if self.incidents.std_dev == 0.0 {
            degenerate.push("incidents");
        }
        degenerate
    }

    /// Transform observations into standardized feature vectors, one per row,
    /// in input order.
    pub fn transform(&self, observations: &[Observation]) -> Vec<[f64; 3]> {
        observations
            .iter()
            .map(|o| {
                [
                    self.pr_rating.zscore(o.pr_rating),
                    self.cl_rating.zscore(o.cl_rating),
                    self.incidents.zscore(o.incidents as f64),
                ]
            })
            .collect()
    }
}
