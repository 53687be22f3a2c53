//! Country-year observation records.

use serde::{Deserialize, Serialize};

use super::labels::ClusterLabel;

/// One cleaned country-year record.
///
/// A cleaned dataset contains no missing values in any of these fields, and
/// rows are uniquely identified by the (country, year) pair.
///
/// PR and CL ratings follow the Freedom House scale: 1 is the most free,
/// 7 the least free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Country or territory name.
    pub country: String,
    /// Observation year.
    pub year: i32,
    /// Political-rights rating (1-7).
    pub pr_rating: f64,
    /// Civil-liberties rating (1-7).
    pub cl_rating: f64,
    /// Terrorist incident count for the country-year.
    pub incidents: u32,
}

/// An observation with its cluster assignment and semantic label.
///
/// Produced once per dataset load and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledObservation {
    pub country: String,
    pub year: i32,
    pub pr_rating: f64,
    pub cl_rating: f64,
    pub incidents: u32,
    /// Raw k-means cluster identifier in [0, NUM_CLUSTERS).
    pub cluster_id: usize,
    /// Semantic label derived from the cluster's centroid rank.
    pub label: ClusterLabel,
}

impl LabeledObservation {
    pub fn new(observation: Observation, cluster_id: usize, label: ClusterLabel) -> Self {
        Self {
            country: observation.country,
            year: observation.year,
            pr_rating: observation.pr_rating,
            cl_rating: observation.cl_rating,
            incidents: observation.incidents,
            cluster_id,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::labels::ClusterLabel;

    #[test]
    fn test_labeled_observation_from_observation() {
        let obs = Observation {
            country: "Norway".to_string(),
            year: 2001,
            pr_rating: 1.0,
            cl_rating: 1.0,
            incidents: 0,
        };

        let labeled = LabeledObservation::new(obs, 3, ClusterLabel::FreePeaceful);
        assert_eq!(labeled.country, "Norway");
        assert_eq!(labeled.year, 2001);
        assert_eq!(labeled.cluster_id, 3);
        assert_eq!(labeled.label, ClusterLabel::FreePeaceful);
    }

    #[test]
    fn test_labeled_observation_wire_format() {
        let labeled = LabeledObservation {
            country: "Norway".to_string(),
            year: 2001,
            pr_rating: 1.0,
            cl_rating: 1.0,
            incidents: 0,
            cluster_id: 0,
            label: ClusterLabel::FreePeaceful,
        };

        let json = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json["country"], "Norway");
        assert_eq!(json["year"], 2001);
        assert_eq!(json["label"], "Free & peaceful");
    }
}
