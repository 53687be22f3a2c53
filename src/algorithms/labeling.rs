//! Centroid-rank derivation of the identifier-to-label mapping.
//!
//! Raw k-means identifiers are an artifact of initialization order, so the
//! semantic labels cannot be bound to them directly. Instead each cluster is
//! scored on a composite severity axis - the mean standardized PR rating, CL
//! rating, and incident count of its members (higher ratings mean less
//! freedom, so all three components point the same way) - and labels are
//! assigned by ascending score rank: the calmest, freest cluster becomes
//! "Free & peaceful", the most violent becomes "Extreme violence contexts".
//!
//! Empty clusters (possible when fewer points than clusters exist) score
//! +inf and take the remaining labels in display order, so the mapping is
//! always total over the five identifiers.

use crate::models::{ClusterLabel, LABEL_ORDER, NUM_CLUSTERS};

/// Derive the cluster-identifier-to-label mapping from member vectors.
///
/// `vectors` and `assignments` are parallel; `assignments[i]` is the cluster
/// identifier of `vectors[i]`. Returns one label per identifier in
/// [0, NUM_CLUSTERS).
///
/// # Panics
///
/// Panics if an assignment is outside [0, NUM_CLUSTERS) - that is a
/// programming-invariant violation, not recoverable data.
pub fn derive_label_mapping(
    vectors: &[[f64; 3]],
    assignments: &[usize],
) -> [ClusterLabel; NUM_CLUSTERS] {
    assert_eq!(
        vectors.len(),
        assignments.len(),
        "vectors and assignments must be parallel"
    );

    let mut sums = [0.0f64; NUM_CLUSTERS];
    let mut counts = [0usize; NUM_CLUSTERS];

    for (vector, &cluster) in vectors.iter().zip(assignments) {
        assert!(
            cluster < NUM_CLUSTERS,
            "cluster identifier {} out of range",
            cluster
        );
        sums[cluster] += vector[0] + vector[1] + vector[2];
        counts[cluster] += 1;
    }

    // Composite severity per cluster; empty clusters sort last.
    let mut ranked: Vec<(usize, f64)> = (0..NUM_CLUSTERS)
        .map(|cluster| {
            let score = if counts[cluster] > 0 {
                sums[cluster] / counts[cluster] as f64
            } else {
                f64::INFINITY
            };
            (cluster, score)
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut mapping = [ClusterLabel::FreePeaceful; NUM_CLUSTERS];
    for (rank, (cluster, _)) in ranked.into_iter().enumerate() {
        mapping[cluster] = LABEL_ORDER[rank];
    }
    mapping
}
