//! Seeded k-means clustering over standardized feature vectors.
//!
//! Lloyd's algorithm with a deterministic initialization: the first centroid
//! is drawn from a seeded RNG, the remaining ones greedily maximize distance
//! to the centroids chosen so far. Same input + same seed always yields the
//! same assignment. The raw identifier attached to each cluster is still an
//! artifact of initialization order; semantic naming is handled separately
//! by centroid-rank label derivation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Iteration bound for Lloyd's algorithm.
pub const MAX_ITERATIONS: usize = 300;

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Cluster centers, one per identifier in [0, k). Clusters left empty by
    /// the degenerate n < k case keep a zero centroid and no members.
    pub centroids: Vec<Vec<f64>>,
    /// Cluster identifier per input vector, in input order.
    pub assignments: Vec<usize>,
    /// Iterations actually run before convergence or the bound.
    pub iterations: usize,
}

impl KMeans {
    /// Fit k clusters to the data with a fixed seed.
    ///
    /// Degenerate case n < k: vector `i` gets cluster `i` and clusters
    /// `n..k` stay empty.
    pub fn fit(data: &[[f64; 3]], k: usize, seed: u64) -> Self {
        let n = data.len();
        if n == 0 || k == 0 {
            return Self {
                centroids: vec![vec![0.0; 3]; k],
                assignments: vec![],
                iterations: 0,
            };
        }

        if n <= k {
            let mut centroids = vec![vec![0.0; 3]; k];
            for (i, point) in data.iter().enumerate() {
                centroids[i] = point.to_vec();
            }
            return Self {
                centroids,
                assignments: (0..n).collect(),
                iterations: 0,
            };
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut centroids = init_centroids(data, k, &mut rng);
        let mut assignments = vec![0usize; n];
        let mut iterations = 0;

        while iterations < MAX_ITERATIONS {
            iterations += 1;

            // E-step: assign each point to the nearest centroid. Ties go to
            // the lowest identifier, keeping the assignment deterministic.
            let mut new_assignments = vec![0usize; n];
            for (i, point) in data.iter().enumerate() {
                let mut best_cluster = 0;
                let mut min_dist_sq = f64::MAX;
                for (j, centroid) in centroids.iter().enumerate() {
                    let dist_sq = distance_sq(point, centroid);
                    if dist_sq < min_dist_sq {
                        min_dist_sq = dist_sq;
                        best_cluster = j;
                    }
                }
                new_assignments[i] = best_cluster;
            }

            let converged = new_assignments == assignments && iterations > 1;
            assignments = new_assignments;
            if converged {
                break;
            }

            // M-step: recompute centroids as member means.
            let mut sums = vec![vec![0.0; 3]; k];
            let mut counts = vec![0usize; k];
            for (i, &cluster) in assignments.iter().enumerate() {
                counts[cluster] += 1;
                for d in 0..3 {
                    sums[cluster][d] += data[i][d];
                }
            }

            for j in 0..k {
                if counts[j] > 0 {
                    for d in 0..3 {
                        centroids[j][d] = sums[j][d] / counts[j] as f64;
                    }
                } else if let Some(point) = data.choose(&mut rng) {
                    // Reseed an emptied cluster from the (seeded) RNG so the
                    // run stays deterministic.
                    centroids[j] = point.to_vec();
                }
            }
        }

        Self {
            centroids,
            assignments,
            iterations,
        }
    }

    /// Member count per cluster identifier.
    pub fn cluster_sizes(&self, k: usize) -> Vec<usize> {
        let mut sizes = vec![0usize; k];
        for &cluster in &self.assignments {
            sizes[cluster] += 1;
        }
        sizes
    }
}

/// Pick the first centroid pseudo-randomly, then greedily take the point
/// farthest from all chosen centroids. Guarantees k distinct starting points
/// whenever the data contains them.
fn init_centroids(data: &[[f64; 3]], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let n = data.len();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    let mut last = rng.gen_range(0..n);
    chosen.push(last);

    let mut min_dist_sq = vec![f64::MAX; n];
    while chosen.len() < k {
        for (i, point) in data.iter().enumerate() {
            let dist = distance_sq(point, &data[last]);
            if dist < min_dist_sq[i] {
                min_dist_sq[i] = dist;
            }
        }

        // Farthest point from the chosen set; lowest index wins ties.
        let mut next = 0;
        let mut best = f64::NEG_INFINITY;
        for (i, &dist) in min_dist_sq.iter().enumerate() {
            if dist > best && !chosen.contains(&i) {
                best = dist;
                next = i;
            }
        }
        chosen.push(next);
        last = next;
    }

    chosen.iter().map(|&i| data[i].to_vec()).collect()
}

fn distance_sq(a: &[f64; 3], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}
