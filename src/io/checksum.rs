//! Checksum calculation for dataset cache keys.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw dataset bytes.
///
/// The checksum identifies the input file in the dataset cache key, so a
/// changed file invalidates the memoized clustering result.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}
