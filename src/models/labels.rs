//! Semantic cluster labels, display order, and chart colors.
//!
//! The five labels and their colors are a fixed lookup table. Which raw
//! cluster identifier maps to which label is derived per dataset load by
//! ranking cluster centroids (see [`crate::algorithms::labeling`]); the
//! table here only fixes the names, the display order, and the colors so
//! that every chart renders the same semantic cluster identically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of qualitative country-year profiles.
pub const NUM_CLUSTERS: usize = 5;

/// Semantic profile of a country-year cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLabel {
    #[serde(rename = "Free & peaceful")]
    FreePeaceful,
    #[serde(rename = "Moderately free & low violence")]
    ModeratelyFreeLowViolence,
    #[serde(rename = "Highly repressive but stable")]
    HighlyRepressiveStable,
    #[serde(rename = "Repressive & high violence")]
    RepressiveHighViolence,
    #[serde(rename = "Extreme violence contexts")]
    ExtremeViolenceContexts,
}

/// Fixed display order used for axis ordering, legend ordering, and color
/// assignment across all charts.
pub const LABEL_ORDER: [ClusterLabel; NUM_CLUSTERS] = [
    ClusterLabel::FreePeaceful,
    ClusterLabel::ModeratelyFreeLowViolence,
    ClusterLabel::HighlyRepressiveStable,
    ClusterLabel::RepressiveHighViolence,
    ClusterLabel::ExtremeViolenceContexts,
];

impl ClusterLabel {
    /// Human-readable label name.
    pub fn name(&self) -> &'static str {
        match self {
            ClusterLabel::FreePeaceful => "Free & peaceful",
            ClusterLabel::ModeratelyFreeLowViolence => "Moderately free & low violence",
            ClusterLabel::HighlyRepressiveStable => "Highly repressive but stable",
            ClusterLabel::RepressiveHighViolence => "Repressive & high violence",
            ClusterLabel::ExtremeViolenceContexts => "Extreme violence contexts",
        }
    }

    /// Display color (Carto Safe qualitative palette, one entry per label).
    pub fn color(&self) -> &'static str {
        match self {
            ClusterLabel::FreePeaceful => "#88CCEE",
            ClusterLabel::ModeratelyFreeLowViolence => "#CC6677",
            ClusterLabel::HighlyRepressiveStable => "#DDCC77",
            ClusterLabel::RepressiveHighViolence => "#117733",
            ClusterLabel::ExtremeViolenceContexts => "#332288",
        }
    }

    /// Position of this label in the fixed display order.
    pub fn display_rank(&self) -> usize {
        match self {
            ClusterLabel::FreePeaceful => 0,
            ClusterLabel::ModeratelyFreeLowViolence => 1,
            ClusterLabel::HighlyRepressiveStable => 2,
            ClusterLabel::RepressiveHighViolence => 3,
            ClusterLabel::ExtremeViolenceContexts => 4,
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
