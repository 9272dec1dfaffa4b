//! Aggregate lengths over any pair collection (the full index or a tour).

use serde::{Deserialize, Serialize};

use crate::types::{DistanceIndex, Pair, PointSet, Tour};

/// Sum of the cached distances. Zero for an empty collection.
#[must_use]
pub fn total_length(pairs: &[Pair]) -> f64 {
    pairs.iter().map(Pair::distance).sum()
}

/// Mean pair distance, or `None` for an empty collection.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_length(pairs: &[Pair]) -> Option<f64> {
    if pairs.is_empty() {
        return None;
    }
    Some(total_length(pairs) / pairs.len() as f64)
}

/// Headline numbers for one routing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Number of points routed.
    pub point_count: usize,
    /// Number of pairs in the distance index.
    pub pair_count: usize,
    /// Number of edges in the tour.
    pub tour_edge_count: usize,
    /// Total tour length.
    pub tour_length: f64,
    /// Mean distance over every pair in the index.
    pub average_pair_length: Option<f64>,
    /// Mean tour edge length.
    pub average_edge_length: Option<f64>,
}

impl RouteSummary {
    /// Summarize a finished run.
    #[must_use]
    pub fn from_run(points: &PointSet, index: &DistanceIndex, tour: &Tour) -> Self {
        Self {
            point_count: points.len(),
            pair_count: index.len(),
            tour_edge_count: tour.len(),
            tour_length: total_length(tour.pairs()),
            average_pair_length: average_length(index.pairs()),
            average_edge_length: average_length(tour.pairs()),
        }
    }
}
