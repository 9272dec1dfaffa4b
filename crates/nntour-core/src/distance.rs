//! Distance index: every unordered pair of distinct points with its
//! Euclidean length computed once.
//!
//! Pairs are emitted as `(points[i], points[j])` for `i < j` in point
//! order. This is the same set and order as walking every ordered
//! combination `(A, B)` and skipping those already present in either
//! orientation, without the quadratic membership scan.

use crate::types::{DistanceIndex, Pair, PointSet};

/// Build the complete distance index for a point set.
///
/// Pair ids come from a counter reset on every call and incremented
/// before each assignment, so the first pair has id 1. They are
/// unrelated to point ids. A single point yields an empty index.
#[must_use = "returns the distance index"]
pub fn build_distance_index(points: &PointSet) -> DistanceIndex {
    let points = points.points();
    let n = points.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    let mut count = 0;

    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            // PointSet guarantees unique ids, so `between` always succeeds.
            count += 1;
            if let Some(pair) = Pair::between(count, a, b) {
                pairs.push(pair);
            }
        }
    }

    log::debug!("distance index: {} pairs over {n} points", pairs.len());
    DistanceIndex::new(pairs, n)
}
