//! Pair-set utilities used by the tour builder.
//!
//! Every operation keys on point ids. Coordinates and pair identity are
//! never compared, so coincident points and relabelled pairs are handled
//! the same way as any other.

use crate::types::{Pair, TourError};

/// All pairs with an endpoint at `point_id`, in their original order.
#[must_use]
pub fn pairs_containing(pairs: &[Pair], point_id: usize) -> Vec<Pair> {
    pairs
        .iter()
        .filter(|pair| pair.touches(point_id))
        .cloned()
        .collect()
}

/// A new collection without any pair touching `point_id`.
#[must_use]
pub fn without_point(pairs: &[Pair], point_id: usize) -> Vec<Pair> {
    pairs
        .iter()
        .filter(|pair| !pair.touches(point_id))
        .cloned()
        .collect()
}

/// The pair joining `a` and `b`, in either orientation.
///
/// # Errors
///
/// Returns [`TourError::MissingPair`] if no such pair exists.
pub fn find_pair(pairs: &[Pair], a: usize, b: usize) -> Result<&Pair, TourError> {
    pairs
        .iter()
        .find(|pair| pair.joins(a, b))
        .ok_or(TourError::MissingPair { a, b })
}

/// The pair with the smallest distance.
///
/// The first pair seeds the candidate unconditionally; later pairs
/// replace it only when strictly shorter, so among equal distances the
/// earliest wins. A zero distance is an ordinary candidate. Returns
/// `None` only for an empty slice.
#[must_use]
pub fn shortest_pair(pairs: &[Pair]) -> Option<&Pair> {
    let mut best: Option<&Pair> = None;
    for pair in pairs {
        match best {
            Some(current) if pair.distance() >= current.distance() => {}
            _ => best = Some(pair),
        }
    }
    best
}
