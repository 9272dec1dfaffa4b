//! Greedy nearest-neighbor tour construction.
//!
//! The tour is seeded with the globally shortest pair and grown from its
//! open end: at every step the frontier point is joined to its nearest
//! point still in the working pool, and every pair touching the point it
//! leaves behind is dropped from the pool. When the frontier has no
//! candidates left, it is the last unconnected point and is joined back
//! to the start through the full distance index.
//!
//! The working pool is owned by the builder; the index is only borrowed.

use crate::pairs::{find_pair, pairs_containing, shortest_pair, without_point};
use crate::types::{DistanceIndex, Pair, Point, Tour, TourError};

/// Build a closed tour over every point in the index.
///
/// For `n >= 2` points the tour has exactly `n` edges: the seed pair,
/// `n - 2` extension edges and the closing edge. Edge ids equal their
/// position. A single-point index yields an empty tour.
///
/// # Errors
///
/// Returns [`TourError::MissingPair`] or [`TourError::NotAnEndpoint`] if
/// a lookup the algorithm relies on fails, which means the index is not
/// complete. No partial tour is returned.
pub fn build_tour(index: &DistanceIndex) -> Result<Tour, TourError> {
    let Some(seed) = shortest_pair(index.pairs()) else {
        log::debug!("empty distance index, nothing to route");
        return Ok(Tour::new(Vec::new()));
    };

    let start = seed.a();
    let mut frontier = seed.b();
    log::debug!("seed pair {seed}, starting at {start}");

    let mut route = Vec::with_capacity(index.point_count());
    route.push(Pair::with_distance(0, start, frontier, seed.distance()));

    // The start is closed off by the seed pair and the final closing edge.
    let mut pool = without_point(index.pairs(), start.id);

    loop {
        let candidates = pairs_containing(&pool, frontier.id);
        let Some(nearest) = shortest_pair(&candidates) else {
            break;
        };
        let next = nearest.other_endpoint(frontier.id)?;
        log::trace!("extend {frontier} -> {next} ({:.3})", nearest.distance());

        route.push(Pair::with_distance(
            route.len(),
            frontier,
            next,
            nearest.distance(),
        ));
        pool.retain(|pair| !pair.touches(frontier.id));
        frontier = next;
    }

    let last = last_unconnected_point(&route)?;
    debug_assert_eq!(last.id, frontier.id, "closing point must be the frontier");

    let closing = find_pair(index.pairs(), last.id, start.id)?;
    log::debug!("closing {last} -> {start} ({:.3})", closing.distance());
    route.push(Pair::with_distance(
        route.len(),
        closing.a(),
        closing.b(),
        closing.distance(),
    ));

    Ok(Tour::new(route))
}

/// The endpoint of the last edge that still needs an outgoing edge.
///
/// That is the endpoint not shared with the second-to-last edge. With a
/// single edge (two points) it is the edge's second endpoint, the one
/// the seed pair extends to.
///
/// # Errors
///
/// Returns [`TourError::EmptyRoute`] for an empty route.
pub fn last_unconnected_point(route: &[Pair]) -> Result<Point, TourError> {
    match route {
        [] => Err(TourError::EmptyRoute),
        [only] => Ok(only.b()),
        [.., previous, last] => {
            if previous.touches(last.a().id) {
                Ok(last.b())
            } else {
                Ok(last.a())
            }
        }
    }
}
