//! Random point generation.
//!
//! The random source is passed in by the caller so runs can be seeded
//! and reproduced; nothing here touches global state.

use rand::Rng;

use crate::types::{Point, PointSet, TourError};

/// Generate `count` points with ids `0..count` and coordinates drawn
/// independently and uniformly from `0..coordinate_bound`.
///
/// Points may coincide; downstream stages treat them as distinct by id.
///
/// # Errors
///
/// Returns [`TourError::EmptyPointSet`] if `count` is zero and
/// [`TourError::InvalidConfig`] if `coordinate_bound < 1`.
pub fn generate_points<R: Rng + ?Sized>(
    count: usize,
    coordinate_bound: i64,
    rng: &mut R,
) -> Result<PointSet, TourError> {
    if coordinate_bound < 1 {
        return Err(TourError::InvalidConfig(format!(
            "coordinate_bound must be at least 1, got {coordinate_bound}",
        )));
    }

    let points = (0..count)
        .map(|id| {
            let x = rng.gen_range(0..coordinate_bound);
            let y = rng.gen_range(0..coordinate_bound);
            Point::new(id, x, y)
        })
        .collect();

    let set = PointSet::new(points)?;
    log::debug!("generated {} points within [0, {coordinate_bound})", set.len());
    Ok(set)
}
