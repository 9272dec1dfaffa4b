//! nntour-core: Greedy nearest-neighbor tours over planar points (sans-IO).
//!
//! Builds an approximate travelling-salesman tour through:
//! point generation -> distance index -> greedy tour -> metrics.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! values and returns structured data. Randomness is injected by the
//! caller, logging goes through the `log` facade, and all file or
//! console output lives in `nntour-export` and the `nntour` binary.

pub mod config;
pub mod diagnostics;
pub mod distance;
pub mod metrics;
pub mod pairs;
pub mod points;
pub mod tour;
pub mod types;

use rand::Rng;
use serde::Serialize;

pub use config::RouteConfig;
pub use diagnostics::{Clock, RouteDiagnostics, StageDiagnostics, StageMetrics};
pub use distance::build_distance_index;
pub use metrics::{RouteSummary, average_length, total_length};
pub use points::generate_points;
pub use tour::build_tour;
pub use types::{DistanceIndex, Pair, Point, PointSet, Tour, TourError};

/// Everything produced by one routing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// The routed points.
    pub points: PointSet,
    /// Every pair of points with its distance.
    pub index: DistanceIndex,
    /// The closed greedy tour.
    pub tour: Tour,
}

impl RouteResult {
    /// Headline lengths and counts for this run.
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::from_run(&self.points, &self.index, &self.tour)
    }
}

/// Build the distance index and greedy tour for an existing point set.
///
/// # Errors
///
/// Returns a [`TourError`] if the tour builder hits a failed lookup.
pub fn solve(points: PointSet) -> Result<RouteResult, TourError> {
    let index = build_distance_index(&points);
    let tour = build_tour(&index)?;
    Ok(RouteResult {
        points,
        index,
        tour,
    })
}

/// Run the full pipeline: validate the configuration, draw a point
/// count, generate points and route them.
///
/// The configuration is validated before anything is drawn from `rng`.
///
/// # Errors
///
/// Returns [`TourError::InvalidConfig`] for an invalid configuration, or
/// any error from [`solve`].
pub fn route<R: Rng + ?Sized>(config: &RouteConfig, rng: &mut R) -> Result<RouteResult, TourError> {
    let count = config.draw_point_count(rng)?;
    let points = generate_points(count, config.coordinate_bound, rng)?;
    solve(points)
}

/// Like [`route`], but also measures each stage.
///
/// # Errors
///
/// Same as [`route`].
pub fn route_with_diagnostics<R: Rng + ?Sized, C: Clock>(
    config: &RouteConfig,
    rng: &mut R,
    clock: &C,
) -> Result<(RouteResult, RouteDiagnostics), TourError> {
    let run_start = clock.now();

    // 1. Points.
    let t = clock.now();
    let count = config.draw_point_count(rng)?;
    let points = generate_points(count, config.coordinate_bound, rng)?;
    let generate = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Generate {
            point_count: points.len(),
            coordinate_bound: config.coordinate_bound,
            coincident_points: diagnostics::count_coincident(points.points()),
        },
    };

    // 2. Distance index.
    let t = clock.now();
    let index = build_distance_index(&points);
    let index_diag = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Index {
            pair_count: index.len(),
            min_distance: index.pairs().iter().map(Pair::distance).reduce(f64::min),
            max_distance: index.pairs().iter().map(Pair::distance).reduce(f64::max),
        },
    };

    // 3. Tour.
    let t = clock.now();
    let tour = build_tour(&index)?;
    let tour_diag = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Tour {
            edge_count: tour.len(),
            start_point: tour.start().map(|p| p.id),
            seed_distance: tour.pairs().first().map(Pair::distance),
            closing_distance: tour.pairs().last().map(Pair::distance),
        },
    };

    let result = RouteResult {
        points,
        index,
        tour,
    };
    let diagnostics = RouteDiagnostics {
        generate,
        index: index_diag,
        tour: tour_diag,
        total_duration: clock.elapsed(&run_start),
        summary: result.summary(),
    };
    log::info!(
        "routed {} points, tour length {:.3}",
        diagnostics.summary.point_count,
        diagnostics.summary.tour_length,
    );

    Ok((result, diagnostics))
}
