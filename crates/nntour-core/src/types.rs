//! Shared types for tour construction.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the integer grid.
///
/// The `id` is the point's identity for the whole run. Every pair and
/// tour operation compares points by `id`, never by coordinates, so two
/// coincident points remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Stable identifier, unique within a [`PointSet`].
    pub id: usize,
    /// Horizontal position.
    pub x: i64,
    /// Vertical position.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(id: usize, x: i64, y: i64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Coordinates are widened to `f64` before subtracting, so any pair of
    /// `i64` positions yields a finite distance.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.mul_add(dx, dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {},{}", self.id, self.x, self.y)
    }
}

/// An unordered edge between two distinct points with its cached length.
///
/// The endpoint order is kept as created but carries no meaning. The
/// distance is computed once at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pair {
    id: usize,
    a: Point,
    b: Point,
    distance: f64,
}

impl Pair {
    /// Create a pair and compute the distance between its endpoints.
    ///
    /// Returns `None` if both endpoints share the same id.
    #[must_use]
    pub fn between(id: usize, a: Point, b: Point) -> Option<Self> {
        (a.id != b.id).then(|| Self {
            id,
            a,
            b,
            distance: a.distance(b),
        })
    }

    /// Create a pair that reuses an already cached distance.
    ///
    /// Used when relabelling an existing pair (e.g. as a tour edge) so the
    /// length is carried over rather than recomputed.
    #[must_use]
    pub(crate) const fn with_distance(id: usize, a: Point, b: Point, distance: f64) -> Self {
        Self { id, a, b, distance }
    }

    /// Sequential identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// First endpoint, as created.
    #[must_use]
    pub const fn a(&self) -> Point {
        self.a
    }

    /// Second endpoint, as created.
    #[must_use]
    pub const fn b(&self) -> Point {
        self.b
    }

    /// Cached Euclidean length.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns `true` if either endpoint has the given id.
    #[must_use]
    pub const fn touches(&self, point_id: usize) -> bool {
        self.a.id == point_id || self.b.id == point_id
    }

    /// Returns `true` if this pair connects the two ids, in either orientation.
    #[must_use]
    pub const fn joins(&self, first: usize, second: usize) -> bool {
        (self.a.id == first && self.b.id == second) || (self.a.id == second && self.b.id == first)
    }

    /// Given one endpoint, return the other.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NotAnEndpoint`] if `point_id` is neither endpoint.
    pub const fn other_endpoint(&self, point_id: usize) -> Result<Point, TourError> {
        if self.a.id == point_id {
            Ok(self.b)
        } else if self.b.id == point_id {
            Ok(self.a)
        } else {
            Err(TourError::NotAnEndpoint {
                point: point_id,
                pair: self.id,
            })
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}, {}, {:.6}", self.id, self.a, self.b, self.distance)
    }
}

/// The points to route. Non-empty, with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    /// Validate and wrap a vector of points.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::EmptyPointSet`] for an empty vector and
    /// [`TourError::DuplicatePointId`] if two points share an id.
    pub fn new(points: Vec<Point>) -> Result<Self, TourError> {
        if points.is_empty() {
            return Err(TourError::EmptyPointSet);
        }
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.id) {
                return Err(TourError::DuplicatePointId(point.id));
            }
        }
        Ok(Self(points))
    }

    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

/// Every unordered pair of distinct points, each exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceIndex {
    pairs: Vec<Pair>,
    point_count: usize,
}

impl DistanceIndex {
    pub(crate) const fn new(pairs: Vec<Pair>, point_count: usize) -> Self {
        Self { pairs, point_count }
    }

    /// Returns a slice of all pairs in creation order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs, `n * (n - 1) / 2` for `n` points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` for a single-point set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of points the index was built from.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }
}

/// A closed tour: an ordered sequence of edges forming a single cycle.
///
/// Edge `i` has id `i`. The first edge starts at the tour's start point
/// and the last edge returns to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour(Vec<Pair>);

impl Tour {
    pub(crate) const fn new(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }

    /// Returns the edges in visiting order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.0
    }

    /// Number of edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the tour of a single point.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The point the tour starts from and returns to.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.0.first().map(Pair::a)
    }

    /// Points in visiting order, starting at [`start`](Self::start).
    ///
    /// The start point is not repeated at the end. Empty for an empty tour.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NotAnEndpoint`] if consecutive edges do not
    /// share an endpoint.
    pub fn visiting_order(&self) -> Result<Vec<Point>, TourError> {
        let Some(start) = self.start() else {
            return Ok(Vec::new());
        };
        let mut order = Vec::with_capacity(self.0.len());
        let mut current = start;
        // The closing edge leads back to the start; skip it.
        for pair in &self.0[..self.0.len() - 1] {
            order.push(current);
            current = pair.other_endpoint(current.id)?;
        }
        order.push(current);
        Ok(order)
    }
}

/// Errors that can occur while configuring or building a tour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum TourError {
    /// Route configuration is invalid.
    #[error("invalid route configuration: {0}")]
    InvalidConfig(String),

    /// A point set must contain at least one point.
    #[error("point set is empty")]
    EmptyPointSet,

    /// Two points were given the same id.
    #[error("duplicate point id {0}")]
    DuplicatePointId(usize),

    /// A pair that must exist in a complete distance index was not found.
    #[error("no pair joins points {a} and {b}")]
    MissingPair {
        /// First point id.
        a: usize,
        /// Second point id.
        b: usize,
    },

    /// A route with no edges has no last point to close from.
    #[error("route has no edges")]
    EmptyRoute,

    /// A point was expected to be an endpoint of a pair but is not.
    #[error("point {point} is not an endpoint of pair {pair}")]
    NotAnEndpoint {
        /// Point id that was looked up.
        point: usize,
        /// Id of the pair that was searched.
        pair: usize,
    },
}
