//! Route file serializer.
//!
//! The route file is three lines, each a comma-separated list in visiting
//! order:
//!
//! ```text
//! <x0>,<x1>,...,<x0>
//! <y0>,<y1>,...,<y0>
//! <id0>,<id1>,...,<id0>
//! ```
//!
//! The start point is repeated at the end of every list so a plotter that
//! simply connects consecutive coordinates draws the closed loop. Each
//! line ends with `\n`.

use std::fmt::Write;

use nntour_core::{Point, Tour};

use crate::ExportError;

/// Serialize a tour into the route file format.
///
/// # Examples
///
/// ```
/// use nntour_core::{Point, PointSet};
///
/// let points = PointSet::new(vec![Point::new(0, 0, 0), Point::new(1, 3, 4)]).unwrap();
/// let result = nntour_core::solve(points).unwrap();
/// let text = nntour_export::to_route_file(&result.tour).unwrap();
/// assert_eq!(text, "0,3,0\n0,4,0\n0,1,0\n");
/// ```
///
/// # Errors
///
/// Returns [`ExportError::EmptyTour`] for a tour with no edges and
/// [`ExportError::Tour`] if the edges do not chain.
pub fn to_route_file(tour: &Tour) -> Result<String, ExportError> {
    let mut order = tour.visiting_order()?;
    let Some(&start) = order.first() else {
        return Err(ExportError::EmptyTour);
    };
    order.push(start);

    let mut out = String::new();
    write_line(&mut out, &order, |p| p.x.to_string());
    write_line(&mut out, &order, |p| p.y.to_string());
    write_line(&mut out, &order, |p| p.id.to_string());
    Ok(out)
}

fn write_line(out: &mut String, points: &[Point], field: impl Fn(&Point) -> String) {
    let joined: Vec<String> = points.iter().map(field).collect();
    let _ = writeln!(out, "{}", joined.join(","));
}
