//! nntour-export: Pure format serializers (sans-IO)
//!
//! Converts routing results into output formats: the plain-text route
//! file read by the plotting script, SVG, and console reports. Every
//! function returns a `String`; writing it anywhere is the caller's job.

pub mod report;
pub mod route;
pub mod svg;

pub use report::{format_pairs, format_points, format_summary};
pub use route::to_route_file;
pub use svg::{SvgMetadata, to_svg};

use nntour_core::TourError;

/// Errors that can occur while serializing a route.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The tour has no edges, so there is no route to draw.
    #[error("tour is empty; at least two points are needed to export a route")]
    EmptyTour,

    /// The tour's edges could not be chained into a visiting order.
    #[error("malformed tour: {0}")]
    Tour(#[from] TourError),
}
