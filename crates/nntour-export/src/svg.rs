//! SVG export serializer.
//!
//! Renders a tour as an SVG document using the [`svg`] crate for
//! document construction, XML escaping, and path data formatting:
//!
//! - one closed `<path>` following the tour in visiting order,
//! - one `<circle>` per point,
//! - one `<text>` label per point carrying its id.
//!
//! Coordinates are written as-is (y grows downward, as in any SVG), and
//! the `viewBox` spans `0..coordinate_bound` on both axes plus a margin.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Description, Element, Path, Title};
use svg::node::{Node, Text, Value};

use nntour_core::{Point, PointSet, Tour};

use crate::ExportError;

/// Rendered document width and height in pixels.
const DOCUMENT_SIZE_PX: u32 = 600;
/// Margin around the coordinate range, as a fraction of the bound.
const MARGIN_FRACTION: f64 = 0.05;

/// Metadata to embed in the SVG document.
///
/// Both fields are optional. When present, a `<title>` and/or `<desc>`
/// element is emitted immediately after the opening `<svg>` tag.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title -- emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description -- emitted as `<desc>`.
    ///
    /// Typically the run configuration and tour length so exported files
    /// are distinguishable.
    pub description: Option<&'a str>,
}

#[allow(clippy::cast_precision_loss)]
fn coords(p: Point) -> (f64, f64) {
    (p.x as f64, p.y as f64)
}

/// Build the SVG path `d` attribute for a closed route through `order`.
///
/// Returns an empty string for fewer than 2 points.
#[must_use]
pub fn build_route_data(order: &[Point]) -> String {
    let [first, rest @ ..] = order else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }

    let mut data = Data::new().move_to(coords(*first));
    for p in rest {
        data = data.line_to(coords(*p));
    }
    String::from(Value::from(data.close()))
}

/// Serialize a tour and its points into an SVG string.
///
/// # Errors
///
/// Returns [`ExportError::EmptyTour`] for a tour with no edges and
/// [`ExportError::Tour`] if the edges do not chain.
pub fn to_svg(
    points: &PointSet,
    tour: &Tour,
    coordinate_bound: i64,
    metadata: &SvgMetadata<'_>,
) -> Result<String, ExportError> {
    let order = tour.visiting_order()?;
    if order.is_empty() {
        return Err(ExportError::EmptyTour);
    }

    #[allow(clippy::cast_precision_loss)]
    let extent = coordinate_bound.max(1) as f64;
    let margin = extent * MARGIN_FRACTION;
    let view = extent + 2.0 * margin;
    let radius = extent / 150.0;

    let mut doc = Document::new()
        .set("width", DOCUMENT_SIZE_PX)
        .set("height", DOCUMENT_SIZE_PX)
        .set("viewBox", format!("{} {} {view} {view}", -margin, -margin));

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    let route = Path::new()
        .set("d", build_route_data(&order))
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", extent / 300.0);
    doc = doc.add(route);

    for &point in points.points() {
        let (x, y) = coords(point);
        let marker = Circle::new()
            .set("cx", x)
            .set("cy", y)
            .set("r", radius)
            .set("fill", "red");
        doc = doc.add(marker);

        let mut label = Element::new("text");
        label.assign("x", x + radius);
        label.assign("y", y - radius);
        label.assign("font-size", extent / 40.0);
        label.append(Text::new(point.id.to_string()));
        doc = doc.add(label);
    }

    // The svg crate omits the XML declaration, so we prepend it.
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n"))
}
