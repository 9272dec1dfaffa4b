//! Human-readable console reports for points, pairs, and run totals.

use std::fmt::Write;

use nntour_core::{Pair, Point, PointSet, RouteSummary};

/// List every point, one per line, under a `Points:` heading.
#[must_use]
pub fn format_points(points: &PointSet) -> String {
    let mut out = String::from("Points:\n");
    for point in points.points() {
        let _ = writeln!(out, "{point}");
    }
    out
}

/// List pairs under a heading with their count.
///
/// Works for the full distance index and for a tour alike.
#[must_use]
pub fn format_pairs(pairs: &[Pair]) -> String {
    let mut out = format!("Pairs of length ({})\n", pairs.len());
    for pair in pairs {
        let _ = writeln!(out, "{pair}");
    }
    out
}

/// Start point, total tour length and the two averages.
///
/// Averages over an empty collection are reported as `n/a`.
#[must_use]
pub fn format_summary(summary: &RouteSummary, start: Option<Point>) -> String {
    let mut out = String::new();
    if let Some(start) = start {
        let _ = writeln!(out, "Starting Point = {start}");
    }
    let _ = writeln!(out, "Total Distance = {:.6}", summary.tour_length);
    let _ = writeln!(
        out,
        "Avg Distance Of All = {}",
        format_average(summary.average_pair_length)
    );
    let _ = writeln!(
        out,
        "Avg Distance Of Route = {}",
        format_average(summary.average_edge_length)
    );
    out
}

fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nntour_core::solve;

    use super::*;

    fn square() -> nntour_core::RouteResult {
        solve(
            PointSet::new(vec![
                Point::new(0, 0, 0),
                Point::new(1, 10, 0),
                Point::new(2, 10, 10),
                Point::new(3, 0, 10),
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn points_listing() {
        let text = format_points(&square().points);
        assert_eq!(text, "Points:\n[0] 0,0\n[1] 10,0\n[2] 10,10\n[3] 0,10\n");
    }

    #[test]
    fn pairs_listing_has_count_and_rows() {
        let result = square();
        let text = format_pairs(result.tour.pairs());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Pairs of length (4)"));
        assert_eq!(lines.next(), Some("[0] [0] 0,0, [1] 10,0, 10.000000"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn empty_pairs_listing() {
        assert_eq!(format_pairs(&[]), "Pairs of length (0)\n");
    }

    #[test]
    fn summary_lines() {
        let result = square();
        let text = format_summary(&result.summary(), result.tour.start());
        assert!(text.contains("Starting Point = [0] 0,0\n"));
        assert!(text.contains("Total Distance = 40.000000\n"));
        assert!(text.contains("Avg Distance Of Route = 10.000000\n"));
    }

    #[test]
    fn summary_of_single_point_reports_na() {
        let result = solve(PointSet::new(vec![Point::new(0, 1, 1)]).unwrap()).unwrap();
        let text = format_summary(&result.summary(), result.tour.start());
        assert!(!text.contains("Starting Point"));
        assert!(text.contains("Avg Distance Of All = n/a"));
        assert!(text.contains("Avg Distance Of Route = n/a"));
    }
}
