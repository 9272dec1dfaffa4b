//! Run diagnostics: timing and counts for each stage of a routing run.
//!
//! Collected by [`route_with_diagnostics`](crate::route_with_diagnostics)
//! alongside the route itself. Time is read through the [`Clock`] trait
//! so this crate never touches a platform clock directly.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::metrics::RouteSummary;

/// Source of monotonic time for stage measurements.
pub trait Clock {
    /// Opaque timestamp type.
    type Instant;

    /// Current timestamp.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single routing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDiagnostics {
    /// Stage 1: point generation.
    pub generate: StageDiagnostics,
    /// Stage 2: distance index construction.
    pub index: StageDiagnostics,
    /// Stage 3: greedy tour construction.
    pub tour: StageDiagnostics,
    /// Total wall-clock duration of the run (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Lengths and counts for the finished route.
    pub summary: RouteSummary,
}

/// Diagnostics for a single stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Point generation metrics.
    Generate {
        /// Number of points drawn.
        point_count: usize,
        /// Exclusive coordinate bound.
        coordinate_bound: i64,
        /// Number of points sharing a location with an earlier point.
        coincident_points: usize,
    },
    /// Distance index metrics.
    Index {
        /// Number of pairs built.
        pair_count: usize,
        /// Shortest pair distance, if any pair exists.
        min_distance: Option<f64>,
        /// Longest pair distance, if any pair exists.
        max_distance: Option<f64>,
    },
    /// Tour construction metrics.
    Tour {
        /// Number of tour edges.
        edge_count: usize,
        /// Id of the point the tour starts from.
        start_point: Option<usize>,
        /// Length of the seed (globally shortest) pair.
        seed_distance: Option<f64>,
        /// Length of the closing edge back to the start.
        closing_distance: Option<f64>,
    },
}

impl RouteDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Route Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Points: {}  |  Pairs: {}  |  Tour edges: {}",
            self.summary.point_count, self.summary.pair_count, self.summary.tour_edge_count,
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<24} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(80));

        let total_ms = duration_ms(self.total_duration);
        let stages = [
            ("Generate", &self.generate),
            ("Distance Index", &self.index),
            ("Tour", &self.tour),
        ];

        for (name, diag) in stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<24} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.push(String::new());
        lines.push(format!(
            "Tour length: {:.6}  |  Avg pair: {}  |  Avg edge: {}",
            self.summary.tour_length,
            format_optional(self.summary.average_pair_length),
            format_optional(self.summary.average_edge_length),
        ));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Generate {
            point_count,
            coordinate_bound,
            coincident_points,
        } => format!("{point_count} pts in [0,{coordinate_bound}) coincident={coincident_points}"),
        StageMetrics::Index {
            pair_count,
            min_distance,
            max_distance,
        } => format!(
            "{pair_count} pairs min={} max={}",
            format_optional(*min_distance),
            format_optional(*max_distance),
        ),
        StageMetrics::Tour {
            edge_count,
            start_point,
            seed_distance,
            closing_distance,
        } => format!(
            "{edge_count} edges start={} seed={} close={}",
            start_point.map_or_else(|| "n/a".to_string(), |id| id.to_string()),
            format_optional(*seed_distance),
            format_optional(*closing_distance),
        ),
    }
}

/// Count points that share a location with an earlier point.
pub(crate) fn count_coincident(points: &[crate::Point]) -> usize {
    let mut seen = std::collections::HashSet::with_capacity(points.len());
    points.iter().filter(|p| !seen.insert((p.x, p.y))).count()
}
