//! Integration test: route a seeded random point set and export it to
//! every format.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use nntour_core::RouteConfig;

#[test]
fn seeded_run_exports_consistently() {
    let config = RouteConfig {
        min_points: 10,
        max_points: 40,
        seed: Some(31),
        ..RouteConfig::default()
    };
    let result = nntour_core::route(&config, &mut config.rng()).expect("routing should succeed");
    let n = result.points.len();

    let route = nntour_export::to_route_file(&result.tour).unwrap();
    let lines: Vec<&str> = route.lines().collect();
    assert_eq!(lines.len(), 3);

    // Each list covers every point once plus the repeated start.
    let ids: Vec<usize> = lines[2].split(',').map(|s| s.parse().unwrap()).collect();
    assert_eq!(ids.len(), n + 1);
    assert_eq!(ids.first(), ids.last());
    let mut unique = ids[..n].to_vec();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), n);

    // Coordinates line up with the point ids.
    let xs: Vec<i64> = lines[0].split(',').map(|s| s.parse().unwrap()).collect();
    let ys: Vec<i64> = lines[1].split(',').map(|s| s.parse().unwrap()).collect();
    for ((id, x), y) in ids.iter().zip(&xs).zip(&ys) {
        let point = result.points.points()[*id];
        assert_eq!((point.x, point.y), (*x, *y));
    }

    let svg = nntour_export::to_svg(
        &result.points,
        &result.tour,
        config.coordinate_bound,
        &nntour_export::SvgMetadata::default(),
    )
    .unwrap();
    assert_eq!(svg.matches("<circle").count(), n);

    let summary = nntour_export::format_summary(&result.summary(), result.tour.start());
    assert!(summary.contains("Total Distance = "));

    let pairs = nntour_export::format_pairs(result.index.pairs());
    assert!(pairs.starts_with(&format!("Pairs of length ({})", n * (n - 1) / 2)));
}
