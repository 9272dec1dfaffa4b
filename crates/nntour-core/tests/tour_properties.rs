//! Integration test: structural properties of greedy tours over many
//! seeded random point sets.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use nntour_core::{
    Point, PointSet, Tour, average_length, build_distance_index, build_tour, generate_points,
    total_length,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeds and sizes covering tiny, coincident-heavy and larger sets.
fn cases() -> Vec<(u64, usize, i64)> {
    let mut cases = Vec::new();
    for seed in 0..20 {
        cases.push((seed, 2 + (seed as usize % 30), 100));
    }
    // Small bound forces many coincident points and zero-length pairs.
    for seed in 100..110 {
        cases.push((seed, 15, 3));
    }
    cases.push((500, 120, 1000));
    cases
}

fn assert_single_cycle(tour: &Tour, points: &PointSet) {
    let n = points.len();

    // Every point is an endpoint of exactly two tour edges.
    let mut degree: HashMap<usize, usize> = HashMap::new();
    for pair in tour.pairs() {
        *degree.entry(pair.a().id).or_default() += 1;
        *degree.entry(pair.b().id).or_default() += 1;
    }
    assert_eq!(degree.len(), n, "not every point is on the tour");
    for point in points.points() {
        assert_eq!(degree.get(&point.id), Some(&2), "degree of {point}");
    }

    // Chaining by shared endpoints visits each point once and returns.
    let order = tour.visiting_order().unwrap();
    assert_eq!(order.len(), n);
    let mut ids: Vec<usize> = order.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n, "a point was visited twice");

    let start = tour.start().unwrap();
    let closing = tour.pairs().last().unwrap();
    let last = order.last().unwrap();
    assert!(closing.joins(last.id, start.id));
}

#[test]
fn tour_has_one_edge_per_point() {
    for (seed, n, bound) in cases() {
        let points = generate_points(n, bound, &mut StdRng::seed_from_u64(seed)).unwrap();
        let tour = build_tour(&build_distance_index(&points)).unwrap();
        assert_eq!(tour.len(), n, "seed {seed}");
    }
}

#[test]
fn tour_is_a_single_hamiltonian_cycle() {
    for (seed, n, bound) in cases() {
        let points = generate_points(n, bound, &mut StdRng::seed_from_u64(seed)).unwrap();
        let tour = build_tour(&build_distance_index(&points)).unwrap();
        assert_single_cycle(&tour, &points);
    }
}

#[test]
fn tour_edges_reuse_index_distances() {
    for (seed, n, bound) in cases() {
        let points = generate_points(n, bound, &mut StdRng::seed_from_u64(seed)).unwrap();
        let index = build_distance_index(&points);
        let tour = build_tour(&index).unwrap();
        for edge in tour.pairs() {
            let original = index
                .pairs()
                .iter()
                .find(|p| p.joins(edge.a().id, edge.b().id))
                .expect("tour edge must come from the index");
            assert!(edge.distance().to_bits() == original.distance().to_bits());
        }
    }
}

#[test]
fn seed_edge_is_globally_shortest() {
    for (seed, n, bound) in cases() {
        let points = generate_points(n, bound, &mut StdRng::seed_from_u64(seed)).unwrap();
        let index = build_distance_index(&points);
        let tour = build_tour(&index).unwrap();
        let min = index
            .pairs()
            .iter()
            .map(nntour_core::Pair::distance)
            .fold(f64::INFINITY, f64::min);
        assert!((tour.pairs()[0].distance() - min).abs() < f64::EPSILON);
    }
}

#[test]
fn totals_and_averages_are_consistent() {
    for (seed, n, bound) in cases() {
        let points = generate_points(n, bound, &mut StdRng::seed_from_u64(seed)).unwrap();
        let index = build_distance_index(&points);
        let tour = build_tour(&index).unwrap();

        let manual: f64 = tour.pairs().iter().map(nntour_core::Pair::distance).sum();
        assert!((total_length(tour.pairs()) - manual).abs() < 1e-9);

        #[allow(clippy::cast_precision_loss)]
        let expected_avg = total_length(index.pairs()) / index.len() as f64;
        assert!((average_length(index.pairs()).unwrap() - expected_avg).abs() < 1e-9);
    }
}

#[test]
fn index_distances_are_idempotent() {
    let points = generate_points(25, 100, &mut StdRng::seed_from_u64(77)).unwrap();
    let mut first: Vec<u64> = build_distance_index(&points)
        .pairs()
        .iter()
        .map(|p| p.distance().to_bits())
        .collect();
    let mut second: Vec<u64> = build_distance_index(&points)
        .pairs()
        .iter()
        .map(|p| p.distance().to_bits())
        .collect();
    first.sort_unstable();
    second.sort_unstable();
    assert_eq!(first, second);
}

#[test]
fn unit_square_perimeter() {
    let points = PointSet::new(vec![
        Point::new(0, 0, 0),
        Point::new(1, 10, 0),
        Point::new(2, 10, 10),
        Point::new(3, 0, 10),
    ])
    .unwrap();
    let index = build_distance_index(&points);
    assert_eq!(index.len(), 6);

    let tour = build_tour(&index).unwrap();
    assert_eq!(tour.len(), 4);
    assert!((total_length(tour.pairs()) - 40.0).abs() < 1e-9);
    assert_single_cycle(&tour, &points);
}

#[test]
fn two_points_produce_two_identical_length_edges() {
    let points = PointSet::new(vec![Point::new(0, 1, 1), Point::new(1, 4, 5)]).unwrap();
    let tour = build_tour(&build_distance_index(&points)).unwrap();
    assert_eq!(tour.len(), 2);
    assert!((tour.pairs()[0].distance() - 5.0).abs() < f64::EPSILON);
    assert!((tour.pairs()[1].distance() - 5.0).abs() < f64::EPSILON);
    assert_single_cycle(&tour, &points);
}

#[test]
fn coincident_pair_has_zero_distance_and_seeds_the_tour() {
    let points = PointSet::new(vec![
        Point::new(0, 50, 50),
        Point::new(1, 10, 10),
        Point::new(2, 80, 20),
        Point::new(3, 10, 10),
    ])
    .unwrap();
    let index = build_distance_index(&points);
    let zero = index.pairs().iter().find(|p| p.joins(1, 3)).unwrap();
    assert!(zero.distance().abs() < f64::EPSILON);

    let tour = build_tour(&index).unwrap();
    assert!(tour.pairs()[0].joins(1, 3));
    assert_single_cycle(&tour, &points);
}
