use super::*;
use crate::sample::{draw_point_cloud, PointCloudCfg, ReplayToken};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn single_triangle() {
    let t = compute(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)])).unwrap();
    assert_eq!(t.vertices, pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]));
    assert_eq!(t.triangles, vec![[0, 1, 2]]);
    assert_eq!(t.encoded_len(), 44);
}

#[test]
fn ten_points_fan() {
    let input = pts(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.5, 0.5),
        (1.0, 1.0),
        (0.5, 1.2),
        (0.0, 1.0),
        (-0.5, 0.5),
        (0.2, 0.3),
        (0.5, 0.5),
        (0.8, 0.7),
    ]);
    let t = compute(&input).unwrap();
    assert_eq!(t.vertices.len(), 10);
    assert_eq!(t.triangles.len(), 8);
    for (k, tri) in t.triangles.iter().enumerate() {
        let i = k as u32 + 1;
        assert_eq!(*tri, [0, i, i + 1]);
    }
}

#[test]
fn dedup_keeps_first_occurrence_order() {
    let t = compute(&pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0), (1.0, 0.0)])).unwrap();
    assert_eq!(t.vertices, pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]));
    assert_eq!(t.triangles.len(), 1);

    let t = compute(&pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.0),
        (0.5, 1.0),
        (0.5, 1.0),
    ]))
    .unwrap();
    assert_eq!(t.vertices.len(), 3);
    assert_eq!(t.triangles, vec![[0, 1, 2]]);
}

#[test]
fn near_duplicates_are_not_merged() {
    let t = compute(&pts(&[(0.0, 0.0), (1e-15, 0.0), (1.0, 1.0), (0.0, 1.0)])).unwrap();
    assert_eq!(t.vertices.len(), 4);
}

#[test]
fn collinear_gives_vertices_without_triangles() {
    let t = compute(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap();
    assert_eq!(t.vertices.len(), 3);
    assert!(t.is_degenerate());

    let horizontal: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, 5.0)).collect();
    let t = compute_pairs(&horizontal).unwrap();
    assert_eq!(t.vertices.len(), 20);
    assert!(t.triangles.is_empty());
}

#[test]
fn collinear_after_dedup() {
    let t = compute(&pts(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (2.0, 2.0), (1.0, 1.0)])).unwrap();
    assert_eq!(t.vertices.len(), 3);
    assert!(t.triangles.is_empty());
}

#[test]
fn insufficient_points() {
    for raw in [
        vec![],
        vec![(1.0, 1.0)],
        vec![(0.0, 0.0), (1.0, 0.0)],
        vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 0.0)],
    ] {
        let err = compute_pairs(&raw).unwrap_err();
        assert!(matches!(err, TriangulationError::InsufficientPoints { .. }));
        assert!(err.to_string().contains('3'));
    }
    let err = compute_pairs(&[(2.0, 2.0); 5]).unwrap_err();
    assert_eq!(err, TriangulationError::InsufficientPoints { unique: 1 });
}

#[test]
fn absolute_epsilon_is_scale_sensitive() {
    // Tiny but genuinely non-collinear triangle: doubled area 1e-20 <= 1e-12.
    let t = compute(&pts(&[(0.0, 0.0), (1e-10, 0.0), (0.0, 1e-10)])).unwrap();
    assert!(t.triangles.is_empty());
    // Large coordinates with non-zero area.
    let t = compute(&pts(&[(1e10, 1e10), (2e10, 1e10), (1.5e10, 2e10)])).unwrap();
    assert_eq!(t.triangles.len(), 1);
    assert!(t.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
}

#[test]
fn non_finite_values_pass_through() {
    let t = compute(&pts(&[(0.0, 0.0), (1.0, 0.0), (f64::INFINITY, 1.0), (0.0, 1.0)])).unwrap();
    assert_eq!(t.vertices.len(), 4);
    assert!(t.vertices[2].x.is_infinite());
}

#[test]
fn deterministic_over_repeated_calls() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<Point> = (0..200)
        .map(|_| Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();
    let first = compute(&input).unwrap();
    for _ in 0..5 {
        assert_eq!(compute(&input).unwrap(), first);
    }
}

#[test]
fn large_sampled_cloud() {
    let cfg = PointCloudCfg {
        count: 10_000,
        ..PointCloudCfg::default()
    };
    let cloud = draw_point_cloud(&cfg, ReplayToken { seed: 1, index: 0 });
    let t = compute(&cloud).unwrap();
    assert_eq!(t.triangles.len(), t.vertices.len() - 2);
}

fn coord() -> impl Strategy<Value = f64> {
    // Small integer grid so duplicates and collinear runs actually occur.
    (-4i32..=4).prop_map(f64::from)
}

proptest! {
    #[test]
    fn prop_fan_or_degenerate(raw in prop::collection::vec((coord(), coord()), 0..40)) {
        let input = pts(&raw);
        let unique = dedup_points(&input);
        match compute(&input) {
            Err(TriangulationError::InsufficientPoints { unique: u }) => {
                prop_assert!(unique.len() < 3);
                prop_assert_eq!(u, unique.len());
            }
            Ok(t) => {
                prop_assert_eq!(&t.vertices, &unique);
                if is_collinear(&unique, crate::cfg::COLLINEAR_EPS) {
                    prop_assert!(t.triangles.is_empty());
                } else {
                    prop_assert_eq!(t.triangles.len(), t.vertices.len() - 2);
                    for (k, tri) in t.triangles.iter().enumerate() {
                        let i = k as u32 + 1;
                        prop_assert_eq!(*tri, [0, i, i + 1]);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_dedup_idempotent_and_order_preserving(raw in prop::collection::vec((coord(), coord()), 0..40)) {
        let input = pts(&raw);
        let once = dedup_points(&input);
        prop_assert_eq!(dedup_points(&once), once.clone());
        // Each kept vertex is the first occurrence of its value in the input.
        let firsts: Vec<usize> = once
            .iter()
            .map(|v| input.iter().position(|p| p == v).unwrap())
            .collect();
        prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }
}
