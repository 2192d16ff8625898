use super::*;
use nalgebra::{vector, Vector3};

/// Rotation written as three sequential planar updates (y, then x, then z axis).
fn rotate_stepwise(p: Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (s, c) = angle.sin_cos();
    let (mut x, mut y, mut z) = (p.x, p.y, p.z);
    let (nx, nz) = (x * c + z * s, -x * s + z * c);
    x = nx;
    z = nz;
    let (ny, nz) = (-z * s + y * c, z * c + y * s);
    y = ny;
    z = nz;
    let (nx, ny) = (x * c + y * s, -x * s + y * c);
    vector![nx, ny, z]
}

#[test]
fn orientation_sign_matches_turn_direction() {
    let a = vector![0.0, 0.0, 5.0];
    let b = vector![1.0, 0.0, -3.0];
    let left = vector![1.0, 1.0, 0.0];
    let right = vector![1.0, -1.0, 0.0];
    let ahead = vector![2.0, 0.0, 7.0];
    assert!(orientation(&a, &b, &left) > 0.0);
    assert!(orientation(&a, &b, &right) < 0.0);
    assert_eq!(orientation(&a, &b, &ahead), 0.0);
}

#[test]
fn flip_time_is_none_for_collinear_projection() {
    let a = vector![0.0, 0.0, 0.0];
    let b = vector![1.0, 1.0, 1.0];
    let c = vector![2.0, 2.0, 0.0];
    assert!(flip_time(&a, &b, &c).is_none());
}

#[test]
fn flip_time_zeroes_the_lifted_cross_product() {
    let a = vector![0.0, 0.3, 0.1];
    let b = vector![1.0, -0.4, -0.7];
    let c = vector![2.5, 0.9, 0.4];
    let t = flip_time(&a, &b, &c).unwrap();
    // At time t the projection (x, z − t·y) makes a, b, c collinear.
    let lift = |p: &Vector3<f64>| vector![p.x, p.z - t * p.y, 0.0];
    let (la, lb, lc) = (lift(&a), lift(&b), lift(&c));
    let cross = (lb.x - la.x) * (lc.y - lb.y) - (lb.y - la.y) * (lc.x - lb.x);
    assert!(cross.abs() < 1e-12);
}

#[test]
fn rotation_matrix_matches_stepwise_rotation() {
    let m = rotation_matrix(0.01);
    for p in [
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
        vector![-2.5, 3.0, 0.75],
    ] {
        assert!((m * p - rotate_stepwise(p, 0.01)).norm() < 1e-14);
    }
    assert!((m.determinant() - 1.0).abs() < 1e-12);
}

#[test]
fn rotation_breaks_axis_ties() {
    let pts = [vector![1.0, 0.0, 0.0], vector![1.0, 1.0, 0.0], vector![1.0, 0.0, 1.0]];
    let r = rotate(&pts, 0.01);
    assert!(r[0].x != r[1].x && r[1].x != r[2].x && r[0].x != r[2].x);
}

#[test]
fn perturb_is_seeded_and_bounded() {
    let pts = vec![vector![2.0, -1.0, 0.5], vector![0.0, 0.0, 0.0]];
    let a = perturb(&pts, 1e-6, 7);
    let b = perturb(&pts, 1e-6, 7);
    assert_eq!(a, b);
    for (p, q) in pts.iter().zip(&a) {
        assert!((p - q).amax() <= 2e-6 + 1e-18);
    }
    assert_eq!(perturb(&pts, 0.0, 7), pts);
}

#[test]
fn preprocess_identity_cfg_is_noop() {
    let pts = vec![vector![1.0, 2.0, 3.0], vector![-4.0, 5.0, -6.0]];
    assert_eq!(preprocess(&pts, &HullCfg::identity()), pts);
    let moved = preprocess(&pts, &HullCfg::default());
    assert!((moved[0] - pts[0]).norm() > 1e-4);
    // rigid up to jitter: pairwise distance preserved
    let d0 = (pts[0] - pts[1]).norm();
    let d1 = (moved[0] - moved[1]).norm();
    assert!((d0 - d1).abs() < 1e-6);
}

#[test]
fn extent_is_largest_bounding_box_side() {
    assert_eq!(extent(&[]), 0.0);
    assert_eq!(extent(&[vector![5.0, -3.0, 2.0]]), 0.0);
    let pts = [vector![1.0, 10.0, -2.0], vector![3.0, 10.5, 4.0], vector![2.0, 9.0, 0.0]];
    assert_eq!(extent(&pts), 6.0);
}

#[test]
fn jitter_follows_cloud_size_not_distance_from_origin() {
    let base = vector![1.0e6, -2.0e6, 5.0e5];
    let pts: Vec<Vector3<f64>> = [
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ]
    .iter()
    .map(|p| base + p)
    .collect();
    let moved = perturb(&pts, 1e-6, 3);
    for (p, q) in pts.iter().zip(&moved) {
        // offsets bounded by jitter × extent (1.0), plus rounding at 1e6
        assert!((p - q).amax() <= 1e-6 + 1e-9);
    }
    assert!(pts.iter().zip(&moved).any(|(p, q)| p != q));
}
