//! Rotation and jitter applied to raw input before hull construction.
//!
//! A small rigid rotation removes axis-aligned ties (equal x coordinates break
//! the x-sorted split). Rotation keeps coplanar points coplanar, so a seeded
//! jitter follows to break flat faces such as the sides of a cube.

use nalgebra::{Matrix3, Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::HullCfg;

/// Composite rotation: about y by `angle`, then about x by `angle`, then about z by `−angle`.
pub fn rotation_matrix(angle: f64) -> Matrix3<f64> {
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), -angle);
    (rz * rx * ry).into_inner()
}

/// Rotate every point with `rotation_matrix(angle)`.
pub fn rotate(points: &[Vector3<f64>], angle: f64) -> Vec<Vector3<f64>> {
    let m = rotation_matrix(angle);
    points.iter().map(|p| m * p).collect()
}

/// Add a seeded uniform offset in `[−jitter·s, jitter·s]` to every coordinate,
/// where `s` is the largest bounding-box extent of the set.
pub fn perturb(points: &[Vector3<f64>], jitter: f64, seed: u64) -> Vec<Vector3<f64>> {
    let amp = jitter * extent(points);
    if !(amp.is_finite() && amp > 0.0) {
        return points.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    points
        .iter()
        .map(|p| p + Vector3::from_fn(|_, _| rng.gen_range(-amp..=amp)))
        .collect()
}

/// Largest side of the axis-aligned bounding box (0 for fewer than two points).
pub fn extent(points: &[Vector3<f64>]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (lo, hi) = points
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    (hi - lo).max()
}

/// Rotate, then jitter, according to `cfg`.
pub fn preprocess(points: &[Vector3<f64>], cfg: &HullCfg) -> Vec<Vector3<f64>> {
    let rotated = if cfg.angle == 0.0 {
        points.to_vec()
    } else {
        rotate(points, cfg.angle)
    };
    if cfg.jitter == 0.0 {
        rotated
    } else {
        perturb(&rotated, cfg.jitter, cfg.seed)
    }
}
