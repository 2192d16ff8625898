//! Seeded 3D point clouds.
//!
//! Purpose
//! - Reproducible inputs for tests, benches and `kinhull gen`.
//! - Same `(kind, n, seed)` always yields the same points.
//!
//! Model
//! - `Sphere`: uniform on the unit sphere (every point is a hull vertex).
//! - `Ball`: uniform in the unit ball (most points interior).
//! - `Cube`: uniform in `[-1, 1]^3`.
//!   Sphere and ball use rejection sampling from the cube.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Distribution family of a cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudKind {
    Sphere,
    Ball,
    Cube,
}

impl CloudKind {
    pub const ALL: [CloudKind; 3] = [CloudKind::Sphere, CloudKind::Ball, CloudKind::Cube];

    pub fn name(self) -> &'static str {
        match self {
            CloudKind::Sphere => "sphere",
            CloudKind::Ball => "ball",
            CloudKind::Cube => "cube",
        }
    }
}

impl fmt::Display for CloudKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloudKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CloudKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown cloud kind `{s}` (expected sphere, ball or cube)"))
    }
}

/// Draw `n` points of the given kind from a `StdRng` seeded with `seed`.
pub fn draw_cloud(kind: CloudKind, n: usize, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| match kind {
            CloudKind::Cube => in_cube(&mut rng),
            CloudKind::Ball => loop {
                let p = in_cube(&mut rng);
                if p.norm_squared() <= 1.0 {
                    break p;
                }
            },
            CloudKind::Sphere => loop {
                let p = in_cube(&mut rng);
                let r2 = p.norm_squared();
                if r2 <= 1.0 && r2 > 1e-6 {
                    break p / r2.sqrt();
                }
            },
        })
        .collect()
}

#[inline]
fn in_cube<R: Rng>(rng: &mut R) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}
