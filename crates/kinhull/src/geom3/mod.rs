//! 3D points, kinetic predicates, and degeneracy-breaking preprocessing.
//!
//! Purpose
//! - Keep every floating-point decision about input geometry in one place:
//!   `orientation` and `flip_time` are the only geometric tests the hull uses.
//! - Provide the rotation + jitter preprocessing applied before hull construction.
//!
//! Conventions
//! - Points are plain `Vector3<f64>`; a point's id is its index in the input slice.
//! - Predicates look at the (x, y) projection for orientation and at the
//!   (x, z) lift for event times.

mod cfg;
mod predicates;
mod preprocess;

pub use cfg::HullCfg;
pub use predicates::{flip_time, orientation};
pub use preprocess::{extent, perturb, preprocess, rotate, rotation_matrix};

#[cfg(test)]
mod tests;
