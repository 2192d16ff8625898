//! Three-dimensional convex hulls by kinetic divide and conquer.
//!
//! The hull of a labeled point set is assembled from two lower-hull sweeps
//! (one on the input, one with z mirrored). Each sweep recursively merges
//! x-sorted halves by rotating a bridge edge through a fictitious time
//! parameter and recording every point that enters or leaves the silhouette.
//!
//! Layout
//! - `geom3`: predicates (`orientation`, `flip_time`) and input preprocessing.
//! - `hull`: point arena, bridge merge, recursive builder, face extraction, checks.
//! - `io`: batch text format (parse + write).
//! - `rand3`: seeded point clouds for tests, benches and the CLI.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod geom3;
pub mod hull;
pub mod io;
pub mod rand3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{preprocess, HullCfg};
    pub use crate::hull::{
        convex_hull, convex_hull_with, hull_stats, is_closed_oriented, is_outward, Face,
        HullStats,
    };
    pub use crate::rand3::{draw_cloud, CloudKind};
    pub use nalgebra::Vector3 as Vec3;
}
