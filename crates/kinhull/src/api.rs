//! Curated API for callers (UNSTABLE).
//!
//! Important
//! - Convenience re-exports only. Breaking changes are allowed.
//! - Prefer these paths over deep module paths in binaries and benches.

// Predicates and preprocessing
pub use crate::geom3::{extent, flip_time, orientation, perturb, preprocess, rotate, HullCfg};
// Hull construction and validation
pub use crate::hull::{
    convex_hull, convex_hull_with, hull_stats, is_closed_oriented, is_outward, Face, HullStats,
};
// Batch text format
pub use crate::io::{parse_batches, write_faces, write_points, HullRecord, ParseError};
// Point clouds
pub use crate::rand3::{draw_cloud, CloudKind};
