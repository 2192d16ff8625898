//! Kinetic divide-and-conquer 3D convex hull.
//!
//! Purpose
//! - Build the triangular faces of the convex hull of a labeled point set in
//!   O(n log n), using a single arena of points whose neighbour links are
//!   rewritten in place as fragments merge.
//!
//! Pipeline
//! - `arena`: points sorted by x, `prev`/`next` links as indices, `toggle`.
//! - `merge`: rotate the bridge between two fragments, emit the event list.
//! - `build`: recurse on halves, thread child event lists into the merge.
//! - `faces`: replay the root event list twice (lower pass, z-mirrored pass)
//!   into oriented, canonical, sorted faces.
//! - `check`: Euler counts, edge pairing and outward orientation of a face set.
//!
//! Non-goals
//! - Exactly degenerate input (duplicates, all-coplanar, collinear hull
//!   edges) is not handled beyond the preprocessing in `geom3`.

mod arena;
mod build;
mod check;
mod faces;
mod merge;

pub use arena::{Arena, Node, Toggle};
pub use build::build;
pub use check::{hull_stats, is_closed_oriented, is_outward, HullStats};
pub use faces::{convex_hull, convex_hull_with, Face};
pub use merge::merge;
