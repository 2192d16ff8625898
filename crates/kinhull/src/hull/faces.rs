//! Face extraction: two sweeps, oriented triangles, canonical order.

use std::collections::HashSet;

use nalgebra::Vector3;
use tracing::{debug, warn};

use super::arena::{Arena, Toggle};
use super::build::build;
use crate::geom3::{preprocess, HullCfg};

/// Triangle of input ids, counter-clockwise seen from outside the hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(pub [usize; 3]);

impl Face {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn ids(&self) -> [usize; 3] {
        self.0
    }

    /// Rotate so the smallest id comes first; cyclic order (orientation) is kept.
    pub fn canonical(self) -> Self {
        let [a, b, c] = self.0;
        if b < a && b < c {
            Self([b, c, a])
        } else if c < a && c < b {
            Self([c, a, b])
        } else {
            self
        }
    }

    /// Same triangle, opposite orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        let [a, b, c] = self.0;
        Self([b, a, c])
    }

    /// Directed edges `(a,b), (b,c), (c,a)`.
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }

    fn vertex_set(&self) -> [usize; 3] {
        let mut s = self.0;
        s.sort_unstable();
        s
    }
}

/// Which sweep produced an event; decides how a toggle maps to orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Pass {
    Lower,
    Upper,
}

/// Convex hull faces of `points` taken as is (ids = slice indices).
///
/// Output is canonical (smallest id first), sorted and free of duplicates.
/// Fewer than three points give no faces. Three non-collinear points give
/// a single face (the two sides of a flat hull collapse into one).
///
/// Exactly degenerate input (coplanar faces, duplicates) is unsupported;
/// use `convex_hull_with` to preprocess raw coordinates.
pub fn convex_hull(points: &[Vector3<f64>]) -> Vec<Face> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut arena = Arena::from_points(points);
    let mut faces = Vec::new();
    sweep_faces(&mut arena, Pass::Lower, &mut faces);
    arena.clear_links();
    arena.mirror_z();
    sweep_faces(&mut arena, Pass::Upper, &mut faces);

    for f in faces.iter_mut() {
        *f = f.canonical();
    }
    faces.sort_unstable();
    faces.dedup();
    let mut seen = HashSet::with_capacity(faces.len());
    faces.retain(|f| seen.insert(f.vertex_set()));
    debug!(points = points.len(), faces = faces.len(), "convex hull");
    faces
}

/// Preprocess with `cfg` (rotation + jitter), then `convex_hull`.
pub fn convex_hull_with(points: &[Vector3<f64>], cfg: &HullCfg) -> Vec<Face> {
    convex_hull(&preprocess(points, cfg))
}

/// One full sweep: each root event is a face `(prev, point, next)` at the
/// moment of the event; the toggle direction fixes its orientation.
fn sweep_faces(arena: &mut Arena, pass: Pass, out: &mut Vec<Face>) {
    let len = arena.len();
    let events = build(arena, 0..len);
    out.reserve(events.len());
    out.extend(events.into_iter().filter_map(|e| event_face(arena, e, pass)));
}

/// Apply root event `e` and return its oriented face.
///
/// The event is toggled even when a neighbour is missing (degenerate input);
/// such an event yields no face.
pub(super) fn event_face(arena: &mut Arena, e: usize, pass: Pass) -> Option<Face> {
    let neighbours = arena.prev(e).zip(arena.next(e));
    let toggle = arena.toggle(e);
    let Some((p, n)) = neighbours else {
        warn!(point = arena.id(e), "hull event at a silhouette end; input is degenerate");
        return None;
    };
    let face = Face::new(arena.id(p), arena.id(e), arena.id(n));
    let flip = matches!(
        (pass, toggle),
        (Pass::Lower, Toggle::Removed) | (Pass::Upper, Toggle::Inserted)
    );
    Some(if flip { face.flipped() } else { face })
}
