//! Structural checks on a face set: counts, edge pairing, orientation.

use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector3;

use super::faces::Face;

/// Vertex, edge and face counts of a triangulated surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullStats {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

impl HullStats {
    /// χ = V − E + F; 2 for the boundary of a 3D polytope.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }
}

/// Count distinct vertices, undirected edges and faces.
pub fn hull_stats(faces: &[Face]) -> HullStats {
    let mut vertices = BTreeSet::new();
    let mut edges = BTreeSet::new();
    for f in faces {
        vertices.extend(f.ids());
        for (a, b) in f.edges() {
            edges.insert((a.min(b), a.max(b)));
        }
    }
    HullStats {
        vertices: vertices.len(),
        edges: edges.len(),
        faces: faces.len(),
    }
}

/// True iff the faces form a closed, consistently oriented surface: every
/// directed edge occurs exactly once and its reverse occurs exactly once.
pub fn is_closed_oriented(faces: &[Face]) -> bool {
    if faces.is_empty() {
        return false;
    }
    let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
    for f in faces {
        for e in f.edges() {
            *directed.entry(e).or_default() += 1;
        }
    }
    directed
        .iter()
        .all(|(&(a, b), &k)| k == 1 && directed.get(&(b, a)) == Some(&1))
}

/// True iff every face normal `(b − a) × (c − a)` points away from the
/// centroid of `points` and all ids are valid indices into `points`.
pub fn is_outward(faces: &[Face], points: &[Vector3<f64>]) -> bool {
    if points.is_empty() {
        return faces.is_empty();
    }
    let centroid = points.iter().sum::<Vector3<f64>>() / points.len() as f64;
    faces.iter().all(|f| {
        let [a, b, c] = f.ids();
        let (Some(pa), Some(pb), Some(pc)) = (points.get(a), points.get(b), points.get(c)) else {
            return false;
        };
        let normal = (pb - pa).cross(&(pc - pa));
        normal.dot(&(pa - centroid)) > 0.0
    })
}
