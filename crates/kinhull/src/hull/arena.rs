//! Point arena with index-based neighbour links.
//!
//! Invariants
//! - Nodes are sorted by x once and never move; `prev`/`next` are indices.
//! - Within a hull fragment, `next(prev(i)) == i` for every linked node `i`
//!   except the fragment's two ends, whose outer neighbour is `None`.
//! - A node removed by `toggle` keeps its own links so the next `toggle`
//!   can splice it back.

use nalgebra::Vector3;

use crate::geom3::{flip_time, orientation};

/// Result of `Arena::toggle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Inserted,
    Removed,
}

/// A point plus its position in the current silhouette.
#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vector3<f64>,
    pub id: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Backing store for one hull computation.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Arena over `points` (ids = input indices), sorted by x, all links cleared.
    pub fn from_points(points: &[Vector3<f64>]) -> Self {
        let mut nodes: Vec<Node> = points
            .iter()
            .enumerate()
            .map(|(id, &pos)| Node {
                pos,
                id,
                prev: None,
                next: None,
            })
            .collect();
        nodes.sort_by(|a, b| a.pos.x.total_cmp(&b.pos.x));
        Self { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.nodes[i].pos.x
    }

    #[inline]
    pub fn id(&self, i: usize) -> usize {
        self.nodes[i].id
    }

    #[inline]
    pub fn prev(&self, i: usize) -> Option<usize> {
        self.nodes[i].prev
    }

    #[inline]
    pub fn next(&self, i: usize) -> Option<usize> {
        self.nodes[i].next
    }

    /// Make `b` the successor of `a`.
    #[inline]
    pub fn link(&mut self, a: usize, b: usize) {
        self.nodes[a].next = Some(b);
        self.nodes[b].prev = Some(a);
    }

    #[inline]
    pub fn orientation(&self, a: usize, b: usize, c: usize) -> f64 {
        orientation(&self.nodes[a].pos, &self.nodes[b].pos, &self.nodes[c].pos)
    }

    #[inline]
    pub fn flip_time(&self, a: usize, b: usize, c: usize) -> Option<f64> {
        flip_time(&self.nodes[a].pos, &self.nodes[b].pos, &self.nodes[c].pos)
    }

    /// Flip time of `i` against its current neighbours; `None` at a fragment end.
    pub fn own_flip_time(&self, i: usize) -> Option<f64> {
        let node = &self.nodes[i];
        self.flip_time(node.prev?, i, node.next?)
    }

    /// Splice `i` out of its sequence if present, back in otherwise.
    ///
    /// Presence is read from the predecessor: `i` is present iff
    /// `next(prev(i)) == i`. Two consecutive calls undo each other, which is
    /// how the builder replays child events backwards and forwards.
    pub fn toggle(&mut self, i: usize) -> Toggle {
        let (prev, next) = (self.nodes[i].prev, self.nodes[i].next);
        let present = match (prev, next) {
            (Some(p), _) => self.nodes[p].next == Some(i),
            (None, Some(n)) => self.nodes[n].prev == Some(i),
            (None, None) => false,
        };
        if present {
            if let Some(p) = prev {
                self.nodes[p].next = next;
            }
            if let Some(n) = next {
                self.nodes[n].prev = prev;
            }
            Toggle::Removed
        } else {
            if let Some(p) = prev {
                self.nodes[p].next = Some(i);
            }
            if let Some(n) = next {
                self.nodes[n].prev = Some(i);
            }
            Toggle::Inserted
        }
    }

    /// Drop every link (start of a fresh pass).
    pub fn clear_links(&mut self) {
        for node in &mut self.nodes {
            node.prev = None;
            node.next = None;
        }
    }

    /// Negate every z coordinate; the lower hull becomes the upper one.
    pub fn mirror_z(&mut self) {
        for node in &mut self.nodes {
            node.pos.z = -node.pos.z;
        }
    }
}
