//! Bridge merge of two adjacent lower-hull fragments.
//!
//! Model
//! - The lower silhouette at time `t` is the lower hull of `(x, z − t·y)`.
//!   Sweeping `t` from −∞ to +∞ visits every lower face of the 3D hull once,
//!   as the moment its middle vertex enters or leaves the silhouette.
//! - The merged silhouette is left fragment up to `u`, bridge `u–v`, right
//!   fragment from `v`. Six sources can change it next: the two children's
//!   own event lists and four bridge moves (`v` forward/back, `u` back/forward).
//!   The earliest event strictly after the current clock wins; ties go to the
//!   earlier source in that order.
//!
//! Output
//! - The merge returns the points it inserted or removed, in time order, and
//!   leaves the arena linked as the silhouette at `t = −∞`. The parent (or the
//!   face extractor) replays the list forward with `Arena::toggle`.

use tracing::trace;

use super::arena::Arena;

/// A structural change the sweep can apply, in tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    /// Next unreplayed event of the left fragment.
    ReplayLeft(usize),
    /// Next unreplayed event of the right fragment.
    ReplayRight(usize),
    /// `v` moves to its successor.
    AdvanceV(usize),
    /// `v` moves to its predecessor.
    RetreatV(usize),
    /// `u` moves to its predecessor.
    RetreatU(usize),
    /// `u` moves to its successor.
    AdvanceU(usize),
}

/// Bridge endpoints plus the arena they live in.
struct Bridge<'a> {
    arena: &'a mut Arena,
    u: usize,
    v: usize,
}

/// Merge the fragments `[.., mid)` and `[mid, ..)` whose sweeps produced `left`
/// and `right`. Returns the merged event list (arena indices, time order).
///
/// Pre: both fragments are linked as their silhouettes at `t = −∞`, and every
/// point of the left fragment has smaller x than every point of the right one.
pub fn merge(arena: &mut Arena, mid: usize, left: &[usize], right: &[usize]) -> Vec<usize> {
    debug_assert!(mid > 0 && mid < arena.len(), "merge needs two non-empty fragments");
    let mut bridge = Bridge {
        arena,
        u: mid - 1,
        v: mid,
    };
    bridge.settle();
    let events = bridge.sweep(left, right);
    bridge.rewind(mid, &events);
    trace!(
        mid,
        left = left.len(),
        right = right.len(),
        events = events.len(),
        "merge"
    );
    events
}

impl Bridge<'_> {
    /// Walk `v` forward and `u` backward until `u–v` is a lower tangent at `t = −∞`.
    fn settle(&mut self) {
        loop {
            if let Some(n) = self.arena.next(self.v) {
                if self.arena.orientation(self.u, self.v, n) < 0.0 {
                    self.v = n;
                    continue;
                }
            }
            if let Some(p) = self.arena.prev(self.u) {
                if self.arena.orientation(p, self.u, self.v) < 0.0 {
                    self.u = p;
                    continue;
                }
            }
            break;
        }
    }

    /// Earliest applicable move strictly after `now` (`None` = before any event).
    fn next_move(
        &self,
        left: Option<usize>,
        right: Option<usize>,
        now: Option<f64>,
    ) -> Option<(f64, Move)> {
        let a = &*self.arena;
        let (u, v) = (self.u, self.v);
        let candidates = [
            left.and_then(|p| Some((a.own_flip_time(p)?, Move::ReplayLeft(p)))),
            right.and_then(|p| Some((a.own_flip_time(p)?, Move::ReplayRight(p)))),
            a.next(v)
                .and_then(|n| Some((a.flip_time(u, v, n)?, Move::AdvanceV(n)))),
            a.prev(v)
                .and_then(|p| Some((a.flip_time(u, p, v)?, Move::RetreatV(p)))),
            a.prev(u)
                .and_then(|p| Some((a.flip_time(p, u, v)?, Move::RetreatU(p)))),
            a.next(u)
                .and_then(|n| Some((a.flip_time(u, n, v)?, Move::AdvanceU(n)))),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&(t, _)| now.map_or(true, |now| t > now))
            .fold(None, |best, cand| match best {
                Some(b) if b.0 <= cand.0 => Some(b),
                _ => Some(cand),
            })
    }

    /// Run the clock forward, applying moves and recording silhouette changes.
    fn sweep(&mut self, left: &[usize], right: &[usize]) -> Vec<usize> {
        let mut events = Vec::with_capacity(left.len() + right.len());
        let (mut li, mut ri) = (0usize, 0usize);
        let mut now: Option<f64> = None;
        while let Some((t, mv)) =
            self.next_move(left.get(li).copied(), right.get(ri).copied(), now)
        {
            match mv {
                Move::ReplayLeft(p) => {
                    // Only changes left of the bridge are visible in the merged hull.
                    if self.arena.x(p) < self.arena.x(self.u) {
                        events.push(p);
                    }
                    self.arena.toggle(p);
                    li += 1;
                }
                Move::ReplayRight(p) => {
                    if self.arena.x(p) > self.arena.x(self.v) {
                        events.push(p);
                    }
                    self.arena.toggle(p);
                    ri += 1;
                }
                Move::AdvanceV(n) => {
                    events.push(self.v);
                    self.v = n;
                }
                Move::RetreatV(p) => {
                    self.v = p;
                    events.push(p);
                }
                Move::RetreatU(p) => {
                    events.push(self.u);
                    self.u = p;
                }
                Move::AdvanceU(n) => {
                    self.u = n;
                    events.push(n);
                }
            }
            now = Some(t);
        }
        events
    }

    /// Close the bridge at `t = +∞`, then undo `events` newest-first so the
    /// links describe the merged silhouette at `t = −∞`.
    fn rewind(&mut self, mid: usize, events: &[usize]) {
        self.arena.link(self.u, self.v);
        let split = self.arena.x(mid - 1);
        for &c in events.iter().rev() {
            let x = self.arena.x(c);
            if self.arena.x(self.u) < x && x < self.arena.x(self.v) {
                self.arena.link(self.u, c);
                self.arena.link(c, self.v);
                if x <= split {
                    self.u = c;
                } else {
                    self.v = c;
                }
            } else {
                self.arena.toggle(c);
                if c == self.u {
                    self.u = self.arena.prev(c).unwrap_or(c);
                }
                if c == self.v {
                    self.v = self.arena.next(c).unwrap_or(c);
                }
            }
        }
    }
}
