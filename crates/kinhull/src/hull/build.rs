use std::ops::Range;

use super::arena::Arena;
use super::merge::merge;

/// Lower-hull sweep of the x-sorted arena slice `range`.
///
/// Returns the slice's event list and leaves its points linked as the
/// silhouette at `t = −∞`. A single point yields no events and stays unlinked.
/// An empty range is invalid input.
pub fn build(arena: &mut Arena, range: Range<usize>) -> Vec<usize> {
    debug_assert!(!range.is_empty(), "build on an empty range");
    if range.len() <= 1 {
        return Vec::new();
    }
    let mid = range.start + range.len() / 2;
    let left = build(arena, range.start..mid);
    let right = build(arena, mid..range.end);
    merge(arena, mid, &left, &right)
}
