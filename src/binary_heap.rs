//! `IndexedBinaryHeap`: a binary min-heap over `(VertexId, Weight)` pairs
//! supporting `decrease`, used by Prim with a binary heap (spec.md §4.3).

use crate::constants::{VertexId, Weight, INFINITE_WEIGHT, UNSET_INDEX, UNSET_VIA};
use std::fmt;

#[derive(Copy, Clone, Debug)]
struct Entry {
    vertex: VertexId,
    key: Weight,
    via: VertexId,
}

/// Array-backed binary min-heap, ordered by `key`. `positions[v]` holds the
/// current slot of vertex `v` inside `heap`, or [`UNSET_INDEX`] once `v` has
/// been popped; this is what makes `decrease` an O(log n) operation instead
/// of a linear scan, mirroring the original's `BinaryMinHeap`.
pub struct IndexedBinaryHeap {
    heap: Vec<Entry>,
    positions: Vec<usize>,
}

impl IndexedBinaryHeap {
    /// Builds a heap over `num_vertices` vertices, all initially at
    /// [`INFINITE_WEIGHT`] with no predecessor, except `source` which starts
    /// at key `0`.
    pub fn new(num_vertices: usize, source: VertexId) -> IndexedBinaryHeap {
        let mut heap = IndexedBinaryHeap {
            heap: Vec::with_capacity(num_vertices),
            positions: vec![UNSET_INDEX; num_vertices],
        };
        for v in 0..num_vertices {
            let key = if v == source { 0 } else { INFINITE_WEIGHT };
            let idx = heap.heap.len();
            heap.positions[v] = idx;
            heap.heap.push(Entry {
                vertex: v,
                key,
                via: UNSET_VIA,
            });
            heap.sift_up(idx);
        }
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes and returns the `(vertex, key, via)` triple with smallest key.
    pub fn pop(&mut self) -> Option<(VertexId, Weight, VertexId)> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap[0];
        let last = self.heap.pop().unwrap();
        self.positions[top.vertex] = UNSET_INDEX;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.positions[last.vertex] = 0;
            self.sift_down(0);
        }
        Some((top.vertex, top.key, top.via))
    }

    /// `true` while `vertex` is still present in the heap (has not been
    /// popped yet).
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions[vertex] != UNSET_INDEX
    }

    /// Lowers `vertex`'s key to `new_key` (reached via `via`), if `new_key`
    /// is strictly smaller than its current key. No-op otherwise, including
    /// when `vertex` has already been popped.
    pub fn decrease(&mut self, vertex: VertexId, new_key: Weight, via: VertexId) {
        let pos = self.positions[vertex];
        if pos == UNSET_INDEX || new_key >= self.heap[pos].key {
            return;
        }
        self.heap[pos].key = new_key;
        self.heap[pos].via = via;
        self.sift_up(pos);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].key <= self.heap[i].key {
                break;
            }
            self.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.heap.len() && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.positions[self.heap[a].vertex] = b;
        self.positions[self.heap[b].vertex] = a;
        self.heap.swap(a, b);
    }
}

/// Mirrors the original's `printBinaryHeap`: `[position]vertex: via(key)`
/// per entry, with a line break after each complete heap level.
impl fmt::Display for IndexedBinaryHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.heap.iter().enumerate() {
            write!(
                f,
                "[{}]{}: {}({}) ",
                self.positions[entry.vertex], entry.vertex, entry.via, entry.key
            )?;
            if (i + 2).is_power_of_two() {
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_pops_first_with_key_zero() {
        let mut heap = IndexedBinaryHeap::new(4, 2);
        let (vertex, key, _) = heap.pop().unwrap();
        assert_eq!(vertex, 2);
        assert_eq!(key, 0);
    }

    #[test]
    fn decrease_reorders_the_heap() {
        let mut heap = IndexedBinaryHeap::new(3, 0);
        heap.pop();
        heap.decrease(2, 5, 0);
        heap.decrease(1, 9, 0);
        let (vertex, key, via) = heap.pop().unwrap();
        assert_eq!(vertex, 2);
        assert_eq!(key, 5);
        assert_eq!(via, 0);
    }

    #[test]
    fn decrease_ignores_non_improving_keys() {
        let mut heap = IndexedBinaryHeap::new(2, 0);
        heap.pop();
        heap.decrease(1, 5, 0);
        heap.decrease(1, 8, 0);
        let (_, key, _) = heap.pop().unwrap();
        assert_eq!(key, 5);
    }

    #[test]
    fn decrease_after_pop_is_a_no_op() {
        let mut heap = IndexedBinaryHeap::new(2, 0);
        let (popped, ..) = heap.pop().unwrap();
        heap.decrease(popped, 0, 1);
        assert!(!heap.contains(popped));
    }

    #[test]
    fn pops_in_nondecreasing_key_order() {
        let mut heap = IndexedBinaryHeap::new(5, 0);
        heap.pop();
        heap.decrease(1, 4, 0);
        heap.decrease(2, 2, 0);
        heap.decrease(3, 7, 0);
        heap.decrease(4, 1, 0);

        let mut last = 0;
        while let Some((_, key, _)) = heap.pop() {
            assert!(key >= last);
            last = key;
        }
    }

    #[test]
    fn display_shows_position_vertex_via_and_key() {
        let heap = IndexedBinaryHeap::new(2, 0);
        let rendered = format!("{heap}");
        assert!(rendered.contains("[0]0:"));
    }
}
