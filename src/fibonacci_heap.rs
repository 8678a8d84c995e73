//! `IndexedFibonacciHeap`: an arena-allocated Fibonacci heap over
//! `(VertexId, Weight)` pairs supporting amortized O(1) `decrease`, used by
//! Prim with a Fibonacci heap (spec.md §4.4).
//!
//! Nodes live in a `Vec<Option<Node>>` arena addressed by index rather than
//! by pointer; freed slots are recycled through `free`. Root and child lists
//! are circular doubly-linked lists threaded through `left`/`right`, exactly
//! as the original's node struct does with real pointers.

use crate::constants::{VertexId, Weight, INFINITE_WEIGHT, UNSET_INDEX, UNSET_VIA};
use std::fmt;

struct Node {
    vertex: VertexId,
    key: Weight,
    via: VertexId,
    parent: usize,
    child: usize,
    left: usize,
    right: usize,
    degree: usize,
    mark: bool,
}

pub struct IndexedFibonacciHeap {
    arena: Vec<Option<Node>>,
    free: Vec<usize>,
    positions: Vec<usize>,
    min: usize,
    len: usize,
}

impl IndexedFibonacciHeap {
    /// Builds a heap over `num_vertices` vertices, all initially at
    /// [`INFINITE_WEIGHT`] with no predecessor, except `source` which starts
    /// at key `0`.
    pub fn new(num_vertices: usize, source: VertexId) -> IndexedFibonacciHeap {
        let mut heap = IndexedFibonacciHeap {
            arena: Vec::with_capacity(num_vertices),
            free: Vec::new(),
            positions: vec![UNSET_INDEX; num_vertices],
            min: UNSET_INDEX,
            len: 0,
        };
        for v in 0..num_vertices {
            let key = if v == source { 0 } else { INFINITE_WEIGHT };
            heap.insert(v, key, UNSET_VIA);
        }
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions[vertex] != UNSET_INDEX
    }

    fn node(&self, idx: usize) -> &Node {
        self.arena[idx].as_ref().expect("dangling arena index")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.arena[idx].as_mut().expect("dangling arena index")
    }

    fn alloc(&mut self, node: Node) -> usize {
        if let Some(idx) = self.free.pop() {
            self.arena[idx] = Some(node);
            idx
        } else {
            self.arena.push(Some(node));
            self.arena.len() - 1
        }
    }

    fn insert(&mut self, vertex: VertexId, key: Weight, via: VertexId) {
        let idx = self.alloc(Node {
            vertex,
            key,
            via,
            parent: UNSET_INDEX,
            child: UNSET_INDEX,
            left: UNSET_INDEX,
            right: UNSET_INDEX,
            degree: 0,
            mark: false,
        });
        self.node_mut(idx).left = idx;
        self.node_mut(idx).right = idx;
        self.positions[vertex] = idx;
        self.push_root(idx);
        self.len += 1;
    }

    /// Splices the singleton `idx` into the root list and updates `min` if
    /// `idx`'s key undercuts it.
    fn push_root(&mut self, idx: usize) {
        if self.min == UNSET_INDEX {
            self.min = idx;
            return;
        }
        self.splice_into(self.min, idx);
        if self.node(idx).key < self.node(self.min).key {
            self.min = idx;
        }
    }

    /// Inserts singleton `idx` (its own circular list of one) next to
    /// `anchor` in `anchor`'s circular list.
    fn splice_into(&mut self, anchor: usize, idx: usize) {
        let anchor_right = self.node(anchor).right;
        self.node_mut(anchor).right = idx;
        self.node_mut(idx).left = anchor;
        self.node_mut(idx).right = anchor_right;
        self.node_mut(anchor_right).left = idx;
    }

    /// Removes `idx` from whichever circular list currently holds it,
    /// leaving `idx` as a self-linked singleton.
    fn remove_from_list(&mut self, idx: usize) {
        let left = self.node(idx).left;
        let right = self.node(idx).right;
        if left != idx {
            self.node_mut(left).right = right;
            self.node_mut(right).left = left;
        }
        self.node_mut(idx).left = idx;
        self.node_mut(idx).right = idx;
    }

    /// Removes and returns the `(vertex, key, via)` triple with smallest key.
    pub fn pop(&mut self) -> Option<(VertexId, Weight, VertexId)> {
        if self.min == UNSET_INDEX {
            return None;
        }
        let min_idx = self.min;

        let child = self.node(min_idx).child;
        if child != UNSET_INDEX {
            let mut children = Vec::new();
            let mut c = child;
            loop {
                children.push(c);
                c = self.node(c).right;
                if c == child {
                    break;
                }
            }
            for c in children {
                self.remove_from_list(c);
                self.node_mut(c).parent = UNSET_INDEX;
                self.node_mut(c).mark = false;
                self.push_root(c);
            }
        }

        let right = self.node(min_idx).right;
        self.remove_from_list(min_idx);

        let vertex = self.node(min_idx).vertex;
        let key = self.node(min_idx).key;
        let via = self.node(min_idx).via;

        if right == min_idx {
            self.min = UNSET_INDEX;
        } else {
            self.min = right;
            self.consolidate();
        }

        self.arena[min_idx] = None;
        self.free.push(min_idx);
        self.positions[vertex] = UNSET_INDEX;
        self.len -= 1;

        Some((vertex, key, via))
    }

    /// Lowers `vertex`'s key to `new_key` (reached via `via`), cutting it
    /// from its parent (and cascading upward) if doing so breaks the heap
    /// order. No-op if `new_key` does not improve on the current key, or if
    /// `vertex` has already been popped.
    pub fn decrease(&mut self, vertex: VertexId, new_key: Weight, via: VertexId) {
        let idx = self.positions[vertex];
        if idx == UNSET_INDEX || new_key >= self.node(idx).key {
            return;
        }
        self.node_mut(idx).key = new_key;
        self.node_mut(idx).via = via;

        let parent = self.node(idx).parent;
        if parent != UNSET_INDEX && new_key < self.node(parent).key {
            self.cut(idx, parent);
            self.cascading_cut(parent);
        }

        if self.min != UNSET_INDEX && new_key < self.node(self.min).key {
            self.min = idx;
        }
    }

    /// Detaches `idx` from its parent `parent` and reinserts it as a root.
    fn cut(&mut self, idx: usize, parent: usize) {
        if self.node(parent).child == idx {
            let right = self.node(idx).right;
            self.node_mut(parent).child = if right == idx { UNSET_INDEX } else { right };
        }
        self.remove_from_list(idx);
        self.node_mut(parent).degree -= 1;
        self.node_mut(idx).parent = UNSET_INDEX;
        self.node_mut(idx).mark = false;
        self.push_root(idx);
    }

    /// Walks up from `idx`: marks an unmarked node, or cuts and keeps
    /// walking through a marked one, as the Fibonacci heap's amortized
    /// analysis requires.
    fn cascading_cut(&mut self, idx: usize) {
        let parent = self.node(idx).parent;
        if parent == UNSET_INDEX {
            return;
        }
        if !self.node(idx).mark {
            self.node_mut(idx).mark = true;
        } else {
            self.cut(idx, parent);
            self.cascading_cut(parent);
        }
    }

    /// Merges roots of equal degree pairwise until every root has a unique
    /// degree, then rebuilds `min` from what remains.
    fn consolidate(&mut self) {
        if self.min == UNSET_INDEX {
            return;
        }

        let mut roots = Vec::new();
        let start = self.min;
        let mut c = start;
        loop {
            roots.push(c);
            c = self.node(c).right;
            if c == start {
                break;
            }
        }

        let initial_degree_bound = (self.len.max(1) as f64).log2().ceil() as usize + 2;
        let mut degree_table: Vec<usize> = vec![UNSET_INDEX; initial_degree_bound];

        for root in roots {
            if self.node(root).parent != UNSET_INDEX {
                continue;
            }
            let mut x = root;
            let mut d = self.node(x).degree;
            while d < degree_table.len() && degree_table[d] != UNSET_INDEX {
                let mut y = degree_table[d];
                if self.node(x).key > self.node(y).key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree_table[d] = UNSET_INDEX;
                d += 1;
                if d >= degree_table.len() {
                    degree_table.push(UNSET_INDEX);
                }
            }
            if d >= degree_table.len() {
                degree_table.push(UNSET_INDEX);
            }
            degree_table[d] = x;
        }

        self.min = UNSET_INDEX;
        for slot in degree_table {
            if slot != UNSET_INDEX {
                self.node_mut(slot).left = slot;
                self.node_mut(slot).right = slot;
                self.push_root(slot);
            }
        }
    }

    /// Makes `child` a child of `parent`; both must currently be roots.
    fn link(&mut self, child: usize, parent: usize) {
        self.remove_from_list(child);
        self.node_mut(child).parent = parent;
        self.node_mut(child).mark = false;

        let parent_child = self.node(parent).child;
        if parent_child == UNSET_INDEX {
            self.node_mut(parent).child = child;
            self.node_mut(child).left = child;
            self.node_mut(child).right = child;
        } else {
            self.splice_into(parent_child, child);
        }
        self.node_mut(parent).degree += 1;
    }

    /// Writes the circular list starting at `start`, then recurses into any
    /// children, mirroring the original's `printFibonacciHeap`.
    fn fmt_list(&self, f: &mut fmt::Formatter<'_>, start: usize) -> fmt::Result {
        write!(f, "[{}]:", self.node(start).vertex)?;
        let mut current = start;
        loop {
            let node = self.node(current);
            write!(f, " ({},{}){}|{}|{}", node.mark as u8, node.degree, node.vertex, node.via, node.key)?;
            current = node.right;
            if current == start {
                break;
            }
        }
        writeln!(f)?;

        current = start;
        loop {
            let child = self.node(current).child;
            if child != UNSET_INDEX {
                write!(f, "{{{}}}", self.node(current).vertex)?;
                self.fmt_list(f, child)?;
            }
            current = self.node(current).right;
            if current == start {
                break;
            }
        }
        Ok(())
    }
}

/// Mirrors the original's `printFibonacciHeap`: the root list first, then
/// each root's child list recursively.
impl fmt::Display for IndexedFibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == UNSET_INDEX {
            return writeln!(f, "heap is empty!");
        }
        self.fmt_list(f, self.min)
    }
}
