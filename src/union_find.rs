//! `DisjointSetForest`: union-by-rank disjoint-set forest with path
//! compression, as used by Kruskal and Borůvka to track which vertices are
//! already connected by the edges picked so far.

use crate::constants::VertexId;
use std::fmt;

/// Mirrors the original's `Set`/`findSet`/`unionSet`: a `parent` array where
/// `parent[v] == v` marks a root, plus a `rank` array used only to decide
/// which root survives a union.
pub struct DisjointSetForest {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
}

impl DisjointSetForest {
    /// Every vertex starts as its own singleton set.
    pub fn new(num_vertices: usize) -> DisjointSetForest {
        DisjointSetForest {
            parent: (0..num_vertices).collect(),
            rank: vec![0; num_vertices],
        }
    }

    /// Returns the representative of `v`'s set, compressing the path
    /// traversed to get there.
    pub fn find(&mut self, v: VertexId) -> VertexId {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut curr = v;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    /// Unions the sets containing `a` and `b`. Returns `true` if they were
    /// in different sets (and are now merged), `false` if they already
    /// shared a set.
    ///
    /// Tie-break, taken verbatim from the original's `unionSet`: whichever
    /// root has the *strictly* greater rank becomes the new root; on equal
    /// rank, `b`'s root wins and its rank increments by one.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else {
            self.parent[root_a] = root_b;
            self.rank[root_b] += 1;
        }
        true
    }
}

/// Mirrors the original's `printSet`: one `i: canonical(rank)` line per
/// vertex.
impl fmt::Display for DisjointSetForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.parent.len() {
            writeln!(f, "{v}: {}({})", self.parent[v], self.rank[v])?;
        }
        Ok(())
    }
}
