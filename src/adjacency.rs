//! `AdjacencyList`: per-vertex neighbour lists built from a [`WeightedGraph`],
//! used by the Prim variants to walk a vertex's incident edges.

use crate::constants::VertexId;
use crate::edge::Edge;
use crate::graph::WeightedGraph;
use std::fmt;

const INITIAL_CAPACITY: usize = 4;

/// `stars[v]` holds every edge incident to `v`, in both directions (an edge
/// `(u, v, w)` appears in both `stars[u]` and `stars[v]`), mirroring the
/// original's `AdjacencyList`/`pushAdjacencyList` pair. Each per-vertex `Vec`
/// starts at capacity 4; `Vec::push`'s own growth (doubling) stands in for
/// the original's manual `capacity *= 2` reallocation.
pub struct AdjacencyList {
    stars: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    pub fn from_graph(graph: &WeightedGraph) -> AdjacencyList {
        let mut stars = vec![Vec::with_capacity(INITIAL_CAPACITY); graph.vertices];
        for edge in &graph.edges {
            stars[edge.from].push(Edge::new(edge.from, edge.to, edge.weight));
            stars[edge.to].push(Edge::new(edge.to, edge.from, edge.weight));
        }
        AdjacencyList { stars }
    }

    pub fn neighbours(&self, vertex: VertexId) -> &[Edge] {
        &self.stars[vertex]
    }

    pub fn num_vertices(&self) -> usize {
        self.stars.len()
    }
}

/// Mirrors the original's `printAdjacencyList`: `v: to(weight) to(weight)
/// ...` one line per vertex.
impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, star) in self.stars.iter().enumerate() {
            write!(f, "{v}:")?;
            for edge in star {
                write!(f, " {}({})", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
