//! Shared fixtures for the integration test suites: the literal scenarios
//! from spec.md §8 and a connected-random-graph generator for the
//! property-based suites.

use mst_cohort::edge::Edge;
use mst_cohort::graph::WeightedGraph;
use rand::Rng;

/// V=3, E=3: `(0,1,1), (1,2,2), (0,2,3)`. MST weight 3.
pub fn triangle() -> WeightedGraph {
    WeightedGraph::new(3, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)])
}

/// V=4, E=4, a 2x2 grid. MST weight 6.
pub fn grid_2x2() -> WeightedGraph {
    WeightedGraph::new(
        4,
        vec![
            Edge::new(0, 1, 1),
            Edge::new(2, 3, 2),
            Edge::new(0, 2, 3),
            Edge::new(1, 3, 4),
        ],
    )
}

/// V=6, E=7, a 2x3 grid (rows=2, cols=3) with the weights spec.md §8 names.
/// MST weight 13.
pub fn grid_2x3() -> WeightedGraph {
    WeightedGraph::new(
        6,
        vec![
            Edge::new(0, 1, 5),
            Edge::new(1, 2, 1),
            Edge::new(0, 3, 4),
            Edge::new(1, 4, 2),
            Edge::new(2, 5, 3),
            Edge::new(3, 4, 6),
            Edge::new(4, 5, 2),
        ],
    )
}

/// V=2, E=1: a single edge. MST weight 42.
pub fn single_edge() -> WeightedGraph {
    WeightedGraph::new(2, vec![Edge::new(0, 1, 42)])
}

/// V=4, E=5, every edge weight 1. MST weight 3 (any 3 of the 5 edges).
pub fn equal_weight_chain() -> WeightedGraph {
    WeightedGraph::new(
        4,
        vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 3, 1),
            Edge::new(0, 2, 1),
            Edge::new(1, 3, 1),
        ],
    )
}

/// All five literal scenarios from spec.md §8, paired with their expected
/// MST weight.
pub fn literal_scenarios() -> Vec<(&'static str, WeightedGraph, u64)> {
    vec![
        ("triangle", triangle(), 3),
        ("grid_2x2", grid_2x2(), 6),
        ("grid_2x3", grid_2x3(), 13),
        ("single_edge", single_edge(), 42),
        ("equal_weight_chain", equal_weight_chain(), 3),
    ]
}

/// Builds a connected random graph over `vertices` vertices: a random
/// spanning path (vertex `i` joined to a uniformly chosen earlier vertex)
/// guarantees connectivity, then `extra_edges` additional random edges are
/// layered on top. Every weight is drawn from `weight_range`.
pub fn connected_random_graph(
    vertices: usize,
    extra_edges: usize,
    weight_range: std::ops::Range<u32>,
    rng: &mut impl Rng,
) -> WeightedGraph {
    let mut edges = Vec::with_capacity(vertices.saturating_sub(1) + extra_edges);
    for v in 1..vertices {
        let parent = rng.random_range(0..v);
        edges.push(Edge::new(parent, v, rng.random_range(weight_range.clone())));
    }
    for _ in 0..extra_edges {
        if vertices < 2 {
            break;
        }
        let from = rng.random_range(0..vertices);
        let mut to = rng.random_range(0..vertices);
        while to == from {
            to = rng.random_range(0..vertices);
        }
        edges.push(Edge::new(from, to, rng.random_range(weight_range.clone())));
    }
    WeightedGraph::new(vertices, edges)
}
