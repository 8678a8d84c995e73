//! Borůvka's algorithm, mirroring `mstBoruvka`: each phase, every component
//! proposes its cheapest crossing edge; accepted proposals merge components;
//! repeat until one component remains.

use crate::cohort::Cohort;
use crate::constants::{VertexId, WeightSum};
use crate::distributed;
use crate::edge::Edge;
use crate::error::CoreError;
use crate::graph::WeightedGraph;
use crate::union_find::DisjointSetForest;

pub fn run(graph: &WeightedGraph, cohort: &dyn Cohort) -> Result<(Vec<Edge>, WeightSum), CoreError> {
    let mut forest = DisjointSetForest::new(graph.vertices);
    let mut mst_edges = Vec::new();
    let mut mst_weight: WeightSum = 0;
    let mut components = graph.vertices;

    while components > 1 {
        let chunks = distributed::scatter(&graph.edges, cohort)?;
        let tables: Vec<Vec<Option<Edge>>> = chunks
            .iter()
            .map(|chunk| local_best_edges(graph.vertices, &mut forest, chunk))
            .collect();
        let reduced = distributed::tree_reduce_best_edges(tables);

        let candidates: Vec<(VertexId, Edge)> = (0..graph.vertices)
            .filter(|&v| forest.find(v) == v)
            .filter_map(|v| reduced[v].map(|edge| (v, edge)))
            .collect();

        let mut progressed = false;
        for (_, edge) in candidates {
            if forest.union(edge.from, edge.to) {
                mst_edges.push(edge);
                mst_weight += edge.weight as WeightSum;
                components -= 1;
                progressed = true;
            }
        }

        if !progressed {
            break;
        }
    }

    Ok((mst_edges, mst_weight))
}

/// For each edge crossing two components (as seen by the current, not yet
/// mutated-this-phase, forest), records it as a candidate for both
/// components' roots if it improves on what that root has seen so far.
fn local_best_edges(
    vertices: usize,
    forest: &mut DisjointSetForest,
    edges: &[Edge],
) -> Vec<Option<Edge>> {
    let mut table = vec![None; vertices];
    for &edge in edges {
        let root_from = forest.find(edge.from);
        let root_to = forest.find(edge.to);
        if root_from == root_to {
            continue;
        }
        propose(&mut table[root_from], edge);
        propose(&mut table[root_to], edge);
    }
    table
}

fn propose(slot: &mut Option<Edge>, edge: Edge) {
    if slot.map_or(true, |current| edge.weight < current.weight) {
        *slot = Some(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::{LocalCohort, SimCohort};

    #[test]
    fn picks_the_two_lightest_edges_of_a_triangle() {
        let graph = WeightedGraph::new(
            3,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)],
        );
        let (mst, weight) = run(&graph, &LocalCohort::new()).unwrap();
        assert_eq!(mst.len(), 2);
        assert_eq!(weight, 3);
    }

    #[test]
    fn single_vertex_graph_has_no_edges() {
        let graph = WeightedGraph::new(1, vec![]);
        let (mst, weight) = run(&graph, &LocalCohort::new()).unwrap();
        assert!(mst.is_empty());
        assert_eq!(weight, 0);
    }

    #[test]
    fn result_is_independent_of_cohort_size() {
        let graph = WeightedGraph::new(
            4,
            vec![
                Edge::new(0, 1, 4),
                Edge::new(1, 2, 2),
                Edge::new(2, 3, 1),
                Edge::new(0, 3, 9),
                Edge::new(1, 3, 3),
            ],
        );
        let (_, weight_1) = run(&graph, &LocalCohort::new()).unwrap();
        let (_, weight_2) = run(&graph, &SimCohort::new(0, 2)).unwrap();
        assert_eq!(weight_1, weight_2);
    }
}
