//! Prim's algorithm over an [`IndexedBinaryHeap`], mirroring `mstPrimBinary`.

use crate::adjacency::AdjacencyList;
use crate::binary_heap::IndexedBinaryHeap;
use crate::constants::{VertexId, WeightSum, UNSET_VIA};
use crate::edge::Edge;
use crate::graph::WeightedGraph;

/// Grows the spanning tree outward from vertex `0`, same as the original.
pub fn run(graph: &WeightedGraph) -> (Vec<Edge>, WeightSum) {
    let adjacency = AdjacencyList::from_graph(graph);
    let source: VertexId = 0;
    let mut heap = IndexedBinaryHeap::new(graph.vertices, source);

    let mut mst_edges = Vec::new();
    let mut mst_weight: WeightSum = 0;

    while let Some((vertex, key, via)) = heap.pop() {
        if via != UNSET_VIA {
            mst_edges.push(Edge::new(via, vertex, key));
            mst_weight += key as WeightSum;
        }
        for edge in adjacency.neighbours(vertex) {
            if heap.contains(edge.to) {
                heap.decrease(edge.to, edge.weight, vertex);
            }
        }
    }

    (mst_edges, mst_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_two_lightest_edges_of_a_triangle() {
        let graph = WeightedGraph::new(
            3,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)],
        );
        let (mst, weight) = run(&graph);
        assert_eq!(mst.len(), 2);
        assert_eq!(weight, 3);
    }

    #[test]
    fn single_edge_graph_is_its_own_mst() {
        let graph = WeightedGraph::new(2, vec![Edge::new(0, 1, 4)]);
        let (mst, weight) = run(&graph);
        assert_eq!(mst.len(), 1);
        assert_eq!(weight, 4);
    }

    #[test]
    fn grid_two_by_three() {
        let graph = WeightedGraph::new(
            6,
            vec![
                Edge::new(0, 1, 2),
                Edge::new(1, 2, 2),
                Edge::new(3, 4, 2),
                Edge::new(4, 5, 2),
                Edge::new(0, 3, 1),
                Edge::new(1, 4, 1),
                Edge::new(2, 5, 1),
            ],
        );
        let (mst, weight) = run(&graph);
        assert_eq!(mst.len(), 5);
        assert_eq!(weight, 7);
    }
}
