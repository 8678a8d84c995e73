//! Grid-graph generator and ASCII renderer, grounded on the original's
//! `createMazeFile`/`printMaze`: a `rows` x `columns` grid of vertices
//! connected to their right and lower neighbours with random weights, and a
//! renderer that draws it (or its MST) as a character maze.

use crate::edge::Edge;
use crate::graph::WeightedGraph;
use rand::Rng;

const MAXIMUM_RANDOM: u32 = 100;
const EMPTY_FIELD: char = ' ';
const HORIZONTAL_EDGE: char = '-';
const VERTICAL_EDGE: char = '|';
const VERTEX: char = '+';

/// Builds a `rows * columns`-vertex grid graph: vertex `i * columns + j` is
/// joined to its right neighbour (unless in the last column) and its lower
/// neighbour (unless in the last row), each with a uniformly random weight
/// in `[0, MAXIMUM_RANDOM)`.
pub fn generate_grid(rows: usize, columns: usize, rng: &mut impl Rng) -> WeightedGraph {
    let vertices = rows * columns;
    let mut edges = Vec::with_capacity(vertices * 2 - rows - columns);

    for i in 0..rows {
        for j in 0..columns {
            let vertex = i * columns + j;
            if j != columns - 1 {
                let weight = rng.random_range(0..MAXIMUM_RANDOM);
                edges.push(Edge::new(vertex, vertex + 1, weight));
            }
            if i != rows - 1 {
                let weight = rng.random_range(0..MAXIMUM_RANDOM);
                edges.push(Edge::new(vertex, vertex + columns, weight));
            }
        }
    }

    WeightedGraph::new(vertices, edges)
}

/// Renders `graph` (expected to be a grid graph, or its MST, over a
/// `rows` x `columns` layout) as a `(2*rows - 1)` x `(2*columns - 1)`
/// character grid: `+` at vertex positions, `-`/`|` wherever an edge
/// connects two grid-adjacent vertices, ` ` elsewhere.
pub fn render_maze(graph: &WeightedGraph, rows: usize, columns: usize) -> String {
    let maze_rows = rows * 2 - 1;
    let maze_columns = columns * 2 - 1;
    let mut maze = vec![vec![EMPTY_FIELD; maze_columns]; maze_rows];

    for (i, row) in maze.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            if i % 2 == 0 && j % 2 == 0 {
                *cell = VERTEX;
            }
        }
    }

    for edge in &graph.edges {
        let (from, to) = if edge.from < edge.to {
            (edge.from, edge.to)
        } else {
            (edge.to, edge.from)
        };
        let row = from / columns + to / columns;
        if row % 2 == 1 {
            maze[row][(to % columns) * 2] = VERTICAL_EDGE;
        } else {
            maze[row][(to % columns - 1) * 2 + 1] = HORIZONTAL_EDGE;
        }
    }

    let mut out = String::with_capacity(maze_rows * (maze_columns + 1));
    for row in maze {
        let line: String = row.into_iter().collect();
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_the_expected_vertex_and_edge_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_grid(2, 3, &mut rng);
        assert_eq!(graph.vertices, 6);
        assert_eq!(graph.num_edges(), 2 * 6 - 2 - 3);
    }

    #[test]
    fn renders_a_single_row_as_a_dash_chain() {
        let graph = WeightedGraph::new(3, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)]);
        let rendered = render_maze(&graph, 1, 3);
        assert_eq!(rendered, "+-+-+\n");
    }

    #[test]
    fn renders_a_vertical_edge_between_two_rows() {
        let graph = WeightedGraph::new(2, vec![Edge::new(0, 1, 1)]);
        let rendered = render_maze(&graph, 2, 1);
        assert_eq!(rendered, "+\n|\n+\n");
    }
}
