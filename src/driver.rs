//! Top-level orchestration, grounded on the original's `main`: same stdout
//! protocol (`Starting` / optional `Graph:` / `Time elapsed: X s` / optional
//! `MST:` / `MST weight: X` / optional `Maze:` / `Finished`), same algorithm
//! selector, rebuilt around `Result` instead of `exit()`-on-error.

use crate::boruvka;
use crate::cli::Cli;
use crate::cohort::{Cohort, LocalCohort};
use crate::constants::WeightSum;
use crate::edge::Edge;
use crate::error::CoreError;
use crate::graph::WeightedGraph;
use crate::kruskal;
use crate::maze;
use crate::prim_binary;
use crate::prim_fibonacci;
use log::info;

pub fn run(cli: &Cli) -> Result<(), CoreError> {
    println!("Starting");
    info!("parsed CLI arguments: {cli:?}");

    if cli.new_maze {
        let mut rng = rand::rng();
        let grid = maze::generate_grid(cli.rows, cli.columns, &mut rng);
        grid.write_to(&cli.graph_file)?;
        info!("wrote a new {}x{} grid to {:?}", cli.rows, cli.columns, cli.graph_file);
    }

    let graph = WeightedGraph::read_from(&cli.graph_file)?;

    if cli.verbose {
        println!("Graph:");
        print!("{}", graph.dump_edges());
    }

    let cohort = LocalCohort::new();
    let (mst_edges, mst_weight) = run_algorithm(cli.algorithm, &graph, &cohort)?;
    println!("Time elapsed: {:.6} s", cohort.wall_time());

    if cli.verbose {
        println!("MST:");
        let mst_graph = WeightedGraph::new(graph.vertices, mst_edges.clone());
        print!("{}", mst_graph.dump_edges());
    }

    println!("MST weight: {mst_weight}");

    if cli.print_maze {
        println!("Maze:");
        let mst_graph = WeightedGraph::new(graph.vertices, mst_edges);
        print!("{}", maze::render_maze(&mst_graph, cli.rows, cli.columns));
    }

    println!("Finished");
    Ok(())
}

/// Algorithm selector: `0` Kruskal, `1` Prim (Fibonacci), `2` Prim (Binary),
/// `3` Borůvka — identical numbering to the original's `switch (handle.algorithm)`.
/// Kruskal and Borůvka run their distributed phases against `cohort`; the
/// production binary always runs as the single-rank `LocalCohort` passed in
/// from `run`, since spec.md names no cohort-size flag on the CLI surface.
fn run_algorithm(
    algorithm: i64,
    graph: &WeightedGraph,
    cohort: &dyn Cohort,
) -> Result<(Vec<Edge>, WeightSum), CoreError> {
    match algorithm {
        0 => kruskal::run(graph, cohort),
        1 => Ok(prim_fibonacci::run(graph)),
        2 => Ok(prim_binary::run(graph)),
        3 => boruvka::run(graph, cohort),
        selector => Err(CoreError::UnknownAlgorithm { selector }),
    }
}
