//! `WeightedGraph`: the on-disk "from to weight" edge-list format (spec.md §6)
//! and its in-memory representation (spec.md §3).

use crate::constants::{VertexId, Weight};
use crate::edge::Edge;
use crate::error::CoreError;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::Path;

/// `(V, E, edges)` from spec.md §3. Invariant: `edges.len() == E` and every
/// `from`/`to` lies in `[0, V)`; the kernel treats the graph as simple and
/// connected (spec.md §9) and does not itself verify either property.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    pub vertices: usize,
    pub edges: Vec<Edge>,
}

impl WeightedGraph {
    pub fn new(vertices: usize, edges: Vec<Edge>) -> WeightedGraph {
        WeightedGraph { vertices, edges }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Reads the text format from spec.md §6: a `"<V> <E>"` header line
    /// followed by `E` `"<from> <to> <weight>"` lines. Mirrors the original's
    /// `readGraphFile`, but reports malformed/truncated input instead of
    /// exiting the process directly.
    pub fn read_from(path: &Path) -> Result<WeightedGraph, CoreError> {
        let file = std::fs::File::open(path).map_err(|source| CoreError::IoOpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_from_reader(&mut reader, path)
    }

    fn read_from_reader(
        reader: &mut impl BufRead,
        path: &Path,
    ) -> Result<WeightedGraph, CoreError> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| malformed(path, 1))?
            .map_err(|_| malformed(path, 1))?;
        let mut header_fields = header.split_whitespace();
        let vertices: usize = header_fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| malformed(path, 1))?;
        let edge_count: usize = header_fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| malformed(path, 1))?;

        let mut edges = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let line_no = i + 2;
            let line = lines
                .next()
                .ok_or_else(|| malformed(path, line_no))?
                .map_err(|_| malformed(path, line_no))?;
            let mut fields = line.split_whitespace();
            let from: VertexId = fields
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| malformed(path, line_no))?;
            let to: VertexId = fields
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| malformed(path, line_no))?;
            let weight: Weight = fields
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| malformed(path, line_no))?;
            edges.push(Edge::new(from, to, weight));
        }

        Ok(WeightedGraph::new(vertices, edges))
    }

    /// Writes the same text format `read_from` parses.
    pub fn write_to(&self, path: &Path) -> Result<(), CoreError> {
        let mut file =
            std::fs::File::create(path).map_err(|source| CoreError::IoWriteFailure {
                path: path.to_path_buf(),
                source,
            })?;
        writeln!(file, "{} {}", self.vertices, self.edges.len()).map_err(|source| {
            CoreError::IoWriteFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;
        for edge in &self.edges {
            writeln!(file, "{} {} {}", edge.from, edge.to, edge.weight).map_err(|source| {
                CoreError::IoWriteFailure {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Renders the "Graph:"/"MST:" edge-dump format from spec.md §6: one
    /// edge per line, fields separated by a single tab.
    pub fn dump_edges(&self) -> String {
        let mut out = String::new();
        for edge in &self.edges {
            let _ = writeln!(out, "{}\t{}\t{}", edge.from, edge.to, edge.weight);
        }
        out
    }
}

fn malformed(path: &Path, line: usize) -> CoreError {
    CoreError::IoReadFailure {
        path: path.to_path_buf(),
        line,
    }
}
