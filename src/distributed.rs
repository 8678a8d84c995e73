//! Distributed building blocks shared by Kruskal's merge-sort phase and
//! Borůvka's per-phase edge scan: scattering an edge list across a cohort,
//! tree-merging sorted chunks back together, and tree-reducing per-vertex
//! best-edge tables.

use crate::cohort::Cohort;
use crate::edge::Edge;
use crate::error::CoreError;
use crate::mergesort;

/// Splits `edges` into `cohort.size()` contiguous chunks, mirroring the
/// original's `scatterEdgeList`: every rank but the last gets `C = ⌈edges.len() /
/// size⌉` edges; the last rank gets whatever remains (which may be fewer
/// than `C`, or none at all). Returns [`CoreError::UnsupportedTopology`]
/// under the same precondition the original checks before scattering: if
/// `size` exceeds `edges.len() / 2 + 1` while `edges.len() != size`, at
/// least one rank would receive an empty chunk.
pub fn scatter(edges: &[Edge], cohort: &dyn Cohort) -> Result<Vec<Vec<Edge>>, CoreError> {
    let size = cohort.size();
    let count = edges.len();
    if count / 2 + 1 < size && count != size {
        return Err(CoreError::UnsupportedTopology { edges: count, size });
    }

    let chunk_size = count.div_ceil(size);
    let mut chunks = Vec::with_capacity(size);
    for rank in 0..size {
        let start = (rank * chunk_size).min(count);
        let end = if rank == size - 1 {
            count
        } else {
            (start + chunk_size).min(count)
        };
        chunks.push(edges[start..end].to_vec());
    }
    Ok(chunks)
}

/// Sorts each chunk locally, then repeatedly pairs ranks `(0,1), (2,3), ...`
/// and merges their sorted halves, doubling the step each round — the same
/// `for (step = 1; step < size; step *= 2)` shape the original's `sort` uses
/// to drive its `MPI_Recv`/`MPI_Send` tree merge. `SimCohort` has no real
/// ranks to message, so this performs the equivalent data movement directly
/// rather than over a channel.
pub fn tree_merge_sort(mut chunks: Vec<Vec<Edge>>) -> Vec<Edge> {
    for chunk in chunks.iter_mut() {
        mergesort::sort(chunk);
    }

    let mut step = 1;
    while step < chunks.len() {
        let mut rank = 0;
        while rank + step < chunks.len() {
            let right = std::mem::take(&mut chunks[rank + step]);
            let left = std::mem::take(&mut chunks[rank]);
            chunks[rank] = merge_sorted(left, right);
            rank += 2 * step;
        }
        step *= 2;
    }

    chunks.into_iter().next().unwrap_or_default()
}

fn merge_sorted(left: Vec<Edge>, right: Vec<Edge>) -> Vec<Edge> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i].weight <= right[j].weight {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Tree-reduces per-rank best-edge tables (one `Option<Edge>` slot per
/// vertex) down to a single table holding, for each vertex, the
/// lowest-weight candidate edge any rank proposed, mirroring `mstBoruvka`'s
/// reduction step (the result stands in for the subsequent broadcast too,
/// since every rank ends up reading the same merged table).
pub fn tree_reduce_best_edges(mut tables: Vec<Vec<Option<Edge>>>) -> Vec<Option<Edge>> {
    let mut step = 1;
    while step < tables.len() {
        let mut rank = 0;
        while rank + step < tables.len() {
            let right = std::mem::take(&mut tables[rank + step]);
            for (slot, candidate) in tables[rank].iter_mut().zip(right.into_iter()) {
                *slot = pick_better(*slot, candidate);
            }
            rank += 2 * step;
        }
        step *= 2;
    }
    tables.into_iter().next().unwrap_or_default()
}

fn pick_better(a: Option<Edge>, b: Option<Edge>) -> Option<Edge> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if a.weight <= b.weight { a } else { b }),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}
