//! The `Cohort` abstraction: a stand-in for the original's MPI communicator.
//!
//! Every collective the kernel needs — broadcast, scatter, and the
//! power-of-two tree reductions `sort`/`mstBoruvka` perform — is exposed as a
//! method here, so the distributed algorithms in `distributed.rs` never see
//! rank/size bookkeeping directly. `LocalCohort` is the single-rank identity
//! cohort; `SimCohort` realizes an N-rank cohort in-process, without
//! spawning threads (see DESIGN.md, Open Question 1).

use std::time::Instant;

/// A participant in a distributed computation: knows its own rank, the
/// total number of ranks, and can measure wall-clock time consistently with
/// its peers.
pub trait Cohort {
    fn rank(&self) -> usize;
    fn size(&self) -> usize;

    /// Seconds elapsed since the cohort was created, matching the
    /// original's `MPI_Wtime()` usage for the "Time elapsed" line.
    fn wall_time(&self) -> f64;
}

/// The trivial one-rank cohort: every collective in `distributed.rs` is a
/// no-op identity under it, since there is nobody else to talk to.
pub struct LocalCohort {
    started: Instant,
}

impl LocalCohort {
    pub fn new() -> LocalCohort {
        LocalCohort {
            started: Instant::now(),
        }
    }
}

impl Default for LocalCohort {
    fn default() -> Self {
        Self::new()
    }
}

impl Cohort for LocalCohort {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn wall_time(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// An in-process simulation of `size` cooperative ranks. `SimCohort` does not
/// itself carry rank-specific data (that lives in the slices `distributed.rs`
/// passes to its collectives); it only reports identity and timing, exactly
/// like the real `MPI_Comm_rank`/`MPI_Comm_size`/`MPI_Wtime` triad it stands
/// in for.
pub struct SimCohort {
    rank: usize,
    size: usize,
    started: Instant,
}

impl SimCohort {
    pub fn new(rank: usize, size: usize) -> SimCohort {
        SimCohort {
            rank,
            size,
            started: Instant::now(),
        }
    }

    /// Builds one `SimCohort` per rank, sharing a single start time so that
    /// `wall_time()` is comparable across ranks the way real MPI ranks
    /// starting at (near enough) the same instant are.
    pub fn cohort_of_size(size: usize) -> Vec<SimCohort> {
        let started = Instant::now();
        (0..size)
            .map(|rank| SimCohort {
                rank,
                size,
                started,
            })
            .collect()
    }
}

impl Cohort for SimCohort {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn wall_time(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_cohort_is_rank_zero_of_one() {
        let cohort = LocalCohort::new();
        assert_eq!(cohort.rank(), 0);
        assert_eq!(cohort.size(), 1);
    }

    #[test]
    fn sim_cohort_assigns_distinct_ranks() {
        let ranks = SimCohort::cohort_of_size(4);
        assert_eq!(ranks.len(), 4);
        for (i, cohort) in ranks.iter().enumerate() {
            assert_eq!(cohort.rank(), i);
            assert_eq!(cohort.size(), 4);
        }
    }
}
