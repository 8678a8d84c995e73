//! Error kinds for the MST kernel and its I/O front door.
//!
//! All variants are fatal in the sense of spec.md §7: there is no local
//! recovery, a caller observing one of these should report it and exit
//! non-zero.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("couldn't open input file {path}: {source}")]
    IoOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed or truncated graph file {path} at line {line}")]
    IoReadFailure { path: PathBuf, line: usize },

    #[error("couldn't write output file {path}: {source}")]
    IoWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scatter would yield empty chunks for some ranks: `⌊E/2⌋ + 1 < size`
    /// and `E != size` (spec.md §4.6 precondition / §7).
    #[error(
        "unsupported size/process combination: {edges} edges cannot be scattered across {size} ranks"
    )]
    UnsupportedTopology { edges: usize, size: usize },

    #[error("unknown algorithm selector: {selector} (expected 0-3)")]
    UnknownAlgorithm { selector: i64 },

    /// Kept for interface parity with the original's abstract error kinds
    /// (spec.md §7). Rust's global allocator aborts the process on
    /// allocation failure rather than returning a `Result`, so this variant
    /// is never constructed by this crate's own allocation paths; it exists
    /// so callers that layer their own fallible allocation on top of this
    /// kernel have a slot to report it through the same error type.
    #[error("allocation failure")]
    MallocFailure,
}
