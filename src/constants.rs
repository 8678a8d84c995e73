//! Shared type aliases and sentinel values for the MST kernel.

/// A vertex identifier, always in `[0, V)` for a graph with `V` vertices.
pub type VertexId = usize;

/// An edge weight. Non-negative by construction (see `Edge::new`).
pub type Weight = u32;

/// Accumulator type for a total MST weight; individual weights may approach
/// `Weight::MAX` and a spanning tree may have many edges, so summing in
/// `Weight` could overflow.
pub type WeightSum = u64;

/// Sentinel standing in for "+infinity" in heap entries and Borůvka's
/// per-vertex best-edge table, per spec.md §9 ("An implementer may choose a
/// proper Option<weight> ... the contract is only that comparisons behave as
/// if unset values are greater than any real weight").
pub const INFINITE_WEIGHT: Weight = Weight::MAX;

/// Sentinel "via" vertex paired with `INFINITE_WEIGHT` for heap entries that
/// have not yet been reached by any edge.
pub const UNSET_VIA: VertexId = VertexId::MAX;

/// Marks an index-table slot (heap `positions`, Fibonacci heap `positions`)
/// as not currently holding a live entry.
pub const UNSET_INDEX: usize = usize::MAX;
