// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for counter construction.

use thiserror::Error;

/// Errors surfaced when constructing a [`SequenceCounter`](super::SequenceCounter).
///
/// All validation happens at construction; a successfully built counter
/// cannot fail while counting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CounterError {
    /// Depth argument outside the supported range.
    #[error("depth argument must be an integer between 1 and 32, inclusive (got {0})")]
    DepthOutOfRange(usize),

    /// An adjacency list names a label that is not a vertex of the graph.
    #[error("vertex {vertex} lists unknown neighbour {neighbour}")]
    UnknownNeighbour { vertex: String, neighbour: String },
}
