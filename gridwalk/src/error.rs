//! Error types for the traversal library

use crate::coord::Coord;
use thiserror::Error;

/// Error type for grid construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input rows have inconsistent lengths (`row` is 1-based)
    #[error("malformed input: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The input contains no cells at all
    #[error("malformed input: empty grid")]
    Empty,
}

/// Error type for path reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No finalized predecessor satisfies the distance equation at this
    /// coordinate. Typically the distance map was truncated by early
    /// termination before covering the requested path.
    #[error("incomplete path: no predecessor for {at} at distance {distance}")]
    IncompletePath { at: Coord, distance: u64 },
    /// The requested goal was never reached by the traversal
    #[error("incomplete path: goal {goal} is unreachable in this distance map")]
    UnreachableGoal { goal: Coord },
}
