//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error reading the puzzle input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid construction failed
    #[error("{0}")]
    Grid(#[from] gridwalk::GridError),

    /// Path reconstruction failed
    #[error("{0}")]
    Path(#[from] gridwalk::PathError),

    /// A required marker character is absent from the grid
    #[error("no '{marker}' cell in the input grid")]
    MissingMarker { marker: char },

    /// Incompatible flag combination
    #[error("Configuration error: {0}")]
    Config(String),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}
