//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What to compute over the parsed grid
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// Shortest distance from the start marker(s) to the goal marker
    #[default]
    Distance,
    /// Shortest distance plus one reconstructed route, rendered over the map
    Path,
    /// Distances to every reachable cell; reports the farthest one
    Flood,
    /// Per-start count of reachable goal cells
    Score,
    /// Per-start count of distinct routes to goal cells (trails terrain only)
    Rating,
}

/// How terrain characters are read and which steps are legal
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Terrain {
    /// Opaque labels; wall cells are impassable, everything else is open
    #[default]
    Walls,
    /// Letters are elevations a-z with S/E markers; climb at most one per step
    Elevation,
    /// Digits are elevations 0-9; climb exactly one per step
    Trails,
}

/// Grid traversal runner
#[derive(Parser, Debug)]
#[command(name = "gridwalk", about = "Run grid traversals over puzzle input", version)]
pub struct Args {
    /// Puzzle input file (one line per grid row)
    pub input: PathBuf,

    /// What to compute
    #[arg(short, long, value_enum, default_value = "distance")]
    pub mode: Mode,

    /// How to read the terrain
    #[arg(short, long, value_enum, default_value = "walls")]
    pub terrain: Terrain,

    /// Use 8-directional adjacency (walls terrain only)
    #[arg(long)]
    pub diagonals: bool,

    /// Start marker character (default: S, or 0 for trails terrain)
    #[arg(long)]
    pub start: Option<char>,

    /// Goal marker character (default: E, or 9 for trails terrain)
    #[arg(long)]
    pub goal: Option<char>,

    /// Impassable cell character for walls terrain
    #[arg(long, default_value = "#")]
    pub wall: char,

    /// Number of threads for per-start sweeps
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Start and goal marker characters after terrain defaults.
    pub fn markers(&self) -> (char, char) {
        let (start, goal) = match self.terrain {
            Terrain::Trails => ('0', '9'),
            Terrain::Walls | Terrain::Elevation => ('S', 'E'),
        };
        (self.start.unwrap_or(start), self.goal.unwrap_or(goal))
    }
}
