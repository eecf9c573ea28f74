//! Labeled-grid traversal for puzzle inputs.
//!
//! Small daily puzzles keep reinventing the same machinery: read a block of
//! text into a grid of cells, decide which cells are adjacent under this
//! puzzle's rule, flood distances outward from one or more starting cells,
//! and sometimes walk one concrete shortest route back out. This crate is
//! that machinery, factored once:
//!
//! - [`Grid`]: an immutable coordinate-to-label map built from text rows
//! - [`NeighborPolicy`]: a pluggable adjacency rule ([`Cardinal`],
//!   [`Moore`], [`Climb`], and label filtering via
//!   [`allowing`](NeighborPolicy::allowing))
//! - [`Traversal`]: multi-start Dijkstra with lazy stale-entry deletion,
//!   producing a fresh [`DistanceMap`] per run
//! - [`reconstruct`]: deterministic backward path recovery
//! - [`count_paths`]: distinct-walk counting for acyclic step rules
//!
//! # Quick Example
//!
//! ```
//! use gridwalk::{Cardinal, Grid, NeighborPolicy, Traversal, reconstruct};
//!
//! let grid = Grid::parse("S..\n.#.\n..E", |c| c).unwrap();
//! let start = grid.find(|&c| c == 'S').unwrap();
//! let goal = grid.find(|&c| c == 'E').unwrap();
//!
//! let policy = Cardinal.allowing(|label: &char| *label != '#');
//! let dist = Traversal::new(&grid, &policy).toward(goal).run(&[start]);
//! assert_eq!(dist.get(goal), 4);
//!
//! let path = reconstruct(&grid, &dist, goal, &policy).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! # Key Concepts
//!
//! ## Off-grid is a sentinel, not an error
//!
//! [`Grid::get`] returns `None` for coordinates outside the grid, and
//! [`DistanceMap::get`] returns [`UNREACHABLE`] for cells a run never
//! touched. Both are expected, frequent outcomes of ordinary queries;
//! errors are reserved for malformed input ([`GridError`]) and broken
//! predecessor chains ([`PathError`]).
//!
//! ## Policies are pure and reversible
//!
//! A policy is a pure function of `(grid, coord)`, so the same value can
//! drive any number of runs. Path reconstruction walks the *reverse*
//! relation ("which cells could have stepped into me"); asymmetric rules
//! like [`Climb`] provide it via [`Climb::reversed`].
//!
//! ## Every run owns its state
//!
//! A [`Traversal`] allocates fresh distance and finalization bookkeeping
//! on every run. There is nothing to reset between part 1 and part 2, and
//! independent runs can safely proceed from different starts, including
//! in parallel from separate threads, since runs share nothing mutable.
//!
//! ## Early termination is a contract, not a shortcut
//!
//! [`Traversal::toward`] stops the moment the goal is finalized. Distances
//! of other cells are then tentative; [`DistanceMap::is_finalized`] makes
//! that checkable, and [`reconstruct`] refuses to anchor a path on a
//! tentative cell.

mod coord;
mod count;
mod error;
mod grid;
mod path;
mod policy;
mod traverse;

pub use coord::{ALL_DIRECTIONS, CARDINALS, Coord};
pub use count::count_paths;
pub use error::{GridError, PathError};
pub use grid::Grid;
pub use path::{reconstruct, reconstruct_with};
pub use policy::{Cardinal, Climb, Filtered, Moore, NeighborPolicy};
pub use traverse::{DistanceMap, Traversal, UNREACHABLE};
