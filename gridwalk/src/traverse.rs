//! Priority-queue traversal engine: multi-start Dijkstra with lazy
//! stale-entry deletion and optional early termination.

use std::collections::BinaryHeap;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::policy::NeighborPolicy;

/// Sentinel distance for cells never reached by a traversal.
pub const UNREACHABLE: u64 = u64::MAX;

/// Heap entry ordered so the max-heap `BinaryHeap` pops the smallest
/// distance first. Entries go stale when a cheaper route is found later;
/// stale entries are discarded lazily on pop.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    dist: u64,
    index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-run result of a traversal: best-known distance and finalization
/// flag for every grid cell.
///
/// Every [`Traversal::run`] produces a fresh map; no bookkeeping is shared
/// or reused between runs, so repeated runs cannot leak state into each
/// other.
pub struct DistanceMap {
    width: usize,
    height: usize,
    dist: Vec<u64>,
    finalized: Vec<bool>,
    truncated: bool,
}

impl DistanceMap {
    /// Best-known distance to `coord`, [`UNREACHABLE`] when the cell was
    /// never reached (or is off-grid).
    #[inline]
    pub fn get(&self, coord: Coord) -> u64 {
        match self.index_of(coord) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether the traversal reached `coord` at all.
    ///
    /// An unreachable goal is an expected outcome, not an error. Check it
    /// here instead of treating [`UNREACHABLE`] as a distance.
    #[inline]
    pub fn is_reachable(&self, coord: Coord) -> bool {
        self.get(coord) != UNREACHABLE
    }

    /// Whether `coord`'s distance is final.
    ///
    /// After a run that terminated early at its goal, cells that were
    /// discovered but not yet finalized carry tentative distances only;
    /// this flag is the authoritative check.
    #[inline]
    pub fn is_finalized(&self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(i) => self.finalized[i],
            None => false,
        }
    }

    /// Whether the run stopped early because its goal was finalized.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// All reached cells with their distances, in reading order.
    pub fn reached(&self) -> impl Iterator<Item = (Coord, u64)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(i, &d)| (self.coord_of(i), d))
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    #[inline]
    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

/// A configured shortest-distance run over one grid and one policy.
///
/// Seeds every start at distance 0 (multi-start is the ordinary case, used
/// for "from any valid starting cell" puzzles) and relaxes edges produced
/// by the policy until the frontier drains, or, with [`Traversal::toward`],
/// until the goal is finalized.
///
/// # Example
///
/// ```
/// use gridwalk::{Cardinal, Grid, Traversal};
///
/// let grid = Grid::parse("S...E", |c| c).unwrap();
/// let start = grid.find(|&c| c == 'S').unwrap();
/// let goal = grid.find(|&c| c == 'E').unwrap();
/// let dist = Traversal::new(&grid, &Cardinal).toward(goal).run(&[start]);
/// assert_eq!(dist.get(goal), 4);
/// ```
pub struct Traversal<'a, L, P> {
    grid: &'a Grid<L>,
    policy: &'a P,
    goal: Option<Coord>,
}

impl<'a, L, P> Traversal<'a, L, P>
where
    P: NeighborPolicy<L>,
{
    /// A full traversal: runs until every reachable cell is finalized.
    pub fn new(grid: &'a Grid<L>, policy: &'a P) -> Self {
        Self {
            grid,
            policy,
            goal: None,
        }
    }

    /// Stop the run the moment `goal` is finalized.
    ///
    /// This is a necessary optimization for single-goal queries, and it
    /// changes the contract: distances of cells not finalized by that
    /// point are tentative. Use [`DistanceMap::is_finalized`] before
    /// trusting any other cell of a truncated map.
    pub fn toward(mut self, goal: Coord) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Unit-cost run: every edge costs 1.
    pub fn run(&self, starts: &[Coord]) -> DistanceMap {
        self.run_weighted(starts, |_, _, _| 1)
    }

    /// Weighted run. `cost` is charged per edge, `(grid, from, to)`, and
    /// must not be negative (the unsigned return type enforces this).
    ///
    /// Starts that are off-grid are skipped; if no start is on the grid
    /// the result simply has every cell unreachable.
    pub fn run_weighted<C>(&self, starts: &[Coord], cost: C) -> DistanceMap
    where
        C: Fn(&Grid<L>, Coord, Coord) -> u64,
    {
        let len = self.grid.len();
        let mut dist = vec![UNREACHABLE; len];
        let mut finalized = vec![false; len];
        let mut truncated = false;

        let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
        for &start in starts {
            if let Some(i) = self.grid.index_of(start) {
                dist[i] = 0;
                frontier.push(Entry { dist: 0, index: i });
            }
        }

        let goal_index = self.goal.and_then(|g| self.grid.index_of(g));
        let mut neighbors = Vec::with_capacity(8);

        while let Some(Entry { dist: d, index }) = frontier.pop() {
            // Lazy deletion: a popped entry is stale if the cell was
            // already finalized or relaxed below the entry's priority.
            if finalized[index] || d != dist[index] {
                continue;
            }
            finalized[index] = true;

            if goal_index == Some(index) {
                truncated = true;
                break;
            }

            let from = self.grid.coord_of(index);
            neighbors.clear();
            self.policy.neighbors(self.grid, from, &mut neighbors);

            for &next in &neighbors {
                let Some(ni) = self.grid.index_of(next) else {
                    continue;
                };
                if finalized[ni] {
                    continue;
                }
                let candidate = d.saturating_add(cost(self.grid, from, next));
                if candidate < dist[ni] {
                    dist[ni] = candidate;
                    frontier.push(Entry {
                        dist: candidate,
                        index: ni,
                    });
                }
            }
        }

        DistanceMap {
            width: self.grid.width(),
            height: self.grid.height(),
            dist,
            finalized,
            truncated,
        }
    }
}
