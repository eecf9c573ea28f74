//! Neighbor policies: which cells count as adjacent under puzzle rules.

use crate::coord::{ALL_DIRECTIONS, CARDINALS, Coord};
use crate::grid::Grid;

/// Produces the candidate neighbors of a cell under puzzle-specific rules.
///
/// Implementations must be pure functions of `(grid, from)`, with no
/// interior state, so one policy value can serve any number of independent
/// traversals. Forward and reverse variants of a rule are separate policy
/// values (see [`Climb::reversed`]); symmetric policies such as
/// [`Cardinal`] are their own reverse.
///
/// Appending into a caller-owned buffer keeps the traversal hot loop
/// allocation-free. Appending nothing is a normal dead end, not an error.
pub trait NeighborPolicy<L> {
    /// Append the reachable neighbors of `from` to `out`. The caller
    /// clears `out` beforehand.
    fn neighbors(&self, grid: &Grid<L>, from: Coord, out: &mut Vec<Coord>);

    /// Restrict this policy to neighbors whose target label passes `allow`.
    ///
    /// The usual way to express walls:
    ///
    /// ```
    /// use gridwalk::{Cardinal, NeighborPolicy};
    ///
    /// let policy = Cardinal.allowing(|label: &char| *label != '#');
    /// # let _ = policy;
    /// ```
    fn allowing<F>(self, allow: F) -> Filtered<Self, F>
    where
        Self: Sized,
        F: Fn(&L) -> bool,
    {
        Filtered { inner: self, allow }
    }
}

/// 4-directional (von Neumann) adjacency over every in-grid cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cardinal;

impl<L> NeighborPolicy<L> for Cardinal {
    fn neighbors(&self, grid: &Grid<L>, from: Coord, out: &mut Vec<Coord>) {
        for step in CARDINALS {
            let next = from + step;
            if grid.contains(next) {
                out.push(next);
            }
        }
    }
}

/// 8-directional (Moore) adjacency over every in-grid cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Moore;

impl<L> NeighborPolicy<L> for Moore {
    fn neighbors(&self, grid: &Grid<L>, from: Coord, out: &mut Vec<Coord>) {
        for step in ALL_DIRECTIONS {
            let next = from + step;
            if grid.contains(next) {
                out.push(next);
            }
        }
    }
}

/// A policy wrapped by [`NeighborPolicy::allowing`]: keeps only neighbors
/// whose target label passes the predicate.
#[derive(Debug, Clone, Copy)]
pub struct Filtered<P, F> {
    inner: P,
    allow: F,
}

impl<P, F> Filtered<P, F> {
    /// Equivalent to `inner.allowing(allow)`.
    pub fn new(inner: P, allow: F) -> Self {
        Self { inner, allow }
    }
}

impl<L, P, F> NeighborPolicy<L> for Filtered<P, F>
where
    P: NeighborPolicy<L>,
    F: Fn(&L) -> bool,
{
    fn neighbors(&self, grid: &Grid<L>, from: Coord, out: &mut Vec<Coord>) {
        self.inner.neighbors(grid, from, out);
        out.retain(|&next| grid.get(next).is_some_and(&self.allow));
    }
}

/// Cardinal adjacency restricted by how far the terrain may rise in one
/// step, with the cell height read through a caller-supplied function.
///
/// [`Climb::at_most`] with a rise of 1 is the hill-climbing rule: descend
/// freely, climb at most one unit. [`Climb::exactly`] with a rise of 1 is
/// the gradual-trail rule: every step must go up exactly one unit.
///
/// [`Climb::reversed`] answers the predecessor question ("which cells
/// could have stepped into me") that path reconstruction needs.
#[derive(Clone, Copy)]
pub struct Climb<F> {
    height_of: F,
    min_rise: Option<i64>,
    max_rise: Option<i64>,
    reversed: bool,
}

impl<F> Climb<F> {
    /// Steps may rise by at most `rise`; any descent is allowed.
    pub fn at_most(height_of: F, rise: i64) -> Self {
        Self {
            height_of,
            min_rise: None,
            max_rise: Some(rise),
            reversed: false,
        }
    }

    /// Steps must rise by exactly `rise`.
    pub fn exactly(height_of: F, rise: i64) -> Self {
        Self {
            height_of,
            min_rise: Some(rise),
            max_rise: Some(rise),
            reversed: false,
        }
    }

    /// The reverse relation: `b` is a neighbor of `a` under the reversed
    /// policy iff `a` is a neighbor of `b` under the original.
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }
}

impl<L, F> NeighborPolicy<L> for Climb<F>
where
    F: Fn(&L) -> i64,
{
    fn neighbors(&self, grid: &Grid<L>, from: Coord, out: &mut Vec<Coord>) {
        let Some(from_height) = grid.get(from).map(&self.height_of) else {
            return;
        };
        for step in CARDINALS {
            let next = from + step;
            let Some(next_height) = grid.get(next).map(&self.height_of) else {
                continue;
            };
            // In reverse the roles swap: `next` is the stepper, `from` the
            // cell being stepped into.
            let rise = if self.reversed {
                from_height - next_height
            } else {
                next_height - from_height
            };
            if self.min_rise.is_some_and(|min| rise < min) {
                continue;
            }
            if self.max_rise.is_some_and(|max| rise > max) {
                continue;
            }
            out.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut coords: Vec<Coord>) -> Vec<Coord> {
        coords.sort();
        coords
    }

    fn neighbors_of<L>(
        policy: &impl NeighborPolicy<L>,
        grid: &Grid<L>,
        from: Coord,
    ) -> Vec<Coord> {
        let mut out = Vec::new();
        policy.neighbors(grid, from, &mut out);
        out
    }

    #[test]
    fn cardinal_clips_at_the_edge() {
        let grid = Grid::parse("ab\ncd", |c| c).unwrap();
        let n = neighbors_of(&Cardinal, &grid, Coord::new(0, 0));
        assert_eq!(sorted(n), vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn moore_yields_eight_in_the_interior() {
        let grid = Grid::parse("abc\ndef\nghi", |c| c).unwrap();
        assert_eq!(neighbors_of(&Moore, &grid, Coord::new(1, 1)).len(), 8);
        assert_eq!(neighbors_of(&Moore, &grid, Coord::new(0, 0)).len(), 3);
    }

    #[test]
    fn allowing_drops_rejected_labels() {
        let grid = Grid::parse("S#\n..", |c| c).unwrap();
        let policy = Cardinal.allowing(|label: &char| *label != '#');
        let n = neighbors_of(&policy, &grid, Coord::new(0, 0));
        assert_eq!(n, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn climb_at_most_limits_the_rise_only() {
        // Heights 0 and 25 side by side: too steep to climb, fine to drop.
        let height = |c: &char| *c as i64 - 'a' as i64;
        let grid = Grid::parse("az", |c| c).unwrap();
        let up = Climb::at_most(height, 1);
        assert!(neighbors_of(&up, &grid, Coord::new(0, 0)).is_empty());
        assert_eq!(
            neighbors_of(&up, &grid, Coord::new(1, 0)),
            vec![Coord::new(0, 0)]
        );
    }

    #[test]
    fn climb_exactly_requires_the_step() {
        let height = |c: &char| c.to_digit(10).map_or(-100, i64::from);
        let grid = Grid::parse("012\n024", |c| c).unwrap();
        let up = Climb::exactly(height, 1);
        assert_eq!(
            neighbors_of(&up, &grid, Coord::new(0, 0)),
            vec![Coord::new(1, 0)]
        );
        // 0 -> 2 below is a rise of 2, not a step.
        assert!(neighbors_of(&up, &grid, Coord::new(0, 1)).is_empty());
    }

    #[test]
    fn reversed_is_the_inverse_relation() {
        let height = |c: &char| *c as i64 - 'a' as i64;
        let grid = Grid::parse("abc\nbcd", |c| c).unwrap();
        let up = Climb::at_most(height, 1);
        let down = Climb::at_most(height, 1).reversed();
        for a in grid.coords() {
            for b in neighbors_of(&up, &grid, a) {
                assert!(
                    neighbors_of(&down, &grid, b).contains(&a),
                    "{a} -> {b} has no reverse edge"
                );
            }
        }
    }

    #[test]
    fn dead_end_yields_nothing() {
        let grid = Grid::parse("a", |c| c).unwrap();
        assert!(neighbors_of(&Cardinal, &grid, Coord::new(0, 0)).is_empty());
        // Off-grid queries are dead ends too, not errors.
        assert!(neighbors_of(&Cardinal, &grid, Coord::new(9, 9)).is_empty());
    }
}
