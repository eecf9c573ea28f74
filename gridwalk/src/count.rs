//! Counting distinct walks, as opposed to measuring the shortest one.

use crate::coord::Coord;
use crate::grid::Grid;
use crate::policy::NeighborPolicy;

/// Number of distinct walks from `start` to any cell whose label passes
/// `is_goal`, following `policy` edges. Goal cells terminate a walk; they
/// are not stepped through.
///
/// Results are memoized per coordinate, so heavily shared sub-walks are
/// counted once and the whole run is linear in edges.
///
/// The step relation must be acyclic (true for strictly-ascending rules
/// like [`Climb::exactly`](crate::Climb::exactly)), since a cycle would
/// make the number of walks unbounded. Cyclic policies are not detected;
/// the recursion simply never returns.
pub fn count_paths<L, P, G>(grid: &Grid<L>, start: Coord, policy: &P, is_goal: G) -> u64
where
    P: NeighborPolicy<L>,
    G: Fn(&L) -> bool,
{
    let mut memo = vec![None; grid.len()];
    walks(grid, policy, &is_goal, &mut memo, start)
}

fn walks<L, P, G>(
    grid: &Grid<L>,
    policy: &P,
    is_goal: &G,
    memo: &mut [Option<u64>],
    at: Coord,
) -> u64
where
    P: NeighborPolicy<L>,
    G: Fn(&L) -> bool,
{
    let Some(index) = grid.index_of(at) else {
        return 0;
    };
    if let Some(known) = memo[index] {
        return known;
    }

    let count = if is_goal(grid.label_at(index)) {
        1
    } else {
        let mut next = Vec::with_capacity(4);
        policy.neighbors(grid, at, &mut next);
        next.into_iter()
            .map(|n| walks(grid, policy, is_goal, memo, n))
            .sum()
    };

    memo[index] = Some(count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Climb;

    fn digit_height(c: &char) -> i64 {
        c.to_digit(10).map_or(-100, i64::from)
    }

    #[test]
    fn single_trail_counts_once() {
        let grid = Grid::parse("0123456789", |c| c).unwrap();
        let up = Climb::exactly(digit_height, 1);
        let n = count_paths(&grid, Coord::ZERO, &up, |&c| c == '9');
        assert_eq!(n, 1);
    }

    #[test]
    fn lattice_walks_multiply() {
        // Height x+y: every right/down interleaving is a distinct walk.
        let grid = Grid::parse("012\n123\n234", |c| c).unwrap();
        let up = Climb::exactly(digit_height, 1);
        let n = count_paths(&grid, Coord::ZERO, &up, |&c| c == '4');
        assert_eq!(n, 6);
    }

    #[test]
    fn dead_start_counts_nothing() {
        let grid = Grid::parse("09", |c| c).unwrap();
        let up = Climb::exactly(digit_height, 1);
        assert_eq!(count_paths(&grid, Coord::ZERO, &up, |&c| c == '9'), 0);
        assert_eq!(count_paths(&grid, Coord::new(9, 9), &up, |&c| c == '9'), 0);
    }

    #[test]
    fn forked_trailhead_rating() {
        // Worked example with rating 3: three distinct ascents to the peak.
        let rows = "\
.....0.
..4321.
..5..2.
..6543.
..7..4.
..8765.
..9....";
        let grid = Grid::parse(rows, |c| c).unwrap();
        let up = Climb::exactly(digit_height, 1);
        let head = grid.find(|&c| c == '0').unwrap();
        assert_eq!(count_paths(&grid, head, &up, |&c| c == '9'), 3);
    }
}
