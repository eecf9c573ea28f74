//! Backward path reconstruction over a finalized distance map.

use crate::coord::Coord;
use crate::error::PathError;
use crate::grid::Grid;
use crate::policy::NeighborPolicy;
use crate::traverse::DistanceMap;

/// Walk a distance map backward from `goal` to a start, returning the path
/// in goal-to-start order.
///
/// `reverse_policy` must answer "which cells could have stepped into me",
/// the reverse of the policy the map was computed with. Symmetric policies
/// ([`Cardinal`](crate::Cardinal), [`Moore`](crate::Moore), and their
/// filtered forms) are their own reverse; [`Climb`](crate::Climb) needs
/// [`reversed()`](crate::Climb::reversed).
///
/// At each step the lexicographically smallest (reading-order) finalized
/// predecessor whose distance is exactly one less is chosen, so the result
/// is deterministic no matter how the traversal's frontier happened to pop
/// ties.
///
/// Fails with [`PathError::IncompletePath`] when the predecessor chain
/// breaks, which happens when the map was truncated by early termination
/// before covering the path. A broken chain is never papered over with a
/// partial path.
pub fn reconstruct<L, P>(
    grid: &Grid<L>,
    dist: &DistanceMap,
    goal: Coord,
    reverse_policy: &P,
) -> Result<Vec<Coord>, PathError>
where
    P: NeighborPolicy<L>,
{
    reconstruct_with(grid, dist, goal, reverse_policy, |_, _, _| 1)
}

/// [`reconstruct`] for weighted runs: a predecessor `p` of `cur` must
/// satisfy `dist[p] + cost(p, cur) == dist[cur]`, with `cost` the same
/// function the traversal ran with.
///
/// Zero-cost edges are not walkable here: a predecessor must be strictly
/// closer to the start than the current cell, otherwise the walk could
/// revisit cells forever.
pub fn reconstruct_with<L, P, C>(
    grid: &Grid<L>,
    dist: &DistanceMap,
    goal: Coord,
    reverse_policy: &P,
    cost: C,
) -> Result<Vec<Coord>, PathError>
where
    P: NeighborPolicy<L>,
    C: Fn(&Grid<L>, Coord, Coord) -> u64,
{
    if !dist.is_reachable(goal) {
        return Err(PathError::UnreachableGoal { goal });
    }
    if !dist.is_finalized(goal) {
        // A tentative goal distance cannot anchor a correct path.
        return Err(PathError::IncompletePath {
            at: goal,
            distance: dist.get(goal),
        });
    }

    let mut path = vec![goal];
    let mut current = goal;
    let mut candidates = Vec::with_capacity(8);

    while dist.get(current) > 0 {
        let here = dist.get(current);
        candidates.clear();
        reverse_policy.neighbors(grid, current, &mut candidates);

        let predecessor = candidates
            .iter()
            .copied()
            .filter(|&p| dist.is_finalized(p) && dist.get(p) < here)
            .filter(|&p| dist.get(p).saturating_add(cost(grid, p, current)) == here)
            .min();

        match predecessor {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => {
                return Err(PathError::IncompletePath {
                    at: current,
                    distance: here,
                });
            }
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Cardinal, NeighborPolicy};
    use crate::traverse::Traversal;

    #[test]
    fn trivial_path_is_just_the_start() {
        let grid = Grid::parse("a", |c| c).unwrap();
        let start = Coord::ZERO;
        let dist = Traversal::new(&grid, &Cardinal).run(&[start]);
        let path = reconstruct(&grid, &dist, start, &Cardinal).unwrap();
        assert_eq!(path, vec![start]);
    }

    #[test]
    fn linear_chain_round_trip() {
        let grid = Grid::parse("S...E", |c| c).unwrap();
        let goal = Coord::new(4, 0);
        let dist = Traversal::new(&grid, &Cardinal).toward(goal).run(&[Coord::ZERO]);
        let path = reconstruct(&grid, &dist, goal, &Cardinal).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&goal));
        assert_eq!(path.last(), Some(&Coord::ZERO));
        // Consecutive elements are forward-adjacent (walked in reverse).
        for pair in path.windows(2) {
            let mut next = Vec::new();
            Cardinal.neighbors(&grid, pair[1], &mut next);
            assert!(next.contains(&pair[0]));
        }
    }

    #[test]
    fn ties_break_toward_reading_order() {
        let grid = Grid::parse("...\n...\n...", |c| c).unwrap();
        let goal = Coord::new(2, 2);
        let dist = Traversal::new(&grid, &Cardinal).run(&[Coord::ZERO]);
        let path = reconstruct(&grid, &dist, goal, &Cardinal).unwrap();
        // Both (1, 2) and (2, 1) qualify at distance 3; reading order
        // picks (2, 1), every time.
        assert_eq!(path[1], Coord::new(2, 1));
        let again = reconstruct(&grid, &dist, goal, &Cardinal).unwrap();
        assert_eq!(path, again);
    }

    #[test]
    fn truncated_map_refuses_a_tentative_goal() {
        let grid = Grid::parse("SE\n..", |c| c).unwrap();
        let dist = Traversal::new(&grid, &Cardinal)
            .toward(Coord::new(1, 0))
            .run(&[Coord::ZERO]);
        // (0, 1) was discovered but never finalized before the early stop.
        let err = reconstruct(&grid, &dist, Coord::new(0, 1), &Cardinal).unwrap_err();
        assert!(matches!(err, PathError::IncompletePath { .. }));
    }

    #[test]
    fn unreachable_goal_is_its_own_error() {
        let grid = Grid::parse("S#E", |c| c).unwrap();
        let policy = Cardinal.allowing(|label: &char| *label != '#');
        let goal = Coord::new(2, 0);
        let dist = Traversal::new(&grid, &policy).run(&[Coord::ZERO]);
        let err = reconstruct(&grid, &dist, goal, &policy).unwrap_err();
        assert_eq!(err, PathError::UnreachableGoal { goal });
    }

    #[test]
    fn weighted_round_trip() {
        // Entering a cell costs its digit.
        let grid = Grid::parse("12\n11", |c| c.to_digit(10).map_or(0, u64::from)).unwrap();
        let goal = Coord::new(1, 1);
        let enter = |g: &Grid<u64>, _from: Coord, to: Coord| *g.get(to).unwrap_or(&0);
        let dist = Traversal::new(&grid, &Cardinal).run_weighted(&[Coord::ZERO], enter);
        assert_eq!(dist.get(goal), 2);
        let path = reconstruct_with(&grid, &dist, goal, &Cardinal, enter).unwrap();
        assert_eq!(
            path,
            vec![goal, Coord::new(0, 1), Coord::ZERO]
        );
    }
}
