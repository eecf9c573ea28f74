//! Trailhead scores and ratings over a small topographic map.
//!
//! Run with: cargo run --example trail_score
//!
//! Trails start at height 0, end at height 9, and must climb exactly one
//! unit per step. A trailhead's *score* counts the distinct peaks it can
//! reach; its *rating* counts the distinct trails to any peak.

use anyhow::Result;
use gridwalk::{Climb, Grid, Traversal, count_paths};

const MAP: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

fn main() -> Result<()> {
    let grid = Grid::parse(MAP, |c| c)?;
    let height = |c: &char| c.to_digit(10).map_or(-100, i64::from);
    let up = Climb::exactly(height, 1);

    let trailheads: Vec<_> = grid.positions(|&c| c == '0').collect();
    let mut score = 0u64;
    let mut rating = 0u64;
    for &head in &trailheads {
        let dist = Traversal::new(&grid, &up).run(&[head]);
        score += grid
            .positions(|&c| c == '9')
            .filter(|&peak| dist.is_reachable(peak))
            .count() as u64;
        rating += count_paths(&grid, head, &up, |&c| c == '9');
    }

    println!("{} trailheads", trailheads.len());
    println!("Total score: {score}");
    println!("Total rating: {rating}");
    Ok(())
}
