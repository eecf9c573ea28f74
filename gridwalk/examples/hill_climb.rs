//! Shortest hill-climbing routes over a small elevation map.
//!
//! Run with: cargo run --example hill_climb
//!
//! `S` marks the start at elevation `a`, `E` the summit at elevation `z`,
//! and each step may climb at most one unit (descending is free).

use anyhow::{Context, Result};
use gridwalk::{Climb, Grid, Traversal, reconstruct};

const MAP: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

fn elevation(c: char) -> i64 {
    match c {
        'S' => 0,
        'E' => 25,
        _ => c as i64 - 'a' as i64,
    }
}

fn main() -> Result<()> {
    let grid = Grid::parse(MAP, |c| c)?;
    let start = grid.find(|&c| c == 'S').context("no start marker")?;
    let summit = grid.find(|&c| c == 'E').context("no summit marker")?;

    let up = Climb::at_most(|c: &char| elevation(*c), 1);
    let down = Climb::at_most(|c: &char| elevation(*c), 1).reversed();

    // Marked start to summit.
    let dist = Traversal::new(&grid, &up).toward(summit).run(&[start]);
    println!("Steps to summit: {}", dist.get(summit));

    let path = reconstruct(&grid, &dist, summit, &down)?;
    println!("Route (summit back to start):");
    for window in path.chunks(8) {
        let line: Vec<String> = window.iter().map(|c| c.to_string()).collect();
        println!("  {}", line.join(" "));
    }

    // Best scenic route: start from any lowest cell.
    let lowest: Vec<_> = grid.positions(|&c| elevation(c) == 0).collect();
    let dist = Traversal::new(&grid, &up).toward(summit).run(&lowest);
    println!("Steps from the best lowest cell: {}", dist.get(summit));

    Ok(())
}
