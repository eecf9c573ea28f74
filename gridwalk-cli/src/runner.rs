//! Executes one traversal request against a parsed grid

use crate::cli::{Args, Mode, Terrain};
use crate::error::CliError;
use crate::output;
use chrono::{TimeDelta, Utc};
use gridwalk::{
    Cardinal, Climb, Coord, Grid, Moore, NeighborPolicy, Traversal, UNREACHABLE, count_paths,
    reconstruct,
};
use itertools::Itertools;
use rayon::prelude::*;

/// Result of one CLI run: the answer line plus optional rendered detail
/// and timing captured around parsing and solving.
#[derive(Debug)]
pub struct Report {
    pub answer: String,
    pub detail: Option<String>,
    pub parse_duration: TimeDelta,
    pub solve_duration: TimeDelta,
}

/// Read the input file named in `args` and run the requested traversal.
pub fn load_and_run(args: &Args) -> Result<Report, CliError> {
    let input = std::fs::read_to_string(&args.input)?;
    run(args, &input)
}

/// Run the requested traversal over already-loaded input text.
pub fn run(args: &Args, input: &str) -> Result<Report, CliError> {
    if args.mode == Mode::Rating && args.terrain != Terrain::Trails {
        return Err(CliError::Config(
            "rating mode requires --terrain trails (route counting needs an acyclic step rule)"
                .to_string(),
        ));
    }
    if args.diagonals && args.terrain != Terrain::Walls {
        return Err(CliError::Config(
            "--diagonals only applies to walls terrain".to_string(),
        ));
    }

    let parse_start = Utc::now();
    let grid = Grid::parse(input, |c| c)?;
    let parse_end = Utc::now();

    let (start_char, goal_char) = args.markers();
    let starts: Vec<Coord> = grid.positions(|&c| c == start_char).collect();
    if starts.is_empty() {
        return Err(CliError::MissingMarker { marker: start_char });
    }

    let solve_start = Utc::now();
    let (answer, detail) = match args.terrain {
        Terrain::Walls => {
            let wall = args.wall;
            if args.diagonals {
                let policy = Moore.allowing(move |label: &char| *label != wall);
                solve(args, &grid, &starts, goal_char, &policy, &policy)?
            } else {
                let policy = Cardinal.allowing(move |label: &char| *label != wall);
                solve(args, &grid, &starts, goal_char, &policy, &policy)?
            }
        }
        Terrain::Elevation => {
            let up = Climb::at_most(|c: &char| elevation(*c), 1);
            let down = Climb::at_most(|c: &char| elevation(*c), 1).reversed();
            solve(args, &grid, &starts, goal_char, &up, &down)?
        }
        Terrain::Trails => {
            let up = Climb::exactly(|c: &char| digit_height(*c), 1);
            let down = Climb::exactly(|c: &char| digit_height(*c), 1).reversed();
            solve(args, &grid, &starts, goal_char, &up, &down)?
        }
    };
    let solve_end = Utc::now();

    Ok(Report {
        answer,
        detail,
        parse_duration: parse_end - parse_start,
        solve_duration: solve_end - solve_start,
    })
}

fn solve<P, R>(
    args: &Args,
    grid: &Grid<char>,
    starts: &[Coord],
    goal_char: char,
    forward: &P,
    reverse: &R,
) -> Result<(String, Option<String>), CliError>
where
    P: NeighborPolicy<char> + Sync,
    R: NeighborPolicy<char>,
{
    match args.mode {
        Mode::Distance => {
            let goal = find_goal(grid, goal_char)?;
            let dist = Traversal::new(grid, forward).toward(goal).run(starts);
            Ok((format_distance(dist.get(goal)), None))
        }
        Mode::Path => {
            let goal = find_goal(grid, goal_char)?;
            let dist = Traversal::new(grid, forward).toward(goal).run(starts);
            if !dist.is_reachable(goal) {
                return Ok(("unreachable".to_string(), None));
            }
            let path = reconstruct(grid, &dist, goal, reverse)?;
            let detail = output::render_path(grid, &path);
            Ok((dist.get(goal).to_string(), Some(detail)))
        }
        Mode::Flood => {
            let dist = Traversal::new(grid, forward).run(starts);
            let farthest = dist.reached().map(|(_, d)| d).max().unwrap_or(0);
            Ok((farthest.to_string(), Some(output::render_distances(grid, &dist))))
        }
        Mode::Score => {
            let goals: Vec<Coord> = grid.positions(|&c| c == goal_char).collect();
            if goals.is_empty() {
                return Err(CliError::MissingMarker { marker: goal_char });
            }
            let per_start = thread_pool(args)?.install(|| {
                starts
                    .par_iter()
                    .map(|&head| {
                        let dist = Traversal::new(grid, forward).run(&[head]);
                        let reached = goals.iter().filter(|&&g| dist.is_reachable(g)).count();
                        (head, reached as u64)
                    })
                    .collect::<Vec<_>>()
            });
            Ok(summarize(per_start))
        }
        Mode::Rating => {
            let per_start = thread_pool(args)?.install(|| {
                starts
                    .par_iter()
                    .map(|&head| (head, count_paths(grid, head, forward, |&c| c == goal_char)))
                    .collect::<Vec<_>>()
            });
            Ok(summarize(per_start))
        }
    }
}

fn find_goal(grid: &Grid<char>, goal_char: char) -> Result<Coord, CliError> {
    grid.find(|&c| c == goal_char)
        .ok_or(CliError::MissingMarker { marker: goal_char })
}

fn format_distance(d: u64) -> String {
    if d == UNREACHABLE {
        "unreachable".to_string()
    } else {
        d.to_string()
    }
}

/// Per-start totals, one line each in reading order, summed for the answer.
fn summarize(per_start: Vec<(Coord, u64)>) -> (String, Option<String>) {
    let total: u64 = per_start.iter().map(|&(_, n)| n).sum();
    let detail = per_start
        .into_iter()
        .sorted()
        .map(|(coord, n)| format!("  {coord}: {n}"))
        .join("\n");
    (total.to_string(), Some(detail))
}

fn thread_pool(args: &Args) -> Result<rayon::ThreadPool, CliError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or(0))
        .build()
        .map_err(|e| CliError::ThreadPool(e.to_string()))
}

/// Elevation reading for letter terrain: markers sit at the extremes.
fn elevation(c: char) -> i64 {
    match c {
        'S' => 0,
        'E' => 25,
        _ => c as i64 - 'a' as i64,
    }
}

/// Elevation reading for digit terrain; anything else is a pit no step
/// rule can enter or leave.
fn digit_height(c: char) -> i64 {
    c.to_digit(10).map_or(-100, i64::from)
}
