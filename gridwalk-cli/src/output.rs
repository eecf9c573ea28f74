//! Output formatting for traversal results

use crate::runner::Report;
use chrono::TimeDelta;
use gridwalk::{Coord, DistanceMap, Grid};
use std::collections::HashSet;

/// Output formatter for traversal reports
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a report
    pub fn print_report(&self, report: &Report) {
        if self.quiet {
            println!("{}", report.answer);
            return;
        }
        if let Some(detail) = &report.detail {
            println!("{}", detail);
            println!();
        }
        println!(
            "Answer: {} (parse: {}, solve: {})",
            report.answer,
            format_duration(report.parse_duration),
            format_duration(report.solve_duration)
        );
    }
}

/// Render a distance map over the grid: the last digit of each reached
/// cell's distance, `.` for cells the run never touched.
pub fn render_distances<L>(grid: &Grid<L>, dist: &DistanceMap) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height());
    for y in 0..grid.height() as i32 {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() as i32 {
            let coord = Coord::new(x, y);
            if dist.is_reachable(coord) {
                out.push(char::from(b'0' + (dist.get(coord) % 10) as u8));
            } else {
                out.push('.');
            }
        }
    }
    out
}

/// Render the grid with a reconstructed route overlaid as `O` markers.
pub fn render_path(grid: &Grid<char>, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.height());
    for y in 0..grid.height() as i32 {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() as i32 {
            let coord = Coord::new(x, y);
            if on_path.contains(&coord) {
                out.push('O');
            } else {
                out.push(*grid.get(coord).unwrap_or(&' '));
            }
        }
    }
    out
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
