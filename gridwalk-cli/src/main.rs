//! gridwalk CLI - run grid traversals over puzzle input files

mod cli;
mod error;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let report = runner::load_and_run(&args)?;
    OutputFormatter::new(args.quiet).print_report(&report);
    Ok(())
}
