//! A command line interface to *Euclidean Traveling Salesman Problem* heuristics.
//!

mod commands;

use clap::Command;
use commands::generate::{get_generate_app, run_generate};
use commands::get_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn get_app() -> Command {
    Command::new("Euclidean TSP heuristics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Euclidean Traveling Salesman Problem heuristics")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, get_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, get_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
