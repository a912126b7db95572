//! Forecourt - fuel station dispensing simulator
//!
//! A CLI demo that dispenses fuel to vehicles from pumps with finite reserves.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
