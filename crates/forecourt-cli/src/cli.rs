//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use forecourt_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forecourt")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fuel station dispensing simulator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Vehicle kind selector for the refuel command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Car,
    Truck,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted three-transaction demo (default)
    Demo {
        /// Output file for session results (JSON)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Run a single refuel transaction
    Refuel {
        /// Vehicle kind
        kind: KindArg,

        /// License plate (e.g., "ABC-123")
        #[arg(long, short = 'p', default_value = "DEMO-000")]
        plate: String,

        /// Current fuel level in litres
        #[arg(long, default_value_t = 0.0)]
        level: f64,

        /// Truck runs on diesel
        #[arg(long)]
        diesel: bool,

        /// Pump identifier
        #[arg(long, default_value_t = 1)]
        pump_id: u32,

        /// Pump price per litre
        #[arg(long, default_value_t = 1.55)]
        price: f64,

        /// Pump reserve in litres
        #[arg(long, default_value_t = 500.0)]
        reserve: f64,
    },
}
