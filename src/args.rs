use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_LEDGER_PATH: &str = "donations.txt";

/// Record donations in a text file and report their total.
#[derive(Parser, Debug)]
pub struct Args {
    /// The ledger file to read and write
    #[clap(short, long, default_value = DEFAULT_LEDGER_PATH)]
    pub file: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new donation. Fields that aren't given are asked for interactively.
    Add {
        /// What was donated, e.g. "food" or "clothes"
        #[clap(short, long)]
        category: Option<String>,

        /// How much was donated
        #[clap(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// When it was donated, as YYYY-MM-DD
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Print the sum of all donations
    Total,

    /// Print all donations and their sum
    List,
}

pub fn parse() -> Args {
    Args::parse()
}
