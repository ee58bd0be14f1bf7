use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caissa", version, about = "A mailbox chess position core.")]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Option<Subcommands>,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Run a perft suite and compare against its recorded node counts.
    Perft {
        /// Suite file with one `FEN; D1; D2; ...` entry per line.
        #[arg(default_value = "epds/perft.txt")]
        path: PathBuf,
        /// Skip any depth whose recorded node count exceeds this.
        #[arg(long, default_value_t = 100_000_000)]
        node_limit: u64,
    },
    /// Print a position.
    Show {
        /// FEN of the position to display; defaults to the starting position.
        fen: Option<String>,
    },
    /// List the legal moves in a position.
    Moves {
        /// FEN of the position to enumerate.
        fen: String,
    },
}
