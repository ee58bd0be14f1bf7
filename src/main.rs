#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

//! Caissa, a 10x12 mailbox chess position core.

mod attack;
mod board;
mod chessmove;
mod cli;
mod definitions;
mod errors;
mod lookups;
mod makemove;
mod movegen;
mod perft;
mod piece;
mod rng;
mod validate;

use anyhow::Context;

use crate::{board::Board, cli::Subcommands, definitions::STARTING_FEN};

fn main() -> anyhow::Result<()> {
    let cli = <cli::Cli as clap::Parser>::parse();

    match cli.subcommand {
        Some(Subcommands::Perft { path, node_limit }) => perft::gamut(&path, node_limit),
        Some(Subcommands::Show { fen }) => {
            let fen = fen.as_deref().unwrap_or(STARTING_FEN);
            let board = Board::from_fen(fen).with_context(|| format!("bad FEN: {fen:?}"))?;
            print!("{board}");
            Ok(())
        }
        Some(Subcommands::Moves { fen }) => {
            let mut board = Board::from_fen(&fen).with_context(|| format!("bad FEN: {fen:?}"))?;
            let legal = board.legal_moves();
            println!("Legal moves ({}): [", legal.len());
            for m in &legal {
                println!("  {m}");
            }
            println!("]");
            Ok(())
        }
        None => {
            let board = Board::default();
            print!("{board}");
            Ok(())
        }
    }
}
