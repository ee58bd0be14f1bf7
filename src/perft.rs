#![allow(clippy::module_name_repetitions)]

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, Context};

use crate::board::Board;

/// Counts the leaf nodes of the legal-move tree at `depth`.
pub fn perft(pos: &mut Board, depth: usize) -> u64 {
    #[cfg(debug_assertions)]
    pos.check_validity().unwrap();

    if depth == 0 {
        return 1;
    }

    let moves = pos.pseudo_moves();
    let mut count = 0;
    for &m in &moves {
        if pos.make_move(m) {
            count += if depth == 1 { 1 } else { perft(pos, depth - 1) };
        }
        pos.unmake_move();
    }

    count
}

/// One suite entry: a position and its node counts per depth, where
/// `expected[d]` is the count at depth `d`. Depth 0 is always 1.
pub struct PerftCase {
    pub fen: String,
    pub expected: Vec<u64>,
}

/// Parses a `FEN; D1; D2; ...; Dk` suite line.
pub fn parse_suite_line(line: &str) -> anyhow::Result<PerftCase> {
    let mut tokens = line.split("; ");
    let fen = tokens
        .next()
        .with_context(|| format!("no FEN in suite line {line:?}"))?
        .trim()
        .to_string();
    let mut expected = vec![1];
    for token in tokens {
        let nodes = token
            .trim()
            .parse::<u64>()
            .with_context(|| format!("bad node count {token:?} in suite line {line:?}"))?;
        expected.push(nodes);
    }
    Ok(PerftCase { fen, expected })
}

pub fn load_suite(path: &Path) -> anyhow::Result<Vec<PerftCase>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut cases = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        cases.push(parse_suite_line(&line)?);
    }
    Ok(cases)
}

/// Runs every recorded depth of every suite position, reporting PASS/FAIL
/// and stopping at the first mismatch.
pub fn gamut(path: &Path, node_limit: u64) -> anyhow::Result<()> {
    let cases = load_suite(path)?;
    println!("running perft on {} ({} positions)", path.display(), cases.len());
    for case in &cases {
        let mut pos =
            Board::from_fen(&case.fen).with_context(|| format!("bad FEN {:?}", case.fen))?;
        for (depth, &nodes) in case.expected.iter().enumerate().skip(1) {
            if nodes > node_limit {
                println!("skipping depth {depth} for fen {} ({nodes} nodes)", case.fen);
                break;
            }
            let counted = perft(&mut pos, depth);
            if counted == nodes {
                println!("PASS: fen {}, depth {depth}", case.fen);
            } else {
                bail!(
                    "FAIL: fen {}, depth {depth}: expected {nodes}, got {counted}",
                    case.fen
                );
            }
        }
    }
    Ok(())
}

mod tests {
    #[test]
    fn perft_start_position() {
        use super::*;
        let mut pos = Board::default();
        assert_eq!(perft(&mut pos, 1), 20, "got {}", {
            pos.legal_moves()
                .into_iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        });
        assert_eq!(perft(&mut pos, 2), 400);
        assert_eq!(perft(&mut pos, 3), 8_902);
        assert_eq!(perft(&mut pos, 4), 197_281);
    }

    #[test]
    fn perft_kiwipete() {
        use super::*;
        const TEST_FEN: &str =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut pos = Board::from_fen(TEST_FEN).unwrap();
        assert_eq!(perft(&mut pos, 1), 48, "got {}", {
            pos.legal_moves()
                .into_iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        });
        assert_eq!(perft(&mut pos, 2), 2_039);
        assert_eq!(perft(&mut pos, 3), 97_862);
    }

    #[test]
    fn perft_rook_endgame() {
        use super::*;
        let mut pos = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(perft(&mut pos, 1), 14);
        assert_eq!(perft(&mut pos, 2), 191);
        assert_eq!(perft(&mut pos, 3), 2_812);
        assert_eq!(perft(&mut pos, 4), 43_238);
    }

    #[test]
    fn perft_promotion_tangle() {
        use super::*;
        const TEST_FEN: &str =
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        let mut pos = Board::from_fen(TEST_FEN).unwrap();
        assert_eq!(perft(&mut pos, 1), 6);
        assert_eq!(perft(&mut pos, 2), 264);
        assert_eq!(perft(&mut pos, 3), 9_467);
    }

    #[test]
    fn perft_talkchess_position() {
        use super::*;
        const TEST_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        let mut pos = Board::from_fen(TEST_FEN).unwrap();
        assert_eq!(perft(&mut pos, 1), 44);
        assert_eq!(perft(&mut pos, 2), 1_486);
        assert_eq!(perft(&mut pos, 3), 62_379);
    }

    #[test]
    fn suite_lines_parse() {
        use super::*;
        let case =
            parse_suite_line("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1; 20; 400")
                .unwrap();
        assert_eq!(
            case.fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(case.expected, vec![1, 20, 400]);

        assert!(parse_suite_line("8/8/8/8/8/8/8/8 w - - 0 1; twenty").is_err());
    }
}
