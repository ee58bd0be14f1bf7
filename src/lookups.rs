//! Compile-time tables: mailbox/64 conversions, file and rank boards, square
//! names, and the Zobrist key material.

use crate::{definitions::BOARD_N_SQUARES, piece::N_PIECE_IDS, rng::SplitMix64};

/// Implements a C-style for loop, for use in const fn.
#[macro_export]
macro_rules! cfor {
    ($init: stmt; $cond: expr; $step: expr; $body: block) => {
        {
            $init
            #[allow(while_true)]
            while $cond {
                $body;

                $step;
            }
        }
    }
}

/// Marker held by `FILES_BOARD`/`RANKS_BOARD` for border cells.
pub const OFF_BOARD: u8 = u8::MAX;

const fn sq_on_board(sq: usize) -> bool {
    let file = sq % 10;
    let rank = sq / 10;
    file >= 1 && file <= 8 && rank >= 2 && rank <= 9
}

const fn piece_id_valid(piece: usize) -> bool {
    let t = piece & 7;
    t >= 1 && t <= 6
}

pub const fn filerank_to_square(file: u8, rank: u8) -> u8 {
    21 + file + 10 * rank
}

const fn init_files_ranks() -> ([u8; BOARD_N_SQUARES], [u8; BOARD_N_SQUARES]) {
    let mut files = [OFF_BOARD; BOARD_N_SQUARES];
    let mut ranks = [OFF_BOARD; BOARD_N_SQUARES];
    cfor!(let mut rank = 0; rank < 8; rank += 1; {
        cfor!(let mut file = 0; file < 8; file += 1; {
            let sq = filerank_to_square(file, rank) as usize;
            files[sq] = file;
            ranks[sq] = rank;
        });
    });
    (files, ranks)
}

const fn init_sq120_sq64() -> ([u8; BOARD_N_SQUARES], [u8; 64]) {
    let mut sq120_to_sq64 = [64u8; BOARD_N_SQUARES];
    let mut sq64_to_sq120 = [0u8; 64];
    cfor!(let mut rank = 0u8; rank < 8; rank += 1; {
        cfor!(let mut file = 0u8; file < 8; file += 1; {
            let sq120 = filerank_to_square(file, rank);
            let sq64 = rank * 8 + file;
            sq120_to_sq64[sq120 as usize] = sq64;
            sq64_to_sq120[sq64 as usize] = sq120;
        });
    });
    (sq120_to_sq64, sq64_to_sq120)
}

pub static FILES_BOARD: [u8; BOARD_N_SQUARES] = init_files_ranks().0;
pub static RANKS_BOARD: [u8; BOARD_N_SQUARES] = init_files_ranks().1;
pub static SQ120_TO_SQ64: [u8; BOARD_N_SQUARES] = init_sq120_sq64().0;
pub static SQ64_TO_SQ120: [u8; 64] = init_sq120_sq64().1;

type HashKeys = (
    [[u64; N_PIECE_IDS]; BOARD_N_SQUARES],
    [u64; 16],
    [u64; BOARD_N_SQUARES],
    u64,
);

/// Samples every key from one generator pass. Keys for (square, piece) pairs
/// that can never be occupied are zero, so XOR-ing over the whole mailbox is
/// harmless; likewise the en-passant key for any border cell (`NO_SQUARE`
/// included) is zero.
const fn init_hash_keys() -> HashKeys {
    let mut state = SplitMix64::new();
    let mut piece_keys = [[0; N_PIECE_IDS]; BOARD_N_SQUARES];
    cfor!(let mut sq = 0; sq < BOARD_N_SQUARES; sq += 1; {
        cfor!(let mut piece = 0; piece < N_PIECE_IDS; piece += 1; {
            if sq_on_board(sq) && piece_id_valid(piece) {
                let key;
                (key, state) = state.next_self();
                piece_keys[sq][piece] = key;
            }
        });
    });
    let mut castle_keys = [0; 16];
    cfor!(let mut index = 0; index < 16; index += 1; {
        let key;
        (key, state) = state.next_self();
        castle_keys[index] = key;
    });
    let mut ep_keys = [0; BOARD_N_SQUARES];
    cfor!(let mut sq = 0; sq < BOARD_N_SQUARES; sq += 1; {
        if sq_on_board(sq) {
            let key;
            (key, state) = state.next_self();
            ep_keys[sq] = key;
        }
    });
    let (side_key, _) = state.next_self();
    (piece_keys, castle_keys, ep_keys, side_key)
}

pub static PIECE_KEYS: [[u64; N_PIECE_IDS]; BOARD_N_SQUARES] = init_hash_keys().0;
pub static CASTLE_KEYS: [u64; 16] = init_hash_keys().1;
pub static EP_KEYS: [u64; BOARD_N_SQUARES] = init_hash_keys().2;
pub const SIDE_KEY: u64 = init_hash_keys().3;

pub static SQUARE_NAMES: [&str; 64] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

pub fn square_name(sq: u8) -> Option<&'static str> {
    SQUARE_NAMES
        .get(SQ120_TO_SQ64.get(sq as usize).copied().unwrap_or(64) as usize)
        .copied()
}

mod tests {
    #[test]
    fn all_keys_different() {
        use super::*;
        let mut keys: Vec<u64> = PIECE_KEYS
            .iter()
            .flat_map(|per_square| per_square.iter().copied())
            .chain(CASTLE_KEYS.iter().copied())
            .chain(EP_KEYS.iter().copied())
            .chain(std::iter::once(SIDE_KEY))
            .filter(|&k| k != 0)
            .collect();
        let len_before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(len_before, keys.len());
    }

    #[test]
    fn impossible_occupancies_hash_to_zero() {
        use super::*;
        use crate::definitions::NO_SQUARE;
        use crate::piece::{EMPTY, WP};
        for sq in 0..BOARD_N_SQUARES {
            assert_eq!(PIECE_KEYS[sq][EMPTY as usize], 0);
            if FILES_BOARD[sq] == OFF_BOARD {
                assert_eq!(PIECE_KEYS[sq][WP as usize], 0);
                assert_eq!(EP_KEYS[sq], 0);
            }
        }
        assert_eq!(EP_KEYS[NO_SQUARE as usize], 0);
    }

    #[test]
    fn mailbox_conversion_round_trip() {
        use super::*;
        use crate::definitions::{A1, A8, E4, H1, H8, NO_SQUARE};
        for sq64 in 0..64u8 {
            let sq120 = SQ64_TO_SQ120[sq64 as usize];
            assert_eq!(SQ120_TO_SQ64[sq120 as usize], sq64);
            assert_ne!(FILES_BOARD[sq120 as usize], OFF_BOARD);
        }
        assert_eq!(SQ64_TO_SQ120[0], A1);
        assert_eq!(SQ64_TO_SQ120[7], H1);
        assert_eq!(SQ64_TO_SQ120[56], A8);
        assert_eq!(SQ64_TO_SQ120[63], H8);
        assert_eq!(square_name(E4), Some("e4"));
        assert_eq!(square_name(NO_SQUARE), None);
    }
}
