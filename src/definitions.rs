#![allow(dead_code)]

use crate::chessmove::Move;

/// Cells in the 10x12 mailbox, counting the sentinel border.
pub const BOARD_N_SQUARES: usize = 120;
/// Longest game we are prepared to record undo entries for.
pub const MAX_GAME_MOVES: usize = 1024;
/// Upper bound on the number of pieces of one type on a legal board
/// (two originals plus eight promotions).
pub const MAX_PIECE_FREQ: usize = 10;

pub const WHITE: u8 = 0;
pub const BLACK: u8 = 1;

pub const RANK_1: u8 = 0;
pub const RANK_2: u8 = 1;
pub const RANK_3: u8 = 2;
pub const RANK_4: u8 = 3;
pub const RANK_5: u8 = 4;
pub const RANK_6: u8 = 5;
pub const RANK_7: u8 = 6;
pub const RANK_8: u8 = 7;

pub const FILE_A: u8 = 0;
pub const FILE_H: u8 = 7;

#[rustfmt::skip]
mod squares {
    pub const A1: u8 = 21; pub const B1: u8 = 22; pub const C1: u8 = 23; pub const D1: u8 = 24;
    pub const E1: u8 = 25; pub const F1: u8 = 26; pub const G1: u8 = 27; pub const H1: u8 = 28;
    pub const A2: u8 = 31; pub const B2: u8 = 32; pub const C2: u8 = 33; pub const D2: u8 = 34;
    pub const E2: u8 = 35; pub const F2: u8 = 36; pub const G2: u8 = 37; pub const H2: u8 = 38;
    pub const A3: u8 = 41; pub const B3: u8 = 42; pub const C3: u8 = 43; pub const D3: u8 = 44;
    pub const E3: u8 = 45; pub const F3: u8 = 46; pub const G3: u8 = 47; pub const H3: u8 = 48;
    pub const A4: u8 = 51; pub const B4: u8 = 52; pub const C4: u8 = 53; pub const D4: u8 = 54;
    pub const E4: u8 = 55; pub const F4: u8 = 56; pub const G4: u8 = 57; pub const H4: u8 = 58;
    pub const A5: u8 = 61; pub const B5: u8 = 62; pub const C5: u8 = 63; pub const D5: u8 = 64;
    pub const E5: u8 = 65; pub const F5: u8 = 66; pub const G5: u8 = 67; pub const H5: u8 = 68;
    pub const A6: u8 = 71; pub const B6: u8 = 72; pub const C6: u8 = 73; pub const D6: u8 = 74;
    pub const E6: u8 = 75; pub const F6: u8 = 76; pub const G6: u8 = 77; pub const H6: u8 = 78;
    pub const A7: u8 = 81; pub const B7: u8 = 82; pub const C7: u8 = 83; pub const D7: u8 = 84;
    pub const E7: u8 = 85; pub const F7: u8 = 86; pub const G7: u8 = 87; pub const H7: u8 = 88;
    pub const A8: u8 = 91; pub const B8: u8 = 92; pub const C8: u8 = 93; pub const D8: u8 = 94;
    pub const E8: u8 = 95; pub const F8: u8 = 96; pub const G8: u8 = 97; pub const H8: u8 = 98;
}
pub use squares::*;

/// Sentinel for "no square". It lives on the mailbox border, so every table
/// indexed by square yields a harmless value for it.
pub const NO_SQUARE: u8 = 99;

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Castling {
    WK = 0b0001,
    WQ = 0b0010,
    BK = 0b0100,
    BQ = 0b1000,
}

pub const WKCA: u8 = Castling::WK as u8;
pub const WQCA: u8 = Castling::WQ as u8;
pub const BKCA: u8 = Castling::BK as u8;
pub const BQCA: u8 = Castling::BQ as u8;

/// One history entry: the move made plus every piece of state that
/// `unmake_move` cannot rederive from the move alone.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub m: Move,
    pub castle_perm: u8,
    pub ep_square: u8,
    pub fifty_move_counter: u32,
    pub position_key: u64,
}

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
