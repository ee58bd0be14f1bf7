use crate::{
    definitions::{BLACK, BOARD_N_SQUARES, WHITE},
    lookups::{FILES_BOARD, OFF_BOARD},
    piece::{type_of, KING, PAWN},
};

pub const fn side_valid(side: u8) -> bool {
    side == WHITE || side == BLACK
}

pub fn square_on_board(sq: u8) -> bool {
    (sq as usize) < BOARD_N_SQUARES && FILES_BOARD[sq as usize] != OFF_BOARD
}

/// `true` for squares reached by adding a direction offset to a playing
/// square: always inside the mailbox, possibly on the border.
pub fn offset_square_offboard(offset_sq: i16) -> bool {
    debug_assert!((0..BOARD_N_SQUARES as i16).contains(&offset_sq));
    FILES_BOARD[offset_sq as usize] == OFF_BOARD
}

pub const fn piece_valid(piece: u8) -> bool {
    let t = type_of(piece);
    t >= PAWN && t <= KING
}

pub const fn piece_valid_empty(piece: u8) -> bool {
    piece == crate::piece::EMPTY || piece_valid(piece)
}
