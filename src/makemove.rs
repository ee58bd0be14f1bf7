// Move making itself lives in board.rs; this module holds the hash-update
// helpers and the castle-permission mask table it leans on.

use crate::{
    definitions::{A1, A8, BKCA, BOARD_N_SQUARES, BQCA, E1, E8, H1, H8, WKCA, WQCA},
    lookups::{CASTLE_KEYS, EP_KEYS, PIECE_KEYS, SIDE_KEY},
    validate::{piece_valid, square_on_board},
};

pub fn hash_piece(key: &mut u64, piece: u8, sq: u8) {
    debug_assert!(piece_valid(piece));
    debug_assert!(square_on_board(sq));
    *key ^= PIECE_KEYS[sq as usize][piece as usize];
}

pub fn hash_castling(key: &mut u64, castle_perm: u8) {
    *key ^= CASTLE_KEYS[castle_perm as usize];
}

pub fn hash_ep(key: &mut u64, ep_sq: u8) {
    *key ^= EP_KEYS[ep_sq as usize];
}

pub fn hash_side(key: &mut u64) {
    *key ^= SIDE_KEY;
}

/// Rights that survive a piece leaving or arriving on each square. Covers
/// both a rook or king abandoning its home square and a rook being captured
/// on one.
const fn init_castle_perm_masks() -> [u8; BOARD_N_SQUARES] {
    let mut masks = [0b1111u8; BOARD_N_SQUARES];
    masks[A1 as usize] = 0b1111 & !WQCA;
    masks[E1 as usize] = 0b1111 & !(WKCA | WQCA);
    masks[H1 as usize] = 0b1111 & !WKCA;
    masks[A8 as usize] = 0b1111 & !BQCA;
    masks[E8 as usize] = 0b1111 & !(BKCA | BQCA);
    masks[H8 as usize] = 0b1111 & !BKCA;
    masks
}

pub static CASTLE_PERM_MASKS: [u8; BOARD_N_SQUARES] = init_castle_perm_masks();

mod tests {
    #[test]
    fn masks_strip_the_right_bits() {
        use super::*;
        use crate::definitions::{B4, E4};
        assert_eq!(CASTLE_PERM_MASKS[E4 as usize], 0b1111);
        assert_eq!(CASTLE_PERM_MASKS[B4 as usize], 0b1111);
        assert_eq!(0b1111 & CASTLE_PERM_MASKS[E1 as usize], BKCA | BQCA);
        assert_eq!(0b1111 & CASTLE_PERM_MASKS[H8 as usize], WKCA | WQCA | BQCA);
        assert_eq!(0b1111 & CASTLE_PERM_MASKS[A1 as usize], WKCA | BKCA | BQCA);
    }
}
