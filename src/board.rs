#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::{
    collections::HashMap,
    fmt::{Debug, Display, Formatter, Write as _},
};

use crate::{
    attack::{B_DIR, K_DIRS, N_DIRS, Q_DIR, R_DIR},
    chessmove::{Move, MoveFlag},
    definitions::{
        Undo, A1, A8, B1, B8, BKCA, BLACK, BOARD_N_SQUARES, BQCA, C1, C8, D1, D8, E1, E8, F1, F8,
        G1, G8, H1, H8, MAX_GAME_MOVES, MAX_PIECE_FREQ, NO_SQUARE, RANK_1, RANK_2, RANK_3, RANK_6,
        RANK_7, RANK_8, STARTING_FEN, WHITE, WKCA, WQCA,
    },
    errors::{FenParseError, IllegalPosition, InvariantViolation, PositionError},
    lookups::{filerank_to_square, square_name, CASTLE_KEYS, EP_KEYS, PIECE_KEYS, RANKS_BOARD, SIDE_KEY},
    makemove::{hash_castling, hash_ep, hash_piece, hash_side, CASTLE_PERM_MASKS},
    movegen::MoveList,
    piece::{
        char_from_piece, colour_name, colour_of, is_diag, is_king, is_ortho, is_pawn,
        opposite_colours, piece_from_char, piece_of, type_of, BISHOP, BK, EMPTY, KING, KNIGHT,
        N_PIECE_IDS, PAWN, QUEEN, ROOK, WK,
    },
    validate::{offset_square_offboard, piece_valid, piece_valid_empty, side_valid, square_on_board},
};

/// Half-moves without a capture or pawn move before move generation dries
/// up. Deliberately tighter than the standard 100; it bounds perft trees and
/// self-play the same way the fifty-move rule would, just sooner.
pub const HARD_DRAW_FIFTY_LIMIT: u32 = 75;
/// Total-ply backstop for the same purpose.
pub const HARD_DRAW_PLY_LIMIT: u32 = 1000;

/// The pseudo-move cache is flushed wholesale when it reaches this many
/// positions, which keeps deep perft runs from hoarding memory.
const MOVE_CACHE_MAX_ENTRIES: usize = 1 << 15;

pub struct Board {
    pieces: [u8; BOARD_N_SQUARES],
    piece_list: [[u8; MAX_PIECE_FREQ]; N_PIECE_IDS],
    piece_num: [u8; N_PIECE_IDS],
    side: u8,
    castle_perm: u8,
    ep_sq: u8,
    fifty_move_counter: u32,
    half_move_counter: u32,
    key: u64,
    history: Vec<Undo>,
    move_cache: HashMap<u64, Box<[Move]>>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            pieces: [EMPTY; BOARD_N_SQUARES],
            piece_list: [[NO_SQUARE; MAX_PIECE_FREQ]; N_PIECE_IDS],
            piece_num: [0; N_PIECE_IDS],
            side: WHITE,
            castle_perm: 0,
            ep_sq: NO_SQUARE,
            fifty_move_counter: 0,
            half_move_counter: 0,
            key: 0,
            history: Vec::with_capacity(MAX_GAME_MOVES),
            move_cache: HashMap::new(),
        }
    }

    pub fn reset(&mut self) {
        self.pieces.fill(EMPTY);
        for list in &mut self.piece_list {
            list.fill(NO_SQUARE);
        }
        self.piece_num.fill(0);
        self.side = WHITE;
        self.castle_perm = 0;
        self.ep_sq = NO_SQUARE;
        self.fifty_move_counter = 0;
        self.half_move_counter = 0;
        self.key = 0;
        self.history.clear();
        self.move_cache.clear();
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let mut out = Self::new();
        out.set_from_fen(fen)?;
        Ok(out)
    }

    pub fn set_startpos(&mut self) {
        self.set_from_fen(STARTING_FEN)
            .expect("the starting FEN is now broken, somehow");
    }

    pub const fn turn(&self) -> u8 {
        self.side
    }

    pub fn hash(&self) -> u64 {
        debug_assert_eq!(self.key, self.generate_pos_key(), "hash invariant broken");
        self.key
    }

    pub const fn ep_square(&self) -> u8 {
        self.ep_sq
    }

    pub const fn castle_perm(&self) -> u8 {
        self.castle_perm
    }

    pub const fn fifty_move(&self) -> u32 {
        self.fifty_move_counter
    }

    pub const fn half_move(&self) -> u32 {
        self.half_move_counter
    }

    pub const fn full_move(&self) -> u32 {
        self.half_move_counter / 2
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|undo| undo.m)
    }

    pub fn piece_at(&self, sq: u8) -> u8 {
        debug_assert!(square_on_board(sq));
        self.pieces[sq as usize]
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn king_square(&self, side: u8) -> u8 {
        let king = piece_of(side, KING);
        debug_assert_eq!(self.piece_num[king as usize], 1);
        self.piece_list[king as usize][0]
    }

    // ------------------------------------------------------------------
    // FEN parsing

    pub fn set_from_fen(&mut self, fen: &str) -> Result<(), PositionError> {
        self.reset();
        let mut parts = fen.split_ascii_whitespace();

        self.set_board_part(parts.next())?;
        self.set_side_part(parts.next())?;
        self.set_castling_part(parts.next())?;
        self.set_ep_part(parts.next())?;
        self.set_halfmove_part(parts.next())?;
        self.set_fullmove_part(parts.next())?;
        if parts.next().is_some() {
            return Err(FenParseError::ExtraTokens.into());
        }

        self.key = self.generate_pos_key();

        let waiting = self.side ^ 1;
        if self.sq_attacked(self.king_square(waiting), self.side) {
            return Err(IllegalPosition::WaitingInCheck.into());
        }

        #[cfg(debug_assertions)]
        self.check_validity().unwrap();

        Ok(())
    }

    fn set_board_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        let board = part.ok_or(FenParseError::MissingBoard)?;
        let segments: Vec<&str> = board.split('/').collect();
        if segments.len() != 8 {
            return Err(FenParseError::BoardSegments(segments.len()));
        }

        for (seg_idx, segment) in segments.iter().enumerate() {
            let rank = 7 - seg_idx as u8;
            let mut file = 0u8;
            let mut prev_was_digit = false;
            for c in segment.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenParseError::UnexpectedCharacter(c));
                    }
                    if prev_was_digit {
                        return Err(FenParseError::AdjacentDigits);
                    }
                    prev_was_digit = true;
                    file += run as u8;
                    continue;
                }
                prev_was_digit = false;
                let piece = piece_from_char(c).ok_or(FenParseError::UnexpectedCharacter(c))?;
                if file >= 8 {
                    return Err(FenParseError::BadSquaresInSegment(seg_idx));
                }
                if is_pawn(piece) && (rank == RANK_1 || rank == RANK_8) {
                    return Err(FenParseError::PawnsOnBackranks);
                }
                let count = self.piece_num[piece as usize] as usize;
                if count == MAX_PIECE_FREQ {
                    return Err(FenParseError::TooManyPieces {
                        piece: char_from_piece(piece),
                        max: MAX_PIECE_FREQ,
                    });
                }
                let sq = filerank_to_square(file, rank);
                self.pieces[sq as usize] = piece;
                self.piece_list[piece as usize][count] = sq;
                self.piece_num[piece as usize] += 1;
                file += 1;
            }
            if file != 8 {
                return Err(FenParseError::BadSquaresInSegment(seg_idx));
            }
        }

        for (king, colour) in [(WK, WHITE), (BK, BLACK)] {
            match self.piece_num[king as usize] {
                0 => return Err(FenParseError::MissingKing(colour)),
                1 => {}
                _ => return Err(FenParseError::DuplicateKings(colour)),
            }
        }

        Ok(())
    }

    fn set_side_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        self.side = match part {
            None => return Err(FenParseError::MissingSide),
            Some("w") => WHITE,
            Some("b") => BLACK,
            Some(other) => return Err(FenParseError::InvalidSide(other.to_string())),
        };
        Ok(())
    }

    fn set_castling_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        match part {
            None => return Err(FenParseError::MissingCastling),
            Some("-") => self.castle_perm = 0,
            Some(castling) => {
                for c in castling.chars() {
                    match c {
                        'K' => self.castle_perm |= WKCA,
                        'Q' => self.castle_perm |= WQCA,
                        'k' => self.castle_perm |= BKCA,
                        'q' => self.castle_perm |= BQCA,
                        _ => return Err(FenParseError::InvalidCastling(castling.to_string())),
                    }
                }
            }
        }

        // Drop any right whose king or rook is not actually at home, so a
        // sloppy FEN cannot make castling move a phantom rook.
        if self.pieces[E1 as usize] != WK {
            self.castle_perm &= !(WKCA | WQCA);
        }
        if self.pieces[H1 as usize] != piece_of(WHITE, ROOK) {
            self.castle_perm &= !WKCA;
        }
        if self.pieces[A1 as usize] != piece_of(WHITE, ROOK) {
            self.castle_perm &= !WQCA;
        }
        if self.pieces[E8 as usize] != BK {
            self.castle_perm &= !(BKCA | BQCA);
        }
        if self.pieces[H8 as usize] != piece_of(BLACK, ROOK) {
            self.castle_perm &= !BKCA;
        }
        if self.pieces[A8 as usize] != piece_of(BLACK, ROOK) {
            self.castle_perm &= !BQCA;
        }

        Ok(())
    }

    fn set_ep_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        let part = part.ok_or(FenParseError::MissingEnPassant)?;
        if part == "-" {
            self.ep_sq = NO_SQUARE;
            return Ok(());
        }
        let bytes = part.as_bytes();
        if bytes.len() != 2 {
            return Err(FenParseError::InvalidEnPassant(part.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(FenParseError::InvalidEnPassant(part.to_string()));
        }
        let expected_rank = if self.side == WHITE { RANK_6 } else { RANK_3 };
        if rank != expected_rank {
            return Err(FenParseError::InvalidEnPassantRank {
                square: part.to_string(),
                side: self.side,
            });
        }
        let sq = filerank_to_square(file, rank);

        // The target is only worth tracking if the capture could actually be
        // played: the target square empty, the double-moved pawn behind it,
        // and a pawn of the side to move on a capturing origin. Otherwise
        // elide, so that equal positions hash equally.
        let my_pawn = piece_of(self.side, PAWN);
        let their_pawn = piece_of(self.side ^ 1, PAWN);
        let (origin_a, origin_b, behind) = if self.side == WHITE {
            (sq - 9, sq - 11, sq - 10)
        } else {
            (sq + 9, sq + 11, sq + 10)
        };
        let capturable = self.pieces[sq as usize] == EMPTY
            && self.pieces[behind as usize] == their_pawn
            && (self.pieces[origin_a as usize] == my_pawn
                || self.pieces[origin_b as usize] == my_pawn);
        self.ep_sq = if capturable { sq } else { NO_SQUARE };
        Ok(())
    }

    fn set_halfmove_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        let part = part.ok_or(FenParseError::MissingHalfmoveClock)?;
        self.fifty_move_counter = part
            .parse::<u32>()
            .map_err(|_| FenParseError::InvalidHalfmoveClock(part.to_string()))?;
        Ok(())
    }

    fn set_fullmove_part(&mut self, part: Option<&str>) -> Result<(), FenParseError> {
        let part = part.ok_or(FenParseError::MissingFullmoveNumber)?;
        let full_move = part
            .parse::<u32>()
            .map_err(|_| FenParseError::InvalidFullmoveNumber(part.to_string()))?;
        self.half_move_counter = 2 * full_move + u32::from(self.side == BLACK);
        Ok(())
    }

    // ------------------------------------------------------------------
    // FEN rendering

    pub fn fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut blanks = 0u8;
            for file in 0..8 {
                let sq = filerank_to_square(file, rank);
                let piece = self.pieces[sq as usize];
                if piece == EMPTY {
                    blanks += 1;
                } else {
                    if blanks != 0 {
                        out.push((b'0' + blanks) as char);
                        blanks = 0;
                    }
                    out.push(char_from_piece(piece));
                }
            }
            if blanks != 0 {
                out.push((b'0' + blanks) as char);
            }
            if rank != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.side == WHITE { 'w' } else { 'b' });

        out.push(' ');
        if self.castle_perm == 0 {
            out.push('-');
        } else {
            for (bit, c) in [(WKCA, 'K'), (WQCA, 'Q'), (BKCA, 'k'), (BQCA, 'q')] {
                if self.castle_perm & bit != 0 {
                    out.push(c);
                }
            }
        }

        out.push(' ');
        out.push_str(square_name(self.ep_sq).unwrap_or("-"));

        write!(out, " {} {}", self.fifty_move_counter, self.full_move()).unwrap();

        out
    }

    // ------------------------------------------------------------------
    // Hashing and self-checks

    /// Recomputes the position key from scratch. The incremental key must
    /// always agree with this.
    pub fn generate_pos_key(&self) -> u64 {
        let mut key = 0;
        for sq in 0..BOARD_N_SQUARES {
            let piece = self.pieces[sq];
            if piece != EMPTY {
                debug_assert!(piece_valid(piece));
                key ^= PIECE_KEYS[sq][piece as usize];
            }
        }
        key ^= CASTLE_KEYS[self.castle_perm as usize];
        key ^= EP_KEYS[self.ep_sq as usize];
        if self.side == BLACK {
            key ^= SIDE_KEY;
        }
        key
    }

    #[allow(clippy::too_many_lines, clippy::cognitive_complexity)]
    pub fn check_validity(&self) -> Result<(), InvariantViolation> {
        let mut piece_count = [0usize; N_PIECE_IDS];
        for sq in 0..BOARD_N_SQUARES {
            let piece = self.pieces[sq];
            if !piece_valid_empty(piece) {
                return Err(InvariantViolation(format!(
                    "square {sq} holds {piece}, which is neither a piece nor empty"
                )));
            }
            if piece != EMPTY {
                if !square_on_board(sq as u8) {
                    return Err(InvariantViolation(format!(
                        "sentinel square {sq} holds piece {piece}"
                    )));
                }
                piece_count[piece as usize] += 1;
            }
        }

        for piece in 0..N_PIECE_IDS as u8 {
            let count = self.piece_num[piece as usize] as usize;
            if !piece_valid(piece) {
                if count != 0 {
                    return Err(InvariantViolation(format!(
                        "invalid piece id {piece} has non-zero count {count}"
                    )));
                }
                continue;
            }
            if count != piece_count[piece as usize] {
                return Err(InvariantViolation(format!(
                    "piece {piece} count is {count} but {} squares hold it",
                    piece_count[piece as usize]
                )));
            }
            if count > MAX_PIECE_FREQ {
                return Err(InvariantViolation(format!(
                    "too many ({count}) pieces of type {piece}"
                )));
            }
            for idx in 0..count {
                let sq = self.piece_list[piece as usize][idx];
                if self.pieces[sq as usize] != piece {
                    return Err(InvariantViolation(format!(
                        "piece list for {piece} points at {sq}, which holds {}",
                        self.pieces[sq as usize]
                    )));
                }
                for other in idx + 1..count {
                    if self.piece_list[piece as usize][other] == sq {
                        return Err(InvariantViolation(format!(
                            "piece list for {piece} repeats square {sq}"
                        )));
                    }
                }
            }
        }

        if self.piece_num[WK as usize] != 1 || self.piece_num[BK as usize] != 1 {
            return Err(InvariantViolation(format!(
                "king counts are {}/{}, expected 1/1",
                self.piece_num[WK as usize], self.piece_num[BK as usize]
            )));
        }
        if self.castle_perm > 0b1111 {
            return Err(InvariantViolation(format!(
                "castle state {} out of range",
                self.castle_perm
            )));
        }
        if !side_valid(self.side) {
            return Err(InvariantViolation(format!("side {} invalid", self.side)));
        }
        if self.ep_sq != NO_SQUARE {
            let rank_ok = (self.side == WHITE && RANKS_BOARD[self.ep_sq as usize] == RANK_6)
                || (self.side == BLACK && RANKS_BOARD[self.ep_sq as usize] == RANK_3);
            if !square_on_board(self.ep_sq) || !rank_ok {
                return Err(InvariantViolation(format!(
                    "en passant square {} impossible with {} to move",
                    self.ep_sq,
                    colour_name(self.side)
                )));
            }
        }
        if self.key != self.generate_pos_key() {
            return Err(InvariantViolation(format!(
                "incremental key {:016x} != recomputed key {:016x}",
                self.key,
                self.generate_pos_key()
            )));
        }

        let waiting = self.side ^ 1;
        if self.sq_attacked(self.king_square(waiting), self.side) {
            return Err(InvariantViolation(format!(
                "{} is to move but the {} king is attacked",
                colour_name(self.side),
                colour_name(waiting)
            )));
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Attack detection

    /// Determines if `sq` is attacked by `side`.
    pub fn sq_attacked(&self, sq: u8, side: u8) -> bool {
        debug_assert!(side_valid(side));
        debug_assert!(square_on_board(sq));

        let occupant = self.pieces[sq as usize];
        if piece_valid(occupant) && colour_of(occupant) == side {
            return false;
        }

        // pawns
        let pawn = piece_of(side, PAWN);
        let (pawn_a, pawn_b) = if side == WHITE {
            (sq - 11, sq - 9)
        } else {
            (sq + 11, sq + 9)
        };
        if self.pieces[pawn_a as usize] == pawn || self.pieces[pawn_b as usize] == pawn {
            return true;
        }

        // knights
        let knight = piece_of(side, KNIGHT);
        for &dir in &N_DIRS {
            let t_sq = i16::from(sq) + i16::from(dir);
            if self.pieces[t_sq as usize] == knight {
                return true;
            }
        }

        // rooks, queens
        for &dir in &R_DIR {
            let mut t_sq = i16::from(sq) + i16::from(dir);
            while !offset_square_offboard(t_sq) && self.pieces[t_sq as usize] == EMPTY {
                t_sq += i16::from(dir);
            }
            if !offset_square_offboard(t_sq) {
                let piece = self.pieces[t_sq as usize];
                if is_ortho(piece) && colour_of(piece) == side {
                    return true;
                }
            }
        }

        // bishops, queens
        for &dir in &B_DIR {
            let mut t_sq = i16::from(sq) + i16::from(dir);
            while !offset_square_offboard(t_sq) && self.pieces[t_sq as usize] == EMPTY {
                t_sq += i16::from(dir);
            }
            if !offset_square_offboard(t_sq) {
                let piece = self.pieces[t_sq as usize];
                if is_diag(piece) && colour_of(piece) == side {
                    return true;
                }
            }
        }

        // king
        let king = piece_of(side, KING);
        for &dir in &K_DIRS {
            let t_sq = i16::from(sq) + i16::from(dir);
            if self.pieces[t_sq as usize] == king {
                return true;
            }
        }

        false
    }

    /// Is the side to move in check?
    pub fn in_check(&self) -> bool {
        self.sq_attacked(self.king_square(self.side), self.side ^ 1)
    }

    // ------------------------------------------------------------------
    // Pseudo-legal move generation

    fn generate_pawn_forward<const SIDE: u8>(&self, sq: u8, move_list: &mut MoveList) {
        let pawn = piece_of(SIDE, PAWN);
        let to = if SIDE == WHITE { sq + 10 } else { sq - 10 };
        if self.pieces[to as usize] != EMPTY {
            return;
        }
        let promo_rank = if SIDE == WHITE { RANK_8 } else { RANK_1 };
        if RANKS_BOARD[to as usize] == promo_rank {
            for promo_type in [QUEEN, ROOK, BISHOP, KNIGHT] {
                move_list.push(Move::promotion(sq, to, pawn, piece_of(SIDE, promo_type)));
            }
            return;
        }
        move_list.push(Move::quiet(sq, to, pawn));

        let start_rank = if SIDE == WHITE { RANK_2 } else { RANK_7 };
        if RANKS_BOARD[sq as usize] == start_rank {
            let jump = if SIDE == WHITE { sq + 20 } else { sq - 20 };
            if self.pieces[jump as usize] == EMPTY {
                move_list.push(Move::double_pawn(sq, jump, pawn));
            }
        }
    }

    fn generate_pawn_caps<const SIDE: u8>(&self, sq: u8, move_list: &mut MoveList) {
        let pawn = piece_of(SIDE, PAWN);
        let forward = if SIDE == WHITE { sq + 10 } else { sq - 10 };
        let promo_rank = if SIDE == WHITE { RANK_8 } else { RANK_1 };
        for to in [forward - 1, forward + 1] {
            let target = self.pieces[to as usize];
            if !piece_valid(target) || !opposite_colours(pawn, target) || is_king(target) {
                continue;
            }
            if RANKS_BOARD[to as usize] == promo_rank {
                for promo_type in [QUEEN, ROOK, BISHOP, KNIGHT] {
                    move_list.push(Move::promotion_capture(
                        sq,
                        to,
                        pawn,
                        piece_of(SIDE, promo_type),
                        target,
                    ));
                }
            } else {
                move_list.push(Move::capture(sq, to, pawn, target));
            }
        }
    }

    fn generate_ep<const SIDE: u8>(&self, sq: u8, move_list: &mut MoveList) {
        if self.ep_sq == NO_SQUARE {
            return;
        }
        let pawn = piece_of(SIDE, PAWN);
        let forward = if SIDE == WHITE { sq + 10 } else { sq - 10 };
        if forward - 1 == self.ep_sq || forward + 1 == self.ep_sq {
            debug_assert_eq!(self.pieces[self.ep_sq as usize], EMPTY);
            move_list.push(Move::en_passant(sq, self.ep_sq, pawn));
        }
    }

    fn generate_castling_moves(&self, side: u8, move_list: &mut MoveList) {
        if side == WHITE {
            if self.castle_perm & WKCA != 0
                && self.pieces[F1 as usize] == EMPTY
                && self.pieces[G1 as usize] == EMPTY
                && !self.sq_attacked(E1, BLACK)
                && !self.sq_attacked(F1, BLACK)
            {
                move_list.push(Move::castle(E1, G1, WK, MoveFlag::CastleShort));
            }
            if self.castle_perm & WQCA != 0
                && self.pieces[D1 as usize] == EMPTY
                && self.pieces[C1 as usize] == EMPTY
                && self.pieces[B1 as usize] == EMPTY
                && !self.sq_attacked(E1, BLACK)
                && !self.sq_attacked(D1, BLACK)
            {
                move_list.push(Move::castle(E1, C1, WK, MoveFlag::CastleLong));
            }
        } else {
            if self.castle_perm & BKCA != 0
                && self.pieces[F8 as usize] == EMPTY
                && self.pieces[G8 as usize] == EMPTY
                && !self.sq_attacked(E8, WHITE)
                && !self.sq_attacked(F8, WHITE)
            {
                move_list.push(Move::castle(E8, G8, BK, MoveFlag::CastleShort));
            }
            if self.castle_perm & BQCA != 0
                && self.pieces[D8 as usize] == EMPTY
                && self.pieces[C8 as usize] == EMPTY
                && self.pieces[B8 as usize] == EMPTY
                && !self.sq_attacked(E8, WHITE)
                && !self.sq_attacked(D8, WHITE)
            {
                move_list.push(Move::castle(E8, C8, BK, MoveFlag::CastleLong));
            }
        }
    }

    /// Pseudo-legal moves for the side to move.
    pub fn generate_moves(&self, move_list: &mut MoveList) {
        self.generate_moves_for(self.side, move_list);
    }

    /// Pseudo-legal moves for `side`, which need not be the side to move.
    pub fn generate_moves_for(&self, side: u8, move_list: &mut MoveList) {
        debug_assert!(side_valid(side));

        let pawn = piece_of(side, PAWN);
        let pawn_count = self.piece_num[pawn as usize] as usize;
        for &sq in &self.piece_list[pawn as usize][..pawn_count] {
            debug_assert!(square_on_board(sq));
            if side == WHITE {
                self.generate_pawn_forward::<WHITE>(sq, move_list);
                self.generate_pawn_caps::<WHITE>(sq, move_list);
                self.generate_ep::<WHITE>(sq, move_list);
            } else {
                self.generate_pawn_forward::<BLACK>(sq, move_list);
                self.generate_pawn_caps::<BLACK>(sq, move_list);
                self.generate_ep::<BLACK>(sq, move_list);
            }
        }

        for piece in [piece_of(side, KNIGHT), piece_of(side, KING)] {
            let dirs: &[i8] = if type_of(piece) == KNIGHT {
                &N_DIRS
            } else {
                &K_DIRS
            };
            let count = self.piece_num[piece as usize] as usize;
            for &sq in &self.piece_list[piece as usize][..count] {
                debug_assert!(square_on_board(sq));
                for &dir in dirs {
                    let t_sq = i16::from(sq) + i16::from(dir);
                    if offset_square_offboard(t_sq) {
                        continue;
                    }
                    let t_sq = t_sq as u8;
                    let target = self.pieces[t_sq as usize];
                    if target == EMPTY {
                        move_list.push(Move::quiet(sq, t_sq, piece));
                    } else if opposite_colours(piece, target) && !is_king(target) {
                        move_list.push(Move::capture(sq, t_sq, piece, target));
                    }
                }
            }
        }

        for piece in [
            piece_of(side, BISHOP),
            piece_of(side, ROOK),
            piece_of(side, QUEEN),
        ] {
            let dirs: &[i8] = match type_of(piece) {
                BISHOP => &B_DIR,
                ROOK => &R_DIR,
                _ => &Q_DIR,
            };
            let count = self.piece_num[piece as usize] as usize;
            for &sq in &self.piece_list[piece as usize][..count] {
                debug_assert!(square_on_board(sq));
                for &dir in dirs {
                    let mut t_sq = i16::from(sq) + i16::from(dir);
                    while !offset_square_offboard(t_sq) {
                        let to = t_sq as u8;
                        let target = self.pieces[to as usize];
                        if target != EMPTY {
                            if opposite_colours(piece, target) && !is_king(target) {
                                move_list.push(Move::capture(sq, to, piece, target));
                            }
                            break;
                        }
                        move_list.push(Move::quiet(sq, to, piece));
                        t_sq += i16::from(dir);
                    }
                }
            }
        }

        self.generate_castling_moves(side, move_list);
    }

    /// Pseudo-legal moves for the side to move, memoised by position key.
    /// Returns an empty list once the hard-draw clocks run out.
    pub fn pseudo_moves(&mut self) -> MoveList {
        let mut move_list = MoveList::new();
        // The clocks are not part of the key, so the draw cutoff has to be
        // applied before the cache is consulted.
        if self.fifty_move_counter > HARD_DRAW_FIFTY_LIMIT
            || self.half_move_counter > HARD_DRAW_PLY_LIMIT
        {
            return move_list;
        }

        if let Some(cached) = self.move_cache.get(&self.key) {
            move_list.extend_from_slice(cached);
            return move_list;
        }

        #[cfg(debug_assertions)]
        self.check_validity().unwrap();

        self.generate_moves(&mut move_list);

        if self.move_cache.len() >= MOVE_CACHE_MAX_ENTRIES {
            self.move_cache.clear();
        }
        self.move_cache.insert(self.key, move_list.as_slice().into());
        move_list
    }

    /// The pseudo-moves that do not leave the mover's king in check.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let pseudo = self.pseudo_moves();
        let mut result = Vec::with_capacity(pseudo.len());
        for &m in &pseudo {
            if self.make_move(m) {
                result.push(m);
            }
            self.unmake_move();
        }
        result
    }

    // ------------------------------------------------------------------
    // Board mutation primitives. Each keeps the piece array, the piece
    // lists, and the incremental key in lockstep.

    fn clear_piece(&mut self, sq: u8) {
        debug_assert!(square_on_board(sq));
        let piece = self.pieces[sq as usize];
        debug_assert!(piece_valid(piece), "clearing an empty square");

        hash_piece(&mut self.key, piece, sq);
        self.pieces[sq as usize] = EMPTY;

        let count = self.piece_num[piece as usize] as usize;
        let list = &mut self.piece_list[piece as usize];
        let idx = list[..count]
            .iter()
            .position(|&entry| entry == sq)
            .expect("piece list out of sync with the board");
        self.piece_num[piece as usize] -= 1;
        list[idx] = list[count - 1];
    }

    fn add_piece(&mut self, sq: u8, piece: u8) {
        debug_assert!(piece_valid(piece));
        debug_assert!(square_on_board(sq));
        debug_assert_eq!(self.pieces[sq as usize], EMPTY, "overwriting a piece");

        hash_piece(&mut self.key, piece, sq);
        self.pieces[sq as usize] = piece;

        let count = self.piece_num[piece as usize] as usize;
        debug_assert!(count < MAX_PIECE_FREQ);
        self.piece_list[piece as usize][count] = sq;
        self.piece_num[piece as usize] += 1;
    }

    fn move_piece(&mut self, from: u8, to: u8) {
        debug_assert!(square_on_board(from));
        debug_assert!(square_on_board(to));
        debug_assert_eq!(self.pieces[to as usize], EMPTY, "moving onto a piece");
        let piece = self.pieces[from as usize];
        debug_assert!(piece_valid(piece));

        hash_piece(&mut self.key, piece, from);
        hash_piece(&mut self.key, piece, to);
        self.pieces[from as usize] = EMPTY;
        self.pieces[to as usize] = piece;

        let count = self.piece_num[piece as usize] as usize;
        let entry = self.piece_list[piece as usize][..count]
            .iter_mut()
            .find(|entry| **entry == from)
            .expect("piece list out of sync with the board");
        *entry = to;
    }

    fn set_en_passant(&mut self, sq: u8) {
        hash_ep(&mut self.key, self.ep_sq);
        hash_ep(&mut self.key, sq);
        self.ep_sq = sq;
    }

    fn set_castle_state(&mut self, state: u8) {
        hash_castling(&mut self.key, self.castle_perm);
        hash_castling(&mut self.key, state);
        self.castle_perm = state;
    }

    fn update_castling(&mut self, from: u8, to: u8) {
        let state = self.castle_perm
            & CASTLE_PERM_MASKS[from as usize]
            & CASTLE_PERM_MASKS[to as usize];
        self.set_castle_state(state);
    }

    fn switch_side(&mut self) {
        self.side ^= 1;
        hash_side(&mut self.key);
    }

    // ------------------------------------------------------------------
    // Make / unmake

    /// Applies `m` and switches the side to move. Returns `true` iff the
    /// mover did not leave its own king in check; on `false` the move is
    /// still applied and the caller is expected to `unmake_move`.
    pub fn make_move(&mut self, m: Move) -> bool {
        #[cfg(debug_assertions)]
        self.check_validity().unwrap();

        let from = m.from();
        let to = m.to();
        let moved = m.moved();
        let side = self.side;

        debug_assert!(square_on_board(from));
        debug_assert!(square_on_board(to));
        debug_assert_eq!(self.pieces[from as usize], moved, "move does not fit the board");

        self.history.push(Undo {
            m,
            castle_perm: self.castle_perm,
            ep_square: self.ep_sq,
            fifty_move_counter: self.fifty_move_counter,
            position_key: self.key,
        });
        self.half_move_counter += 1;

        match m.flag() {
            MoveFlag::Promotion | MoveFlag::PromotionCapture => {
                if m.is_capture() {
                    self.clear_piece(to);
                }
                self.clear_piece(from);
                self.add_piece(to, m.promoted());
                self.set_en_passant(NO_SQUARE);
                self.update_castling(from, to);
            }
            MoveFlag::CastleShort | MoveFlag::CastleLong => {
                match to {
                    G1 => {
                        self.move_piece(E1, G1);
                        self.move_piece(H1, F1);
                    }
                    C1 => {
                        self.move_piece(E1, C1);
                        self.move_piece(A1, D1);
                    }
                    G8 => {
                        self.move_piece(E8, G8);
                        self.move_piece(H8, F8);
                    }
                    C8 => {
                        self.move_piece(E8, C8);
                        self.move_piece(A8, D8);
                    }
                    _ => panic!("malformed castle move: {m}"),
                }
                self.set_en_passant(NO_SQUARE);
                self.update_castling(from, to);
            }
            MoveFlag::DoublePawn => {
                self.move_piece(from, to);
                let jumped = if side == WHITE { to - 10 } else { to + 10 };
                self.set_en_passant(jumped);
            }
            MoveFlag::EnPassant => {
                let captured_sq = if side == WHITE { to - 10 } else { to + 10 };
                self.clear_piece(captured_sq);
                self.move_piece(from, to);
                self.set_en_passant(NO_SQUARE);
            }
            MoveFlag::Quiet => {
                self.move_piece(from, to);
                self.set_en_passant(NO_SQUARE);
                self.update_castling(from, to);
            }
            MoveFlag::Capture => {
                self.clear_piece(to);
                self.move_piece(from, to);
                self.set_en_passant(NO_SQUARE);
                self.update_castling(from, to);
            }
        }

        if m.is_capture() || is_pawn(moved) {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter += 1;
        }

        self.switch_side();

        let valid = !self.sq_attacked(self.king_square(side), self.side);
        #[cfg(debug_assertions)]
        if valid {
            self.check_validity().unwrap();
        }
        valid
    }

    /// Reverses the most recent `make_move`, restoring the board bit-exactly.
    pub fn unmake_move(&mut self) {
        let Undo {
            m,
            castle_perm,
            ep_square,
            fifty_move_counter,
            position_key,
        } = self.history.pop().expect("no move to unmake");

        self.set_castle_state(castle_perm);
        self.set_en_passant(ep_square);
        self.fifty_move_counter = fifty_move_counter;
        debug_assert!(self.half_move_counter > 0);
        self.half_move_counter -= 1;
        self.switch_side();
        let side = self.side;

        let from = m.from();
        let to = m.to();

        match m.flag() {
            MoveFlag::Promotion | MoveFlag::PromotionCapture => {
                self.clear_piece(to);
                self.add_piece(from, m.moved());
                if m.is_capture() {
                    self.add_piece(to, m.captured());
                }
            }
            MoveFlag::CastleShort | MoveFlag::CastleLong => {
                match to {
                    G1 => {
                        self.move_piece(G1, E1);
                        self.move_piece(F1, H1);
                    }
                    C1 => {
                        self.move_piece(C1, E1);
                        self.move_piece(D1, A1);
                    }
                    G8 => {
                        self.move_piece(G8, E8);
                        self.move_piece(F8, H8);
                    }
                    C8 => {
                        self.move_piece(C8, E8);
                        self.move_piece(D8, A8);
                    }
                    _ => panic!("malformed castle move: {m}"),
                }
            }
            MoveFlag::EnPassant => {
                self.move_piece(to, from);
                let captured_sq = if side == WHITE {
                    self.ep_sq - 10
                } else {
                    self.ep_sq + 10
                };
                self.add_piece(captured_sq, m.captured());
            }
            MoveFlag::Capture => {
                self.move_piece(to, from);
                self.add_piece(to, m.captured());
            }
            MoveFlag::Quiet | MoveFlag::DoublePawn => {
                self.move_piece(to, from);
            }
        }

        debug_assert_eq!(self.key, position_key, "key mismatch after unmake");
        #[cfg(debug_assertions)]
        self.check_validity().unwrap();
    }

    // ------------------------------------------------------------------
    // Game-state queries

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && !self.is_draw() && self.legal_moves().is_empty()
    }

    pub const fn is_draw(&self) -> bool {
        self.fifty_move_counter > HARD_DRAW_FIFTY_LIMIT
            || self.half_move_counter > HARD_DRAW_PLY_LIMIT
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_fen(STARTING_FEN).expect("the starting FEN is now broken, somehow")
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            pieces: self.pieces,
            piece_list: self.piece_list,
            piece_num: self.piece_num,
            side: self.side,
            castle_perm: self.castle_perm,
            ep_sq: self.ep_sq,
            fifty_move_counter: self.fifty_move_counter,
            half_move_counter: self.half_move_counter,
            key: self.key,
            history: self.history.clone(),
            move_cache: HashMap::new(),
        }
    }
}

/// Positional equality: piece placement, side, castling, en passant, clocks,
/// and key. Piece lists are unordered, and neither the history stack nor the
/// move cache affect the position itself.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        if self.pieces != other.pieces
            || self.side != other.side
            || self.castle_perm != other.castle_perm
            || self.ep_sq != other.ep_sq
            || self.fifty_move_counter != other.fifty_move_counter
            || self.half_move_counter != other.half_move_counter
            || self.key != other.key
            || self.piece_num != other.piece_num
        {
            return false;
        }
        for piece in 0..N_PIECE_IDS {
            let count = self.piece_num[piece] as usize;
            let mut ours = self.piece_list[piece];
            let mut theirs = other.piece_list[piece];
            ours[..count].sort_unstable();
            theirs[..count].sort_unstable();
            if ours[..count] != theirs[..count] {
                return false;
            }
        }
        true
    }
}

impl Eq for Board {}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "+---- BOARD ----+")?;
        for rank in (0..8).rev() {
            write!(f, "|")?;
            for file in 0..8 {
                let sq = filerank_to_square(file, rank);
                write!(f, "{}|", char_from_piece(self.pieces[sq as usize]))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "+---------------+")?;
        writeln!(f, "TO MOVE: {}", colour_name(self.side))?;
        writeln!(f, "EN PASS: {}", square_name(self.ep_sq).unwrap_or("-"))?;
        writeln!(f, "FIFTY  : {}", self.fifty_move_counter)?;
        writeln!(f, "MOVE#  : {}", self.full_move())?;
        writeln!(f, "HALF#  : {}", self.half_move_counter)?;
        writeln!(f, "HASH   : {:016x}", self.key)?;
        writeln!(f, "FEN    : {}", self.fen())?;
        if let Some(last) = self.last_move() {
            writeln!(f, "LAST MV: {last}")?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{self}")?;
        writeln!(f, "castling: {:04b}", self.castle_perm)?;
        writeln!(f, "history depth: {}", self.history.len())
    }
}

mod tests {
    #![allow(unused_imports, dead_code)]
    use super::*;
    use crate::definitions::{C5, C6, C7, D4, D5, D7, E2, E3, E4, F2, F3, F6};
    use crate::piece::{BN, BP, WN, WP, WR};

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const TALKCHESS: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    #[test]
    fn read_fen_validity() {
        let mut board_1 = Board::new();
        board_1.set_from_fen(STARTING_FEN).expect("setfen failed");
        board_1.check_validity().unwrap();

        let board_2 = Board::from_fen(STARTING_FEN).expect("setfen failed");
        board_2.check_validity().unwrap();

        assert_eq!(board_1, board_2);
        assert_eq!(board_1.turn(), WHITE);
        assert_eq!(board_1.full_move(), 1);
        assert_eq!(board_1.piece_at(E2), WP);
        assert_eq!(board_1.piece_at(E4), EMPTY);
    }

    #[test]
    fn fen_round_trip() {
        for fen in [
            STARTING_FEN,
            KIWIPETE,
            TALKCHESS,
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2",
        ] {
            let board = Board::from_fen(fen).expect("setfen failed");
            assert_eq!(board.fen(), fen);
            let reparsed = Board::from_fen(&board.fen()).expect("setfen failed");
            assert_eq!(board, reparsed);
            assert_eq!(board.hash(), reparsed.hash());
        }
    }

    #[test]
    fn en_passant_target_elided_without_a_capturer() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .expect("setfen failed");
        assert_eq!(board.ep_square(), NO_SQUARE);
        assert!(board.fen().contains(" - "));
    }

    #[test]
    fn en_passant_target_kept_with_a_capturer() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2")
                .expect("setfen failed");
        assert_eq!(board.ep_square(), E3);
        let ep_capture = Move::en_passant(D4, E3, BP);
        assert!(board.legal_moves().contains(&ep_capture));
    }

    #[test]
    fn rejects_malformed_fens() {
        use FenParseError::{
            BoardSegments, DuplicateKings, InvalidEnPassantRank, InvalidSide, MissingCastling,
            PawnsOnBackranks, UnexpectedCharacter,
        };
        let cases: &[(&str, FenParseError)] = &[
            ("bad w - - 0 1", BoardSegments(1)),
            ("8/8/8/8/8/8/8 w - - 0 1", BoardSegments(7)),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
                UnexpectedCharacter('X'),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNK w KQkq - 0 1",
                DuplicateKings(WHITE),
            ),
            ("P7/8/8/8/8/8/8/k6K w - - 0 1", PawnsOnBackranks),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
                InvalidSide("x".to_string()),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
                InvalidEnPassantRank {
                    square: "e4".to_string(),
                    side: WHITE,
                },
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
                MissingCastling,
            ),
        ];
        for (fen, expected) in cases {
            match Board::from_fen(fen) {
                Err(PositionError::Fen(err)) => assert_eq!(&err, expected, "for {fen}"),
                other => panic!("expected Fen error for {fen}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_position_with_waiting_king_in_check() {
        assert_eq!(
            Board::from_fen("k6R/8/8/8/8/8/8/K7 w - - 0 1"),
            Err(PositionError::Illegal(IllegalPosition::WaitingInCheck))
        );
    }

    #[test]
    fn make_unmake_restores_the_position() {
        for fen in [
            STARTING_FEN,
            KIWIPETE,
            TALKCHESS,
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2",
        ] {
            let mut board = Board::from_fen(fen).expect("setfen failed");
            let before = board.clone();
            let moves = board.pseudo_moves();
            for &m in &moves {
                board.make_move(m);
                board.unmake_move();
                assert_eq!(board, before, "{m} did not unmake cleanly on {fen}");
                assert_eq!(board.hash(), before.hash());
                assert_eq!(board.history_depth(), before.history_depth());
            }
        }
    }

    #[test]
    fn incremental_key_tracks_recomputation() {
        let mut board = Board::default();
        let line = [
            Move::double_pawn(E2, E4, WP),
            Move::double_pawn(D7, D5, BP),
            Move::capture(E4, D5, WP, BP),
            Move::quiet(G8, F6, BN),
            Move::quiet(G1, F3, WN),
        ];
        for m in line {
            assert!(board.make_move(m), "{m} should be legal");
            assert_eq!(board.hash(), board.generate_pos_key());
        }
        assert_eq!(board.history_depth(), line.len());
        for _ in line {
            board.unmake_move();
            assert_eq!(board.hash(), board.generate_pos_key());
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn double_pawn_move_sets_the_en_passant_square() {
        let mut board = Board::default();
        assert!(board.make_move(Move::double_pawn(E2, E4, WP)));
        assert_eq!(board.ep_square(), E3);
        assert!(board.make_move(Move::double_pawn(C7, C5, BP)));
        assert_eq!(board.ep_square(), C6);
    }

    #[test]
    fn legal_moves_are_exactly_the_accepted_pseudo_moves() {
        for fen in [STARTING_FEN, KIWIPETE, TALKCHESS] {
            let mut board = Board::from_fen(fen).expect("setfen failed");
            let pseudo = board.pseudo_moves();
            let legal = board.legal_moves();
            for &m in &pseudo {
                let accepted = board.make_move(m);
                board.unmake_move();
                assert_eq!(accepted, legal.contains(&m), "{m} on {fen}");
            }
            assert!(legal.iter().all(|m| pseudo.contains(*m)));
        }
    }

    #[test]
    fn legal_moves_never_leave_the_mover_in_check() {
        let mut board = Board::from_fen(KIWIPETE).expect("setfen failed");
        let mover = board.turn();
        for m in board.legal_moves() {
            assert!(board.make_move(m));
            assert!(!board.sq_attacked(board.king_square(mover), board.turn()));
            board.unmake_move();
        }
    }

    #[test]
    fn kiwipete_offers_both_white_castles() {
        let mut board = Board::from_fen(KIWIPETE).expect("setfen failed");
        let legal = board.legal_moves();
        assert!(legal.contains(&Move::castle(E1, G1, WK, MoveFlag::CastleShort)));
        assert!(legal.contains(&Move::castle(E1, C1, WK, MoveFlag::CastleLong)));
    }

    #[test]
    fn castling_round_trips_through_make_unmake() {
        let mut board = Board::from_fen(KIWIPETE).expect("setfen failed");
        let before = board.clone();
        assert!(board.make_move(Move::castle(E1, G1, WK, MoveFlag::CastleShort)));
        assert_eq!(board.piece_at(G1), WK);
        assert_eq!(board.piece_at(F1), WR);
        assert_eq!(board.piece_at(E1), EMPTY);
        assert_eq!(board.piece_at(H1), EMPTY);
        assert_eq!(board.castle_perm() & (WKCA | WQCA), 0);
        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn capturing_a_home_rook_cancels_the_castling_right() {
        let mut board =
            Board::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R b KQ - 1 8")
                .expect("setfen failed");
        assert!(board.make_move(Move::capture(F2, H1, BN, WR)));
        assert_eq!(board.castle_perm() & WKCA, 0);
        assert!(board.legal_moves().iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn hard_draw_clock_empties_move_generation() {
        let mut board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 76 40")
                .expect("setfen failed");
        assert!(board.is_draw());
        assert!(board.pseudo_moves().is_empty());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn detects_mates_and_stalemates() {
        let mut quiet = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1").unwrap();
        assert!(!quiet.is_checkmate());
        assert!(!quiet.is_stalemate());

        // back-rank mate
        let mut mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(mated.is_checkmate());
        assert!(!mated.is_stalemate());

        // the classic corner stalemate
        let mut stale = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());
    }
}

