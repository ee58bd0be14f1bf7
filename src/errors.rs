use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("FEN string is missing board part")]
    MissingBoard,
    #[error("board part of FEN has {0} segments, expected 8")]
    BoardSegments(usize),
    #[error("wrong number of squares in board segment {0}")]
    BadSquaresInSegment(usize),
    #[error("adjacent digits in board segment are not allowed")]
    AdjacentDigits,
    #[error("unexpected character in piece placement: '{0}'")]
    UnexpectedCharacter(char),
    #[error("more than {max} pieces of type '{piece}'")]
    TooManyPieces { piece: char, max: usize },
    #[error("{} king is missing", colour_str(*.0))]
    MissingKing(u8),
    #[error("more than one {} king", colour_str(*.0))]
    DuplicateKings(u8),
    #[error("pawns present on backranks")]
    PawnsOnBackranks,
    #[error("expected side part")]
    MissingSide,
    #[error("expected side to be 'w' or 'b', got \"{0}\"")]
    InvalidSide(String),
    #[error("expected castling part")]
    MissingCastling,
    #[error("invalid castling format: \"{0}\"")]
    InvalidCastling(String),
    #[error("expected en passant part")]
    MissingEnPassant,
    #[error("invalid en passant square: \"{0}\"")]
    InvalidEnPassant(String),
    #[error("invalid en passant rank for square \"{square}\" with {} to move", colour_str(*.side))]
    InvalidEnPassantRank { square: String, side: u8 },
    #[error("expected halfmove clock part")]
    MissingHalfmoveClock,
    #[error("invalid halfmove clock: \"{0}\"")]
    InvalidHalfmoveClock(String),
    #[error("expected fullmove number part")]
    MissingFullmoveNumber,
    #[error("invalid fullmove number: \"{0}\"")]
    InvalidFullmoveNumber(String),
    #[error("unexpected extra tokens after fullmove number")]
    ExtraTokens,
}

fn colour_str(colour: u8) -> &'static str {
    if colour == crate::definitions::WHITE {
        "white"
    } else {
        "black"
    }
}

/// The FEN parsed, but the position it describes cannot arise in a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalPosition {
    #[error("waiting player's king in check")]
    WaitingInCheck,
}

/// Errors that can occur when constructing a board from a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("failed to parse FEN: {0}")]
    Fen(#[from] FenParseError),
    #[error("illegal position: {0}")]
    Illegal(#[from] IllegalPosition),
}

/// A board self-check failed. This is a bug in the move-making machinery,
/// not in caller input; callers are expected to treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("board invariant violated: {0}")]
pub struct InvariantViolation(pub String);
