use crate::chess::{Board, Color, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

mod attack;
mod geometry;
mod path;

pub use attack::*;
pub use geometry::*;
pub use path::*;

/// The reason why a move was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Rejection {
    #[display(fmt = "square is off the board")]
    InvalidSquare,

    #[display(fmt = "there is no piece to move")]
    EmptySquare,

    #[display(fmt = "the piece belongs to the opponent")]
    NotYourPiece,

    #[display(fmt = "the destination holds a piece of the same color")]
    OwnPieceCaptured,

    #[display(fmt = "the piece does not move that way")]
    IllegalGeometry,

    #[display(fmt = "the path is blocked")]
    BlockedPath,

    #[display(fmt = "the king would be left in check")]
    KingInCheck,
}

/// Moves the piece on `whence` to `whither` if that is legal for the side to move,
/// otherwise returns the reason why not.
///
/// A rejected move leaves the board untouched. A piece standing on `whither`
/// is captured and discarded.
#[instrument(level = "trace", ret)]
pub fn try_move(
    board: &mut Board,
    whence: Square,
    whither: Square,
    turn: Color,
) -> Result<(), Rejection> {
    if !whence.is_valid() || !whither.is_valid() {
        return Err(Rejection::InvalidSquare);
    }

    let piece = board.piece_on(whence).ok_or(Rejection::EmptySquare)?;

    if piece.color() != turn {
        return Err(Rejection::NotYourPiece);
    }

    if !board.is_empty_or_opposing(whither, turn) {
        return Err(Rejection::OwnPieceCaptured);
    }

    pseudo_legality(board, whence, whither)?;

    let mut next = *board;
    next.relocate(whence, whither);
    if is_in_check(&next, turn) {
        return Err(Rejection::KingInCheck);
    }

    match board.relocate(whence, whither) {
        Some(captured) => debug!(%piece, %whence, %whither, %captured, "capture"),
        None => debug!(%piece, %whence, %whither, "move"),
    }

    Ok(())
}

/// Moves the piece on `whence` to `whither` if that is legal for the side to move.
///
/// Returns whether the move was applied, see [`try_move`].
pub fn attempt_move(board: &mut Board, whence: Square, whither: Square, turn: Color) -> bool {
    try_move(board, whence, whither, turn).is_ok()
}
