use crate::chess::{Board, Color, Role, Square};
use crate::rules::{is_pseudo_legal, pawn_direction};

/// Whether the piece on `whence` attacks `target`.
///
/// Pawns attack only the two squares diagonally in front of them, whatever stands
/// there. Every other piece attacks the squares it could move to that do not hold
/// a piece of its own color.
pub fn attacks(board: &Board, whence: Square, target: Square) -> bool {
    if !whence.is_valid() || !target.is_valid() {
        return false;
    }

    match board.piece_on(whence) {
        None => false,
        Some(p) if p.role() == Role::Pawn => {
            let (dr, dc) = target - whence;
            dr == pawn_direction(p.color()) && dc.abs() == 1
        }
        Some(p) => {
            is_pseudo_legal(board, whence, target) && board.is_empty_or_opposing(target, p.color())
        }
    }
}

/// Whether any piece of the given [`Color`] attacks `sq`.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    sq.is_valid()
        && board
            .iter()
            .filter(|&(_, p)| p.color() == by)
            .any(|(whence, _)| attacks(board, whence, sq))
}

/// Whether the king of the given [`Color`] is attacked.
///
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    board
        .king(side)
        .map_or(false, |king| is_attacked(board, king, !side))
}
