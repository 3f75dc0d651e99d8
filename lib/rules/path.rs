use crate::chess::{Board, Square};

/// Whether `a` and `b` share a row, a column or a diagonal.
pub fn is_aligned(a: Square, b: Square) -> bool {
    let (dr, dc) = b - a;
    dr == 0 || dc == 0 || dr.unsigned_abs() == dc.unsigned_abs()
}

/// The squares strictly between `whence` and `whither`, walking from `whence`.
///
/// Yields nothing if the squares are not [aligned][`is_aligned`], are adjacent,
/// or either of them lies off the board.
pub fn between(whence: Square, whither: Square) -> impl Iterator<Item = Square> {
    let (dr, dc) = whither - whence;
    let n = if whence.is_valid() && whither.is_valid() && is_aligned(whence, whither) {
        dr.abs().max(dc.abs())
    } else {
        0
    };

    (1..n).map(move |i| whence.offset(i * dr.signum(), i * dc.signum()))
}

/// Whether every square strictly between `whence` and `whither` is empty.
///
/// The end points are never inspected. Squares that are not [aligned][`is_aligned`]
/// or do not lie on the board have no clear path between them.
pub fn path_is_clear(board: &Board, whence: Square, whither: Square) -> bool {
    whence.is_valid()
        && whither.is_valid()
        && is_aligned(whence, whither)
        && between(whence, whither).all(|sq| board.is_empty(sq))
}
