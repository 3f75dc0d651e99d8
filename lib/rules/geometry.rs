use crate::chess::{Board, Color, Role, Square};
use crate::rules::{path_is_clear, Rejection};

/// The row delta of a single pawn step for the given [`Color`].
///
/// White pawns advance towards row 0, black pawns towards row 7.
pub fn pawn_direction(side: Color) -> i8 {
    match side {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The row on which pawns of the given [`Color`] start the game.
pub fn pawn_home_row(side: Color) -> i8 {
    match side {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Whether the piece on `whence` may move to `whither` according to its own movement rules.
///
/// Whether the move leaves the mover's king in check is not taken into account,
/// nor whether `whither` holds a piece of the same color, except for pawns,
/// which may only advance onto empty squares and only capture opposing pieces.
pub fn is_pseudo_legal(board: &Board, whence: Square, whither: Square) -> bool {
    pseudo_legality(board, whence, whither).is_ok()
}

/// Like [`is_pseudo_legal`], but tells why the move is rejected.
pub fn pseudo_legality(board: &Board, whence: Square, whither: Square) -> Result<(), Rejection> {
    if !whence.is_valid() || !whither.is_valid() {
        return Err(Rejection::InvalidSquare);
    }

    let piece = board.piece_on(whence).ok_or(Rejection::EmptySquare)?;
    let (dr, dc) = whither - whence;

    let shaped = match piece.role() {
        Role::Pawn => return pawn(board, piece.color(), whence, whither),
        Role::Knight => (dr * dc).abs() == 2,
        Role::King => dr.abs().max(dc.abs()) == 1,
        Role::Rook => (dr == 0) != (dc == 0),
        Role::Bishop => dr != 0 && dr.abs() == dc.abs(),
        Role::Queen => (dr == 0) != (dc == 0) || (dr != 0 && dr.abs() == dc.abs()),
    };

    if !shaped {
        Err(Rejection::IllegalGeometry)
    } else if piece.role().is_slider() && !path_is_clear(board, whence, whither) {
        Err(Rejection::BlockedPath)
    } else {
        Ok(())
    }
}

fn pawn(board: &Board, side: Color, whence: Square, whither: Square) -> Result<(), Rejection> {
    let forward = pawn_direction(side);
    let (dr, dc) = whither - whence;

    if dc == 0 && dr == forward {
        if board.is_empty(whither) {
            Ok(())
        } else {
            Err(Rejection::BlockedPath)
        }
    } else if dc == 0 && dr == 2 * forward && whence.row() == pawn_home_row(side) {
        if board.is_empty(whence.offset(forward, 0)) && board.is_empty(whither) {
            Ok(())
        } else {
            Err(Rejection::BlockedPath)
        }
    } else if dc.abs() == 1 && dr == forward && board.owned_by(whither, !side) {
        Ok(())
    } else {
        Err(Rejection::IllegalGeometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Piece;
    use crate::rules::{between, is_aligned};
    use test_strategy::proptest;

    fn lone(c: Color, r: Role, sq: Square) -> Board {
        let mut board = Board::empty();
        board.set(sq, Piece::new(c, r));
        board
    }

    #[proptest]
    fn moving_nothing_is_rejected(b: Board, whence: Square, whither: Square) {
        if b.is_empty(whence) {
            assert_eq!(
                pseudo_legality(&b, whence, whither),
                Err(Rejection::EmptySquare)
            );
        }
    }

    #[proptest]
    fn standing_still_is_not_a_move(mut b: Board, sq: Square, p: Piece) {
        b.set(sq, p);
        assert!(!is_pseudo_legal(&b, sq, sq));
    }

    #[proptest]
    fn squares_off_the_board_are_rejected(
        b: Board,
        sq: Square,
        row: i8,
        #[filter(!Square::new(#row, #col).is_valid())] col: i8,
    ) {
        let off = Square::new(row, col);
        assert_eq!(pseudo_legality(&b, off, sq), Err(Rejection::InvalidSquare));
        assert_eq!(pseudo_legality(&b, sq, off), Err(Rejection::InvalidSquare));
    }

    #[proptest]
    fn king_moves_one_square_in_any_direction(c: Color, whence: Square, whither: Square) {
        let (dr, dc) = whither - whence;
        assert_eq!(
            is_pseudo_legal(&lone(c, Role::King, whence), whence, whither),
            dr.abs().max(dc.abs()) == 1
        );
    }

    #[proptest]
    fn knight_moves_in_l_shape_regardless_of_surrounding_pieces(
        mut b: Board,
        c: Color,
        whence: Square,
        whither: Square,
    ) {
        b.set(whence, Piece::new(c, Role::Knight));
        let (dr, dc) = whither - whence;
        assert_eq!(is_pseudo_legal(&b, whence, whither), (dr * dc).abs() == 2);
    }

    #[proptest]
    fn knight_jumps_over_the_initial_pawn_wall() {
        let board = Board::default();
        assert!(is_pseudo_legal(&board, "b1".parse()?, "c3".parse()?));
        assert!(is_pseudo_legal(&board, "g8".parse()?, "f6".parse()?));
        assert!(!is_pseudo_legal(&board, "b1".parse()?, "b3".parse()?));
    }

    #[proptest]
    fn rook_moves_along_rows_and_columns(c: Color, whence: Square, whither: Square) {
        let (dr, dc) = whither - whence;
        assert_eq!(
            is_pseudo_legal(&lone(c, Role::Rook, whence), whence, whither),
            whence != whither && (dr == 0 || dc == 0)
        );
    }

    #[proptest]
    fn bishop_moves_along_diagonals(c: Color, whence: Square, whither: Square) {
        let (dr, dc) = whither - whence;
        assert_eq!(
            is_pseudo_legal(&lone(c, Role::Bishop, whence), whence, whither),
            whence != whither && dr.abs() == dc.abs()
        );
    }

    #[proptest]
    fn queen_moves_like_rook_or_bishop(c: Color, whence: Square, whither: Square) {
        assert_eq!(
            is_pseudo_legal(&lone(c, Role::Queen, whence), whence, whither),
            whence != whither && is_aligned(whence, whither)
        );
    }

    #[proptest]
    fn sliders_require_a_clear_path(
        mut b: Board,
        c: Color,
        #[strategy(proptest::sample::select(vec![Role::Bishop, Role::Rook, Role::Queen]))] r: Role,
        whence: Square,
        whither: Square,
    ) {
        b.set(whence, Piece::new(c, r));
        let clear = between(whence, whither).all(|sq| b.is_empty(sq));
        let shaped = is_pseudo_legal(&lone(c, r, whence), whence, whither);
        assert_eq!(is_pseudo_legal(&b, whence, whither), shaped && clear);

        if shaped && !clear {
            assert_eq!(
                pseudo_legality(&b, whence, whither),
                Err(Rejection::BlockedPath)
            );
        }
    }

    #[proptest]
    fn pawn_advances_one_square_onto_an_empty_square(
        c: Color,
        #[strategy(1i8..7)] row: i8,
        #[strategy(0i8..8)] col: i8,
    ) {
        let whence = Square::new(row, col);
        let whither = whence.offset(pawn_direction(c), 0);
        let mut board = lone(c, Role::Pawn, whence);
        assert!(is_pseudo_legal(&board, whence, whither));

        board.set(whither, Piece::new(!c, Role::Knight));
        assert_eq!(
            pseudo_legality(&board, whence, whither),
            Err(Rejection::BlockedPath)
        );
    }

    #[proptest]
    fn pawn_never_moves_backwards_or_sideways(
        c: Color,
        #[strategy(1i8..7)] row: i8,
        #[strategy(1i8..7)] col: i8,
    ) {
        let whence = Square::new(row, col);
        let board = lone(c, Role::Pawn, whence);
        let back = -pawn_direction(c);

        for whither in [whence.offset(back, 0), whence.offset(0, 1), whence.offset(0, -1)] {
            assert!(!is_pseudo_legal(&board, whence, whither));
        }
    }

    #[proptest]
    fn pawn_advances_two_squares_only_from_its_home_row(
        c: Color,
        #[strategy(1i8..7)] row: i8,
        #[strategy(0i8..8)] col: i8,
    ) {
        let whence = Square::new(row, col);
        let whither = whence.offset(2 * pawn_direction(c), 0);
        let board = lone(c, Role::Pawn, whence);

        assert_eq!(
            is_pseudo_legal(&board, whence, whither),
            row == pawn_home_row(c)
        );
    }

    #[proptest]
    fn pawn_double_step_requires_both_squares_to_be_empty(
        c: Color,
        #[strategy(0i8..8)] col: i8,
        #[strategy(1i8..3)] blocked: i8,
        p: Piece,
    ) {
        let whence = Square::new(pawn_home_row(c), col);
        let whither = whence.offset(2 * pawn_direction(c), 0);
        let mut board = lone(c, Role::Pawn, whence);
        board.set(whence.offset(blocked * pawn_direction(c), 0), p);

        assert_eq!(
            pseudo_legality(&board, whence, whither),
            Err(Rejection::BlockedPath)
        );
    }

    #[proptest]
    fn pawn_captures_diagonally_forward_only_opposing_pieces(
        c: Color,
        #[strategy(1i8..7)] row: i8,
        #[strategy(1i8..7)] col: i8,
        r: Role,
        #[strategy(proptest::sample::select(vec![-1i8, 1]))] side: i8,
    ) {
        let whence = Square::new(row, col);
        let whither = whence.offset(pawn_direction(c), side);
        let mut board = lone(c, Role::Pawn, whence);
        assert!(!is_pseudo_legal(&board, whence, whither));

        board.set(whither, Piece::new(c, r));
        assert!(!is_pseudo_legal(&board, whence, whither));

        board.set(whither, Piece::new(!c, r));
        assert!(is_pseudo_legal(&board, whence, whither));

        let behind = whence.offset(-pawn_direction(c), side);
        board.set(behind, Piece::new(!c, r));
        assert!(!is_pseudo_legal(&board, whence, behind));
    }

    #[proptest]
    fn pawns_advance_towards_the_opponent() {
        let board = Board::default();
        assert!(is_pseudo_legal(&board, "e2".parse()?, "e4".parse()?));
        assert!(is_pseudo_legal(&board, "e7".parse()?, "e5".parse()?));
        assert!(!is_pseudo_legal(&board, "e2".parse()?, "e5".parse()?));
    }
}
