use lib::chess::{Board, Color, Move, Piece, Square};
use lib::game::Game;
use lib::rules::attempt_move;
use proptest::{collection::vec, prelude::*, sample::Selector};
use shakmaty as sm;
use std::collections::HashSet;
use test_strategy::proptest;

fn to_sm(sq: Square) -> Option<sm::Square> {
    Some(sm::Square::from_coords(sq.file()?.into(), sq.rank()?.into()))
}

fn from_sm(sq: sm::Square) -> Square {
    Square::from_coords(sq.file().into(), sq.rank().into())
}

fn board_of(pos: &sm::Chess) -> Board {
    let mut board = Board::empty();
    for sq in Square::iter() {
        if let Some(p) = to_sm(sq).and_then(|s| sm::Position::board(pos).piece_at(s)) {
            board.set(sq, Piece::new(p.color.into(), p.role.into()));
        }
    }

    board
}

/// Moves other than castling and en passant, which are not supported.
fn is_plain(m: &sm::Move) -> bool {
    matches!(m, sm::Move::Normal { .. })
}

fn legal_moves(game: &Game) -> HashSet<(Square, Square)> {
    Square::iter()
        .flat_map(|whence| Square::iter().map(move |whither| (whence, whither)))
        .filter(|&(whence, whither)| {
            let mut board = *game.board();
            attempt_move(&mut board, whence, whither, game.turn())
        })
        .collect()
}

fn oracle_moves(pos: &sm::Chess) -> HashSet<(Square, Square)> {
    sm::Position::legal_moves(pos)
        .iter()
        .filter(|m| is_plain(m))
        .filter_map(|m| Some((from_sm(m.from()?), from_sm(m.to()))))
        .collect()
}

#[proptest(cases = 64)]
fn legal_moves_agree_with_shakmaty(
    #[strategy(vec(any::<Selector>(), 0..60))] selectors: Vec<Selector>,
) {
    let mut pos = sm::Chess::default();
    let mut game = Game::default();

    for selector in selectors {
        assert_eq!(game.board(), &board_of(&pos));
        assert_eq!(game.turn(), Color::from(sm::Position::turn(&pos)));
        assert_eq!(legal_moves(&game), oracle_moves(&pos));

        let candidates: Vec<_> = sm::Position::legal_moves(&pos)
            .into_iter()
            .filter(|m| matches!(m, sm::Move::Normal { promotion: None, .. }))
            .collect();

        let m = match selector.try_select(candidates) {
            Some(m) => m,
            None => break,
        };

        let (whence, whither) = (from_sm(m.from().unwrap()), from_sm(m.to()));
        assert_eq!(to_sm(whence), m.from());

        assert_eq!(game.execute(Move::new(whence, whither)), Ok(()));
        sm::Position::play_unchecked(&mut pos, &m);
    }
}
