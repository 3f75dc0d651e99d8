use crate::chess::{Board, Color, Move};
use crate::rules::{try_move, Rejection};
use derive_more::{Display, Error};
use tracing::instrument;

/// Represents an illegal [`Move`] and the reason why it was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{}` is illegal; {}", _0, _1)]
pub struct IllegalMove(pub Move, pub Rejection);

/// A game of chess in progress: the board and the side to move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
}

/// The standard starting position, white to move.
impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default(), Color::White)
    }
}

impl Game {
    /// Resumes a game from an arbitrary position.
    pub fn new(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    /// The current position on the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Plays a [`Move`] for the side to move if legal, otherwise returns the reason why not.
    ///
    /// The turn passes to the opponent only if the move was played.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret)]
    pub fn execute(&mut self, m: Move) -> Result<(), IllegalMove> {
        try_move(&mut self.board, m.whence(), m.whither(), self.turn)
            .map_err(|r| IllegalMove(m, r))?;

        self.turn = !self.turn;
        Ok(())
    }
}
