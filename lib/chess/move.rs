use crate::chess::{ParseSquareError, Square};
use derive_more::{Display, Error};
use std::str::FromStr;

/// A candidate chess move, not necessarily legal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from a pair of source and destination squares.
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseMoveError {
    #[display(fmt = "invalid source square; {}", _0)]
    InvalidFromSquare(ParseSquareError),

    #[display(fmt = "invalid destination square; {}", _0)]
    InvalidToSquare(ParseSquareError),

    #[display(fmt = "expected two squares, e.g. `e2e4` or `e2 e4`")]
    TrailingInput,
}

/// Accepts both `e2e4` and `e2 e4`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let mut tokens = s.split_whitespace();
        let (whence, whither) = match (tokens.next(), tokens.next()) {
            (Some(a), Some(b)) => (a, b),
            (Some(m), None) => m.split_at(m.char_indices().nth(2).map_or(m.len(), |(i, _)| i)),
            (None, _) => ("", ""),
        };

        if tokens.next().is_some() {
            return Err(TrailingInput);
        }

        Ok(Move(
            whence.parse().map_err(InvalidFromSquare)?,
            whither.parse().map_err(InvalidToSquare)?,
        ))
    }
}
