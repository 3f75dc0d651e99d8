use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Piece {
    White(Role),
    Black(Role),
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Color`] and [`Role`].
    pub fn new(color: Color, role: Role) -> Self {
        match color {
            Color::White => Piece::White(role),
            Color::Black => Piece::Black(role),
        }
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        match self {
            Piece::White(_) => Color::White,
            Piece::Black(_) => Color::Black,
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        match *self {
            Piece::White(r) | Piece::Black(r) => r,
        }
    }

    fn figurine(&self) -> char {
        match self {
            Piece::White(Role::Pawn) => '♙',
            Piece::White(Role::Knight) => '♘',
            Piece::White(Role::Bishop) => '♗',
            Piece::White(Role::Rook) => '♖',
            Piece::White(Role::Queen) => '♕',
            Piece::White(Role::King) => '♔',
            Piece::Black(Role::Pawn) => '♟',
            Piece::Black(Role::Knight) => '♞',
            Piece::Black(Role::Bishop) => '♝',
            Piece::Black(Role::Rook) => '♜',
            Piece::Black(Role::Queen) => '♛',
            Piece::Black(Role::King) => '♚',
        }
    }
}

/// Upper case for white, lower case for black.
impl From<Piece> for char {
    fn from(p: Piece) -> char {
        match p {
            Piece::White(Role::Pawn) => 'P',
            Piece::White(Role::Knight) => 'N',
            Piece::White(Role::Bishop) => 'B',
            Piece::White(Role::Rook) => 'R',
            Piece::White(Role::Queen) => 'Q',
            Piece::White(Role::King) => 'K',
            Piece::Black(Role::Pawn) => 'p',
            Piece::Black(Role::Knight) => 'n',
            Piece::Black(Role::Bishop) => 'b',
            Piece::Black(Role::Rook) => 'r',
            Piece::Black(Role::Queen) => 'q',
            Piece::Black(Role::King) => 'k',
        }
    }
}

/// The reason why converting [`Piece`] from a character failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `PNBRQK` or `pnbrqk`")]
pub struct InvalidPiece;

impl TryFrom<char> for Piece {
    type Error = InvalidPiece;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let role = c
            .to_ascii_lowercase()
            .to_string()
            .parse::<Role>()
            .map_err(|_| InvalidPiece)?;

        if c.is_ascii_uppercase() {
            Ok(Piece::White(role))
        } else {
            Ok(Piece::Black(role))
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}
