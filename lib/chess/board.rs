use crate::chess::{Color, File, InvalidPiece, Piece, Rank, Role, Square};
use derive_more::{Display, Error, From};
use std::convert::TryFrom;
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The chess board.
///
/// This type does not validate whether the pieces it holds make up a position
/// that is reachable according to the rules of chess; it may even lack kings.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        vec![any::<Option<Piece>>(); 64]
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

/// The standard starting position.
impl Default for Board {
    fn default() -> Self {
        use Role::*;

        const BACK_RANK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();

        for (col, &role) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::Black(role));
            board.squares[1][col] = Some(Piece::Black(Pawn));
            board.squares[6][col] = Some(Piece::White(Pawn));
            board.squares[7][col] = Some(Piece::White(role));
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The [`Piece`] on the given [`Square`], if any.
    ///
    /// # Panics
    ///
    /// Panics if the square does not lie on the board.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    /// Whether no piece stands on `sq`.
    pub fn is_empty(&self, sq: Square) -> bool {
        self[sq].is_none()
    }

    /// Whether a piece of the given [`Color`] stands on `sq`.
    pub fn owned_by(&self, sq: Square, side: Color) -> bool {
        self[sq].map_or(false, |p| p.color() == side)
    }

    /// Whether `sq` is either empty or holds a piece of the opponent of `side`.
    ///
    /// These are the squares a piece of `side` may move into.
    pub fn is_empty_or_opposing(&self, sq: Square, side: Color) -> bool {
        self[sq].map_or(true, |p| p.color() != side)
    }

    /// Places a [`Piece`] on `sq`, replacing whatever stood there.
    pub fn set(&mut self, sq: Square, p: Piece) {
        *self.get_mut(sq) = Some(p);
    }

    /// Removes the piece on `sq`, if any, and returns it.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.get_mut(sq).take()
    }

    /// Moves whatever stands on `whence` onto `whither`, returning the piece it displaced.
    ///
    /// No rules are enforced.
    pub fn relocate(&mut self, whence: Square, whither: Square) -> Option<Piece> {
        let moving = self.clear(whence);
        std::mem::replace(self.get_mut(whither), moving)
    }

    /// An iterator over all pieces on the board, row by row starting at `a8`.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| Some((sq, self[sq]?)))
    }

    /// The [`Square`] occupied by the king of the given [`Color`], if any.
    pub fn king(&self, side: Color) -> Option<Square> {
        self.iter()
            .find(|&(_, p)| p == Piece::new(side, Role::King))
            .map(|(sq, _)| sq)
    }

    fn get_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        assert!(sq.is_valid(), "square {} is off the board", sq);
        &mut self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// The piece placement field of the FEN notation.
    fn placement(&self) -> String {
        let mut buffer = String::with_capacity(71);

        for (row, cells) in self.squares.iter().enumerate() {
            if row > 0 {
                buffer.push('/');
            }

            let mut skip = 0;
            for cell in cells {
                match cell {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            buffer.push(char::from(b'0' + skip));
                            skip = 0;
                        }

                        buffer.push(char::from(*p));
                    }
                }
            }

            if skip > 0 {
                buffer.push(char::from(b'0' + skip));
            }
        }

        buffer
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
///
/// # Panics
///
/// Panics if the square does not lie on the board.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        assert!(sq.is_valid(), "square {} is off the board", sq);
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

/// Renders the board with rank `8` on top, figurines if formatted with `{:#}`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_files(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for (rank, cells) in Rank::iter().zip(&self.squares) {
            write!(f, " {} |", rank)?;

            for cell in cells {
                match cell {
                    Some(p) if f.alternate() => write!(f, " {:#} |", p)?,
                    Some(p) => write!(f, " {} |", p)?,
                    None => f.write_str("   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write_files(f)
    }
}

fn write_files(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("   ")?;
    for file in File::iter() {
        write!(f, "  {} ", file)?;
    }

    f.write_char('\n')
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 ranks separated by `/`")]
    #[from(ignore)]
    WrongRankCount,

    #[display(fmt = "expected 8 squares on row {}", row)]
    #[from(ignore)]
    WrongRankLength { row: usize },

    #[display(fmt = "failed to parse board; {}", _0)]
    InvalidPiece(InvalidPiece),
}

/// Parses the piece placement field of the FEN notation, e.g. `8/8/8/4k3/8/8/8/4K3`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseBoardError::*;

        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(WrongRankCount);
        }

        let mut board = Board::empty();
        for (row, text) in rows.into_iter().enumerate() {
            let mut col = 0;
            for c in text.chars() {
                match c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    Some(n) => col += n as usize,
                    None if col < 8 => {
                        board.squares[row][col] = Some(Piece::try_from(c)?);
                        col += 1;
                    }
                    None => return Err(WrongRankLength { row }),
                }
            }

            if col != 8 {
                return Err(WrongRankLength { row });
            }
        }

        Ok(board)
    }
}
