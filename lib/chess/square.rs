use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::{fmt, ops::Sub, str::FromStr};

/// A pair of board coordinates.
///
/// Row 0 is rank `8` and row 7 is rank `1`; column 0 is file `a`.
/// Coordinates are not required to lie on the board, see [`Square::is_valid`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of coordinates, which may lie off the board.
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    pub fn from_coords(file: File, rank: Rank) -> Self {
        Square::new(rank.row(), file.col())
    }

    /// This square's row.
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Whether both coordinates lie in the range (0..=7).
    pub const fn is_valid(&self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.col && self.col < 8
    }

    /// This square's [`File`], if it lies on the board.
    pub fn file(&self) -> Option<File> {
        File::from_col(self.col).filter(|_| self.is_valid())
    }

    /// This square's [`Rank`], if it lies on the board.
    pub fn rank(&self) -> Option<Rank> {
        Rank::from_row(self.row).filter(|_| self.is_valid())
    }

    /// The square `(dr, dc)` away from this one, which may lie off the board.
    pub const fn offset(&self, dr: i8, dc: i8) -> Self {
        Square::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Returns an iterator over all valid squares, row by row starting at `a8`.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

/// The displacement `(Δrow, Δcol)` that takes `rhs` onto `self`.
impl Sub for Square {
    type Output = (i8, i8);

    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.row.wrapping_sub(rhs.row),
            self.col.wrapping_sub(rhs.col),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{}{}", file, rank),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square")]
pub enum ParseSquareError {
    InvalidFile(ParseFileError),
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::from_coords(s[..i].parse()?, s[i..].parse()?))
    }
}
