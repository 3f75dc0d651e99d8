use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::convert::{TryFrom, TryInto};
use std::{char::ParseCharError, fmt, str::FromStr};

#[cfg(test)]
use proptest::sample::select;

/// A row of the board, labeled `1` through `8` from white's side.
///
/// Board rows are counted from black's side, so rank `8` is row 0 and rank `1` is row 7.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Rank(#[cfg_attr(test, strategy(select(sm::Rank::ALL.as_ref())))] sm::Rank);

impl Rank {
    /// Constructs [`Rank`] from a board row.
    ///
    /// Returns `None` if `row` is not in the range (0..=7).
    pub fn from_row(row: i8) -> Option<Self> {
        let index = 7i8.checked_sub(row)?;
        u8::try_from(index).ok()?.try_into().ok().map(Rank)
    }

    /// The board row of this rank, `8` being row 0.
    pub fn row(&self) -> i8 {
        7 - u8::from(self.0) as i8
    }

    /// Returns an iterator over [`Rank`]s from `8` down to `1`, in board row order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::Rank::ALL.into_iter().rev().map(Rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&char::from(*self), f)
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rank")]
pub enum ParseRankError {
    ParseCharError(ParseCharError),
    InvalidRank(InvalidRank),
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`Rank`] from a character failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected digit in the range `('1'..='8')`")]
pub struct InvalidRank;

impl TryFrom<char> for Rank {
    type Error = InvalidRank;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        sm::Rank::from_char(c).map(Rank).ok_or(InvalidRank)
    }
}

impl From<Rank> for char {
    fn from(r: Rank) -> Self {
        r.0.char()
    }
}

#[doc(hidden)]
impl From<sm::Rank> for Rank {
    fn from(r: sm::Rank) -> Self {
        Rank(r)
    }
}

#[doc(hidden)]
impl From<Rank> for sm::Rank {
    fn from(r: Rank) -> Self {
        r.0
    }
}
