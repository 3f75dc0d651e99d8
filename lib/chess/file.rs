use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::convert::{TryFrom, TryInto};
use std::{char::ParseCharError, fmt, str::FromStr};

#[cfg(test)]
use proptest::sample::select;

/// A column of the board, labeled `a` through `h` from white's left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct File(#[cfg_attr(test, strategy(select(sm::File::ALL.as_ref())))] sm::File);

impl File {
    /// Constructs [`File`] from a board column.
    ///
    /// Returns `None` if `col` is not in the range (0..=7).
    pub fn from_col(col: i8) -> Option<Self> {
        u8::try_from(col).ok()?.try_into().ok().map(File)
    }

    /// The board column of this file, `a` being column 0.
    pub fn col(&self) -> i8 {
        u8::from(self.0) as i8
    }

    /// Returns an iterator over [`File`]s from `a` to `h`.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::File::ALL.into_iter().map(File)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&char::from(*self), f)
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse file")]
pub enum ParseFileError {
    ParseCharError(ParseCharError),
    InvalidFile(InvalidFile),
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`File`] from a character failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected lower case letter in the range `('a'..='h')`")]
pub struct InvalidFile;

impl TryFrom<char> for File {
    type Error = InvalidFile;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        sm::File::from_char(c).map(File).ok_or(InvalidFile)
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        f.0.char()
    }
}

#[doc(hidden)]
impl From<sm::File> for File {
    fn from(f: sm::File) -> Self {
        File(f)
    }
}

#[doc(hidden)]
impl From<File> for sm::File {
    fn from(f: File) -> Self {
        f.0
    }
}
