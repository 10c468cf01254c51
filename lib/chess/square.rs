use derive_more::{Constructor, Display, Error};
use std::ops::Sub;
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A pair of row and column indices that may or may not lie on the board.
///
/// Row 0 is the 8th rank and column 0 is the `a` file.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor, Arbitrary)]
#[display(fmt = "({}, {})", row, col)]
pub struct Coord {
    #[strategy(-2i8..10)]
    pub row: i8,
    #[strategy(-2i8..10)]
    pub col: i8,
}

impl Coord {
    /// Whether both indices lie in the range (0..=7).
    #[inline(always)]
    pub fn is_within_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
}

/// A square on the chess board.
///
/// Unlike [`Coord`], a [`Square`] is always on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub struct Square {
    #[strategy(0u8..8)]
    row: u8,
    #[strategy(0u8..8)]
    col: u8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range (0..=7).
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Square { row, col }
    }

    /// This square's row index, 0 being the 8th rank.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This square's column index, 0 being the `a` file.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `(Δrow, Δcol)` away from this one, if it's on the board.
    #[inline(always)]
    pub fn offset(&self, (dr, dc): (i8, i8)) -> Option<Self> {
        let coord = Coord::new(self.row as i8 + dr, self.col as i8 + dc);
        Square::try_from(coord).ok()
    }

    /// Returns an iterator over all [`Square`]s, row by row from the top of the board.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64u8).map(|i| Square::new(i / 8, i % 8))
    }
}

/// The reason why converting [`Coord`] into [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "coordinates {} are off the board", _0)]
pub struct SquareOutOfRange(#[error(not(source))] pub Coord);

impl TryFrom<Coord> for Square {
    type Error = SquareOutOfRange;

    #[inline(always)]
    fn try_from(c: Coord) -> Result<Self, Self::Error> {
        if c.is_within_board() {
            Ok(Square::new(c.row as u8, c.col as u8))
        } else {
            Err(SquareOutOfRange(c))
        }
    }
}

impl From<Square> for Coord {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Coord::new(sq.row as i8, sq.col as i8)
    }
}

/// The displacement `(Δrow, Δcol)` from `rhs` to `self`.
impl Sub for Square {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.row as i8 - rhs.row as i8,
            self.col as i8 - rhs.col as i8,
        )
    }
}

/// Prints the square's label, e.g. `e4`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{}{}", file, rank)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[display(fmt = "expected a file in the range `('a'..='h')`")]
    InvalidFile,
    #[display(fmt = "expected a rank in the range `('1'..='8')`")]
    InvalidRank,
    #[display(fmt = "expected a file followed by a rank")]
    InvalidSyntax,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [file, rank] = s.as_bytes() else {
            return Err(ParseSquareError::InvalidSyntax);
        };

        if !(b'a'..=b'h').contains(file) {
            return Err(ParseSquareError::InvalidFile);
        }

        if !(b'1'..=b'8').contains(rank) {
            return Err(ParseSquareError::InvalidRank);
        }

        Ok(Square::new(b'8' - rank, file - b'a'))
    }
}
