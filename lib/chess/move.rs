use crate::chess::{Coord, ParseSquareError, Square};
use derive_more::{Constructor, Display, Error, From};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;
use tracing::instrument;

/// A chess move, from one pair of coordinates to another.
///
/// A move says nothing about the piece being moved nor whether it is legal,
/// both of which depend on the board it is played on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor, Arbitrary)]
pub struct Move {
    pub whence: Coord,
    pub whither: Coord,
}

impl Move {
    /// Whether both endpoints of this move are on the board.
    #[inline(always)]
    pub fn is_within_board(&self) -> bool {
        self.whence.is_within_board() && self.whither.is_within_board()
    }

    /// The source and destination [`Square`]s, if this move is [within the board].
    ///
    /// [within the board]: `Move::is_within_board`
    #[inline(always)]
    pub fn squares(&self) -> Option<(Square, Square)> {
        Some((self.whence.try_into().ok()?, self.whither.try_into().ok()?))
    }
}

impl From<(Square, Square)> for Move {
    #[inline(always)]
    fn from((whence, whither): (Square, Square)) -> Self {
        Move::new(whence.into(), whither.into())
    }
}

/// Prints the move as a pair of square labels, e.g. `e2 e4`.
///
/// Moves that leave the board are printed as raw coordinates instead.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.squares() {
            Some((whence, whither)) => write!(f, "{} {}", whence, whither),
            None => write!(f, "{} {}", self.whence, self.whither),
        }
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "expected a pair of squares, e.g. `e2 e4`")]
    #[from(ignore)]
    InvalidSyntax,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    #[instrument(level = "trace", err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();
        let (whence, whither) = match &tokens[..] {
            [whence, whither] => (*whence, *whither),
            [m] if m.is_ascii() && m.len() == 4 => m.split_at(2),
            _ => return Err(ParseMoveError::InvalidSyntax),
        };

        let whence: Square = whence.parse()?;
        let whither: Square = whither.parse()?;
        Ok((whence, whither).into())
    }
}
