use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub struct Piece {
    role: Role,
    color: Color,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline(always)]
    pub const fn new(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece belongs to `player`.
    #[inline(always)]
    pub fn is_owned_by(&self, player: Color) -> bool {
        self.color == player
    }
}

/// Whether the occupant of a square is a piece that belongs to `player`.
///
/// An empty square belongs to neither player.
#[inline(always)]
pub fn is_owned_by(occupant: Option<Piece>, player: Color) -> bool {
    occupant.is_some_and(|p| p.is_owned_by(player))
}

/// Prints the piece as a single letter, lowercase for white and uppercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_char(self.role.letter()),
            Color::Black => f.write_char(self.role.letter().to_ascii_uppercase()),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError;

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };

        let mut buffer = [0; 4];
        match c.to_ascii_lowercase().encode_utf8(&mut buffer).parse() {
            Ok(role) => Ok(Piece::new(role, color)),
            Err(_) => Err(ParsePieceError),
        }
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParsePieceError),
        }
    }
}

/// Writes a single occupant of a square, `.` if empty.
pub(crate) fn write_occupant(f: &mut Formatter<'_>, occupant: Option<Piece>) -> fmt::Result {
    match occupant {
        None => f.write_char('.'),
        Some(p) => write!(f, "{}", p),
    }
}
