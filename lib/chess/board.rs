use crate::chess::{write_occupant, Color, Move, Piece, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};
use tracing::{instrument, warn};

/// The chess board.
///
/// The board holds nothing but the pieces on it. Whose turn it is and how the
/// game got here are up to the caller to keep track of.
///
/// Since [`Board`] is [`Copy`], every copy of it is independent of the original.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Default for Board {
    /// The initial position.
    fn default() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut rows = [[None; 8]; 8];
        for (col, &role) in BACK.iter().enumerate() {
            rows[0][col] = Some(Piece::new(role, Color::Black));
            rows[1][col] = Some(Piece::new(Pawn, Color::Black));
            rows[6][col] = Some(Piece::new(Pawn, Color::White));
            rows[7][col] = Some(Piece::new(role, Color::White));
        }

        Board(rows)
    }
}

// We provide a custom implementation of Arbitrary rather than deriving,
// so that boards are sparse enough for lines to be open.
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, option::weighted, prelude::*};

        vec(weighted(0.25, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut rows = [[None; 8]; 8];
                rows.iter_mut().flatten().zip(v).for_each(|(s, p)| *s = p);
                Board(rows)
            })
            .boxed()
    }
}

impl Board {
    /// A board without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    /// An iterator over all pieces on the board, row by row from the top.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self[sq]?)))
    }

    /// An iterator over all pieces owned by `player`.
    #[inline(always)]
    pub fn pieces(&self, player: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.is_owned_by(player))
    }

    /// The [`Square`] occupied by the king of `side`, if any.
    ///
    /// If there is more than one, the first one from the top of the board is returned.
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece::new(Role::King, side);
        self.iter().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Moves the piece on the source square to the destination square, leaving the source empty.
    ///
    /// Whatever occupied the destination is removed from the board. No attempt
    /// is made to check whether the move is legal, but moves that leave the
    /// board are ignored.
    pub fn move_piece(&mut self, m: Move) {
        let Some((whence, whither)) = m.squares() else {
            warn!(%m, "ignoring move off the board");
            return;
        };

        let piece = self.0[whence.row() as usize][whence.col() as usize].take();
        self.0[whither.row() as usize][whither.col() as usize] = piece;
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

/// Places pieces on an [empty] board, later pieces replacing earlier ones on the same square.
///
/// [empty]: `Board::empty`
impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(pieces: I) -> Self {
        let mut rows = [[None; 8]; 8];
        for (sq, p) in pieces {
            rows[sq.row() as usize][sq.col() as usize] = Some(p);
        }

        Board(rows)
    }
}

/// Prints the board as 8 lines of 8 characters, from the 8th rank down.
///
/// Empty squares are printed as `.`, white pieces as lowercase letters and black pieces as
/// uppercase letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }

            for &occupant in row {
                write_occupant(f, occupant)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 rows, found {}", _0)]
    InvalidRowCount(#[error(not(source))] usize),
    #[display(fmt = "expected 8 squares in row {}", _0)]
    InvalidRowLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected character `{}` in row {}", _0, _1)]
    InvalidOccupant(char, usize),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument(level = "trace", err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<_> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != 8 {
            return Err(ParseBoardError::InvalidRowCount(lines.len()));
        }

        let mut rows = [[None; 8]; 8];
        for (i, (line, row)) in lines.iter().zip(&mut rows).enumerate() {
            if line.chars().count() != 8 {
                return Err(ParseBoardError::InvalidRowLength(i));
            }

            for (c, square) in line.chars().zip(row) {
                *square = match c {
                    '.' => None,
                    c => match Piece::try_from(c) {
                        Ok(p) => Some(p),
                        Err(_) => return Err(ParseBoardError::InvalidOccupant(c, i)),
                    },
                };
            }
        }

        Ok(Board(rows))
    }
}
