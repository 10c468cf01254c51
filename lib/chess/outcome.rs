use super::Color;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible outcomes of a chess game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    #[display(fmt = "checkmate by the {} player", _0)]
    Checkmate(Color),

    /// The side to move is not in check but has no legal moves.
    ///
    /// [`Board::outcome`][`crate::chess::Board::outcome`] never reports it,
    /// it is reserved for callers that classify positions themselves,
    /// e.g. by looking for [legal moves][`crate::chess::Board::moves`].
    #[display(fmt = "stalemate")]
    Stalemate,

    #[display(fmt = "the {} king is missing", _0)]
    MissingKing(Color),
}

impl Outcome {
    /// Whether the outcome is a draw and neither side has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Checkmate(_) | Outcome::MissingKing(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate(c) => Some(c),
            Outcome::MissingKing(c) => Some(!c),
            Outcome::Stalemate => None,
        }
    }
}
