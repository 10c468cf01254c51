use crate::chess::{direction, is_owned_by, is_valid_movement, line};
use crate::chess::{Board, Color, Move, Outcome, Role, Square};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use test_strategy::Arbitrary;
use tracing::{debug, instrument, warn};

/// Represents a board that is missing the king of a given [`Color`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, Arbitrary)]
#[display(fmt = "there is no {} king on the board", _0)]
pub struct MissingKing(#[error(not(source))] pub Color);

/// The squares of the pieces attacking a given square.
///
/// A square can be attacked from at most 8 lines and 8 knight jumps at once.
pub type Attackers = ArrayVec<Square, 16>;

/// The squares a checking piece attacks the king through, including its own.
pub type AttackLine = ArrayVec<Square, 8>;

const NEIGHBORHOOD: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Whether the source of the move is occupied by a piece that belongs to `turn`.
    ///
    /// Moves that leave the board never start from an owned piece.
    #[inline(always)]
    pub fn is_move_from_own_piece(&self, m: Move, turn: Color) -> bool {
        Square::try_from(m.whence).is_ok_and(|sq| is_owned_by(self[sq], turn))
    }

    /// Whether the destination of the move is either empty or occupied by the opponent.
    ///
    /// Moves that leave the board never have a valid destination.
    #[inline(always)]
    pub fn is_move_to_valid_tile(&self, m: Move, turn: Color) -> bool {
        Square::try_from(m.whither).is_ok_and(|sq| !is_owned_by(self[sq], turn))
    }

    /// Whether `turn` may play the move.
    ///
    /// A move is legal if it is [within the board], [from a piece owned by `turn`],
    /// [to an empty or opponent's square], follows the [movement rule] of the piece
    /// and does not [leave `turn`'s king in check].
    ///
    /// If `turn` has no king on the board, there is no king to leave in check.
    ///
    /// [within the board]: `Move::is_within_board`
    /// [from a piece owned by `turn`]: `Board::is_move_from_own_piece`
    /// [to an empty or opponent's square]: `Board::is_move_to_valid_tile`
    /// [movement rule]: `is_valid_movement`
    /// [leave `turn`'s king in check]: `Board::is_move_into_check`
    pub fn is_move_legal(&self, m: Move, turn: Color) -> bool {
        let Some((whence, whither)) = m.squares() else {
            return false;
        };

        self.is_move_from_own_piece(m, turn)
            && self.is_move_to_valid_tile(m, turn)
            && is_valid_movement(self, whence, whither)
            && match self.is_move_into_check(m, turn) {
                Ok(check) => !check,
                Err(MissingKing(_)) => true,
            }
    }

    /// The squares of every piece of color `attacker` that could move onto `target`.
    ///
    /// Only the [movement rule] of each piece is considered, never whether the move
    /// would be fully legal for its owner.
    ///
    /// [movement rule]: `is_valid_movement`
    pub fn attackers(&self, target: Square, attacker: Color) -> Attackers {
        self.pieces(attacker)
            .filter(|&(sq, _)| is_valid_movement(self, sq, target))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// The squares of every opponent's piece that attacks `player`'s king.
    pub fn checkers(&self, player: Color) -> Result<Attackers, MissingKing> {
        let king = self.king(player).ok_or(MissingKing(player))?;
        Ok(self.attackers(king, !player))
    }

    /// Whether `player`'s king is attacked by at least one of the opponent's pieces.
    pub fn is_in_check(&self, player: Color) -> Result<bool, MissingKing> {
        Ok(!self.checkers(player)?.is_empty())
    }

    /// Whether `player`'s king would be in check after the move is played.
    ///
    /// The move is played on a copy of the board, this board is left untouched.
    pub fn is_move_into_check(&self, m: Move, player: Color) -> Result<bool, MissingKing> {
        let mut next = *self;
        next.move_piece(m);
        next.is_in_check(player)
    }

    /// The squares a piece on `checker` attacks `target` through.
    ///
    /// For sliding pieces that is every square from `checker` up to and including `target`,
    /// for every other piece only `checker` itself, since their attacks cannot be blocked.
    pub fn attack_line(&self, checker: Square, target: Square) -> AttackLine {
        let mut squares = AttackLine::new();
        squares.push(checker);

        if self[checker].is_some_and(|p| p.role().is_slider()) {
            if let Some((step, steps)) = direction(checker, target) {
                squares.extend(line(checker, step, steps));
            }
        }

        squares
    }

    /// An iterator over every legal move `turn` can play.
    pub fn moves(&self, turn: Color) -> impl Iterator<Item = Move> + '_ {
        self.pieces(turn)
            .flat_map(|(whence, _)| {
                Square::iter().map(move |whither| Move::from((whence, whither)))
            })
            .filter(move |&m| self.is_move_legal(m, turn))
    }

    /// Whether the game is over with `player` to move.
    ///
    /// The game is over if `player` is checkmated, that is in check without any legal
    /// king move, capture of the checking piece or interposition to escape it.
    ///
    /// A board without `player`'s king is also considered over, but not being able to move
    /// while not in check is not detected.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn is_game_over(&self, player: Color) -> bool {
        let Some(king) = self.king(player) else {
            warn!(%player, "the king is missing");
            return true;
        };

        let checkers = self.attackers(king, !player);
        if checkers.is_empty() {
            return false;
        }

        let escape = NEIGHBORHOOD
            .iter()
            .filter_map(|&step| king.offset(step))
            .find(|&sq| self.is_move_legal((king, sq).into(), player));

        if let Some(sq) = escape {
            debug!(%king, %sq, "the king can escape");
            return false;
        }

        let [checker] = checkers[..] else {
            debug!(checkers = checkers.len(), "the king cannot escape multiple checks");
            return true;
        };

        let line = self.attack_line(checker, king);
        let defense = self
            .pieces(player)
            .filter(|(_, p)| p.role() != Role::King)
            .flat_map(|(whence, _)| {
                line.iter().map(move |&whither| Move::from((whence, whither)))
            })
            .find(|&m| self.is_move_legal(m, player));

        if let Some(m) = defense {
            debug!(%checker, %m, "the check can be blocked or the checker captured");
            return false;
        }

        true
    }

    /// The [`Outcome`] of the game with `player` to move, if it is [over].
    ///
    /// The game is only ever over by checkmate or a missing king, so this never
    /// returns [`Outcome::Stalemate`].
    ///
    /// [over]: `Board::is_game_over`
    pub fn outcome(&self, player: Color) -> Option<Outcome> {
        match self.is_in_check(player) {
            Err(MissingKing(c)) => Some(Outcome::MissingKing(c)),
            Ok(true) if self.is_game_over(player) => Some(Outcome::Checkmate(!player)),
            Ok(_) => None,
        }
    }
}
