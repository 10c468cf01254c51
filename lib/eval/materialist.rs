use crate::chess::{Board, Color, MissingKing, Role};
use crate::eval::Eval;
use derive_more::Constructor;

/// Evaluates boards purely based on piece values.
///
/// Optionally, a bonus is awarded for putting the opponent in check.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Materialist {
    #[cfg_attr(test, strategy(-100i16..=100))]
    check_bonus: i16,
}

impl Materialist {
    const PIECE_VALUE: [i16; 6] = [1, 3, 3, 5, 8, 0];

    /// The value of a piece of a given [`Role`].
    #[inline(always)]
    pub fn value(role: Role) -> i16 {
        Self::PIECE_VALUE[role as usize]
    }

    /// The total value of the pieces owned by `player`.
    pub fn count_material(&self, board: &Board, player: Color) -> i16 {
        board.pieces(player).map(|(_, p)| Self::value(p.role())).sum()
    }

    fn check_bonus(&self, board: &Board, player: Color) -> i16 {
        match board.is_in_check(player) {
            Ok(true) => self.check_bonus,
            Ok(false) | Err(MissingKing(_)) => 0,
        }
    }
}

impl Eval for Materialist {
    fn eval(&self, board: &Board, player: Color) -> i16 {
        let material = self.count_material(board, player) - self.count_material(board, !player);
        material + self.check_bonus(board, !player) - self.check_bonus(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Piece, Square};
    use test_strategy::proptest;

    #[test]
    fn initial_position_has_38_points_of_material_for_each_side() {
        let b = Board::default();
        for c in Color::iter() {
            assert_eq!(Materialist::default().count_material(&b, c), 38);
        }
    }

    #[test]
    fn kings_are_worth_nothing() {
        assert_eq!(Materialist::value(Role::King), 0);
    }

    #[proptest]
    fn initial_position_is_balanced(e: Materialist, c: Color) {
        assert_eq!(e.eval(&Board::default(), c), 0);
    }

    #[proptest]
    fn empty_board_has_no_material(e: Materialist, c: Color) {
        assert_eq!(e.count_material(&Board::empty(), c), 0);
    }

    #[proptest]
    fn material_is_the_sum_of_piece_values(e: Materialist, b: Board, c: Color) {
        let mut material = 0;
        for r in Role::iter() {
            let n = b.pieces(c).filter(|(_, p)| p.role() == r).count() as i16;
            material += n * Materialist::value(r);
        }

        assert_eq!(e.count_material(&b, c), material);
    }

    #[proptest]
    fn evaluation_is_symmetric(e: Materialist, b: Board, c: Color) {
        assert_eq!(e.eval(&b, c), -e.eval(&b, !c));
    }

    #[proptest]
    fn capturing_a_piece_gains_its_value(
        c: Color,
        #[filter(#r != Role::King)] r: Role,
        #[filter(#a != #b)] a: Square,
        b: Square,
    ) {
        let board: Board = [(a, Piece::new(Role::Queen, c)), (b, Piece::new(r, !c))]
            .into_iter()
            .collect();

        let mut next = board;
        next.move_piece((a, b).into());

        let e = Materialist::default();
        assert_eq!(e.eval(&next, c) - e.eval(&board, c), Materialist::value(r));
    }

    #[test]
    fn check_bonus_is_awarded_to_the_checking_side() {
        let b: Board = "
            ....K...
            ........
            ........
            ........
            ....r...
            ........
            ........
            .......k
        "
        .parse()
        .unwrap();

        let e = Materialist::new(2);
        assert_eq!(e.eval(&b, Color::White), 5 + 2);
        assert_eq!(e.eval(&b, Color::Black), -5 - 2);
    }
}
