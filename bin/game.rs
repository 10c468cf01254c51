use crate::player::Player;
use derive_more::{Constructor, Display, Error, From};
use lib::chess::{Board, Color, Outcome};
use std::fmt;
use std::io::{self, Write};
use tracing::{field::display, instrument, warn, Span};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Error, From)]
pub enum GameInterrupted<E> {
    #[display(fmt = "the {} player encountered an error", _0)]
    #[from(ignore)]
    Player(#[error(not(source))] Color, #[error(source)] E),

    #[display(fmt = "failed to write to the terminal")]
    Io(io::Error),
}

/// Renders a [`Board`] with rank numbers and file letters along its edges.
struct Diagram<'a>(&'a Board);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in ('1'..='8').rev().zip(self.0.to_string().lines()) {
            writeln!(f, "{rank}|{row}")?;
        }

        writeln!(f, "  --------")?;
        write!(f, "  abcdefgh")
    }
}

/// Holds the state of a game of chess.
#[derive(Debug, Constructor)]
pub struct Game<P, W> {
    player: P,
    out: W,
}

impl<P: Player, W: Write> Game<P, W> {
    /// Plays a game of chess from the given [`Board`], white to move first.
    ///
    /// The [`Player`] is asked to move for both sides until the game is over.
    #[instrument(level = "debug", skip(self, board), err, fields(%board, outcome))]
    pub fn run(mut self, mut board: Board) -> Result<Outcome, GameInterrupted<P::Error>> {
        let mut turn = Color::White;

        let outcome = loop {
            if let Some(o) = board.outcome(turn) {
                Span::current().record("outcome", display(o));
                break o;
            }

            writeln!(self.out, "{}\n", Diagram(&board))?;

            if board.is_in_check(turn) == Ok(true) {
                writeln!(self.out, "Check!")?;
            }

            writeln!(self.out, "{turn} to play.")?;

            let m = loop {
                let m = self.player.play(&board);
                let m = m.map_err(|e| GameInterrupted::Player(turn, e))?;

                if board.is_move_legal(m, turn) {
                    break m;
                }

                warn!(%m, %turn, "illegal move");
                writeln!(self.out, "That move is illegal, try again.")?;
            };

            board.move_piece(m);
            turn = !turn;
        };

        writeln!(self.out, "{}\n", Diagram(&board))?;
        writeln!(self.out, "Game over: {outcome}")?;
        self.out.flush()?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::MockPlayer;
    use lib::chess::Move;
    use std::str;
    use test_strategy::proptest;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn diagram_labels_ranks_and_files() {
        let expected = [
            "8|RNBQKBNR",
            "7|PPPPPPPP",
            "6|........",
            "5|........",
            "4|........",
            "3|........",
            "2|pppppppp",
            "1|rnbqkbnr",
            "  --------",
            "  abcdefgh",
        ];

        assert_eq!(
            Diagram(&Board::default()).to_string(),
            expected.join("\n")
        );
    }

    #[proptest]
    fn game_ends_immediately_if_it_is_over(
        #[filter(#b.outcome(Color::White).is_some())] b: Board,
    ) {
        let mut out = Vec::new();
        let g = Game::new(MockPlayer::new(), &mut out);
        let expected = b.outcome(Color::White).unwrap();
        assert!(matches!(g.run(b), Ok(o) if o == expected));
    }

    #[proptest]
    fn game_interrupts_if_player_fails_to_move(
        #[filter(#b.outcome(Color::White).is_none())] b: Board,
        e: String,
    ) {
        let mut p = MockPlayer::new();
        p.expect_play().once().return_once({
            let e = e.clone();
            move |_| Err(e)
        });

        let mut out = Vec::new();
        let g = Game::new(p, &mut out);

        assert!(matches!(
            g.run(b),
            Err(GameInterrupted::Player(Color::White, s)) if s == e
        ));
    }

    #[test]
    fn game_asks_again_for_illegal_moves_and_ends_in_checkmate() {
        let mut moves = ["e2 e5", "f2 f3", "e7 e5", "g2 g4", "d8 h4"]
            .map(|m| m.parse::<Move>().unwrap())
            .into_iter();

        let mut p = MockPlayer::new();
        p.expect_play()
            .times(5)
            .returning(move |_| Ok(moves.next().unwrap()));

        let mut out = Vec::new();
        let outcome = Game::new(p, &mut out).run(Board::default()).unwrap();
        assert_eq!(outcome, Outcome::Checkmate(Color::Black));

        let out = str::from_utf8(&out).unwrap();
        assert_eq!(out.matches("That move is illegal").count(), 1);
        assert_eq!(out.matches("white to play.").count(), 2);
        assert_eq!(out.matches("black to play.").count(), 2);
        assert!(out.ends_with(&format!("Game over: {outcome}\n")));
    }

    #[test]
    fn game_announces_check() {
        let b = board("
            ....K...
            ........
            ........
            ........
            ........
            ........
            ...pp...
            R...k...
        ");

        let mut p = MockPlayer::new();
        let mut seq = mockall::Sequence::new();

        p.expect_play()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok("e1 f2".parse().unwrap()));

        p.expect_play()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Err("resigned".into()));

        let mut out = Vec::new();
        let result = Game::new(p, &mut out).run(b);

        assert!(matches!(
            result,
            Err(GameInterrupted::Player(Color::Black, e)) if e == "resigned"
        ));

        let out = str::from_utf8(&out).unwrap();
        assert_eq!(out.matches("Check!").count(), 1);
    }
}
