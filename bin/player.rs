use crate::io::Io;
use derive_more::Constructor;
use lib::chess::{Board, Move};
use std::io::{self, Read, Write};
use tracing::{instrument, warn};

/// Trait for types that know how to play chess.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Player {
    /// The reason why a move could not be played.
    type Error;

    /// Chooses the next [`Move`] to play on the [`Board`].
    ///
    /// The move is not required to be legal, the caller asks again if it is not.
    fn play(&mut self, board: &Board) -> Result<Move, Self::Error>;
}

/// A human player sitting at a terminal.
#[derive(Debug, Constructor)]
pub struct Terminal<W: Write, R: Read> {
    io: Io<W, R>,
}

impl<W: Write, R: Read> Player for Terminal<W, R> {
    type Error = io::Error;

    #[instrument(level = "debug", skip_all, ret, err)]
    fn play(&mut self, _board: &Board) -> Result<Move, Self::Error> {
        self.io.prompt("Enter move (e.g. e2 e4): ")?;

        loop {
            let line = self.io.recv()?;
            match line.parse::<Move>() {
                Ok(m) => break Ok(m),
                Err(e) => {
                    warn!(%e, %line, "ignoring invalid move");
                    self.io.prompt("Invalid move, try again: ")?;
                }
            }
        }
    }
}
