use crate::{game::Game, io::Io, player::Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Plays a game of chess on the terminal.
///
/// Moves for both sides are read from the standard input as pairs of squares, e.g. `e2 e4`.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The starting board, one line of 8 squares per row, defaults to the initial position.
    #[clap(short, long)]
    board: Option<PathBuf>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let board = super::load(self.board.as_deref())?;
        let player = Terminal::new(Io::new(stdout(), stdin()));
        let outcome = Game::new(player, stdout()).run(board)?;
        info!(%outcome);
        Ok(())
    }
}
