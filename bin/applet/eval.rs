use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Color;
use lib::eval::{Builder, Eval as _};
use lib::util::Build;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Statically evaluates a board for both players.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Eval {
    /// The board to evaluate, one line of 8 squares per row, defaults to the initial position.
    #[clap(short, long)]
    board: Option<PathBuf>,

    /// The evaluator configuration in RON notation, e.g. `materialist(check_bonus: 1)`.
    #[clap(short, long, default_value_t)]
    evaluator: Builder,
}

impl Eval {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let board = super::load(self.board.as_deref())?;
        let evaluator = self.evaluator.build()?;

        for player in Color::iter() {
            let value = evaluator.eval(&board, player);
            info!(%player, value);
            println!("{player}: {value:+}");
        }

        Ok(())
    }
}
