use anyhow::{Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::chess::Board;
use std::{fs, path::Path};
use tracing::instrument;

mod eval;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Eval(eval::Eval),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Eval(a) => a.execute(),
        }
    }
}

/// Loads a [`Board`] from a file, or the initial position if none is given.
#[instrument(level = "debug", err)]
fn load(path: Option<&Path>) -> Result<Board, Anyhow> {
    let Some(path) = path else {
        return Ok(Board::default());
    };

    let s = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    s.parse::<Board>()
        .with_context(|| format!("failed to parse board from `{}`", path.display()))
}
