use crate::chess::{Board, Color};
use crate::util::Build;
use derive_more::{DebugCustom, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};

mod materialist;

pub use materialist::*;

/// Trait for types that can evaluate a [`Board`].
pub trait Eval {
    /// Evaluates a [`Board`] from the point of view of `player`.
    ///
    /// Positive values favor `player`, negative values favor the opponent.
    fn eval(&self, board: &Board, player: Color) -> i16;
}

/// A generic evaluator.
#[derive(DebugCustom, Clone, From)]
pub enum Dispatcher {
    #[debug(fmt = "{:?}", _0)]
    Materialist(Materialist),
}

impl Default for Dispatcher {
    fn default() -> Self {
        Materialist::default().into()
    }
}

impl Eval for Dispatcher {
    fn eval(&self, board: &Board, player: Color) -> i16 {
        match self {
            Dispatcher::Materialist(e) => e.eval(board, player),
        }
    }
}

/// Runtime configuration for a [`Dispatcher`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Builder {
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Materialist {
        #[serde(default)]
        #[cfg_attr(test, strategy(-100i16..=100))]
        check_bonus: i16,
    },
}

impl Default for Builder {
    fn default() -> Self {
        Builder::Materialist { check_bonus: 0 }
    }
}

/// The reason why parsing [`Builder`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse evaluator configuration")]
pub struct ParseBuilderError(ron::de::SpannedError);

impl FromStr for Builder {
    type Err = ParseBuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Build for Builder {
    type Output = Dispatcher;
    type Error = Infallible;

    fn build(self) -> Result<Self::Output, Self::Error> {
        match self {
            Builder::Materialist { check_bonus } => Ok(Materialist::new(check_bonus).into()),
        }
    }
}
