/// Chess domain types and rules.
pub mod chess;
/// Board evaluation.
pub mod eval;
/// Runtime configuration utilities.
pub mod util;
