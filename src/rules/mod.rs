//! Game rules: combat and the rules engine trait.
//!
//! Combat is a pure function of the two ranks and the configuration.
//! `RulesEngine` is the seam a host drives: enumerate legal actions, apply
//! one, check for a winner.

pub mod combat;
pub mod engine;

pub use combat::{attacker_wins, resolve};
pub use engine::{GameResult, RulesEngine};
