//! The hidden-rank capture game.
//!
//! Two players secretly deploy eight pieces (ranks 0-7) into their two home
//! rows, then take turns stepping one piece one cell orthogonally:
//! - Moving onto an opposing piece fights it; the higher rank wins, ties
//!   go to the attacker, and rank 1 ambushes rank 7
//! - A lost attack is refused and the turn stays
//! - Capturing the opposing flag (rank 0) wins the game

mod engine;

pub use engine::GameEngine;
