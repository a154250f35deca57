//! # hidden-rank
//!
//! Rules engine for a two-player hidden-rank capture game on a 5 x 6 grid.
//!
//! ## Design Principles
//!
//! 1. **No presentation state**: the engine decides legality, resolves
//!    combat and tracks phase and turn. Rendering and gestures belong to the
//!    caller, which reads `board_snapshot`, `current_player` and `phase`.
//!
//! 2. **Rejections are outcomes**: a rule violation comes back as an
//!    `Outcome` with a `RejectCode` and never changes state. Only
//!    structurally invalid input (a cell index off the board, a rank above 7)
//!    is an `EngineError`.
//!
//! 3. **Owned instances**: every game is its own `GameEngine` value; run as
//!    many as you like.
//!
//! ## Example
//!
//! ```
//! use hidden_rank::{Cell, GameEngine, PieceId, Phase, Player};
//!
//! let mut game = GameEngine::new();
//! let outcome = game.place_piece(PieceId::from_raw(1, 3)?, Cell::new(4)?);
//! assert!(outcome.is_accepted());
//! assert_eq!(game.current_player(), Player::Two);
//! assert_eq!(game.phase(), Phase::Setup);
//! # Ok::<(), hidden_rank::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: players, cells, ranks, actions, phase, configuration, RNG
//! - `board`: occupancy and adjacency
//! - `rules`: combat and the `RulesEngine` trait
//! - `game`: the `GameEngine`
//! - `error`: contract and board errors

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, Cell, Combat, GameConfig, GameRng, Outcome, Phase, PieceId, Player, PlayerMap,
    PublicState, Rank, RejectCode,
};

pub use crate::board::{are_adjacent_orthogonal, Board, BoardSnapshot};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::game::GameEngine;

pub use crate::error::{BoardError, EngineError};
