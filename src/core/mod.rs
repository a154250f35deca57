//! Core value types: players, cells, pieces, actions, phase, configuration.
//!
//! Everything here is plain data with no rules knowledge. Raw collaborator
//! input is validated on the way in (`Cell::new`, `Rank::new`,
//! `Player::from_number`), so the rest of the crate works with values that
//! are correct by construction.

pub mod player;
pub mod cell;
pub mod piece;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use cell::Cell;
pub use piece::{PieceId, Rank};
pub use config::{GameConfig, CELL_COUNT, COLUMNS, HOME_ROWS, RANK_COUNT, ROWS};
pub use action::{Action, Combat, Outcome, RejectCode};
pub use state::{Phase, PublicState};
pub use rng::GameRng;
