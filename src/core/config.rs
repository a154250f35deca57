//! Game configuration and fixed geometry.
//!
//! The board geometry and piece set are fixed. `GameConfig` only carries the
//! rule switches a host may want to flip; the defaults reproduce the
//! standard game.

use serde::{Deserialize, Serialize};

/// Number of columns (A-E).
pub const COLUMNS: usize = 5;

/// Number of rows (1-6).
pub const ROWS: usize = 6;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = COLUMNS * ROWS;

/// Rows each player may deploy into, counted from their own edge.
pub const HOME_ROWS: usize = 2;

/// Pieces per player, one of each rank.
pub const RANK_COUNT: usize = 8;

/// Rule switches for a game.
///
/// ```
/// use hidden_rank::core::GameConfig;
///
/// let config = GameConfig::default().with_full_deployment_required();
/// assert!(config.ambush);
/// assert!(config.require_full_deployment);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rank 1 defeats rank 7 when attacking.
    pub ambush: bool,

    /// `start_game` is rejected while either pool still holds pieces.
    pub require_full_deployment: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ambush: true,
            require_full_deployment: false,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the rank 1 vs rank 7 exception.
    #[must_use]
    pub fn without_ambush(mut self) -> Self {
        self.ambush = false;
        self
    }

    /// Refuse to start until both players have deployed every piece.
    #[must_use]
    pub fn with_full_deployment_required(mut self) -> Self {
        self.require_full_deployment = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_constants() {
        assert_eq!(CELL_COUNT, 30);
        assert_eq!(HOME_ROWS * COLUMNS, 10);
        assert!(2 * HOME_ROWS < ROWS);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(config.ambush);
        assert!(!config.require_full_deployment);
        assert_eq!(config, GameConfig::new());
    }

    #[test]
    fn test_config_builders() {
        let config = GameConfig::new().without_ambush().with_full_deployment_required();
        assert!(!config.ambush);
        assert!(config.require_full_deployment);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().without_ambush();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"require_full_deployment":true}"#).unwrap();
        assert!(config.ambush);
        assert!(config.require_full_deployment);
    }
}
