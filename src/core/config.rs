//! Match configuration.
//!
//! Shells build a `BattleConfig` with the builder methods or load it from
//! JSON. `BattleEngine::new` validates it once; after that the engine never
//! consults it for anything that could fail.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::ConfigError;

/// Starting conditions for every match an engine runs.
///
/// ```
/// use goetic_gambit::core::{BattleConfig, PlayerId};
///
/// let config = BattleConfig::new()
///     .with_initial_hp(20)
///     .with_starting_hand_size(5)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.human_player, PlayerId::ONE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Hp each player starts with.
    pub initial_hp: i64,

    /// Cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Cards each player draws during `start`.
    pub draws_per_turn: usize,

    /// Turn counter value after setup. `start` increments it.
    pub first_turn: u32,

    /// Seat driven by selection events. The other seat is the AI.
    pub human_player: PlayerId,

    /// Display names, by seat.
    pub player_names: [String; 2],

    /// Seed for catalog draws and AI choices.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            initial_hp: 15,
            starting_hand_size: 4,
            draws_per_turn: 1,
            first_turn: 0,
            human_player: PlayerId::ONE,
            player_names: ["Player1".to_string(), "Player2".to_string()],
            seed: 42,
        }
    }
}

impl BattleConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_hp <= 0 {
            return Err(ConfigError::InvalidHp(self.initial_hp));
        }
        if self.draws_per_turn == 0 {
            return Err(ConfigError::NoCardsToPlay);
        }
        if self.human_player.index() > 1 {
            return Err(ConfigError::InvalidHumanPlayer(self.human_player.0));
        }
        Ok(())
    }

    /// The AI-controlled seat.
    #[must_use]
    pub fn ai_player(&self) -> PlayerId {
        self.human_player.opponent()
    }

    #[must_use]
    pub fn with_initial_hp(mut self, hp: i64) -> Self {
        self.initial_hp = hp;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draws_per_turn(mut self, draws: usize) -> Self {
        self.draws_per_turn = draws;
        self
    }

    #[must_use]
    pub fn with_first_turn(mut self, turn: u32) -> Self {
        self.first_turn = turn;
        self
    }

    #[must_use]
    pub fn with_human_player(mut self, player: PlayerId) -> Self {
        self.human_player = player;
        self
    }

    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
