//! Error types.
//!
//! Only construction can fail: an empty or malformed catalog, or an
//! inconsistent configuration. Once a `BattleEngine` exists, play is total
//! and bad selection events are reported as `SelectionOutcome::Ignored`
//! rather than as errors.

use thiserror::Error;

use crate::cards::CardId;

/// Problems detected while building a `CardCatalog`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card catalog must contain at least one card")]
    Empty,

    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    #[error("card {0} has no titles")]
    NoTitles(CardId),
}

/// Problems detected while validating or parsing a `BattleConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial hp must be positive, got {0}")]
    InvalidHp(i64),

    #[error("draws_per_turn must be at least 1")]
    NoCardsToPlay,

    #[error("human player index {0} is not 0 or 1")]
    InvalidHumanPlayer(u8),

    #[error("invalid config json: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Errors returned by `BattleEngine::new`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
