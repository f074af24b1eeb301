//! # goetic-gambit
//!
//! Two-player card battle resolver. Each turn both players draw, commit
//! one card from hand at the same time, and the engine resolves a single
//! damage exchange before checking for a winner.
//!
//! ## Design Principles
//!
//! 1. **Step-driven**: The shell calls `BattleEngine::advance` once per tick.
//!    Only the `select` phase waits across ticks.
//!
//! 2. **Explicit randomness**: Draws and AI choices come from seeded
//!    `GameRng` streams, so a seed reproduces a whole match.
//!
//! 3. **Shared immutable catalog**: Cards are values; the `CardCatalog`
//!    is built once and shared through an `Arc`.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, phases, match state
//! - `cards`: Card values and the catalog
//! - `rules`: Damage, win evaluation, phase hooks, the battle engine
//! - `shell`: Title / game / result scene switching
//! - `error`: Construction errors

pub mod core;
pub mod cards;
pub mod rules;
pub mod shell;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleRecord, GameRng, GameRngState, MatchState, Phase, Player, PlayerId,
    PlayerPair,
};

pub use crate::cards::{Card, CardCatalog, CardId, Titles};

pub use crate::rules::{
    BattleEngine, EngineSnapshot, IgnoreReason, MatchEnd, MatchOutcome, NoHooks, SelectionOutcome,
    SelectionPolicy, TurnHooks, UniformSelection,
};

pub use crate::shell::{Scene, SceneHost, ShellInput};

pub use crate::error::{CatalogError, ConfigError, EngineError};
