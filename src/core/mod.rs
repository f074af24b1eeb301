//! Core types: players, RNG, configuration, phases, match state.
//!
//! Nothing here knows the combat rules; those live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod phase;
pub mod state;

pub use player::{Player, PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use config::BattleConfig;
pub use phase::Phase;
pub use state::{BattleRecord, MatchState};
