//! Combat rules and the battle engine.
//!
//! - `damage`: the simultaneous damage exchange
//! - `outcome`: end-of-turn win evaluation
//! - `hooks`: `effect`/`contract` phase hooks and the AI selection policy
//! - `engine`: the phase state machine that ties them together

pub mod damage;
pub mod engine;
pub mod hooks;
pub mod outcome;

pub use damage::{base_damage, damage_dealt, resolve_exchange, scaled_damage, Exchange};
pub use engine::{BattleEngine, EngineSnapshot, IgnoreReason, SelectionOutcome};
pub use hooks::{NoHooks, SelectionPolicy, TurnHooks, UniformSelection};
pub use outcome::{evaluate, MatchEnd, MatchOutcome};
