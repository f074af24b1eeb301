//! Extension points for the engine.
//!
//! - `TurnHooks`: work done in the `effect` and `contract` phases.
//!   Title buffs and contract rules are not defined yet, so the default
//!   `NoHooks` passes straight through.
//! - `SelectionPolicy`: how the AI picks a card from its hand.

use crate::cards::Card;
use crate::core::{GameRng, MatchState, PlayerId};

/// Rules run between selection and the end-of-turn check.
///
/// Both methods see the state after both players have committed a card.
/// `resolve_effects` runs before damage, `resolve_contracts` after it.
pub trait TurnHooks {
    /// Pre-battle modifiers (card titles, contract benefits).
    fn resolve_effects(&mut self, _state: &mut MatchState) {}

    /// Resolution of cards held in contract zones.
    fn resolve_contracts(&mut self, _state: &mut MatchState) {}
}

/// Pass-through hooks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl TurnHooks for NoHooks {}

/// AI card choice.
pub trait SelectionPolicy {
    /// Pick an index into `hand`.
    ///
    /// Returns `None` only if the hand is empty.
    fn choose(
        &self,
        hand: &[Card],
        state: &MatchState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<usize>;
}

/// Uniformly random hand index.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformSelection;

impl SelectionPolicy for UniformSelection {
    fn choose(
        &self,
        hand: &[Card],
        _state: &MatchState,
        _player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<usize> {
        rng.gen_index(hand.len())
    }
}
