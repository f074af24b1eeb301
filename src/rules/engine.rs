//! Battle engine: the turn/phase state machine.
//!
//! The shell calls `advance` once per tick and `submit_selection` when a
//! human input maps to a hand index. Everything else is read access for
//! the HUD.
//!
//! ## Phase work
//!
//! | Phase      | Work                                            | Next                 |
//! |------------|-------------------------------------------------|----------------------|
//! | `start`    | turn += 1, each player draws                     | `select`             |
//! | `select`   | wait until both players have committed a card    | `effect`             |
//! | `effect`   | `TurnHooks::resolve_effects`                     | `battle`             |
//! | `battle`   | simultaneous damage, record speeds and log       | `contract`           |
//! | `contract` | `TurnHooks::resolve_contracts`, spent cards to graveyard | `end`        |
//! | `end`      | win check                                        | `start` or terminal  |
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use goetic_gambit::cards::CardCatalog;
//! use goetic_gambit::core::{BattleConfig, Phase, PlayerId};
//! use goetic_gambit::rules::{BattleEngine, SelectionOutcome};
//!
//! let mut engine = BattleEngine::new(Arc::new(CardCatalog::standard()), BattleConfig::default()).unwrap();
//!
//! assert_eq!(engine.advance(), Phase::Select);
//! assert_eq!(engine.submit_selection(PlayerId::ONE, 0), SelectionOutcome::Accepted);
//! assert_eq!(engine.advance(), Phase::Effect);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::damage::resolve_exchange;
use super::hooks::{NoHooks, SelectionPolicy, TurnHooks, UniformSelection};
use super::outcome::{evaluate, MatchEnd};
use crate::cards::{Card, CardCatalog};
use crate::core::{
    BattleConfig, BattleRecord, GameRng, GameRngState, MatchState, Phase, Player, PlayerId,
    PlayerPair,
};
use crate::error::{CatalogError, EngineError};
use crate::rules::MatchOutcome;

/// Why a selection event changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The match is over.
    MatchOver,
    /// Not in the `select` phase.
    WrongPhase,
    /// The seat is AI-controlled.
    NotHumanPlayer,
    /// A card is already committed this turn.
    AlreadySelected,
    /// Index past the end of the hand.
    OutOfRange,
}

/// Result of `submit_selection`.
///
/// Invalid events are expected (input polling races phase changes) and
/// are reported here rather than as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Both players have now committed a card.
    Accepted,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Everything needed to resume a match where it stopped.
///
/// Restoring a snapshot into an engine with the same catalog, config and
/// selection policy continues with the same draws and AI picks as the
/// engine it was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Match state at capture time.
    pub state: MatchState,
    /// Position of the catalog draw stream.
    pub draw_rng: GameRngState,
    /// Position of the AI choice stream.
    pub ai_rng: GameRngState,
    /// Match-end signal not yet taken by the shell.
    pub pending_end: Option<MatchEnd>,
}

/// Runs matches against one shared catalog.
pub struct BattleEngine {
    catalog: Arc<CardCatalog>,
    config: BattleConfig,
    state: MatchState,
    draw_rng: GameRng,
    ai_rng: GameRng,
    hooks: Box<dyn TurnHooks>,
    policy: Box<dyn SelectionPolicy>,
    pending_end: Option<MatchEnd>,
}

impl BattleEngine {
    /// Create an engine and set up its first match.
    pub fn new(catalog: Arc<CardCatalog>, config: BattleConfig) -> Result<Self, EngineError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let root = GameRng::new(config.seed);
        let mut engine = Self {
            state: MatchState::new(&config),
            draw_rng: root.for_context("draw"),
            ai_rng: root.for_context("ai"),
            catalog,
            config,
            hooks: Box::new(NoHooks),
            policy: Box::new(UniformSelection),
            pending_end: None,
        };
        engine.setup();
        Ok(engine)
    }

    /// Build the catalog from a card list, then create the engine.
    pub fn from_cards(cards: Vec<Card>, config: BattleConfig) -> Result<Self, EngineError> {
        let catalog = CardCatalog::new(cards)?;
        Self::new(Arc::new(catalog), config)
    }

    /// Replace the `effect`/`contract` phase hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl TurnHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Replace the AI's card choice.
    #[must_use]
    pub fn with_selection_policy(mut self, policy: impl SelectionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Start a fresh match: new players, starting hands dealt, phase
    /// `start`, no winner. The catalog and the RNG streams carry over, so
    /// consecutive matches deal different cards.
    pub fn setup(&mut self) {
        self.state = MatchState::new(&self.config);
        self.pending_end = None;

        for id in PlayerId::both() {
            for _ in 0..self.config.starting_hand_size {
                let card = self.catalog.draw(&mut self.draw_rng);
                self.state.player_mut(id).receive(card);
            }
        }

        info!(
            first = %self.state.player(PlayerId::ONE).name,
            second = %self.state.player(PlayerId::TWO).name,
            hand_size = self.config.starting_hand_size,
            "match set up"
        );
    }

    /// Perform one phase's work and return the phase now current.
    ///
    /// No-op once the match is over; in `select` it is a no-op until both
    /// players have committed a card.
    pub fn advance(&mut self) -> Phase {
        if self.state.is_terminal() {
            return self.state.phase();
        }

        let phase = self.state.phase();
        let next = match phase {
            Phase::Start => self.run_start(),
            Phase::Select => self.run_select(),
            Phase::Effect => {
                self.hooks.resolve_effects(&mut self.state);
                Phase::Battle
            }
            Phase::Battle => self.run_battle(),
            Phase::Contract => self.run_contract(),
            Phase::End => self.run_end(),
        };

        if next != phase {
            debug!(turn = self.state.turn(), from = %phase, to = %next, "phase transition");
        }
        self.state.set_phase(next);
        next
    }

    /// Feed a human hand choice.
    ///
    /// On success the AI commits its own card in the same step.
    pub fn submit_selection(&mut self, player: PlayerId, hand_index: usize) -> SelectionOutcome {
        let outcome = self.try_select(player, hand_index);
        if let SelectionOutcome::Ignored(reason) = outcome {
            debug!(%player, hand_index, ?reason, phase = %self.state.phase(), "selection ignored");
        }
        outcome
    }

    fn try_select(&mut self, player: PlayerId, hand_index: usize) -> SelectionOutcome {
        use IgnoreReason::*;

        if self.state.is_terminal() {
            return SelectionOutcome::Ignored(MatchOver);
        }
        if self.state.phase() != Phase::Select {
            return SelectionOutcome::Ignored(WrongPhase);
        }
        if player != self.config.human_player {
            return SelectionOutcome::Ignored(NotHumanPlayer);
        }

        let human = self.state.player_mut(player);
        if human.has_selected() {
            return SelectionOutcome::Ignored(AlreadySelected);
        }
        if !human.select(hand_index) {
            return SelectionOutcome::Ignored(OutOfRange);
        }
        debug!(%player, hand_index, card = ?human.selected_card().map(|c| &c.name), "human selected");

        self.select_for_ai();
        SelectionOutcome::Accepted
    }

    fn select_for_ai(&mut self) {
        let ai = self.config.ai_player();
        if self.state.player(ai).has_selected() {
            return;
        }

        let choice = self.policy.choose(
            self.state.player(ai).hand(),
            &self.state,
            ai,
            &mut self.ai_rng,
        );

        let player = self.state.player_mut(ai);
        let committed = match choice {
            Some(idx) if idx < player.hand().len() => player.select(idx),
            _ => {
                warn!(?choice, hand = player.hand().len(), "ai policy gave an unusable index, taking first card");
                player.select(0)
            }
        };

        if committed {
            debug!(player = %ai, card = ?player.selected_card().map(|c| &c.name), "ai selected");
        }
    }

    fn run_start(&mut self) -> Phase {
        self.state.begin_turn();
        for id in PlayerId::both() {
            for _ in 0..self.config.draws_per_turn {
                let card = self.catalog.draw(&mut self.draw_rng);
                self.state.player_mut(id).receive(card);
            }
        }
        debug!(
            turn = self.state.turn(),
            hp_one = self.state.player(PlayerId::ONE).hp,
            hp_two = self.state.player(PlayerId::TWO).hp,
            "turn started"
        );
        Phase::Select
    }

    fn run_select(&mut self) -> Phase {
        let both = PlayerId::both().all(|id| self.state.player(id).has_selected());
        if both {
            Phase::Effect
        } else {
            Phase::Select
        }
    }

    fn run_battle(&mut self) -> Phase {
        let one = self.state.player(PlayerId::ONE).selected_card().cloned();
        let two = self.state.player(PlayerId::TWO).selected_card().cloned();
        let (Some(one), Some(two)) = (one, two) else {
            // Only reachable if a hook cleared a selection; ask again.
            warn!(turn = self.state.turn(), "battle without both selections, returning to select");
            return Phase::Select;
        };

        let cards = PlayerPair::new(|id| if id == PlayerId::ONE { one.clone() } else { two.clone() });
        let soul_points = self.state.players.map(|p| p.soul_points);
        let exchange = resolve_exchange(&cards, &soul_points);

        for (id, player) in self.state.players.iter_mut() {
            player.hp = player.hp.saturating_sub(exchange.damage_taken[id]);
        }

        let record = BattleRecord {
            turn: self.state.turn(),
            cards,
            damage_taken: exchange.damage_taken.clone(),
            hp_after: self.state.players.map(|p| p.hp),
        };
        debug!(
            turn = record.turn,
            damage_one = record.damage_taken[PlayerId::ONE],
            damage_two = record.damage_taken[PlayerId::TWO],
            hp_one = record.hp_after[PlayerId::ONE],
            hp_two = record.hp_after[PlayerId::TWO],
            "battle resolved"
        );
        self.state.record_battle(exchange.speeds, record);
        Phase::Contract
    }

    fn run_contract(&mut self) -> Phase {
        self.hooks.resolve_contracts(&mut self.state);
        for id in PlayerId::both() {
            self.state.player_mut(id).discard_selected();
        }
        Phase::End
    }

    fn run_end(&mut self) -> Phase {
        match evaluate(&self.state.players, self.state.battle_speeds()) {
            Some(outcome) => {
                self.finish(outcome);
                Phase::End
            }
            None => Phase::Start,
        }
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        self.state.finish(outcome);
        self.pending_end = Some(MatchEnd {
            outcome,
            turn: self.state.turn(),
        });

        match outcome {
            MatchOutcome::Winner(p) => {
                info!(turn = self.state.turn(), winner = %self.state.player(p).name, "match over")
            }
            MatchOutcome::Draw => info!(turn = self.state.turn(), "match over in a draw"),
        }
    }

    /// Take the match-end signal. Returns `Some` exactly once per finished
    /// match, `None` otherwise.
    pub fn take_match_end(&mut self) -> Option<MatchEnd> {
        self.pending_end.take()
    }

    /// Capture the match and both RNG stream positions.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state.clone(),
            draw_rng: self.draw_rng.state(),
            ai_rng: self.ai_rng.state(),
            pending_end: self.pending_end,
        }
    }

    /// Resume from a snapshot. Catalog, config, hooks and policy are kept.
    pub fn restore(&mut self, snapshot: EngineSnapshot) {
        self.state = snapshot.state;
        self.draw_rng = GameRng::from_state(&snapshot.draw_rng);
        self.ai_rng = GameRng::from_state(&snapshot.ai_rng);
        self.pending_end = snapshot.pending_end;
        debug!(turn = self.state.turn(), phase = %self.state.phase(), "match restored");
    }

    // === Read access ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Turn counter.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn()
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.state.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.state.player(id)
    }

    /// Winning seat. `None` while playing and after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// How the match ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.state.outcome()
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Full match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable player access for scripted scenarios (fixed hands, preset hp
    /// or soul points).
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        self.state.player_mut(id)
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    /// Configuration used by `setup`.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }
}

impl std::fmt::Debug for BattleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending_end", &self.pending_end)
            .finish_non_exhaustive()
    }
}
