//! Match state: everything that belongs to one match and nothing else.
//!
//! ## MatchState
//!
//! - Turn counter and current phase
//! - Both players (hands, selections, hp, soul points)
//! - Speeds recorded by the last battle, for the end-of-turn tie-break
//! - Winner / outcome once the match is over
//! - Battle log
//!
//! The state is `Clone + PartialEq + Serialize` so HUDs and tests can take
//! snapshots. The battle log uses an `im` vector so snapshots stay cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BattleConfig;
use super::phase::Phase;
use super::player::{Player, PlayerId, PlayerPair};
use crate::cards::Card;
use crate::rules::MatchOutcome;

/// What happened in one resolved battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// Turn the battle happened on.
    pub turn: u32,

    /// Card each player committed.
    pub cards: PlayerPair<Card>,

    /// Damage each player took.
    pub damage_taken: PlayerPair<i64>,

    /// Hp after damage was applied.
    pub hp_after: PlayerPair<i64>,
}

/// Mutable state of a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    turn: u32,
    phase: Phase,

    /// Both players, indexed by seat.
    pub players: PlayerPair<Player>,

    battle_speeds: Option<PlayerPair<u32>>,
    outcome: Option<MatchOutcome>,
    history: Vector<BattleRecord>,
}

impl MatchState {
    /// Fresh state: full hp, empty hands, phase `start`.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        let players = PlayerPair::new(|id| {
            Player::new(id, config.player_names[id.index()].clone(), config.initial_hp)
        });

        Self {
            turn: config.first_turn,
            phase: Phase::Start,
            players,
            battle_speeds: None,
            outcome: None,
            history: Vector::new(),
        }
    }

    /// Turn counter.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Speeds of the cards in the most recent battle.
    #[must_use]
    pub fn battle_speeds(&self) -> Option<&PlayerPair<u32>> {
        self.battle_speeds.as_ref()
    }

    /// How the match ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Winning seat. `None` while playing and after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.and_then(MatchOutcome::winner)
    }

    /// Whether the match has ended. No phase work happens after this.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every battle so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<BattleRecord> {
        &self.history
    }

    /// The most recent battle.
    #[must_use]
    pub fn last_battle(&self) -> Option<&BattleRecord> {
        self.history.last()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turn += 1;
    }

    pub(crate) fn record_battle(&mut self, speeds: PlayerPair<u32>, record: BattleRecord) {
        self.battle_speeds = Some(speeds);
        self.history.push_back(record);
    }

    pub(crate) fn finish(&mut self, outcome: MatchOutcome) {
        self.outcome = Some(outcome);
    }
}
