//! End-of-turn win evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerPair};

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Both fell with equal speed.
    Draw,
}

impl MatchOutcome {
    /// The winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Winner(p) => Some(p),
            MatchOutcome::Draw => None,
        }
    }
}

/// Signal for the shell that a match has ended.
///
/// Yielded exactly once per match by `BattleEngine::take_match_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEnd {
    /// Result of the match.
    pub outcome: MatchOutcome,
    /// Turn on which it ended.
    pub turn: u32,
}

/// Decide whether the match is over.
///
/// - Both at or below zero: the faster card from the last battle wins,
///   equal speed is a draw.
/// - One at or below zero: the other player wins.
/// - Otherwise the match continues (`None`).
#[must_use]
pub fn evaluate(players: &PlayerPair<Player>, speeds: Option<&PlayerPair<u32>>) -> Option<MatchOutcome> {
    let one_down = players[PlayerId::ONE].is_defeated();
    let two_down = players[PlayerId::TWO].is_defeated();

    match (one_down, two_down) {
        (true, true) => Some(speed_tie_break(speeds)),
        (true, false) => Some(MatchOutcome::Winner(PlayerId::TWO)),
        (false, true) => Some(MatchOutcome::Winner(PlayerId::ONE)),
        (false, false) => None,
    }
}

fn speed_tie_break(speeds: Option<&PlayerPair<u32>>) -> MatchOutcome {
    let Some(speeds) = speeds else {
        return MatchOutcome::Draw;
    };

    let one = speeds[PlayerId::ONE];
    let two = speeds[PlayerId::TWO];
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => MatchOutcome::Winner(PlayerId::ONE),
        std::cmp::Ordering::Less => MatchOutcome::Winner(PlayerId::TWO),
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    }
}
