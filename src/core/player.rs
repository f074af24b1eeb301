//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Index of one of the two seats (0 or 1).
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Hand, graveyard, hp, soul points and the card committed this turn.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Card;

/// Seat identifier. The match always has exactly two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// First seat.
    pub const ONE: PlayerId = PlayerId(0);
    /// Second seat.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data for the two seats.
///
/// ```
/// use goetic_gambit::core::{PlayerId, PlayerPair};
///
/// let mut hp: PlayerPair<i64> = PlayerPair::with_value(15);
/// hp[PlayerId::TWO] -= 6;
///
/// assert_eq!(hp[PlayerId::ONE], 15);
/// assert_eq!(hp[PlayerId::TWO], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One side of the match.
///
/// `hp` and `soul_points` are open for rule extensions to adjust; the card
/// zones are only changed through methods that keep the selection invariant
/// (a selected card was popped out of the hand).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Remaining hit points. May go negative.
    pub hp: i64,

    /// Each point adds 10% to the damage this player deals.
    pub soul_points: u32,

    hand: Vec<Card>,
    graveyard: Vec<Card>,
    selected_card: Option<Card>,
    contract_zone: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, hp: i64) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            soul_points: 0,
            hand: Vec::new(),
            graveyard: Vec::new(),
            selected_card: None,
            contract_zone: Vec::new(),
        }
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Spent cards, oldest first.
    #[must_use]
    pub fn graveyard(&self) -> &[Card] {
        &self.graveyard
    }

    /// Card committed for this turn's battle.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected_card.as_ref()
    }

    /// Cards held under a contract.
    #[must_use]
    pub fn contract_zone(&self) -> &[Card] {
        &self.contract_zone
    }

    /// Whether this player has committed a card this turn.
    #[must_use]
    pub fn has_selected(&self) -> bool {
        self.selected_card.is_some()
    }

    /// Whether hp has dropped to zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Add a card to the end of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Pop the card at `index` out of the hand and commit it.
    ///
    /// Returns false, changing nothing, if the index is out of bounds or a
    /// card is already committed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.selected_card.is_some() || index >= self.hand.len() {
            return false;
        }
        self.selected_card = Some(self.hand.remove(index));
        true
    }

    /// Move the committed card to the graveyard.
    ///
    /// Returns the spent card, if there was one.
    pub fn discard_selected(&mut self) -> Option<&Card> {
        let card = self.selected_card.take()?;
        self.graveyard.push(card);
        self.graveyard.last()
    }

    /// Hold a card under a contract.
    pub fn place_in_contract(&mut self, card: Card) {
        self.contract_zone.push(card);
    }

    /// Add soul points.
    pub fn gain_soul_points(&mut self, amount: u32) {
        self.soul_points = self.soul_points.saturating_add(amount);
    }
}
