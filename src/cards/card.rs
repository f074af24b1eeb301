//! Card values.
//!
//! A `Card` is immutable, value-like data owned by the catalog. Hands,
//! graveyards and selections hold clones; there is no per-instance state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Title tags carried by a card (rank of the demon, e.g. "King", "Duke").
///
/// Almost every card has exactly one, so it is stored inline.
pub type Titles = SmallVec<[String; 1]>;

/// Static card data.
///
/// ## Example
///
/// ```
/// use goetic_gambit::cards::{Card, CardId};
///
/// let bael = Card::new(CardId::new(1), "Bael", ["King"], 1, 5, 72);
///
/// assert_eq!(bael.to_string(), "Bael(King) Attack:1 Defense:5 Speed:72");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Catalog identity.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Ordered title tags. Never empty in a valid catalog.
    pub titles: Titles,

    /// Damage dealt before the opponent's defense is subtracted.
    pub attack: u32,

    /// Subtracted from the opposing card's attack.
    pub defense: u32,

    /// Tie-break when both players fall in the same battle.
    pub speed: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new<T>(
        id: CardId,
        name: impl Into<String>,
        titles: impl IntoIterator<Item = T>,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            titles: titles.into_iter().map(Into::into).collect(),
            attack,
            defense,
            speed,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) Attack:{} Defense:{} Speed:{}",
            self.name,
            self.titles.join(","),
            self.attack,
            self.defense,
            self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_description_joins_titles() {
        let card = Card::new(CardId::new(7), "Amon", ["Marquess", "Guardian"], 2, 2, 66);
        assert_eq!(
            card.to_string(),
            "Amon(Marquess,Guardian) Attack:2 Defense:2 Speed:66"
        );
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(3), "Vassago", ["Prince"], 3, 3, 70);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
