//! Card catalog: the immutable table every draw comes from.
//!
//! The catalog is built once, validated at construction, and then only
//! read. Share it between matches with an `Arc`.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use crate::core::GameRng;
use crate::error::CatalogError;

/// Ordered, non-empty table of card definitions.
///
/// ## Example
///
/// ```
/// use goetic_gambit::cards::{CardCatalog, CardId};
/// use goetic_gambit::core::GameRng;
///
/// let catalog = CardCatalog::standard();
/// let mut rng = GameRng::new(42);
///
/// let card = catalog.draw(&mut rng);
/// assert!(catalog.get(card.id).is_some());
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Bael");
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails if the list is empty, an id repeats, or a card has no titles.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (pos, card) in cards.iter().enumerate() {
            if card.titles.is_empty() {
                return Err(CatalogError::NoTitles(card.id));
            }
            if index.insert(card.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }

        Ok(Self { cards, index })
    }

    /// The ten Goetic demons used in normal play.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_static(vec![
            Card::new(CardId::new(1), "Bael", ["King"], 1, 5, 72),
            Card::new(CardId::new(2), "Agares", ["Duke"], 2, 4, 71),
            Card::new(CardId::new(3), "Vassago", ["Prince"], 3, 3, 70),
            Card::new(CardId::new(4), "Gamigin", ["Marquess"], 4, 2, 69),
            Card::new(CardId::new(5), "Marbas", ["President"], 5, 1, 68),
            Card::new(CardId::new(6), "Valefor", ["Duke"], 1, 1, 67),
            Card::new(CardId::new(7), "Amon", ["Marquess"], 2, 2, 66),
            Card::new(CardId::new(8), "Barbatos", ["Duke"], 3, 3, 65),
            Card::new(CardId::new(9), "Paimon", ["King"], 4, 4, 64),
            Card::new(CardId::new(10), "Buer", ["President"], 5, 5, 63),
        ])
    }

    /// Two extreme cards for exercising the damage and win rules by hand.
    #[must_use]
    pub fn debug() -> Self {
        Self::from_static(vec![
            Card::new(CardId::new(0), "Daemon", ["Debug"], 0, 0, 0),
            Card::new(CardId::new(99), "Demon Core", ["Debug"], 99, 99, 99),
        ])
    }

    // Built-in tables are non-empty with unique ids and titles on every card.
    fn from_static(cards: Vec<Card>) -> Self {
        let index = cards.iter().enumerate().map(|(pos, c)| (c.id, pos)).collect();
        Self { cards, index }
    }

    /// All cards in catalog order.
    #[must_use]
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// Number of entries. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw a uniformly random card.
    ///
    /// The returned clone is independent of the catalog.
    pub fn draw(&self, rng: &mut GameRng) -> Card {
        // Non-empty is checked in `new`.
        let pos = rng.gen_range_usize(0..self.cards.len());
        self.cards[pos].clone()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = CardCatalog::standard();

        let ids: Vec<u32> = catalog.all_cards().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_standard_catalog_stats() {
        let catalog = CardCatalog::standard();

        let buer = catalog.get(CardId::new(10)).unwrap();
        assert_eq!((buer.attack, buer.defense, buer.speed), (5, 5, 63));

        let bael = catalog.get(CardId::new(1)).unwrap();
        assert_eq!((bael.attack, bael.defense, bael.speed), (1, 5, 72));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(CardCatalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let cards = vec![
            Card::new(CardId::new(1), "A", ["Duke"], 1, 1, 1),
            Card::new(CardId::new(1), "B", ["Duke"], 2, 2, 2),
        ];

        assert_eq!(
            CardCatalog::new(cards).unwrap_err(),
            CatalogError::DuplicateId(CardId::new(1))
        );
    }

    #[test]
    fn test_missing_titles_rejected() {
        let cards = vec![Card::new(CardId::new(5), "Nameless", Vec::<String>::new(), 1, 1, 1)];

        assert_eq!(
            CardCatalog::new(cards).unwrap_err(),
            CatalogError::NoTitles(CardId::new(5))
        );
    }

    #[test]
    fn test_draw_returns_catalog_card() {
        let catalog = CardCatalog::standard();
        let mut rng = GameRng::new(3);

        for _ in 0..100 {
            let card = catalog.draw(&mut rng);
            assert_eq!(catalog.get(card.id), Some(&card));
        }
    }

    #[test]
    fn test_single_card_catalog_always_draws_it() {
        let only = Card::new(CardId::new(4), "Gamigin", ["Marquess"], 4, 2, 69);
        let catalog = CardCatalog::new(vec![only.clone()]).unwrap();
        let mut rng = GameRng::new(11);

        for _ in 0..10 {
            assert_eq!(catalog.draw(&mut rng), only);
        }
    }

    #[test]
    fn test_debug_catalog() {
        let catalog = CardCatalog::debug();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(CardId::new(0)).unwrap().name, "Daemon");
        assert_eq!(catalog.get(CardId::new(99)).unwrap().attack, 99);
    }
}
