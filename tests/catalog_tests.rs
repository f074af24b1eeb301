//! Card catalog tests.

use std::sync::Arc;

use goetic_gambit::cards::{Card, CardCatalog, CardId};
use goetic_gambit::core::{BattleConfig, GameRng};
use goetic_gambit::error::CatalogError;
use goetic_gambit::rules::BattleEngine;

/// Test that draws converge toward a uniform distribution.
#[test]
fn test_draw_is_uniform() {
    let catalog = CardCatalog::standard();
    let mut rng = GameRng::new(42);
    let draws = 100_000;

    let mut counts = [0usize; 11];
    for _ in 0..draws {
        counts[catalog.draw(&mut rng).id.raw() as usize] += 1;
    }

    let expected = draws / catalog.len();
    for card in catalog.all_cards() {
        let observed = counts[card.id.raw() as usize];
        // ~10 standard deviations of slack.
        assert!(
            observed.abs_diff(expected) < 1000,
            "{} drawn {} times, expected about {}",
            card.name,
            observed,
            expected
        );
    }
}

/// Test that the same seed draws the same cards.
#[test]
fn test_draws_are_reproducible() {
    let catalog = CardCatalog::standard();
    let mut a = GameRng::new(9).for_context("draw");
    let mut b = GameRng::new(9).for_context("draw");

    let seq_a: Vec<CardId> = (0..50).map(|_| catalog.draw(&mut a).id).collect();
    let seq_b: Vec<CardId> = (0..50).map(|_| catalog.draw(&mut b).id).collect();

    assert_eq!(seq_a, seq_b);
}

/// Test that one catalog can back several engines at once.
#[test]
fn test_catalog_shared_between_matches() {
    let catalog = Arc::new(CardCatalog::standard());

    let first = BattleEngine::new(Arc::clone(&catalog), BattleConfig::new().with_seed(1)).unwrap();
    let second = BattleEngine::new(Arc::clone(&catalog), BattleConfig::new().with_seed(2)).unwrap();

    assert_eq!(Arc::strong_count(&catalog), 3);
    for engine in [&first, &second] {
        for (_, player) in engine.players().iter() {
            for card in player.hand() {
                assert_eq!(catalog.get(card.id), Some(card));
            }
        }
    }
}

/// Test that malformed card lists fail at construction.
#[test]
fn test_construction_errors() {
    assert_eq!(CardCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);

    let dup = vec![
        Card::new(CardId::new(3), "Vassago", ["Prince"], 3, 3, 70),
        Card::new(CardId::new(3), "Copy", ["Prince"], 3, 3, 70),
    ];
    assert_eq!(
        CardCatalog::new(dup).unwrap_err(),
        CatalogError::DuplicateId(CardId::new(3))
    );
}

/// Test that catalog order is preserved.
#[test]
fn test_custom_catalog_keeps_order() {
    let cards = vec![
        Card::new(CardId::new(9), "Paimon", ["King"], 4, 4, 64),
        Card::new(CardId::new(1), "Bael", ["King"], 1, 5, 72),
    ];
    let catalog = CardCatalog::new(cards.clone()).unwrap();

    assert_eq!(catalog.all_cards(), cards.as_slice());
}
