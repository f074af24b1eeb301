//! Damage formula.
//!
//! Both players' damage is computed from the pre-battle cards and soul
//! points, then applied together, so the order of application never
//! matters.
//!
//! ```text
//! base  = max(0, attacker.attack - defender.defense)
//! final = floor(base * (1 + attacker.soul_points * 0.1))
//! ```
//!
//! Soul points belong to the attacker: they scale damage dealt, not
//! damage taken.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerPair};

/// Attack minus defense, floored at zero.
#[must_use]
pub fn base_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense)
}

/// Apply the soul-point multiplier and floor the result.
///
/// Computed in tenths so the floor is exact: `base * (10 + sp) / 10`.
/// Saturates at `i64::MAX`.
#[must_use]
pub fn scaled_damage(base: u32, soul_points: u32) -> i64 {
    u64::from(base)
        .checked_mul(10 + u64::from(soul_points))
        .and_then(|tenths| i64::try_from(tenths / 10).ok())
        .unwrap_or(i64::MAX)
}

/// Final damage `attacker_card` deals to `defender_card`.
#[must_use]
pub fn damage_dealt(attacker_card: &Card, defender_card: &Card, attacker_soul_points: u32) -> i64 {
    scaled_damage(
        base_damage(attacker_card.attack, defender_card.defense),
        attacker_soul_points,
    )
}

/// Result of one simultaneous exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Damage each player takes.
    pub damage_taken: PlayerPair<i64>,

    /// Speed of each player's card, kept for the tie-break.
    pub speeds: PlayerPair<u32>,
}

/// Resolve both directions of a battle from the committed cards.
#[must_use]
pub fn resolve_exchange(cards: &PlayerPair<Card>, soul_points: &PlayerPair<u32>) -> Exchange {
    let damage_taken = PlayerPair::new(|defender: PlayerId| {
        let attacker = defender.opponent();
        damage_dealt(&cards[attacker], &cards[defender], soul_points[attacker])
    });

    Exchange {
        damage_taken,
        speeds: cards.map(|card| card.speed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use proptest::prelude::*;

    fn card(attack: u32, defense: u32, speed: u32) -> Card {
        Card::new(CardId::new(1), "Test", ["Duke"], attack, defense, speed)
    }

    #[test]
    fn test_base_damage() {
        assert_eq!(base_damage(10, 4), 6);
        assert_eq!(base_damage(3, 5), 0);
        assert_eq!(base_damage(5, 5), 0);
    }

    #[test]
    fn test_soul_points_scaling() {
        assert_eq!(scaled_damage(6, 0), 6);
        assert_eq!(scaled_damage(6, 10), 12);
        assert_eq!(scaled_damage(7, 5), 10); // 10.5 floored
        assert_eq!(scaled_damage(3, 3), 3); // 3.9 floored
        assert_eq!(scaled_damage(0, 50), 0);
    }

    #[test]
    fn test_scaling_saturates() {
        assert_eq!(scaled_damage(u32::MAX, u32::MAX), i64::MAX);
        assert_eq!(scaled_damage(0, u32::MAX), 0);
        assert_eq!(scaled_damage(u32::MAX, 0), i64::from(u32::MAX));
    }

    #[test]
    fn test_exchange_is_not_transposed() {
        let cards = PlayerPair::new(|id| {
            if id == PlayerId::ONE {
                card(10, 5, 70)
            } else {
                card(3, 4, 63)
            }
        });
        // Only player one has soul points; only their outgoing damage grows.
        let soul = PlayerPair::new(|id| if id == PlayerId::ONE { 10 } else { 0 });

        let exchange = resolve_exchange(&cards, &soul);

        assert_eq!(exchange.damage_taken[PlayerId::TWO], 12);
        assert_eq!(exchange.damage_taken[PlayerId::ONE], 0);
        assert_eq!(exchange.speeds[PlayerId::ONE], 70);
        assert_eq!(exchange.speeds[PlayerId::TWO], 63);
    }

    proptest! {
        #[test]
        fn prop_base_damage_never_negative(atk in 0u32..1000, def in 0u32..1000) {
            let dmg = base_damage(atk, def);
            if atk >= def {
                prop_assert_eq!(dmg, atk - def);
            } else {
                prop_assert_eq!(dmg, 0);
            }
        }

        #[test]
        fn prop_zero_soul_points_is_identity(base in 0u32..10_000) {
            prop_assert_eq!(scaled_damage(base, 0), i64::from(base));
        }

        #[test]
        fn prop_ten_soul_points_doubles(base in 0u32..10_000) {
            prop_assert_eq!(scaled_damage(base, 10), 2 * i64::from(base));
        }

        #[test]
        fn prop_scaling_is_monotonic(base in 0u32..10_000, sp in 0u32..100) {
            prop_assert!(scaled_damage(base, sp + 1) >= scaled_damage(base, sp));
            prop_assert!(scaled_damage(base, sp) >= i64::from(base));
        }

        #[test]
        fn prop_scaling_never_panics(base in any::<u32>(), sp in any::<u32>()) {
            let dmg = scaled_damage(base, sp);
            prop_assert!(dmg >= i64::from(base));
            prop_assert!(scaled_damage(base, sp.saturating_add(1)) >= dmg);
        }
    }
}
