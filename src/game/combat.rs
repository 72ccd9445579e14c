// Melee combat resolution
//
// A swing lands at most once per defender: the hit is logged on the defender
// as a pending record and stays there until the attacker's attack clip
// completes, at which point `finish_swing` purges it.

use glam::DVec2;
use log::{debug, info};
use rand::Rng;

use crate::engine::physics::CONTACT_TOLERANCE;

use super::characters::{Entity, EntityId};

/// Multiplier applied to damage on a critical hit
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Units the crit banner rises every frame
pub const CRIT_BANNER_RISE: f64 = 1.0;

/// One hit logged on a defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRecord {
    pub attacker: EntityId,
    pub amount: f64,
    /// Still attributed to the attacker's current swing
    pub pending_removal: bool,
}

/// A hit that landed this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub amount: f64,
    pub critical: bool,
}

/// Check whether the attacker's front points at the defender
pub fn faces(attacker: &Entity, defender: &Entity) -> bool {
    if attacker.is_facing_left() {
        attacker.x() >= defender.x()
    } else {
        attacker.x() <= defender.x()
    }
}

/// Vertical spans overlap by more than the contact tolerance
pub fn same_height(a: &Entity, b: &Entity) -> bool {
    let a_top = a.y();
    let a_bottom = a_top + a.height();
    let b_top = b.y();
    let b_bottom = b_top + b.height();

    !(a_bottom - CONTACT_TOLERANCE <= b_top || b_bottom - CONTACT_TOLERANCE <= a_top)
}

/// Range, facing and height test for a melee swing.
///
/// Distance runs from the attacker's leading edge to the defender's near
/// edge; which edge is "near" depends on the defender's own facing.
pub fn in_attack_range(attacker: &Entity, defender: &Entity) -> bool {
    if !same_height(attacker, defender) || !faces(attacker, defender) {
        return false;
    }

    if attacker.is_facing_left() {
        let near = if defender.is_facing_left() {
            defender.x()
        } else {
            defender.x() + defender.width()
        };
        attacker.x() - attacker.range() <= near
    } else {
        let near = if defender.is_facing_left() {
            defender.x() - defender.width()
        } else {
            defender.x()
        };
        attacker.x() + attacker.width() + attacker.range() >= near
    }
}

/// Uniform roll against a 0-100 crit chance
pub fn roll_crit<R: Rng + ?Sized>(crit_percent: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() * 100.0 <= crit_percent
}

/// Whether `defender` already took a hit from `attacker`'s current swing
pub fn has_pending_hit(defender: &Entity, attacker: EntityId) -> bool {
    defender
        .damage
        .iter()
        .any(|record| record.pending_removal && record.attacker == attacker)
}

/// Apply one swing to one defender, if it lands
pub fn strike<R: Rng + ?Sized>(
    attacker: &Entity,
    defender: &mut Entity,
    rng: &mut R,
) -> Option<Hit> {
    if has_pending_hit(defender, attacker.id()) || !in_attack_range(attacker, defender) {
        return None;
    }

    let critical = roll_crit(attacker.crit_percent, rng);
    let amount = if critical {
        attacker.attack_damage * CRIT_MULTIPLIER
    } else {
        attacker.attack_damage
    };

    defender.damage.push(DamageRecord {
        attacker: attacker.id(),
        amount,
        pending_removal: true,
    });
    defender.take_damage(amount);

    debug!(
        "Entity {} hit {} for {} (crit: {}), health now {}",
        attacker.id(),
        defender.id(),
        amount,
        critical,
        defender.health
    );

    Some(Hit {
        attacker: attacker.id(),
        defender: defender.id(),
        amount,
        critical,
    })
}

/// Drop the attacker's pending records from every defender.
/// Returns how many records were removed.
pub fn finish_swing(attacker: EntityId, defenders: &mut [Entity]) -> usize {
    let mut removed = 0;
    for defender in defenders.iter_mut() {
        let before = defender.damage.len();
        defender
            .damage
            .retain(|record| !(record.pending_removal && record.attacker == attacker));
        removed += before - defender.damage.len();
    }
    debug!("Swing by {attacker} finished, cleared {removed} pending hit(s)");
    removed
}

/// Floating text shown above a defender after a critical hit
#[derive(Debug, Clone, PartialEq)]
pub struct CritBanner {
    pub text: String,
    /// World position of the text
    pub position: DVec2,
    started_at: f64,
    seconds: f64,
}

impl CritBanner {
    /// Arm a banner above `defender`'s health bar
    pub fn new(text: &str, defender: &Entity, now: f64, seconds: f64) -> Self {
        info!("Critical hit on entity {}", defender.id());
        Self {
            text: text.to_string(),
            position: DVec2::new(
                defender.x() + defender.width() / 2.0 - 20.0,
                defender.y() - 20.0,
            ),
            started_at: now,
            seconds,
        }
    }

    /// Rise by one step; returns false once the display time is over
    pub fn advance(&mut self, now: f64) -> bool {
        if now - self.started_at < self.seconds {
            self.position.y -= CRIT_BANNER_RISE;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::stats::{BAT_STATS, PLAYER_STATS};
    use crate::game::characters::{EntityDesc, PLAYER_ID};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Unscaled 20x40 attacker whose hitbox starts at x = 100
    fn attacker() -> Entity {
        EntityDesc::new(PLAYER_ID, "runner", DVec2::new(20.0, 40.0))
            .with_spawn(DVec2::new(100.0, 100.0))
            .with_stats(PLAYER_STATS)
            .build()
            .unwrap()
    }

    fn bat_at(id: EntityId, x: f64) -> Entity {
        EntityDesc::new(id, "bat", DVec2::new(30.0, 30.0))
            .with_spawn(DVec2::new(x, 105.0))
            .with_stats(BAT_STATS)
            .with_collision(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_in_range_when_near_edge_within_reach() {
        let player = attacker();
        let bat = bat_at(1, 110.0);
        assert!(in_attack_range(&player, &bat));

        let far = bat_at(1, 200.0);
        assert!(!in_attack_range(&player, &far));
    }

    #[test]
    fn test_reach_boundary() {
        let player = attacker();
        // Leading edge at 120, reach 13
        assert!(in_attack_range(&player, &bat_at(1, 133.0)));
        assert!(!in_attack_range(&player, &bat_at(1, 133.5)));
    }

    #[test]
    fn test_not_facing_target() {
        let mut player = attacker();
        let bat = bat_at(1, 110.0);
        player.flip();
        assert!(!faces(&player, &bat));
        assert!(!in_attack_range(&player, &bat));

        let behind = bat_at(2, 60.0);
        assert!(faces(&player, &behind));
        assert!(in_attack_range(&player, &behind));
    }

    #[test]
    fn test_height_tolerance() {
        let player = attacker();
        let mut bat = bat_at(1, 110.0);
        // Bat hovering just above the player's head
        bat.place_at(DVec2::new(110.0, 65.0));
        assert!(!same_height(&player, &bat));
        assert!(!in_attack_range(&player, &bat));

        // Overlaps by 5 units only, still within the tolerance
        bat.place_at(DVec2::new(110.0, 75.0));
        assert!(!same_height(&player, &bat));

        bat.place_at(DVec2::new(110.0, 95.0));
        assert!(same_height(&player, &bat));
    }

    #[test]
    fn test_roll_crit_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(roll_crit(100.0, &mut rng));
        }
        let hits = (0..1000).filter(|_| roll_crit(50.0, &mut rng)).count();
        assert!(hits > 350 && hits < 650);
    }

    #[test]
    fn test_strike_once_per_swing() {
        let mut rng = StdRng::seed_from_u64(1);
        let player = attacker();
        let mut bat = bat_at(1, 110.0);

        let hit = strike(&player, &mut bat, &mut rng).unwrap();
        assert!(hit.critical);
        assert_eq!(hit.amount, 20.0);
        assert_eq!(bat.health, 80.0);
        assert!(has_pending_hit(&bat, PLAYER_ID));

        for _ in 0..10 {
            assert!(strike(&player, &mut bat, &mut rng).is_none());
        }
        assert_eq!(bat.health, 80.0);
        assert_eq!(bat.damage.len(), 1);
    }

    #[test]
    fn test_finish_swing_allows_next_hit() {
        let mut rng = StdRng::seed_from_u64(1);
        let player = attacker();
        let mut bats = vec![bat_at(1, 110.0), bat_at(2, 115.0), bat_at(3, 400.0)];

        for bat in bats.iter_mut() {
            strike(&player, bat, &mut rng);
        }
        assert_eq!(bats[2].damage.len(), 0);

        assert_eq!(finish_swing(PLAYER_ID, &mut bats), 2);
        assert!(bats.iter().all(|bat| bat.damage.is_empty()));

        assert!(strike(&player, &mut bats[0], &mut rng).is_some());
        assert_eq!(bats[0].health, 60.0);
    }

    #[test]
    fn test_finish_swing_keeps_other_attackers() {
        let mut bats = vec![bat_at(1, 110.0)];
        bats[0].damage.push(DamageRecord {
            attacker: 9,
            amount: 3.0,
            pending_removal: true,
        });
        assert_eq!(finish_swing(PLAYER_ID, &mut bats), 0);
        assert_eq!(bats[0].damage.len(), 1);
    }

    #[test]
    fn test_health_never_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let player = attacker();
        let mut bat = bat_at(1, 110.0);
        bat.health = 5.0;
        strike(&player, &mut bat, &mut rng);
        assert_eq!(bat.health, 0.0);
        assert!(bat.is_defeated());
    }

    #[test]
    fn test_crit_banner_rises_then_expires() {
        let bat = bat_at(1, 110.0);
        let mut banner = CritBanner::new("Critical!", &bat, 2.0, 1.0);
        let start_y = banner.position.y;

        assert!(banner.advance(2.5));
        assert_eq!(banner.position.y, start_y - CRIT_BANNER_RISE);
        assert!(!banner.advance(3.0));
    }
}
