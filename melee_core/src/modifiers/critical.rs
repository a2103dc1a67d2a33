//! Critical hit decision

use crate::actor::{Actor, ActorRole};
use crate::config::CriticalTuning;
use crate::random::RandomSource;
use crate::types::EffectKind;

/// Decide whether a hit is critical
///
/// Players crit on a charged, falling, unobstructed swing. Everything else
/// crits on a flat per-hit chance, which consumes one draw.
pub fn is_critical(attacker: &Actor, tuning: &CriticalTuning, rng: &mut impl RandomSource) -> bool {
    match attacker.role {
        ActorRole::Player(_) => is_player_critical(attacker, tuning),
        ActorRole::Mob => rng.next_unit() < tuning.mob_chance,
    }
}

/// Deterministic player critical rule; always false for non-players
pub fn is_player_critical(attacker: &Actor, tuning: &CriticalTuning) -> bool {
    let Some(player) = attacker.player_state() else {
        return false;
    };
    let movement = &attacker.movement;

    player.attack_strength_scale > tuning.min_attack_strength
        && movement.fall_distance > 0.0
        && !movement.on_ground
        && !movement.in_water
        && !attacker.has_effect(EffectKind::Blindness)
        && !movement.mounted
}
