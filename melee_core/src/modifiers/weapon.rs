//! Weapon-derived modifiers: base damage, swing speed, wear

use crate::actor::Weapon;
use crate::config::WeaponTuning;

/// Base damage of the held item
///
/// An empty hand deals the unarmed damage; weapons are floored at it.
pub fn base_damage(weapon: Option<&Weapon>, tuning: &WeaponTuning) -> f32 {
    match weapon {
        None => tuning.unarmed_damage,
        Some(w) => w.attack_damage.max(tuning.unarmed_damage),
    }
}

/// Attacks per second: the speed baseline plus the weapon's speed bonus
pub fn effective_attack_speed(weapon: Option<&Weapon>, tuning: &WeaponTuning) -> f32 {
    tuning.speed_baseline + weapon.map_or(0.0, |w| w.attack_speed)
}

/// Slow weapons hit harder, fast weapons hit softer
///
/// Both thresholds are inclusive. An empty hand is neutral.
pub fn attack_speed_factor(weapon: Option<&Weapon>, tuning: &WeaponTuning) -> f32 {
    if weapon.is_none() {
        return 1.0;
    }

    let speed = effective_attack_speed(weapon, tuning);
    if speed <= tuning.slow_threshold {
        tuning.slow_multiplier
    } else if speed >= tuning.fast_threshold {
        tuning.fast_multiplier
    } else {
        1.0
    }
}

/// Worn weapons lose effectiveness
///
/// Items without durability (and empty hands) are never penalised. The
/// first band whose threshold the remaining fraction is below wins.
pub fn weapon_condition_factor(weapon: Option<&Weapon>, tuning: &WeaponTuning) -> f32 {
    let Some(fraction) = weapon.and_then(Weapon::durability_fraction) else {
        return 1.0;
    };

    tuning
        .wear_bands
        .iter()
        .find(|band| fraction < band.below)
        .map_or(1.0, |band| band.multiplier)
}
