//! Additive damage terms: attributes, enchantments, fire

use crate::actor::{Actor, Weapon};
use crate::classify::{FireAffinity, TargetClass};
use crate::config::{ElementalTuning, EnchantmentTuning, ScalingTuning};
use crate::types::Enchantment;

/// Attack-damage attribute above the unarmed baseline
///
/// Unweighted; the pipeline applies the attribute weight.
pub fn attribute_bonus(attacker: &Actor, tuning: &ScalingTuning) -> f32 {
    attacker.attack_damage - tuning.attribute_baseline
}

/// Sharpness always applies; smite and bane only against their creature type
pub fn enchantment_bonus(weapon: Option<&Weapon>, target: &TargetClass, tuning: &EnchantmentTuning) -> f32 {
    let Some(weapon) = weapon else {
        return 0.0;
    };

    let mut bonus = 0.0;

    let sharpness = weapon.enchantment_level(Enchantment::Sharpness);
    if sharpness > 0 {
        bonus += tuning.sharpness_base + sharpness as f32 * tuning.sharpness_per_level;
    }

    let smite = weapon.enchantment_level(Enchantment::Smite);
    if smite > 0 && target.is_undead() {
        bonus += smite as f32 * tuning.smite_per_level;
    }

    let bane = weapon.enchantment_level(Enchantment::BaneOfArthropods);
    if bane > 0 && target.is_arthropod() {
        bonus += bane as f32 * tuning.bane_per_level;
    }

    bonus
}

/// Fire-aspect damage, scaled by the target's fire affinity
pub fn elemental_bonus(weapon: Option<&Weapon>, target: &TargetClass, tuning: &ElementalTuning) -> f32 {
    let level = weapon.map_or(0, |w| w.enchantment_level(Enchantment::FireAspect));
    if level == 0 {
        return 0.0;
    }

    let fire = level as f32 * tuning.fire_per_level;
    match target.fire {
        FireAffinity::Vulnerable => fire * tuning.vulnerable_multiplier,
        FireAffinity::Resistant => fire * tuning.resistant_multiplier,
        FireAffinity::Neutral => fire,
    }
}
