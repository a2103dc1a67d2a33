//! Status effect modifier

use crate::actor::Actor;
use crate::config::StatusTuning;
use crate::types::EffectKind;

/// Combined factor from attacker buffs/debuffs and target vulnerabilities
///
/// Terms are applied in a fixed order (strength, weakness, mining fatigue,
/// haste, target resistance, wither, poison) because additive and
/// multiplicative terms are interleaved. The result never drops below the
/// configured floor.
pub fn status_effect_factor(attacker: &Actor, target: &Actor, tuning: &StatusTuning) -> f32 {
    let mut factor = 1.0;

    if let Some(effect) = attacker.effect(EffectKind::Strength) {
        factor += tuning.strength_per_level * effect.level();
    }

    if let Some(effect) = attacker.effect(EffectKind::Weakness) {
        factor -= tuning.weakness_per_level * effect.level();
    }

    if let Some(effect) = attacker.effect(EffectKind::MiningFatigue) {
        factor *= 1.0 - tuning.mining_fatigue_per_level * effect.level();
    }

    if let Some(effect) = attacker.effect(EffectKind::Haste) {
        factor += tuning.haste_per_level * effect.level();
    }

    if let Some(effect) = target.effect(EffectKind::Resistance) {
        factor *= 1.0 - tuning.resistance_per_level * effect.level();
    }

    if target.has_effect(EffectKind::Wither) {
        factor *= tuning.wither_multiplier;
    }

    if target.has_effect(EffectKind::Poison) {
        factor *= tuning.poison_multiplier;
    }

    factor.max(tuning.floor)
}
