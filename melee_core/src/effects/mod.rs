//! Special effects - cosmetic and status reactions to a resolved hit
//!
//! Dispatch reads the hit context and the final damage; it never feeds back
//! into the damage value.

use crate::classify::classify;
use crate::config::DamageTuning;
use crate::damage::HitContext;
use crate::modifiers::{elemental_bonus, is_player_critical, positional_factor};
use crate::types::Enchantment;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A side effect the host should perform after a hit lands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecialEffect {
    /// Critical hit particles at the target
    CritParticles { at: DVec3 },
    /// Backstab particles at the target
    BackstabParticles { at: DVec3 },
    /// Flash for hits that take a large share of the target's health
    HighDamageFlash { at: DVec3 },
    /// Set the target on fire
    Ignite { seconds: u32 },
}

/// Host seam that performs special effects in the world
pub trait EffectSink {
    fn apply(&mut self, effect: &SpecialEffect);
}

impl EffectSink for Vec<SpecialEffect> {
    fn apply(&mut self, effect: &SpecialEffect) {
        self.push(effect.clone());
    }
}

/// Decide which special effects a resolved hit triggers
///
/// Particles are only emitted for player attackers. Ignition applies to
/// any attacker whose weapon deals fire damage.
pub fn dispatch_special_effects(ctx: &HitContext<'_>, damage: f32, tuning: &DamageTuning) -> Vec<SpecialEffect> {
    let mut effects = Vec::new();
    let HitContext {
        attacker,
        target,
        weapon,
        ..
    } = *ctx;

    if attacker.is_player() {
        let at = target.mid_point();

        if is_player_critical(attacker, &tuning.critical) {
            effects.push(SpecialEffect::CritParticles { at });
        }

        if positional_factor(attacker, target, &tuning.position) >= tuning.position.backstab_multiplier {
            effects.push(SpecialEffect::BackstabParticles { at });
        }

        if damage > target.max_health * tuning.limits.high_damage_fraction {
            effects.push(SpecialEffect::HighDamageFlash { at });
        }
    }

    let class = classify(target, &tuning.elemental);
    if elemental_bonus(weapon, &class, &tuning.elemental) > 0.0 {
        let level = weapon.map_or(0, |w| w.enchantment_level(Enchantment::FireAspect));
        effects.push(SpecialEffect::Ignite {
            seconds: level * tuning.elemental.ignite_seconds_per_level,
        });
    }

    effects
}

/// Dispatch and hand every effect to the sink
pub fn apply_special_effects(
    ctx: &HitContext<'_>,
    damage: f32,
    tuning: &DamageTuning,
    sink: &mut impl EffectSink,
) -> Vec<SpecialEffect> {
    let effects = dispatch_special_effects(ctx, damage, tuning);
    for effect in &effects {
        debug!(?effect, victim = %ctx.target.entity_type, "special effect");
        sink.apply(effect);
    }
    effects
}
