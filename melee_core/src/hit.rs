//! Host adapter - translate a hurt event into a resolved hit

use crate::actor::Actor;
use crate::config::BreakdownSampling;
use crate::damage::{DamageBreakdown, DamageCalculator, DamageSourceMeta, HitContext};
use crate::effects::{apply_special_effects, EffectSink, SpecialEffect};
use crate::random::RandomSource;
use crate::world::WorldContext;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A living entity is about to take damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    /// Causing entity, `None` when damage has no living source
    pub attacker: Option<Actor>,
    pub target: Actor,
    /// Damage the host would apply by default
    pub amount: f32,
    pub source: DamageSourceMeta,
    /// Environment at the attacker's position
    pub world: WorldContext,
}

/// Why an event was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoLivingAttacker,
    NonPositiveAmount,
}

/// A hit the calculator took over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedHit {
    /// Amount the host proposed
    pub original: f32,
    /// Amount to apply instead
    pub damage: f32,
    /// Present when the attacker is a creative-mode player
    pub breakdown: Option<DamageBreakdown>,
    pub effects: Vec<SpecialEffect>,
}

/// What the host should do with the event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// Leave the event's amount unchanged
    Untouched { amount: f32, reason: SkipReason },
    Resolved(ResolvedHit),
}

impl HitOutcome {
    /// Damage the host should apply
    pub fn damage(&self) -> f32 {
        match self {
            HitOutcome::Untouched { amount, .. } => *amount,
            HitOutcome::Resolved(hit) => hit.damage,
        }
    }

    pub fn resolved(&self) -> Option<&ResolvedHit> {
        match self {
            HitOutcome::Resolved(hit) => Some(hit),
            HitOutcome::Untouched { .. } => None,
        }
    }
}

/// Handle a hurt event
///
/// Only player attackers use their held item; other attackers resolve
/// bare-handed. Special effects are dispatched after the damage is final.
pub fn on_living_hurt(
    calculator: &DamageCalculator,
    event: &HitEvent,
    rng: &mut impl RandomSource,
    sink: &mut impl EffectSink,
) -> HitOutcome {
    let Some(attacker) = event.attacker.as_ref() else {
        debug!(victim = %event.target.entity_type, "no living attacker, passing through");
        return HitOutcome::Untouched {
            amount: event.amount,
            reason: SkipReason::NoLivingAttacker,
        };
    };

    if event.amount <= 0.0 {
        debug!(amount = event.amount, "non-positive damage, passing through");
        return HitOutcome::Untouched {
            amount: event.amount,
            reason: SkipReason::NonPositiveAmount,
        };
    }

    let ctx = HitContext::melee(attacker, &event.target, &event.world);

    let resolved = calculator.resolve(&ctx, rng);
    let damage = resolved.final_damage;
    debug!(
        source = %event.source.kind,
        attacker = %attacker.entity_type,
        victim = %event.target.entity_type,
        original = event.amount,
        damage,
        "replaced hit damage"
    );

    let breakdown = if attacker.is_creative() {
        let breakdown = match calculator.tuning().breakdown.sampling {
            BreakdownSampling::Shared => resolved,
            BreakdownSampling::Independent => calculator.damage_breakdown(&ctx, rng),
        };
        debug!("{breakdown}");
        Some(breakdown)
    } else {
        None
    };

    let effects = apply_special_effects(&ctx, damage, calculator.tuning(), sink);

    HitOutcome::Resolved(ResolvedHit {
        original: event.amount,
        damage,
        breakdown,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Weapon;
    use crate::config::DamageTuning;
    use crate::random::{FixedRoll, RollSequence};
    use crate::types::{CreatureType, Enchantment};
    use glam::DVec3;

    fn event(attacker: Option<Actor>, amount: f32) -> HitEvent {
        let target = Actor::mob("minecraft:husk", CreatureType::Undead, DVec3::ZERO, 0.0, 20.0);
        let source = match &attacker {
            Some(a) => DamageSourceMeta::melee(a),
            None => DamageSourceMeta {
                kind: "cactus".to_string(),
                direct: false,
            },
        };
        HitEvent {
            attacker,
            target,
            amount,
            source,
            world: WorldContext::clear_day(),
        }
    }

    fn frontal_player() -> Actor {
        Actor::player(DVec3::new(-2.0, 0.0, 0.0), 0.0)
    }

    #[test]
    fn test_no_attacker_passes_through() {
        let calc = DamageCalculator::default();
        let mut sink: Vec<SpecialEffect> = Vec::new();
        let outcome = on_living_hurt(&calc, &event(None, 3.0), &mut FixedRoll(0.5), &mut sink);

        assert_eq!(
            outcome,
            HitOutcome::Untouched {
                amount: 3.0,
                reason: SkipReason::NoLivingAttacker
            }
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_zero_amount_passes_through() {
        let calc = DamageCalculator::default();
        let mut sink: Vec<SpecialEffect> = Vec::new();
        let outcome = on_living_hurt(&calc, &event(Some(frontal_player()), 0.0), &mut FixedRoll(0.5), &mut sink);

        assert!(outcome.resolved().is_none());
        assert!(outcome.damage().abs() < f32::EPSILON);
    }

    #[test]
    fn test_player_hit_replaces_amount() {
        let calc = DamageCalculator::default();
        let mut sink: Vec<SpecialEffect> = Vec::new();
        let outcome = on_living_hurt(&calc, &event(Some(frontal_player()), 1.0), &mut FixedRoll(0.5), &mut sink);

        let hit = outcome.resolved().unwrap();
        assert!((hit.original - 1.0).abs() < f32::EPSILON);
        assert!((hit.damage - 0.95).abs() < 1e-6);
        assert!(hit.breakdown.is_none());
    }

    #[test]
    fn test_mob_ignores_held_item() {
        let calc = DamageCalculator::default();
        let mut sink: Vec<SpecialEffect> = Vec::new();
        let mut skeleton = Actor::mob("minecraft:skeleton", CreatureType::Undead, DVec3::new(-2.0, 0.0, 0.0), 0.0, 20.0);
        skeleton.main_hand = Some(Weapon::diamond_sword().with_enchantment(Enchantment::FireAspect, 2));

        let outcome = on_living_hurt(&calc, &event(Some(skeleton), 5.0), &mut FixedRoll(0.5), &mut sink);
        let hit = outcome.resolved().unwrap();
        // Bare-handed frontal hit, no fire
        assert!((hit.damage - 0.95).abs() < 1e-6);
        assert!(hit.effects.is_empty());
    }

    #[test]
    fn test_effects_reach_sink() {
        let calc = DamageCalculator::default();
        let mut sink: Vec<SpecialEffect> = Vec::new();
        let player = frontal_player().with_weapon(Weapon::diamond_sword().with_enchantment(Enchantment::FireAspect, 1));

        let outcome = on_living_hurt(&calc, &event(Some(player), 6.0), &mut FixedRoll(0.5), &mut sink);
        let hit = outcome.resolved().unwrap();
        assert_eq!(sink, hit.effects);
        assert!(sink.contains(&SpecialEffect::Ignite { seconds: 4 }));
    }

    #[test]
    fn test_creative_shared_breakdown() {
        let mut tuning = DamageTuning::default();
        tuning.breakdown.sampling = BreakdownSampling::Shared;
        let calc = DamageCalculator::new(tuning);
        let mut player = frontal_player();
        if let Some(p) = player.player_state_mut() {
            p.creative = true;
        }

        let mut rolls = RollSequence::new(vec![0.9, 0.1]);
        let outcome = on_living_hurt(&calc, &event(Some(player), 1.0), &mut rolls, &mut Vec::<SpecialEffect>::new());
        let hit = outcome.resolved().unwrap();
        let breakdown = hit.breakdown.as_ref().unwrap();

        assert_eq!(rolls.drawn(), 1);
        assert!((breakdown.final_damage - hit.damage).abs() < f32::EPSILON);
    }

    #[test]
    fn test_creative_independent_breakdown() {
        let calc = DamageCalculator::default();
        let mut player = frontal_player();
        if let Some(p) = player.player_state_mut() {
            p.creative = true;
        }

        let mut rolls = RollSequence::new(vec![0.9, 0.1]);
        let outcome = on_living_hurt(&calc, &event(Some(player), 1.0), &mut rolls, &mut Vec::<SpecialEffect>::new());
        let hit = outcome.resolved().unwrap();
        let breakdown = hit.breakdown.as_ref().unwrap();

        assert_eq!(rolls.drawn(), 2);
        // Same hit, different variance sample
        assert!(breakdown.final_damage < hit.damage);
        assert!((breakdown.pre_armor_damage - 0.95).abs() < 1e-6);
    }
}
