//! Damage pipeline - turning a hit context into a final damage value

use super::{DamageBreakdown, DamageSourceMeta, HitContext};
use crate::actor::{Actor, Weapon};
use crate::classify::classify;
use crate::config::DamageTuning;
use crate::modifiers::{
    actor_condition_factor, apply_armor_reduction, attack_speed_factor, attribute_bonus, base_damage,
    effective_attack_speed, elemental_bonus, enchantment_bonus, environmental_factor, hit_angle,
    is_critical, positional_factor_for_angle, status_effect_factor, variance_multiplier,
    weapon_condition_factor,
};
use crate::random::RandomSource;
use tracing::{debug, trace};

/// Stateless damage calculator bound to one tuning
#[derive(Debug, Clone, Default)]
pub struct DamageCalculator {
    tuning: DamageTuning,
}

impl DamageCalculator {
    pub fn new(tuning: DamageTuning) -> Self {
        DamageCalculator { tuning }
    }

    pub fn tuning(&self) -> &DamageTuning {
        &self.tuning
    }

    /// Final damage of a hit
    ///
    /// Draws once for a non-player critical roll (non-player attackers
    /// only), then once for variance.
    pub fn calculate_damage(
        &self,
        ctx: &HitContext<'_>,
        source: &DamageSourceMeta,
        rng: &mut impl RandomSource,
    ) -> f32 {
        let breakdown = self.resolve(ctx, rng);
        debug!(
            source = %source.kind,
            attacker = %ctx.attacker.entity_type,
            victim = %ctx.target.entity_type,
            critical = breakdown.is_critical,
            damage = breakdown.final_damage,
            "resolved melee hit"
        );
        breakdown.final_damage
    }

    /// Diagnostic record of a hit, using fresh draws from `rng`
    pub fn damage_breakdown(&self, ctx: &HitContext<'_>, rng: &mut impl RandomSource) -> DamageBreakdown {
        self.resolve(ctx, rng)
    }

    /// Evaluate every modifier and fold them into the final damage
    ///
    /// This is the single implementation of the combination algebra; both the
    /// scalar result and the breakdown come from here.
    pub fn resolve(&self, ctx: &HitContext<'_>, rng: &mut impl RandomSource) -> DamageBreakdown {
        let t = &self.tuning;
        let HitContext {
            attacker,
            target,
            weapon,
            world,
        } = *ctx;
        let class = classify(target, &t.elemental);
        let angle = hit_angle(attacker, target);

        let mut b = DamageBreakdown {
            base_damage: base_damage(weapon, &t.weapon),
            attack_speed_modifier: attack_speed_factor(weapon, &t.weapon),
            attribute_bonus: attribute_bonus(attacker, &t.scaling),
            enchantment_bonus: enchantment_bonus(weapon, &class, &t.enchantment),
            is_critical: is_critical(attacker, &t.critical, rng),
            hit_angle: angle as f32,
            positional_modifier: positional_factor_for_angle(angle, &t.position),
            environmental_modifier: environmental_factor(attacker, world, &t.environment),
            weapon_condition_modifier: weapon_condition_factor(weapon, &t.weapon),
            actor_condition_modifier: actor_condition_factor(attacker, &t.condition),
            elemental_damage: elemental_bonus(weapon, &class, &t.elemental),
            status_modifier: status_effect_factor(attacker, target, &t.status),
            pre_armor_damage: 0.0,
            post_armor_damage: 0.0,
            variance_multiplier: 1.0,
            final_damage: 0.0,
        };

        let mut damage = b.base_damage;
        damage *= b.attack_speed_modifier;
        stage("attack_speed", b.attack_speed_modifier, damage);
        damage += b.attribute_bonus * t.scaling.attribute_weight;
        stage("attribute", b.attribute_bonus, damage);
        damage += b.enchantment_bonus * t.scaling.enchantment_weight;
        stage("enchantment", b.enchantment_bonus, damage);
        if b.is_critical {
            damage *= t.critical.multiplier;
            stage("critical", t.critical.multiplier, damage);
        }
        damage *= b.positional_modifier;
        stage("position", b.positional_modifier, damage);
        damage *= b.environmental_modifier;
        stage("environment", b.environmental_modifier, damage);
        damage *= b.weapon_condition_modifier;
        stage("weapon_condition", b.weapon_condition_modifier, damage);
        damage *= b.actor_condition_modifier;
        stage("actor_condition", b.actor_condition_modifier, damage);
        damage += b.elemental_damage * t.scaling.elemental_weight;
        stage("elemental", b.elemental_damage, damage);
        damage *= b.status_modifier;
        stage("status", b.status_modifier, damage);

        b.pre_armor_damage = damage;
        b.post_armor_damage = apply_armor_reduction(damage, target.armor, target.armor_toughness, &t.armor);
        stage("armor", target.armor, b.post_armor_damage);

        b.variance_multiplier = variance_multiplier(rng.next_unit(), &t.variance);
        let varied = b.post_armor_damage * b.variance_multiplier;
        stage("variance", b.variance_multiplier, varied);

        b.final_damage = varied.min(target.max_health).max(t.limits.min_damage);
        b
    }

    /// Damage-per-second estimate for weapon comparison
    ///
    /// Independent of any target; the wielder does not change the result.
    pub fn calculate_dps(&self, weapon: Option<&Weapon>, _wielder: &Actor) -> f32 {
        base_damage(weapon, &self.tuning.weapon) * effective_attack_speed(weapon, &self.tuning.weapon)
    }
}

fn stage(name: &'static str, value: f32, running: f32) {
    trace!(stage = name, value, running, "damage stage");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::MovementState;
    use crate::random::{FixedRoll, RollSequence};
    use crate::types::{CreatureType, EffectKind, Enchantment};
    use crate::world::WorldContext;
    use glam::DVec3;

    /// Target at the origin facing yaw 0; attacker on the -X side is frontal
    fn frontal_duel() -> (Actor, Actor) {
        let attacker = Actor::player(DVec3::new(-2.0, 64.0, 0.0), 0.0);
        let target = Actor::mob("minecraft:cow", CreatureType::Generic, DVec3::new(0.0, 64.0, 0.0), 0.0, 10.0);
        (attacker, target)
    }

    fn source(attacker: &Actor) -> DamageSourceMeta {
        DamageSourceMeta::melee(attacker)
    }

    #[test]
    fn test_bare_hand_frontal() {
        let calc = DamageCalculator::default();
        let (attacker, target) = frontal_duel();
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&attacker, &target, None, &world);

        let damage = calc.calculate_damage(&ctx, &source(&attacker), &mut FixedRoll(0.5));
        assert!((damage - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_sword_backstab_crit() {
        let calc = DamageCalculator::default();
        let (_, target) = frontal_duel();
        let mut attacker = Actor::player(DVec3::new(2.0, 64.0, 0.0), 0.0);
        attacker.movement = MovementState::falling(1.0);
        let sword = Weapon::diamond_sword();
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&attacker, &target, Some(&sword), &world);

        let b = calc.damage_breakdown(&ctx, &mut FixedRoll(0.5));
        assert!(b.is_critical);
        assert!((b.positional_modifier - 1.25).abs() < f32::EPSILON);
        // 7 * 1.0 * 1.35 * 1.25, capped at the cow's 10 health
        assert!((b.pre_armor_damage - 11.8125).abs() < 1e-4);
        assert!((b.final_damage - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_additive_terms_are_weighted() {
        let calc = DamageCalculator::default();
        let (mut attacker, target) = frontal_duel();
        attacker.attack_damage = 3.0;
        let sword = Weapon::diamond_sword()
            .with_enchantment(Enchantment::Sharpness, 1)
            .with_enchantment(Enchantment::FireAspect, 1);
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&attacker, &target, Some(&sword), &world);

        let b = calc.damage_breakdown(&ctx, &mut FixedRoll(0.5));
        // ((7 + 2 * 0.5 + 1 * 0.8) * 0.95) + 0.5 * 0.6
        let expected = (7.0 + 1.0 + 0.8) * 0.95 + 0.3;
        assert!((b.pre_armor_damage - expected).abs() < 1e-4);
        // cow has 10 health
        assert!((b.final_damage - expected.min(10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_floor_applies_last() {
        let calc = DamageCalculator::default();
        let (attacker, target) = frontal_duel();
        let attacker = attacker.with_effect(EffectKind::Weakness, 4);
        let target = target.with_armor(30.0, 20.0);
        let world = WorldContext::clear_day().with_rain(true).with_light(0);
        let ctx = HitContext::new(&attacker, &target, None, &world);

        let damage = calc.calculate_damage(&ctx, &source(&attacker), &mut FixedRoll(0.0));
        assert!((damage - 0.45).abs() < f32::EPSILON);
    }

    #[test]
    fn test_mob_draw_order() {
        let calc = DamageCalculator::default();
        let zombie = Actor::mob("minecraft:zombie", CreatureType::Undead, DVec3::new(-2.0, 64.0, 0.0), 0.0, 20.0);
        let mut player = Actor::player(DVec3::new(0.0, 64.0, 0.0), 0.0);
        player.max_health = 100.0;
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&zombie, &player, None, &world);

        // First draw crits, second is the variance roll
        let mut rolls = RollSequence::new(vec![0.0, 1.0 - f32::EPSILON]);
        let b = calc.damage_breakdown(&ctx, &mut rolls);
        assert_eq!(rolls.drawn(), 2);
        assert!(b.is_critical);
        assert!(b.variance_multiplier > 1.14);
    }

    #[test]
    fn test_player_draws_once() {
        let calc = DamageCalculator::default();
        let (attacker, target) = frontal_duel();
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&attacker, &target, None, &world);

        let mut rolls = RollSequence::new(vec![0.5]);
        calc.calculate_damage(&ctx, &source(&attacker), &mut rolls);
        assert_eq!(rolls.drawn(), 1);
    }

    #[test]
    fn test_alternate_tuning() {
        let mut tuning = DamageTuning::default();
        tuning.position.frontal_multiplier = 1.0;
        let calc = DamageCalculator::new(tuning);
        let (attacker, target) = frontal_duel();
        let world = WorldContext::clear_day();
        let ctx = HitContext::new(&attacker, &target, None, &world);

        let damage = calc.calculate_damage(&ctx, &source(&attacker), &mut FixedRoll(0.5));
        assert!((damage - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dps() {
        let calc = DamageCalculator::default();
        let wielder = Actor::player(DVec3::ZERO, 0.0);

        assert!((calc.calculate_dps(None, &wielder) - 4.0).abs() < 1e-6);
        // 7 * (4 - 2.4)
        let sword = Weapon::diamond_sword();
        assert!((calc.calculate_dps(Some(&sword), &wielder) - 11.2).abs() < 1e-4);
    }

    #[test]
    fn test_dps_uses_speed_baseline_not_wielder() {
        let calc = DamageCalculator::default();
        let sword = Weapon::diamond_sword();
        let mut slow = Actor::player(DVec3::ZERO, 0.0);
        slow.attack_speed = 1.0;

        let stock = calc.calculate_dps(Some(&sword), &Actor::player(DVec3::ZERO, 0.0));
        assert!((calc.calculate_dps(Some(&sword), &slow) - stock).abs() < f32::EPSILON);
    }
}
