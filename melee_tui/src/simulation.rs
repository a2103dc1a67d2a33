//! Hit simulation utilities

use melee_core::{DamageCalculator, HitContext, RandomSource};

/// Distribution of repeated hits from one fixed context
#[derive(Debug, Clone, PartialEq)]
pub struct HitSimulation {
    pub hit_count: u32,
    /// Sum of applied damage
    pub total_damage: f64,
    /// Sum of breakdown final damage, drawn independently
    pub breakdown_total: f64,
    pub min_damage: f32,
    pub max_damage: f32,
    /// Critical applied hits
    pub crit_count: u32,
    /// Applied hits raised by the damage floor or cut by the health cap
    pub clamped_count: u32,
    /// Swings until the target's health would be used up, if it ever is
    pub hits_to_kill: Option<u32>,
}

impl HitSimulation {
    /// Resolve the same hit `hits` times
    ///
    /// Each swing is resolved once as the applied hit, which feeds every
    /// count, and once more as an independent breakdown for `breakdown_total`.
    pub fn run(calculator: &DamageCalculator, ctx: &HitContext<'_>, hits: u32, rng: &mut impl RandomSource) -> Self {
        let mut result = HitSimulation {
            hit_count: 0,
            total_damage: 0.0,
            breakdown_total: 0.0,
            min_damage: f32::MAX,
            max_damage: 0.0,
            crit_count: 0,
            clamped_count: 0,
            hits_to_kill: None,
        };

        let health = ctx.target.max_health as f64;

        for _ in 0..hits {
            let hit = calculator.resolve(ctx, rng);
            let breakdown = calculator.damage_breakdown(ctx, rng);
            let damage = hit.final_damage;

            result.hit_count += 1;
            result.total_damage += damage as f64;
            result.breakdown_total += breakdown.final_damage as f64;
            result.min_damage = result.min_damage.min(damage);
            result.max_damage = result.max_damage.max(damage);
            if hit.is_critical {
                result.crit_count += 1;
            }
            if hit.was_clamped() {
                result.clamped_count += 1;
            }

            if result.hits_to_kill.is_none() && result.total_damage >= health {
                result.hits_to_kill = Some(result.hit_count);
            }
        }

        if result.hit_count == 0 {
            result.min_damage = 0.0;
        }

        result
    }

    /// Calculate average damage per hit
    pub fn avg_damage(&self) -> f64 {
        if self.hit_count > 0 {
            self.total_damage / self.hit_count as f64
        } else {
            0.0
        }
    }

    pub fn avg_breakdown_damage(&self) -> f64 {
        if self.hit_count > 0 {
            self.breakdown_total / self.hit_count as f64
        } else {
            0.0
        }
    }

    /// Calculate crit rate
    pub fn crit_rate(&self) -> f64 {
        if self.hit_count > 0 {
            self.crit_count as f64 / self.hit_count as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn clamp_rate(&self) -> f64 {
        if self.hit_count > 0 {
            self.clamped_count as f64 / self.hit_count as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use melee_core::{Actor, CreatureType, DamageSourceMeta, FixedRoll, RollSequence, WorldContext};
    use rand::SeedableRng;

    #[test]
    fn test_fixed_roll_simulation() {
        let calc = DamageCalculator::default();
        let attacker = Actor::player(DVec3::new(-2.0, 64.0, 0.0), 0.0);
        let target = Actor::mob("minecraft:cow", CreatureType::Generic, DVec3::new(0.0, 64.0, 0.0), 0.0, 10.0);
        let world = WorldContext::clear_day();
        let ctx = HitContext::melee(&attacker, &target, &world);

        let result = HitSimulation::run(&calc, &ctx, 20, &mut FixedRoll(0.5));

        assert_eq!(result.hit_count, 20);
        assert_eq!(result.crit_count, 0);
        assert!((result.avg_damage() - 0.95).abs() < 1e-5);
        assert!((result.avg_breakdown_damage() - result.avg_damage()).abs() < 1e-5);
        assert!((result.min_damage - result.max_damage).abs() < f32::EPSILON);
        // 0.95 per hit against 10 health
        assert_eq!(result.hits_to_kill, Some(11));
    }

    #[test]
    fn test_mob_crit_rate() {
        let calc = DamageCalculator::default();
        let zombie = Actor::mob("minecraft:zombie", CreatureType::Undead, DVec3::new(-2.0, 64.0, 0.0), 0.0, 20.0);
        let target = Actor::player(DVec3::new(0.0, 64.0, 0.0), 0.0);
        let world = WorldContext::clear_day();
        let ctx = HitContext::melee(&zombie, &target, &world);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let result = HitSimulation::run(&calc, &ctx, 4000, &mut rng);

        assert!(result.crit_count > 0);
        // 5% nominal
        assert!(result.crit_rate() > 2.0 && result.crit_rate() < 9.0);
        assert!(result.min_damage >= 0.45);
        assert!(result.max_damage <= 20.0);
        // Both paths share one algebra, so the means converge
        assert!((result.avg_breakdown_damage() - result.avg_damage()).abs() < 0.1);
    }

    #[test]
    fn test_counts_follow_applied_hit() {
        let calc = DamageCalculator::default();
        let zombie = Actor::mob("minecraft:zombie", CreatureType::Undead, DVec3::new(-2.0, 64.0, 0.0), 0.0, 20.0);
        let target = Actor::player(DVec3::new(0.0, 64.0, 0.0), 0.0);
        let world = WorldContext::clear_day();
        let ctx = HitContext::melee(&zombie, &target, &world);

        // Applied hit crits, the breakdown drawn after it does not
        let mut rolls = RollSequence::new(vec![0.01, 0.5, 0.9, 0.5]);
        let result = HitSimulation::run(&calc, &ctx, 1, &mut rolls);

        assert_eq!(result.crit_count, 1);
        assert!((result.avg_damage() / result.avg_breakdown_damage() - 1.35).abs() < 1e-4);

        let source = DamageSourceMeta::melee(&zombie);
        let expected = calc.calculate_damage(&ctx, &source, &mut RollSequence::new(vec![0.01, 0.5]));
        assert!((result.max_damage - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_run() {
        let calc = DamageCalculator::default();
        let attacker = Actor::player(DVec3::ZERO, 0.0);
        let target = Actor::player(DVec3::X, 0.0);
        let world = WorldContext::clear_day();
        let ctx = HitContext::melee(&attacker, &target, &world);

        let result = HitSimulation::run(&calc, &ctx, 0, &mut FixedRoll(0.5));
        assert_eq!(result.hit_count, 0);
        assert!(result.avg_damage().abs() < f64::EPSILON);
        assert!(result.min_damage.abs() < f32::EPSILON);
    }
}
