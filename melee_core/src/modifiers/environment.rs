//! Environmental modifier - weather, water, altitude, heat, darkness

use crate::actor::Actor;
use crate::config::EnvironmentTuning;
use crate::types::EffectKind;
use crate::world::WorldContext;

/// Product of every environmental penalty and bonus that applies
///
/// Each check is independent; the order of multiplication is irrelevant.
pub fn environmental_factor(attacker: &Actor, world: &WorldContext, tuning: &EnvironmentTuning) -> f32 {
    let mut factor = 1.0;

    if world.exposed_to_rain() {
        factor *= tuning.rain_multiplier;
    }

    if attacker.movement.in_water && !attacker.has_effect(EffectKind::WaterBreathing) {
        factor *= tuning.underwater_multiplier;
    }

    if world.altitude > tuning.high_altitude {
        factor *= tuning.high_altitude_multiplier;
    }

    if world.biome_temperature > tuning.hot_temperature {
        factor *= tuning.heat_multiplier;
    }

    if world.light_level < tuning.dark_light_level && !attacker.has_effect(EffectKind::NightVision) {
        factor *= tuning.darkness_multiplier;
    }

    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn attacker() -> Actor {
        Actor::player(DVec3::new(0.0, 64.0, 0.0), 0.0)
    }

    #[test]
    fn test_neutral_world() {
        let factor = environmental_factor(&attacker(), &WorldContext::clear_day(), &EnvironmentTuning::default());
        assert!((factor - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_each_condition() {
        let t = EnvironmentTuning::default();
        let a = attacker();

        let rain = environmental_factor(&a, &WorldContext::clear_day().with_rain(true), &t);
        assert!((rain - 0.95).abs() < 1e-6);

        let mut covered = WorldContext::clear_day().with_rain(true);
        covered.sky_visible = false;
        assert!((environmental_factor(&a, &covered, &t) - 1.0).abs() < 1e-6);

        let peak = environmental_factor(&a, &WorldContext::clear_day().at_altitude(129), &t);
        assert!((peak - 1.05).abs() < 1e-6);
        let ridge = environmental_factor(&a, &WorldContext::clear_day().at_altitude(128), &t);
        assert!((ridge - 1.0).abs() < 1e-6);

        let desert = environmental_factor(&a, &WorldContext::clear_day().with_temperature(2.0), &t);
        assert!((desert - 0.95).abs() < 1e-6);

        let cave = environmental_factor(&a, &WorldContext::clear_day().with_light(3), &t);
        assert!((cave - 0.95).abs() < 1e-6);
        let dim = environmental_factor(&a, &WorldContext::clear_day().with_light(4), &t);
        assert!((dim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_effects_cancel_penalties() {
        let t = EnvironmentTuning::default();
        let mut diver = attacker();
        diver.movement.in_water = true;
        let dark = WorldContext::clear_day().with_light(0);

        let plain = environmental_factor(&diver, &dark, &t);
        assert!((plain - 0.85 * 0.95).abs() < 1e-6);

        let equipped = diver
            .with_effect(EffectKind::WaterBreathing, 0)
            .with_effect(EffectKind::NightVision, 0);
        assert!((environmental_factor(&equipped, &dark, &t) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_all_conditions_stack() {
        let t = EnvironmentTuning::default();
        let mut a = attacker();
        a.movement.in_water = true;
        let world = WorldContext::clear_day()
            .with_rain(true)
            .at_altitude(200)
            .with_temperature(2.0)
            .with_light(0);

        let expected = 0.95 * 0.85 * 1.05 * 0.95 * 0.95;
        assert!((environmental_factor(&a, &world, &t) - expected).abs() < 1e-5);
    }
}
