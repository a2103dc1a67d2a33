//! Armor - diminishing-returns mitigation with toughness

use crate::config::ArmorTuning;

/// Apply armor mitigation to incoming damage
///
/// `f = base + toughness / toughness_divisor`
/// `f1 = clamp(armor - damage / f, 0, armor * cap_fraction)`
/// `damage * (1 - f1 / divisor)`
///
/// Toughness widens `f`, so big hits are mitigated more against tough
/// armor. Mitigation never goes negative: armor cannot amplify a hit.
pub fn apply_armor_reduction(damage: f32, armor: f32, toughness: f32, tuning: &ArmorTuning) -> f32 {
    if damage <= 0.0 {
        return 0.0;
    }
    if armor <= 0.0 {
        return damage;
    }

    let f = tuning.base + toughness.max(0.0) / tuning.toughness_divisor;
    let f1 = (armor - damage / f).min(armor * tuning.cap_fraction).max(0.0);

    damage * (1.0 - f1 / tuning.divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> ArmorTuning {
        ArmorTuning::default()
    }

    #[test]
    fn test_no_armor() {
        let result = apply_armor_reduction(7.0, 0.0, 0.0, &tuning());
        assert!((result - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_damage() {
        assert!(apply_armor_reduction(0.0, 20.0, 8.0, &tuning()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_full_diamond_vs_sword() {
        // 20 armor, 8 toughness vs 7 damage
        // f = 2 + 8/4 = 4, f1 = min(20 - 1.75, 4) = 4
        // 7 * (1 - 4/25) = 5.88
        let result = apply_armor_reduction(7.0, 20.0, 8.0, &tuning());
        assert!((result - 5.88).abs() < 1e-4);
    }

    #[test]
    fn test_big_hit_through_light_armor() {
        // 5 armor vs 12 damage: f1 = min(5 - 6, 1) = -1, clamped to 0
        let result = apply_armor_reduction(12.0, 5.0, 0.0, &tuning());
        assert!((result - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_toughness_helps_against_big_hits() {
        // 10 armor vs 18 damage: f1 = 1 without toughness, capped at 2 with it
        let soft = apply_armor_reduction(18.0, 10.0, 0.0, &tuning());
        let tough = apply_armor_reduction(18.0, 10.0, 12.0, &tuning());
        assert!((soft - 17.28).abs() < 1e-4);
        assert!((tough - 16.56).abs() < 1e-4);
        assert!(tough < soft);
    }

    #[test]
    fn test_reduction_caps_at_fraction_of_armor() {
        // Cap is armor * 0.2 / 25 = 16% at 20 armor
        let result = apply_armor_reduction(1.0, 20.0, 0.0, &tuning());
        assert!((result - 0.84).abs() < 1e-5);
    }
}
