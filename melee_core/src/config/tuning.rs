//! Damage tuning - every balance constant of the melee model

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable damage constants
///
/// `Default` reproduces the shipped balance. Every section and field may be
/// omitted from a TOML file and falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTuning {
    pub weapon: WeaponTuning,
    pub scaling: ScalingTuning,
    pub enchantment: EnchantmentTuning,
    pub critical: CriticalTuning,
    pub position: PositionTuning,
    pub environment: EnvironmentTuning,
    pub condition: ConditionTuning,
    pub elemental: ElementalTuning,
    pub status: StatusTuning,
    pub armor: ArmorTuning,
    pub variance: VarianceTuning,
    pub limits: LimitTuning,
    pub breakdown: BreakdownTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Damage of an empty hand, also the floor for weapon damage
    pub unarmed_damage: f32,
    /// Added to the weapon's attack-speed bonus before banding
    pub speed_baseline: f32,
    /// Speeds at or below this get the slow-weapon bonus
    pub slow_threshold: f32,
    /// Speeds at or above this get the fast-weapon penalty
    pub fast_threshold: f32,
    pub slow_multiplier: f32,
    pub fast_multiplier: f32,
    /// Durability bands as (remaining fraction below, multiplier), tightest first
    pub wear_bands: Vec<WearBand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WearBand {
    pub below: f32,
    pub multiplier: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        WeaponTuning {
            unarmed_damage: 1.0,
            speed_baseline: 4.0,
            slow_threshold: 1.0,
            fast_threshold: 2.5,
            slow_multiplier: 1.15,
            fast_multiplier: 0.85,
            wear_bands: vec![
                WearBand { below: 0.10, multiplier: 0.85 },
                WearBand { below: 0.25, multiplier: 0.92 },
                WearBand { below: 0.50, multiplier: 0.97 },
            ],
        }
    }
}

/// Weights applied to additive terms when folded into the running damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingTuning {
    /// Attack-damage attribute value assumed for an unarmed, unbuffed actor
    pub attribute_baseline: f32,
    pub attribute_weight: f32,
    pub enchantment_weight: f32,
    pub elemental_weight: f32,
}

impl Default for ScalingTuning {
    fn default() -> Self {
        ScalingTuning {
            attribute_baseline: 1.0,
            attribute_weight: 0.5,
            enchantment_weight: 0.8,
            elemental_weight: 0.6,
        }
    }
}

/// Flat damage per enchantment level
///
/// Sharpness is `sharpness_base + level * sharpness_per_level`; smite and
/// bane are `level * per_level` against their creature type only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnchantmentTuning {
    pub sharpness_base: f32,
    pub sharpness_per_level: f32,
    pub smite_per_level: f32,
    pub bane_per_level: f32,
}

impl Default for EnchantmentTuning {
    fn default() -> Self {
        EnchantmentTuning {
            sharpness_base: 0.5,
            sharpness_per_level: 0.5,
            smite_per_level: 2.5,
            bane_per_level: 2.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalTuning {
    pub multiplier: f32,
    /// Players need an attack cooldown scale strictly above this
    pub min_attack_strength: f32,
    /// Per-hit critical probability for non-player attackers
    pub mob_chance: f32,
}

impl Default for CriticalTuning {
    fn default() -> Self {
        CriticalTuning {
            multiplier: 1.35,
            min_attack_strength: 0.9,
            mob_chance: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionTuning {
    /// Angles (degrees) strictly below this count as a backstab
    pub backstab_angle: f32,
    /// Angles strictly below this (and not a backstab) count as a side hit
    pub side_angle: f32,
    pub backstab_multiplier: f32,
    pub side_multiplier: f32,
    pub frontal_multiplier: f32,
}

impl Default for PositionTuning {
    fn default() -> Self {
        PositionTuning {
            backstab_angle: 45.0,
            side_angle: 135.0,
            backstab_multiplier: 1.25,
            side_multiplier: 1.08,
            frontal_multiplier: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentTuning {
    pub rain_multiplier: f32,
    pub underwater_multiplier: f32,
    /// Altitudes strictly above this get the high-altitude bonus
    pub high_altitude: i32,
    pub high_altitude_multiplier: f32,
    /// Biome temperatures strictly above this count as very hot
    pub hot_temperature: f32,
    pub heat_multiplier: f32,
    /// Light levels strictly below this count as dark
    pub dark_light_level: u8,
    pub darkness_multiplier: f32,
}

impl Default for EnvironmentTuning {
    fn default() -> Self {
        EnvironmentTuning {
            rain_multiplier: 0.95,
            underwater_multiplier: 0.85,
            high_altitude: 128,
            high_altitude_multiplier: 1.05,
            hot_temperature: 1.5,
            heat_multiplier: 0.95,
            dark_light_level: 4,
            darkness_multiplier: 0.95,
        }
    }
}

/// Player hunger and exhaustion penalties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionTuning {
    pub starving_below: u8,
    pub starving_multiplier: f32,
    pub hungry_below: u8,
    pub hungry_multiplier: f32,
    /// Exhaustion strictly above this applies the penalty
    pub exhaustion_above: f32,
    pub exhaustion_multiplier: f32,
}

impl Default for ConditionTuning {
    fn default() -> Self {
        ConditionTuning {
            starving_below: 6,
            starving_multiplier: 0.85,
            hungry_below: 12,
            hungry_multiplier: 0.95,
            exhaustion_above: 3.0,
            exhaustion_multiplier: 0.93,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementalTuning {
    pub fire_per_level: f32,
    pub vulnerable_multiplier: f32,
    pub resistant_multiplier: f32,
    /// Ignite duration per fire-aspect level
    pub ignite_seconds_per_level: u32,
    /// Entity type names containing any of these take extra fire damage
    pub vulnerable_patterns: Vec<String>,
    /// Entity type names containing any of these take reduced fire damage
    pub resistant_patterns: Vec<String>,
}

impl Default for ElementalTuning {
    fn default() -> Self {
        ElementalTuning {
            fire_per_level: 0.5,
            vulnerable_multiplier: 1.1,
            resistant_multiplier: 0.9,
            ignite_seconds_per_level: 4,
            vulnerable_patterns: vec!["creeper".into(), "ice".into(), "snow".into()],
            resistant_patterns: vec!["blaze".into(), "magma".into(), "ghast".into()],
        }
    }
}

/// Per-level status effect weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusTuning {
    pub strength_per_level: f32,
    pub weakness_per_level: f32,
    pub mining_fatigue_per_level: f32,
    pub haste_per_level: f32,
    pub resistance_per_level: f32,
    pub wither_multiplier: f32,
    pub poison_multiplier: f32,
    /// Lower bound of the combined status factor
    pub floor: f32,
}

impl Default for StatusTuning {
    fn default() -> Self {
        StatusTuning {
            strength_per_level: 0.15,
            weakness_per_level: 0.25,
            mining_fatigue_per_level: 0.1,
            haste_per_level: 0.05,
            resistance_per_level: 0.15,
            wither_multiplier: 1.1,
            poison_multiplier: 1.05,
            floor: 0.45,
        }
    }
}

/// Armor formula: `f = base + toughness / toughness_divisor`,
/// `f1 = clamp(armor - damage / f, 0, armor * cap_fraction)`,
/// `damage * (1 - f1 / divisor)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorTuning {
    pub base: f32,
    pub toughness_divisor: f32,
    pub cap_fraction: f32,
    pub divisor: f32,
}

impl Default for ArmorTuning {
    fn default() -> Self {
        ArmorTuning {
            base: 2.0,
            toughness_divisor: 4.0,
            cap_fraction: 0.2,
            divisor: 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarianceTuning {
    /// Half-width of the uniform multiplier band around 1.0
    pub spread: f32,
}

impl Default for VarianceTuning {
    fn default() -> Self {
        VarianceTuning { spread: 0.15 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitTuning {
    /// Absolute minimum damage of any resolved hit
    pub min_damage: f32,
    /// Damage above this fraction of target max health triggers the flash effect
    pub high_damage_fraction: f32,
}

impl Default for LimitTuning {
    fn default() -> Self {
        LimitTuning {
            min_damage: 0.45,
            high_damage_fraction: 0.3,
        }
    }
}

/// How a diagnostic breakdown obtains its random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownSampling {
    /// Draw fresh rolls, an illustrative sample of the same hit
    #[default]
    Independent,
    /// Reuse the rolls of the hit being explained
    Shared,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakdownTuning {
    pub sampling: BreakdownSampling,
}

impl DamageTuning {
    /// Reject tunings that would break the model's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::ValidationError(msg.into()))
        }

        if self.weapon.slow_threshold >= self.weapon.fast_threshold {
            return fail("weapon.slow_threshold must be below weapon.fast_threshold");
        }
        if self.weapon.unarmed_damage <= 0.0 {
            return fail("weapon.unarmed_damage must be positive");
        }
        let mut last = 0.0;
        for band in &self.weapon.wear_bands {
            if band.below <= last || band.below > 1.0 {
                return fail("weapon.wear_bands must be ascending fractions within (0, 1]");
            }
            last = band.below;
        }
        let e = &self.enchantment;
        if [e.sharpness_base, e.sharpness_per_level, e.smite_per_level, e.bane_per_level]
            .iter()
            .any(|v| *v < 0.0)
        {
            return fail("enchantment values must not be negative");
        }
        if !(0.0..=1.0).contains(&self.critical.mob_chance) {
            return fail("critical.mob_chance must be within [0, 1]");
        }
        let pos = &self.position;
        if !(0.0 < pos.backstab_angle && pos.backstab_angle <= pos.side_angle && pos.side_angle <= 180.0) {
            return fail("position angles must satisfy 0 < backstab_angle <= side_angle <= 180");
        }
        if self.condition.starving_below > self.condition.hungry_below {
            return fail("condition.starving_below must not exceed condition.hungry_below");
        }
        if self.armor.divisor <= 0.0 || self.armor.toughness_divisor <= 0.0 || self.armor.base <= 0.0 {
            return fail("armor.base, armor.divisor and armor.toughness_divisor must be positive");
        }
        if !(0.0..1.0).contains(&self.variance.spread) {
            return fail("variance.spread must be within [0, 1)");
        }
        if self.status.floor < 0.0 || self.limits.min_damage < 0.0 {
            return fail("status.floor and limits.min_damage must not be negative");
        }
        Ok(())
    }
}
