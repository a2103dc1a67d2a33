//! DamageBreakdown - every intermediate value of one resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic record of a resolved hit
///
/// Produced by the same routine that computes the real damage, so
/// `final_damage` matches the pipeline output for the same draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub base_damage: f32,
    pub attack_speed_modifier: f32,
    /// Unweighted attribute bonus
    pub attribute_bonus: f32,
    /// Unweighted enchantment bonus
    pub enchantment_bonus: f32,
    pub is_critical: bool,
    /// Degrees between the target's facing and the attacker, 0-180
    pub hit_angle: f32,
    pub positional_modifier: f32,
    pub environmental_modifier: f32,
    pub weapon_condition_modifier: f32,
    pub actor_condition_modifier: f32,
    /// Unweighted fire damage
    pub elemental_damage: f32,
    pub status_modifier: f32,
    pub pre_armor_damage: f32,
    pub post_armor_damage: f32,
    pub variance_multiplier: f32,
    pub final_damage: f32,
}

impl DamageBreakdown {
    /// Damage removed by armor
    pub fn armor_mitigated(&self) -> f32 {
        self.pre_armor_damage - self.post_armor_damage
    }

    /// Whether the final value was raised by the floor or cut by the health cap
    pub fn was_clamped(&self) -> bool {
        let varied = self.post_armor_damage * self.variance_multiplier;
        (varied - self.final_damage).abs() > f32::EPSILON
    }

    /// Product of every multiplicative stage except the critical hit
    pub fn total_multiplier(&self) -> f32 {
        self.attack_speed_modifier
            * self.positional_modifier
            * self.environmental_modifier
            * self.weapon_condition_modifier
            * self.actor_condition_modifier
            * self.status_modifier
    }
}

impl fmt::Display for DamageBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Damage Breakdown:")?;
        writeln!(f, "Base: {:.1}", self.base_damage)?;
        writeln!(f, "Attack Speed Mod: {:.2}x", self.attack_speed_modifier)?;
        writeln!(f, "Attribute Bonus: +{:.1}", self.attribute_bonus)?;
        writeln!(f, "Enchantment Bonus: +{:.1}", self.enchantment_bonus)?;
        writeln!(f, "Critical Hit: {}", if self.is_critical { "Yes" } else { "No" })?;
        writeln!(f, "Position Modifier: {:.2}x ({:.0} deg)", self.positional_modifier, self.hit_angle)?;
        writeln!(f, "Environmental Mod: {:.2}x", self.environmental_modifier)?;
        writeln!(f, "Weapon Condition: {:.2}x", self.weapon_condition_modifier)?;
        writeln!(f, "Player Condition: {:.2}x", self.actor_condition_modifier)?;
        writeln!(f, "Elemental Damage: +{:.1}", self.elemental_damage)?;
        writeln!(f, "Status Modifier: {:.2}x", self.status_modifier)?;
        writeln!(f, "Before Armor: {:.2}", self.pre_armor_damage)?;
        writeln!(f, "After Armor: {:.2}", self.post_armor_damage)?;
        writeln!(f, "Variance: {:.2}x", self.variance_multiplier)?;
        write!(f, "Final Damage: {:.1}", self.final_damage)
    }
}
