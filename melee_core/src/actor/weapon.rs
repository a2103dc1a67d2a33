//! Weapon - the item in an attacker's main hand

use crate::types::{Enchantment, Enchantments};
use serde::{Deserialize, Serialize};

/// Combat-relevant snapshot of a held item
///
/// Attribute values are the summed main-hand modifiers of the item, so a
/// vanilla diamond sword carries `attack_damage = 7.0` and
/// `attack_speed = -2.4` (added on top of the 4.0 baseline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub item_id: String,
    /// Sum of attack-damage modifiers
    pub attack_damage: f32,
    /// Sum of attack-speed modifiers
    pub attack_speed: f32,
    /// 0 for items that never wear down
    #[serde(default)]
    pub max_durability: u32,
    /// Accumulated wear
    #[serde(default)]
    pub wear: u32,
    #[serde(default)]
    pub enchantments: Enchantments,
}

impl Weapon {
    pub fn new(item_id: impl Into<String>, attack_damage: f32, attack_speed: f32) -> Self {
        Weapon {
            item_id: item_id.into(),
            attack_damage,
            attack_speed,
            max_durability: 0,
            wear: 0,
            enchantments: Enchantments::new(),
        }
    }

    /// Set durability (builder pattern)
    pub fn with_durability(mut self, max_durability: u32, wear: u32) -> Self {
        self.max_durability = max_durability;
        self.wear = wear.min(max_durability);
        self
    }

    /// Add an enchantment (builder pattern)
    pub fn with_enchantment(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.enchantments.set(enchantment, level);
        self
    }

    pub fn enchantment_level(&self, enchantment: Enchantment) -> u32 {
        self.enchantments.level(enchantment)
    }

    /// Whether the item loses durability with use
    pub fn is_damageable(&self) -> bool {
        self.max_durability > 0
    }

    /// Remaining durability as a fraction, `None` for items that never wear
    pub fn durability_fraction(&self) -> Option<f32> {
        if !self.is_damageable() {
            return None;
        }
        Some(1.0 - self.wear as f32 / self.max_durability as f32)
    }

    pub fn diamond_sword() -> Self {
        Weapon::new("minecraft:diamond_sword", 7.0, -2.4).with_durability(1561, 0)
    }

    pub fn iron_axe() -> Self {
        Weapon::new("minecraft:iron_axe", 9.0, -3.1).with_durability(250, 0)
    }

    pub fn wooden_sword() -> Self {
        Weapon::new("minecraft:wooden_sword", 4.0, -2.4).with_durability(59, 0)
    }
}
