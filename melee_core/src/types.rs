//! Core types shared by actors, weapons and modifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status effect kinds the damage model reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    // Attacker-side
    Strength,
    Weakness,
    MiningFatigue,
    Haste,
    Blindness,
    WaterBreathing,
    NightVision,
    // Target-side
    Resistance,
    FireResistance,
    Wither,
    Poison,
}

impl EffectKind {
    /// Get all effect kinds
    pub fn all() -> &'static [EffectKind] {
        &[
            EffectKind::Strength,
            EffectKind::Weakness,
            EffectKind::MiningFatigue,
            EffectKind::Haste,
            EffectKind::Blindness,
            EffectKind::WaterBreathing,
            EffectKind::NightVision,
            EffectKind::Resistance,
            EffectKind::FireResistance,
            EffectKind::Wither,
            EffectKind::Poison,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Strength => "Strength",
            EffectKind::Weakness => "Weakness",
            EffectKind::MiningFatigue => "Mining Fatigue",
            EffectKind::Haste => "Haste",
            EffectKind::Blindness => "Blindness",
            EffectKind::WaterBreathing => "Water Breathing",
            EffectKind::NightVision => "Night Vision",
            EffectKind::Resistance => "Resistance",
            EffectKind::FireResistance => "Fire Resistance",
            EffectKind::Wither => "Wither",
            EffectKind::Poison => "Poison",
        }
    }
}

/// Active status effect on an actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// The kind of effect
    pub kind: EffectKind,
    /// Zero-based amplifier (level I = 0)
    #[serde(default)]
    pub amplifier: u8,
    /// Remaining duration in ticks
    #[serde(default)]
    pub duration_ticks: u32,
}

impl ActiveEffect {
    pub fn new(kind: EffectKind, amplifier: u8) -> Self {
        ActiveEffect {
            kind,
            amplifier,
            duration_ticks: 600,
        }
    }

    /// Amplifier expressed as an effect level (amplifier 0 = level 1)
    pub fn level(&self) -> f32 {
        self.amplifier as f32 + 1.0
    }
}

/// Enchantments recognised by the damage model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enchantment {
    Sharpness,
    Smite,
    BaneOfArthropods,
    FireAspect,
}

/// Enchantment levels on an item. Missing entries are level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enchantments(BTreeMap<Enchantment, u32>);

impl Enchantments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an enchantment (builder pattern)
    pub fn with(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.set(enchantment, level);
        self
    }

    /// Set an enchantment level; level 0 removes it
    pub fn set(&mut self, enchantment: Enchantment, level: u32) {
        if level == 0 {
            self.0.remove(&enchantment);
        } else {
            self.0.insert(enchantment, level);
        }
    }

    /// Level of an enchantment, 0 when absent
    pub fn level(&self, enchantment: Enchantment) -> u32 {
        self.0.get(&enchantment).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Enchantment, u32)> + '_ {
        self.0.iter().map(|(e, l)| (*e, *l))
    }
}

/// Coarse creature type of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureType {
    Undead,
    Arthropod,
    #[default]
    Generic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enchantment_levels() {
        let enchants = Enchantments::new()
            .with(Enchantment::Sharpness, 3)
            .with(Enchantment::FireAspect, 2);

        assert_eq!(enchants.level(Enchantment::Sharpness), 3);
        assert_eq!(enchants.level(Enchantment::FireAspect), 2);
        assert_eq!(enchants.level(Enchantment::Smite), 0);

        let listed: Vec<_> = enchants.iter().collect();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&(Enchantment::Sharpness, 3)));
        assert!(listed.contains(&(Enchantment::FireAspect, 2)));
    }

    #[test]
    fn test_zero_level_removes() {
        let mut enchants = Enchantments::new().with(Enchantment::Smite, 4);
        enchants.set(Enchantment::Smite, 0);
        assert!(enchants.is_empty());
    }

    #[test]
    fn test_effect_level() {
        let effect = ActiveEffect::new(EffectKind::Strength, 1);
        assert!((effect.level() - 2.0).abs() < f32::EPSILON);
    }
}
