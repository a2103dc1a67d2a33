//! Target classification for enchantment and elemental eligibility

use crate::actor::Actor;
use crate::config::ElementalTuning;
use crate::types::{CreatureType, EffectKind};
use serde::{Deserialize, Serialize};

/// How a target reacts to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireAffinity {
    Vulnerable,
    Resistant,
    Neutral,
}

/// Classification of a target, derived from its type and state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetClass {
    pub creature: CreatureType,
    pub fire: FireAffinity,
}

impl TargetClass {
    pub fn is_undead(&self) -> bool {
        self.creature == CreatureType::Undead
    }

    pub fn is_arthropod(&self) -> bool {
        self.creature == CreatureType::Arthropod
    }
}

/// Classify a target
///
/// Vulnerability is checked first: a target matching both predicates is
/// treated as vulnerable.
pub fn classify(target: &Actor, tuning: &ElementalTuning) -> TargetClass {
    let name = target.entity_type.to_lowercase();
    let matches_any = |patterns: &[String]| patterns.iter().any(|p| name.contains(p.as_str()));

    let fire = if target.creature_type == CreatureType::Undead
        || matches_any(&tuning.vulnerable_patterns)
    {
        FireAffinity::Vulnerable
    } else if target.fire_immune
        || matches_any(&tuning.resistant_patterns)
        || target.has_effect(EffectKind::FireResistance)
    {
        FireAffinity::Resistant
    } else {
        FireAffinity::Neutral
    };

    TargetClass {
        creature: target.creature_type,
        fire,
    }
}
