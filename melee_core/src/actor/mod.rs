//! Actor snapshots - the momentary combat state of an attacker or target

mod weapon;

pub use weapon::Weapon;

use crate::types::{ActiveEffect, CreatureType, EffectKind};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Player-only state (hunger, cooldown, game mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Food level on the 0-20 scale
    pub food_level: u8,
    /// Accumulated exhaustion (non-negative)
    pub exhaustion: f32,
    /// Attack cooldown recovery, 0.0 (just swung) to 1.0 (fully charged)
    pub attack_strength_scale: f32,
    /// Creative-mode players get a damage breakdown for every hit
    #[serde(default)]
    pub creative: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            food_level: 20,
            exhaustion: 0.0,
            attack_strength_scale: 1.0,
            creative: false,
        }
    }
}

/// Whether an actor is player-controlled or autonomous
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActorRole {
    Player(PlayerState),
    Mob,
}

/// Movement and environment flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    pub on_ground: bool,
    pub in_water: bool,
    pub fall_distance: f32,
    /// Riding another entity
    pub mounted: bool,
}

impl MovementState {
    /// Standing on solid ground, dry, not mounted
    pub fn grounded() -> Self {
        MovementState {
            on_ground: true,
            ..Default::default()
        }
    }

    /// Mid-fall after a jump
    pub fn falling(distance: f32) -> Self {
        MovementState {
            on_ground: false,
            fall_distance: distance,
            ..Default::default()
        }
    }
}

/// Snapshot of a combat participant
///
/// Supplied fresh by the host for every hit and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Registry name of the entity type (e.g. "minecraft:zombie")
    pub entity_type: String,
    pub creature_type: CreatureType,
    /// World position (feet)
    pub position: DVec3,
    /// Facing yaw in degrees
    pub yaw: f32,
    /// Bounding box height
    pub height: f32,
    /// Effective attack-damage attribute
    pub attack_damage: f32,
    /// Attack-speed attribute before any held-item bonus
    ///
    /// Informational: speed banding and DPS use the tuning's speed baseline.
    pub attack_speed: f32,
    pub armor: f32,
    pub armor_toughness: f32,
    pub max_health: f32,
    pub fire_immune: bool,
    pub effects: Vec<ActiveEffect>,
    pub movement: MovementState,
    /// Item held in the main hand, `None` when bare-handed
    pub main_hand: Option<Weapon>,
    pub role: ActorRole,
}

impl Actor {
    /// A player with vanilla defaults: 20 health, 1.0 attack damage, grounded
    pub fn player(position: DVec3, yaw: f32) -> Self {
        Actor {
            entity_type: "minecraft:player".to_string(),
            creature_type: CreatureType::Generic,
            position,
            yaw,
            height: 1.8,
            attack_damage: 1.0,
            attack_speed: 4.0,
            armor: 0.0,
            armor_toughness: 0.0,
            max_health: 20.0,
            fire_immune: false,
            effects: Vec::new(),
            movement: MovementState::grounded(),
            main_hand: None,
            role: ActorRole::Player(PlayerState::default()),
        }
    }

    /// An autonomous creature of the given type
    pub fn mob(
        entity_type: impl Into<String>,
        creature_type: CreatureType,
        position: DVec3,
        yaw: f32,
        max_health: f32,
    ) -> Self {
        Actor {
            entity_type: entity_type.into(),
            creature_type,
            position,
            yaw,
            height: 1.95,
            attack_damage: 1.0,
            attack_speed: 4.0,
            armor: 0.0,
            armor_toughness: 0.0,
            max_health,
            fire_immune: false,
            effects: Vec::new(),
            movement: MovementState::grounded(),
            main_hand: None,
            role: ActorRole::Mob,
        }
    }

    /// Add a status effect (builder pattern)
    pub fn with_effect(mut self, kind: EffectKind, amplifier: u8) -> Self {
        self.effects.retain(|e| e.kind != kind);
        self.effects.push(ActiveEffect::new(kind, amplifier));
        self
    }

    /// Set armor and toughness (builder pattern)
    pub fn with_armor(mut self, armor: f32, toughness: f32) -> Self {
        self.armor = armor;
        self.armor_toughness = toughness;
        self
    }

    /// Equip a main-hand item (builder pattern)
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.main_hand = Some(weapon);
        self
    }

    /// Get the active effect of a kind, if any
    pub fn effect(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effect(kind).is_some()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, ActorRole::Player(_))
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.role {
            ActorRole::Player(state) => Some(state),
            ActorRole::Mob => None,
        }
    }

    pub fn player_state_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.role {
            ActorRole::Player(state) => Some(state),
            ActorRole::Mob => None,
        }
    }

    pub fn is_creative(&self) -> bool {
        self.player_state().is_some_and(|p| p.creative)
    }

    /// Point at the vertical middle of the bounding box
    pub fn mid_point(&self) -> DVec3 {
        self.position + DVec3::new(0.0, self.height as f64 / 2.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player = Actor::player(DVec3::ZERO, 0.0);
        assert!(player.is_player());
        assert!(!player.is_creative());
        assert_eq!(player.player_state().map(|p| p.food_level), Some(20));
        assert!(player.main_hand.is_none());
        assert!((player.attack_speed - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_effect_replaces_same_kind() {
        let actor = Actor::mob("minecraft:zombie", CreatureType::Undead, DVec3::ZERO, 0.0, 20.0)
            .with_effect(EffectKind::Strength, 0)
            .with_effect(EffectKind::Strength, 2);

        assert_eq!(actor.effects.len(), 1);
        assert_eq!(actor.effect(EffectKind::Strength).map(|e| e.amplifier), Some(2));
        assert!(!actor.has_effect(EffectKind::Weakness));
    }

    #[test]
    fn test_mid_point() {
        let mut actor = Actor::player(DVec3::new(1.0, 64.0, 1.0), 0.0);
        actor.height = 2.0;
        assert!((actor.mid_point().y - 65.0).abs() < f64::EPSILON);
    }
}
