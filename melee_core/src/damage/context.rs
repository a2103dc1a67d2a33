//! Hit context - everything one resolution reads

use crate::actor::{Actor, Weapon};
use crate::world::WorldContext;
use serde::{Deserialize, Serialize};

/// Describes what dealt the damage, as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageSourceMeta {
    /// Host damage type identifier (e.g. "player_attack", "mob_attack")
    pub kind: String,
    /// Whether the causing entity dealt the hit itself (not via a projectile)
    pub direct: bool,
}

impl DamageSourceMeta {
    pub fn melee(attacker: &Actor) -> Self {
        let kind = if attacker.is_player() { "player_attack" } else { "mob_attack" };
        DamageSourceMeta {
            kind: kind.to_string(),
            direct: true,
        }
    }
}

/// Borrowed snapshot of one attacker/target interaction
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    pub attacker: &'a Actor,
    pub target: &'a Actor,
    /// `None` for a bare-handed hit
    pub weapon: Option<&'a Weapon>,
    pub world: &'a WorldContext,
}

impl<'a> HitContext<'a> {
    pub fn new(
        attacker: &'a Actor,
        target: &'a Actor,
        weapon: Option<&'a Weapon>,
        world: &'a WorldContext,
    ) -> Self {
        HitContext {
            attacker,
            target,
            weapon,
            world,
        }
    }

    /// Context for a melee swing
    ///
    /// Players swing their main-hand item; other attackers resolve bare-handed.
    pub fn melee(attacker: &'a Actor, target: &'a Actor, world: &'a WorldContext) -> Self {
        let weapon = if attacker.is_player() {
            attacker.main_hand.as_ref()
        } else {
            None
        };
        Self::new(attacker, target, weapon, world)
    }

    /// Context using whatever the attacker holds in its main hand
    pub fn with_main_hand(attacker: &'a Actor, target: &'a Actor, world: &'a WorldContext) -> Self {
        Self::new(attacker, target, attacker.main_hand.as_ref(), world)
    }
}
