//! Prelude module for convenient imports
//!
//! ```rust
//! use melee_core::prelude::*;
//! ```

// Combatants
pub use crate::actor::{Actor, MovementState, PlayerState, Weapon};
pub use crate::types::{ActiveEffect, CreatureType, EffectKind, Enchantment};
pub use crate::world::WorldContext;

// Damage system
pub use crate::damage::{DamageBreakdown, DamageCalculator, DamageSourceMeta, HitContext};
pub use crate::random::RandomSource;

// Host integration
pub use crate::effects::{EffectSink, SpecialEffect};
pub use crate::hit::{on_living_hurt, HitEvent, HitOutcome};

// Config
pub use crate::config::{load_tuning, DamageTuning};
