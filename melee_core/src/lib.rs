//! melee_core - Multi-factor melee damage calculation
//!
//! This library provides:
//! - Actor/WorldContext: Snapshots of the combatants and their surroundings
//! - DamageTuning: Every constant of the damage model, loadable from TOML
//! - DamageCalculator: Resolves a hit into a final damage value
//! - DamageBreakdown: Diagnostic record of every intermediate value
//! - on_living_hurt: Host adapter that replaces a hurt event's damage

pub mod actor;
pub mod classify;
pub mod config;
pub mod damage;
pub mod effects;
pub mod hit;
pub mod modifiers;
pub mod prelude;
pub mod random;
pub mod types;
pub mod world;

// Re-export core types for convenience
pub use actor::{Actor, ActorRole, MovementState, PlayerState, Weapon};
pub use classify::{classify, FireAffinity, TargetClass};
pub use config::{load_tuning, parse_tuning, BreakdownSampling, ConfigError, DamageTuning};
pub use damage::{DamageBreakdown, DamageCalculator, DamageSourceMeta, HitContext};
pub use effects::{apply_special_effects, dispatch_special_effects, EffectSink, SpecialEffect};
pub use hit::{on_living_hurt, HitEvent, HitOutcome, ResolvedHit, SkipReason};
pub use random::{FixedRoll, RandomSource, RollSequence};
pub use types::{ActiveEffect, CreatureType, EffectKind, Enchantment, Enchantments};
pub use world::WorldContext;
