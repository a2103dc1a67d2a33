//! Modifier functions - one factor or additive term per concern
//!
//! Factors are centered at 1.0 and multiply the running damage. Bonuses are
//! centered at 0.0 and are added after weighting. None of these functions
//! mutate their inputs.

mod armor;
mod bonus;
mod condition;
mod critical;
mod environment;
mod position;
mod status;
mod variance;
mod weapon;

pub use armor::apply_armor_reduction;
pub use bonus::{attribute_bonus, elemental_bonus, enchantment_bonus};
pub use condition::actor_condition_factor;
pub use critical::{is_critical, is_player_critical};
pub use environment::environmental_factor;
pub use position::{hit_angle, positional_factor, positional_factor_for_angle, HitDirection};
pub use status::status_effect_factor;
pub use variance::variance_multiplier;
pub use weapon::{attack_speed_factor, base_damage, effective_attack_speed, weapon_condition_factor};
