//! Damage system - hit context, resolution pipeline and breakdown

mod breakdown;
mod context;
mod pipeline;

pub use breakdown::DamageBreakdown;
pub use context::{DamageSourceMeta, HitContext};
pub use pipeline::DamageCalculator;
