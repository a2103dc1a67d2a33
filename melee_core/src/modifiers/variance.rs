//! Random variance

use crate::config::VarianceTuning;

/// Map a uniform draw in [0, 1) onto [1 - spread, 1 + spread)
///
/// A draw of exactly 0.5 is neutral.
pub fn variance_multiplier(draw: f32, tuning: &VarianceTuning) -> f32 {
    1.0 + (draw - 0.5) * 2.0 * tuning.spread
}
