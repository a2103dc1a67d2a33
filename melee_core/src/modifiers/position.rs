//! Positional modifier - backstabs, flanks and head-on attacks

use crate::actor::Actor;
use crate::config::PositionTuning;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Which side of the target a hit landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitDirection {
    Backstab,
    Side,
    Frontal,
}

impl HitDirection {
    /// Classify an angle in degrees within [0, 180]
    pub fn from_angle(degrees: f64, tuning: &PositionTuning) -> Self {
        if degrees < tuning.backstab_angle as f64 {
            HitDirection::Backstab
        } else if degrees < tuning.side_angle as f64 {
            HitDirection::Side
        } else {
            HitDirection::Frontal
        }
    }

    pub fn multiplier(&self, tuning: &PositionTuning) -> f32 {
        match self {
            HitDirection::Backstab => tuning.backstab_multiplier,
            HitDirection::Side => tuning.side_multiplier,
            HitDirection::Frontal => tuning.frontal_multiplier,
        }
    }
}

/// Angle in degrees, within [0, 180], between the target-to-attacker
/// direction on the horizontal plane and the target's yaw
pub fn hit_angle(attacker: &Actor, target: &Actor) -> f64 {
    let offset = attacker.position - target.position;
    let attacker_bearing = offset.z.atan2(offset.x);
    let target_yaw = (target.yaw as f64).to_radians();

    let mut diff = (attacker_bearing - target_yaw).rem_euclid(TAU);
    if diff > PI {
        diff = TAU - diff;
    }
    diff.to_degrees()
}

/// Multiplier for a precomputed hit angle in degrees
pub fn positional_factor_for_angle(degrees: f64, tuning: &PositionTuning) -> f32 {
    HitDirection::from_angle(degrees, tuning).multiplier(tuning)
}

pub fn positional_factor(attacker: &Actor, target: &Actor, tuning: &PositionTuning) -> f32 {
    positional_factor_for_angle(hit_angle(attacker, target), tuning)
}
