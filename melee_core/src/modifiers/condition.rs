//! Actor condition - hunger and exhaustion of player attackers

use crate::actor::Actor;
use crate::config::ConditionTuning;

/// Hunger band multiplied by the exhaustion penalty; 1.0 for non-players
pub fn actor_condition_factor(attacker: &Actor, tuning: &ConditionTuning) -> f32 {
    let Some(player) = attacker.player_state() else {
        return 1.0;
    };

    let mut factor = if player.food_level < tuning.starving_below {
        tuning.starving_multiplier
    } else if player.food_level < tuning.hungry_below {
        tuning.hungry_multiplier
    } else {
        1.0
    };

    if player.exhaustion > tuning.exhaustion_above {
        factor *= tuning.exhaustion_multiplier;
    }

    factor
}
