//! World context sampled at the attacker's position

use serde::{Deserialize, Serialize};

/// Read-only environment snapshot at the attacker's block position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldContext {
    pub raining: bool,
    /// Whether the block position has an unobstructed view of the sky
    pub sky_visible: bool,
    /// Block Y coordinate of the attacker
    pub altitude: i32,
    /// Base temperature of the biome
    pub biome_temperature: f32,
    /// Block light level (0-15)
    pub light_level: u8,
}

impl Default for WorldContext {
    fn default() -> Self {
        WorldContext {
            raining: false,
            sky_visible: true,
            altitude: 64,
            biome_temperature: 0.8,
            light_level: 15,
        }
    }
}

impl WorldContext {
    /// Clear daylight at sea level in a temperate biome
    pub fn clear_day() -> Self {
        Self::default()
    }

    /// Set rain (builder pattern)
    pub fn with_rain(mut self, raining: bool) -> Self {
        self.raining = raining;
        self
    }

    /// Set altitude (builder pattern)
    pub fn at_altitude(mut self, altitude: i32) -> Self {
        self.altitude = altitude;
        self
    }

    /// Set light level (builder pattern)
    pub fn with_light(mut self, light_level: u8) -> Self {
        self.light_level = light_level.min(15);
        self
    }

    /// Set biome temperature (builder pattern)
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.biome_temperature = temperature;
        self
    }

    /// Rain only matters where it actually falls on the attacker
    pub fn exposed_to_rain(&self) -> bool {
        self.raining && self.sky_visible
    }
}
