//! Configuration loading from TOML files

mod tuning;

pub use tuning::{
    ArmorTuning, BreakdownSampling, BreakdownTuning, ConditionTuning, CriticalTuning,
    DamageTuning, ElementalTuning, EnchantmentTuning, EnvironmentTuning, LimitTuning, PositionTuning,
    ScalingTuning, StatusTuning, VarianceTuning, WeaponTuning, WearBand,
};

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate damage tuning from a TOML file
pub fn load_tuning(path: &Path) -> Result<DamageTuning, ConfigError> {
    let tuning: DamageTuning = load_toml(path)?;
    tuning.validate()?;
    info!(path = %path.display(), sampling = ?tuning.breakdown.sampling, "loaded damage tuning");
    Ok(tuning)
}

/// Parse and validate damage tuning from a TOML string
pub fn parse_tuning(content: &str) -> Result<DamageTuning, ConfigError> {
    let tuning: DamageTuning = parse_toml(content)?;
    tuning.validate()?;
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_default() {
        let tuning = parse_tuning("").unwrap();
        assert_eq!(tuning, DamageTuning::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_tuning("[critical\nmultiplier = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_parse_validates() {
        let result = parse_tuning("[variance]\nspread = 2.0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_tuning(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_shipped_tuning() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/tuning.toml");
        let tuning = load_tuning(&path).unwrap();
        assert_eq!(tuning, DamageTuning::default());
    }
}
