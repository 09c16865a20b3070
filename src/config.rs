/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Configuration for space-group resolution

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Origin choice for space groups listed with two origins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginChoice {
    #[default]
    One,
    Two,
}

impl OriginChoice {
    /// Suffix carried by the Hermann-Mauguin symbol, e.g. `Pnnn:2`
    pub fn suffix(&self) -> &'static str {
        match self {
            OriginChoice::One => "1",
            OriginChoice::Two => "2",
        }
    }
}

/// Axes for rhombohedral space groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSetting {
    #[default]
    Hexagonal,
    Rhombohedral,
}

impl AxisSetting {
    /// Suffix carried by the Hermann-Mauguin symbol, e.g. `R3:H`
    pub fn suffix(&self) -> &'static str {
        match self {
            AxisSetting::Hexagonal => "H",
            AxisSetting::Rhombohedral => "R",
        }
    }
}

/// What to do with a space-group number that has several settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingPolicy {
    /// Report the number as ambiguous
    #[default]
    Strict,
    /// Take the first setting in table order (unique axis b, cell choice 1)
    FirstListed,
    /// Take the setting with the given origin or axes, else the first listed
    Preferred {
        #[serde(default)]
        origin: OriginChoice,
        #[serde(default)]
        axes: AxisSetting,
    },
}

/// Space-group resolver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Policy applied when a number maps to several Hall symbols
    pub setting_policy: SettingPolicy,
}

impl ResolverConfig {
    /// Configuration that resolves ambiguous numbers with the given policy
    pub fn with_policy(setting_policy: SettingPolicy) -> Self {
        Self { setting_policy }
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = ResolverConfig::default();
        assert_eq!(config.setting_policy, SettingPolicy::Strict);
    }

    #[test]
    fn test_parse_policies() {
        let config = ResolverConfig::from_json_str(r#"{"setting_policy": {"kind": "first_listed"}}"#)
            .unwrap();
        assert_eq!(config.setting_policy, SettingPolicy::FirstListed);

        let config = ResolverConfig::from_json_str(
            r#"{"setting_policy": {"kind": "preferred", "origin": "two"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.setting_policy,
            SettingPolicy::Preferred {
                origin: OriginChoice::Two,
                axes: AxisSetting::Hexagonal
            }
        );

        let config = ResolverConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_invalid_policy() {
        let result = ResolverConfig::from_json_str(r#"{"setting_policy": {"kind": "guess"}}"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
