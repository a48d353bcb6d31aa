//! Cycle calculation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Defaults and input policy for cycle calculations
#[derive(Debug, Clone, Deserialize)]
pub struct CycleSettings {
    /// Cycle length used when a request omits one
    #[serde(default = "default_length")]
    pub default_length: u32,

    /// Reject lengths outside the plausible range instead of only logging them
    #[serde(default)]
    pub enforce_plausible_length: bool,

    /// Shortest plausible cycle in days
    #[serde(default = "default_min_length")]
    pub min_plausible_length: u32,

    /// Longest plausible cycle in days
    #[serde(default = "default_max_length")]
    pub max_plausible_length: u32,
}

impl CycleSettings {
    /// Validate cycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_length == 0 {
            return Err(ValidationError::InvalidCycleLength);
        }
        if self.min_plausible_length > self.max_plausible_length {
            return Err(ValidationError::InvalidPlausibleRange);
        }
        Ok(())
    }
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            enforce_plausible_length: false,
            min_plausible_length: default_min_length(),
            max_plausible_length: default_max_length(),
        }
    }
}

fn default_length() -> u32 {
    28
}

fn default_min_length() -> u32 {
    21
}

fn default_max_length() -> u32 {
    35
}

/// Idea listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdeasSettings {
    /// Limit applied when a request omits one
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for IdeasSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_defaults() {
        let config = CycleSettings::default();
        assert_eq!(config.default_length, 28);
        assert!(!config.enforce_plausible_length);
        assert_eq!(config.min_plausible_length, 21);
        assert_eq!(config.max_plausible_length, 35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_default_length() {
        let config = CycleSettings {
            default_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_inverted_range() {
        let config = CycleSettings {
            min_plausible_length: 40,
            max_plausible_length: 30,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ideas_default_limit() {
        assert_eq!(IdeasSettings::default().default_limit, 20);
    }
}
