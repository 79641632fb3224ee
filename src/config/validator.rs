//! Configuration validator

use super::loader::{Config, ConfigError};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.process_name.is_empty() {
            return Err(ConfigError::Invalid(
                "Process name cannot be empty".to_string(),
            ));
        }

        let layout = &config.layout;

        if layout.low_base == 0 || layout.main_base == 0 {
            return Err(ConfigError::Invalid(
                "Layout base offsets cannot be 0".to_string(),
            ));
        }

        if layout.low_base == layout.main_base {
            return Err(ConfigError::Invalid(
                "Low-memory and main-memory bases must differ".to_string(),
            ));
        }

        if layout.low_boundary == 0 {
            return Err(ConfigError::Invalid(
                "Layout boundary cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::EmulatorLayout;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_process_name_rejected() {
        let config = Config {
            process_name: String::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_base_rejected() {
        let config = Config {
            layout: EmulatorLayout {
                low_base: 0,
                ..EmulatorLayout::default()
            },
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_equal_bases_rejected() {
        let config = Config {
            layout: EmulatorLayout {
                low_base: 0x3_0000_0000,
                main_base: 0x3_0000_0000,
                ..EmulatorLayout::default()
            },
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_boundary_rejected() {
        let config = Config {
            layout: EmulatorLayout {
                low_boundary: 0,
                ..EmulatorLayout::default()
            },
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
