//! Configuration management for the todos binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::VisibilityFilter;
use std::env;
use thiserror::Error;

/// Errors loading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value is unusable
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is unset (`TODOS_LOG_LEVEL`, default `info`)
    pub log_level: String,
    /// Visibility filter at startup (`TODOS_INITIAL_FILTER`, default `SHOW_ALL`)
    pub initial_filter: VisibilityFilter,
    /// Store action broadcast capacity (`TODOS_BROADCAST_CAPACITY`, default 16)
    pub broadcast_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            initial_filter: VisibilityFilter::default(),
            broadcast_capacity: 16,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("TODOS_LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let initial_filter = lookup("TODOS_INITIAL_FILTER")
            .filter(|token| !token.trim().is_empty())
            .map_or(defaults.initial_filter, VisibilityFilter::new);

        let broadcast_capacity = match lookup("TODOS_BROADCAST_CAPACITY") {
            None => defaults.broadcast_capacity,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: "TODOS_BROADCAST_CAPACITY",
                        value: raw,
                        reason: "must be greater than zero",
                    });
                },
                Ok(capacity) => capacity,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: "TODOS_BROADCAST_CAPACITY",
                        value: raw,
                        reason: "not a whole number",
                    });
                },
            },
        };

        Ok(Self {
            log_level,
            initial_filter,
            broadcast_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<&str, String> = vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]), Ok(Config::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("TODOS_LOG_LEVEL", "todos=trace"),
            ("TODOS_INITIAL_FILTER", "SHOW_ACTIVE"),
            ("TODOS_BROADCAST_CAPACITY", "64"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "todos=trace");
        assert_eq!(config.initial_filter.as_str(), "SHOW_ACTIVE");
        assert_eq!(config.broadcast_capacity, 64);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[("TODOS_LOG_LEVEL", " "), ("TODOS_INITIAL_FILTER", "")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_capacity() {
        assert!(matches!(
            load(&[("TODOS_BROADCAST_CAPACITY", "0")]),
            Err(ConfigError::InvalidValue { reason: "must be greater than zero", .. })
        ));
        assert!(matches!(
            load(&[("TODOS_BROADCAST_CAPACITY", "lots")]),
            Err(ConfigError::InvalidValue { reason: "not a whole number", .. })
        ));
    }
}
