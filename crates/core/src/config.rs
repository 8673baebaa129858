//! Game configuration.
//!
//! Defaults come from the constants in [`crate::types`]. The terminal binary
//! overrides them from environment variables:
//!
//! - `MEMORY_TIME_LIMIT`: countdown length in seconds (default: 60)
//! - `MEMORY_SEED`: fixed shuffle seed (default: fresh entropy per process)

use std::env;

use tracing::warn;

use crate::error::ConfigError;
use crate::types::{Symbol, CLOCK_TICK_MS, MISMATCH_DELAY_MS, TIME_LIMIT_SECS};

/// Settings for one [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Distinct symbols; each appears on exactly two cards.
    pub alphabet: Vec<Symbol>,
    pub time_limit_secs: u32,
    pub mismatch_delay_ms: u64,
    pub tick_interval_ms: u64,
    /// `None` seeds the shuffler from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Symbol::ALL.to_vec(),
            time_limit_secs: TIME_LIMIT_SECS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            tick_interval_ms: CLOCK_TICK_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build a config from process environment variables.
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("MEMORY_TIME_LIMIT") {
            match raw.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => config.time_limit_secs = secs,
                _ => warn!(value = %raw, "ignoring invalid MEMORY_TIME_LIMIT"),
            }
        }

        if let Some(raw) = lookup("MEMORY_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring invalid MEMORY_SEED"),
            }
        }

        config
    }

    pub fn with_alphabet(mut self, alphabet: &[Symbol]) -> Self {
        self.alphabet = alphabet.to_vec();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Number of cards a deck built from this config holds.
    pub fn card_count(&self) -> usize {
        self.alphabet.len() * 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alphabet(&self.alphabet)?;
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Check that an alphabet is non-empty and has no repeated symbols.
pub fn validate_alphabet(alphabet: &[Symbol]) -> Result<(), ConfigError> {
    if alphabet.is_empty() {
        return Err(ConfigError::EmptyAlphabet);
    }
    for (i, symbol) in alphabet.iter().enumerate() {
        if alphabet[..i].contains(symbol) {
            return Err(ConfigError::DuplicateSymbol(*symbol));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.alphabet.len(), 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.time_limit_secs, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lookup_overrides_time_limit_and_seed() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MEMORY_TIME_LIMIT", "90"),
            ("MEMORY_SEED", " 42 "),
        ]));
        assert_eq!(config.time_limit_secs, 90);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MEMORY_TIME_LIMIT", "0"),
            ("MEMORY_SEED", "abc"),
        ]));
        assert_eq!(config.time_limit_secs, TIME_LIMIT_SECS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn empty_alphabet_rejected() {
        let config = GameConfig::default().with_alphabet(&[]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let config = GameConfig::default().with_alphabet(&[Symbol::Ogre, Symbol::Robot, Symbol::Ogre]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSymbol(Symbol::Ogre))
        );
    }

    #[test]
    fn zero_limits_rejected() {
        let config = GameConfig::default().with_time_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
