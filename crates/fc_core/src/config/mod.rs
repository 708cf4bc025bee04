//! # Competition Configuration
//!
//! Tunable parameters for the parts of the engine a host may want to adjust:
//! match clock pacing and knockout field size.
//!
//! The outcome model (rating weights, score divisor, random multiplier range)
//! and the clock's goal probability are fixed constants of the model and live
//! next to the code that uses them.
//!
//! ## Usage
//! ```rust
//! use fc_core::config::CompetitionConfig;
//!
//! let config = CompetitionConfig::default();
//! let slow = CompetitionConfig::broadcast();
//! assert!(slow.clock.tick_interval() > config.clock.tick_interval());
//! ```
//!
//! ## Environment Variables
//!
//! - `FC_CONFIG_PATH`: JSON file read by [`CompetitionConfig::from_env_or_default`]

mod clock_config;
mod selection_config;

pub use clock_config::{ClockConfig, MATCH_DURATION_CHOICES};
pub use selection_config::SelectionConfig;

use crate::error::{CompetitionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "FC_CONFIG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CompetitionConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl CompetitionConfig {
    /// Shortest pacing offered by the match page (9 s per match)
    pub fn quick() -> Self {
        Self::default()
    }

    /// Slowest pacing offered by the match page (60 s per match)
    pub fn broadcast() -> Self {
        let mut cfg = Self::default();
        cfg.clock.match_duration_secs = 60;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: CompetitionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded competition config from {:?}", path);
        Ok(config)
    }

    /// Reads the file named by `FC_CONFIG_PATH`, or returns defaults when unset.
    pub fn from_env_or_default() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(Path::new(path))
    }

    pub fn validate(&self) -> Result<()> {
        self.clock.validate().map_err(CompetitionError::InvalidConfig)?;
        self.selection.validate().map_err(CompetitionError::InvalidConfig)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = CompetitionConfig::default();
        assert_eq!(cfg.clock.total_minutes, 90);
        assert_eq!(cfg.clock.match_duration_secs, 9);
        assert_eq!(cfg.selection.max_teams, 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_stay_within_offered_durations() {
        for cfg in [CompetitionConfig::quick(), CompetitionConfig::broadcast()] {
            assert!(MATCH_DURATION_CHOICES.contains(&cfg.clock.match_duration_secs));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = CompetitionConfig::from_json(r#"{"clock":{"total_minutes":45,"match_duration_secs":20}}"#)
            .unwrap();
        assert_eq!(cfg.clock.total_minutes, 45);
        assert_eq!(cfg.selection.max_teams, 8);
    }

    #[test]
    fn test_rejects_non_power_of_two_field() {
        let err = CompetitionConfig::from_json(r#"{"selection":{"max_teams":6}}"#).unwrap_err();
        assert!(matches!(err, CompetitionError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CompetitionConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CompetitionError::Json(_)));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"selection":{{"max_teams":16}}}}"#).unwrap();

        let cfg = CompetitionConfig::load(file.path()).unwrap();
        assert_eq!(cfg.selection.max_teams, 16);
        assert_eq!(cfg.clock, ClockConfig::default());
    }

    // Only test that touches FC_CONFIG_PATH; the three cases run in sequence.
    #[test]
    fn test_from_env_or_default() {
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(CompetitionConfig::from_env_or_default().unwrap(), CompetitionConfig::default());

        env::set_var(CONFIG_PATH_ENV, "   ");
        assert_eq!(CompetitionConfig::from_env_or_default().unwrap(), CompetitionConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"clock":{{"total_minutes":90,"match_duration_secs":30}}}}"#).unwrap();
        env::set_var(CONFIG_PATH_ENV, file.path());
        let cfg = CompetitionConfig::from_env_or_default().unwrap();
        assert_eq!(cfg.clock.match_duration_secs, 30);
        assert_eq!(cfg.selection, SelectionConfig::default());

        env::set_var(CONFIG_PATH_ENV, "/nonexistent/fc_config.json");
        let err = CompetitionConfig::from_env_or_default().unwrap_err();
        assert!(matches!(err, CompetitionError::Io(_)));

        env::remove_var(CONFIG_PATH_ENV);
    }
}
