//! Match clock pacing

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock duration choices offered by the match page (seconds).
pub const MATCH_DURATION_CHOICES: [u64; 4] = [9, 20, 30, 60];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// Simulated minutes per match (default: 90)
    pub total_minutes: u32,
    /// Real seconds a host should spread the whole match over (default: 9)
    pub match_duration_secs: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { total_minutes: 90, match_duration_secs: 9 }
    }
}

impl ClockConfig {
    /// Delay between two minute steps when a host paces the clock in real time.
    pub fn tick_interval(&self) -> Duration {
        if self.total_minutes == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.match_duration_secs * 1000 / self.total_minutes as u64)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.total_minutes == 0 {
            return Err("total_minutes must be at least 1".to_string());
        }
        if self.total_minutes > 240 {
            return Err(format!("total_minutes must be at most 240, got {}", self.total_minutes));
        }
        if self.match_duration_secs > 3600 {
            return Err(format!(
                "match_duration_secs must be at most 3600, got {}",
                self.match_duration_secs
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tick_interval() {
        // 9 s spread over 90 minutes
        assert_eq!(ClockConfig::default().tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_validate_bounds() {
        let zero = ClockConfig { total_minutes: 0, ..ClockConfig::default() };
        assert!(zero.validate().is_err());
        assert_eq!(zero.tick_interval(), Duration::ZERO);

        let long = ClockConfig { match_duration_secs: 7200, ..ClockConfig::default() };
        assert!(long.validate().is_err());
    }
}
