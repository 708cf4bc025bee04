use serde::{Deserialize, Serialize};

/// Knockout field selection parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Teams entering round 1; must be a power of two (default: 8)
    pub max_teams: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { max_teams: 8 }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_teams < 2 || !self.max_teams.is_power_of_two() {
            return Err(format!(
                "max_teams must be a power of two >= 2, got {}",
                self.max_teams
            ));
        }
        Ok(())
    }
}
