use super::Player;
use serde::{Deserialize, Serialize};

/// Upper bound of every rating on the roster scale.
pub const MAX_RATING: u8 = 100;

/// A rated team as supplied by the roster collaborator.
///
/// Read-only from the engine's point of view: simulations borrow it and
/// progression engines clone it into their slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default = "default_formation")]
    pub formation: String,
    pub overall_rating: u8,
    pub stats: TeamStats,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TeamStats {
    pub attack: u8,
    pub defense: u8,
    pub teamwork: u8,
}

fn default_formation() -> String {
    "4-4-2".to_string()
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: TeamStats) -> Self {
        let overall = (stats.attack as u32 + stats.defense as u32 + stats.teamwork as u32) / 3;
        Self {
            id: id.into(),
            name: name.into(),
            formation: default_formation(),
            overall_rating: overall as u8,
            stats,
            players: Vec::new(),
        }
    }

    pub fn with_overall(mut self, overall_rating: u8) -> Self {
        self.overall_rating = overall_rating;
        self
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Players eligible to score in minute-event mode.
    pub fn attacking_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position.is_attacking()).collect()
    }

    /// Roster-boundary check used by hosts when loading records.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("Team '{}' has an empty id", self.name));
        }

        let ratings = [
            ("overall_rating", self.overall_rating),
            ("attack", self.stats.attack),
            ("defense", self.stats.defense),
            ("teamwork", self.stats.teamwork),
        ];
        for (label, value) in ratings {
            if value > MAX_RATING {
                return Err(format!(
                    "Team {} {} out of range: {} (max {})",
                    self.id, label, value, MAX_RATING
                ));
            }
        }

        Ok(())
    }
}

impl TeamStats {
    pub fn new(attack: u8, defense: u8, teamwork: u8) -> Self {
        Self { attack, defense, teamwork }
    }
}
