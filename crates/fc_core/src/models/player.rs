use serde::{Deserialize, Serialize};

/// Roster entry supplied by the roster collaborator.
///
/// The engine only reads `position` (to pick goal scorers) and `name`
/// (for event text). The per-player ratings are carried for callers that
/// render player detail views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub attack: u8,
    #[serde(default)]
    pub defense: u8,
    #[serde(default)]
    pub teamwork: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Positions eligible to be credited with a goal in minute-event mode.
    pub fn is_attacking(&self) -> bool {
        matches!(self, Position::Midfielder | Position::Forward)
    }
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Position) -> Self {
        Self { id: id.into(), name: name.into(), position, attack: 0, defense: 0, teamwork: 0 }
    }
}
