use super::{Outcome, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the minute-event feed produced by the match clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u32,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Goal {
        side: Side,
        team_name: String,
        /// `None` when the scoring team lists no midfielders or forwards.
        #[serde(skip_serializing_if = "Option::is_none")]
        scorer: Option<String>,
    },
    FullTime {
        outcome: Outcome,
        /// Name of the winning team; absent for a draw.
        #[serde(skip_serializing_if = "Option::is_none")]
        winner_name: Option<String>,
        home_score: u32,
        away_score: u32,
    },
}

impl MatchEvent {
    pub fn is_goal(&self) -> bool {
        matches!(self.kind, EventKind::Goal { .. })
    }

    pub fn is_full_time(&self) -> bool {
        matches!(self.kind, EventKind::FullTime { .. })
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            EventKind::Goal { team_name, scorer, .. } => {
                let scorer = scorer.as_deref().unwrap_or("Unknown player");
                write!(f, "{}' - GOAL! {} scores for {}!", self.minute, scorer, team_name)
            }
            EventKind::FullTime { winner_name: Some(name), .. } => {
                write!(f, "Full Time: {} wins!", name)
            }
            EventKind::FullTime { winner_name: None, .. } => write!(f, "Full Time: It's a draw!"),
        }
    }
}
