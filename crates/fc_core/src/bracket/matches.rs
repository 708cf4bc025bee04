//! Bracket match identity and slot state.

use crate::models::{MatchResult, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round and 1-based position; rendered as `"{round}-{position}"`.
///
/// Ordering is round first, then position, which is also the order matches
/// are stored and played in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId {
    pub round: u32,
    pub position: u32,
}

impl MatchId {
    pub fn new(round: u32, position: u32) -> Self {
        Self { round, position }
    }

    /// Match that receives this match's winner.
    pub fn next(&self) -> MatchId {
        MatchId::new(self.round + 1, self.position.div_ceil(2))
    }

    /// Odd positions feed the home slot of the next match, even ones the away slot.
    pub fn feeds_home(&self) -> bool {
        self.position % 2 == 1
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.round, self.position)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotState {
    /// At least one participant still to be decided.
    Awaiting { home: Option<Team>, away: Option<Team> },
    Scheduled { home: Team, away: Team },
    Played(MatchResult),
}

impl SlotState {
    pub fn empty() -> Self {
        SlotState::Awaiting { home: None, away: None }
    }

    /// Promotes a fully-filled `Awaiting` slot to `Scheduled`.
    pub(crate) fn settle(self) -> Self {
        match self {
            SlotState::Awaiting { home: Some(home), away: Some(away) } => {
                SlotState::Scheduled { home, away }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BracketMatch {
    pub id: MatchId,
    pub state: SlotState,
}

impl BracketMatch {
    pub fn scheduled(id: MatchId, home: Team, away: Team) -> Self {
        Self { id, state: SlotState::Scheduled { home, away } }
    }

    pub fn placeholder(id: MatchId) -> Self {
        Self { id, state: SlotState::empty() }
    }

    pub fn round(&self) -> u32 {
        self.id.round
    }

    pub fn position(&self) -> u32 {
        self.id.position
    }

    pub fn home_team(&self) -> Option<&Team> {
        match &self.state {
            SlotState::Awaiting { home, .. } => home.as_ref(),
            SlotState::Scheduled { home, .. } => Some(home),
            SlotState::Played(result) => Some(&result.home_team),
        }
    }

    pub fn away_team(&self) -> Option<&Team> {
        match &self.state {
            SlotState::Awaiting { away, .. } => away.as_ref(),
            SlotState::Scheduled { away, .. } => Some(away),
            SlotState::Played(result) => Some(&result.away_team),
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self.state, SlotState::Played(_))
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self.state, SlotState::Scheduled { .. })
    }

    pub fn result(&self) -> Option<&MatchResult> {
        match &self.state {
            SlotState::Played(result) => Some(result),
            _ => None,
        }
    }

    pub fn home_score(&self) -> u32 {
        self.result().map_or(0, |r| r.home_score)
    }

    pub fn away_score(&self) -> u32 {
        self.result().map_or(0, |r| r.away_score)
    }

    pub fn winner(&self) -> Option<&Team> {
        self.result().and_then(|r| r.winning_team())
    }

    /// True if `team_id` sits in this match and has not yet played it.
    pub fn holds_live(&self, team_id: &str) -> bool {
        !self.is_played()
            && [self.home_team(), self.away_team()]
                .into_iter()
                .flatten()
                .any(|t| t.id == team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamStats;

    fn team(id: &str) -> Team {
        Team::new(id, id, TeamStats::new(50, 50, 50))
    }

    #[test]
    fn test_match_id_display_and_order() {
        assert_eq!(MatchId::new(3, 2).to_string(), "3-2");
        assert!(MatchId::new(1, 4) < MatchId::new(2, 1));
        assert!(MatchId::new(2, 1) < MatchId::new(2, 2));
    }

    #[test]
    fn test_next_slot_parity() {
        assert_eq!(MatchId::new(1, 1).next(), MatchId::new(2, 1));
        assert_eq!(MatchId::new(1, 2).next(), MatchId::new(2, 1));
        assert_eq!(MatchId::new(1, 7).next(), MatchId::new(2, 4));
        assert!(MatchId::new(1, 3).feeds_home());
        assert!(!MatchId::new(1, 4).feeds_home());
    }

    #[test]
    fn test_settle_only_when_both_filled() {
        let half = SlotState::Awaiting { home: Some(team("a")), away: None };
        assert_eq!(half.clone().settle(), half);

        let full = SlotState::Awaiting { home: Some(team("a")), away: Some(team("b")) };
        assert!(matches!(full.settle(), SlotState::Scheduled { .. }));
    }

    #[test]
    fn test_flat_view_of_played_match() {
        let mut m = BracketMatch::scheduled(MatchId::new(1, 1), team("a"), team("b"));
        assert!(m.holds_live("a"));
        assert_eq!(m.winner(), None);

        m.state = SlotState::Played(MatchResult::new(team("a"), team("b"), 0, 2));
        assert!(!m.holds_live("a"));
        assert_eq!((m.home_score(), m.away_score()), (0, 2));
        assert_eq!(m.winner().map(|t| t.id.as_str()), Some("b"));
    }
}
