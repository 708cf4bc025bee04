//! Final score of a single simulated match.

use super::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: u32,
    pub away_score: u32,
    /// Side with the strictly greater score; `None` only for a draw.
    pub winner: Option<Side>,
}

impl MatchResult {
    pub fn new(home_team: Team, away_team: Team, home_score: u32, away_score: u32) -> Self {
        let winner = match home_score.cmp(&away_score) {
            Ordering::Greater => Some(Side::Home),
            Ordering::Less => Some(Side::Away),
            Ordering::Equal => None,
        };
        Self { home_team, away_team, home_score, away_score, winner }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner {
            Some(Side::Home) => Outcome::HomeWin,
            Some(Side::Away) => Outcome::AwayWin,
            None => Outcome::Draw,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn winning_team(&self) -> Option<&Team> {
        self.winner.map(|side| self.team(side))
    }

    pub fn losing_team(&self) -> Option<&Team> {
        self.winner.map(|side| self.team(side.opponent()))
    }

    /// Scoreline as rendered by result tables, e.g. `"Rovers 2 - 1 United"`.
    pub fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team.name, self.home_score, self.away_score, self.away_team.name
        )
    }
}
