//! League table rows and ordering.
//!
//! Ordering: points desc, goal difference desc, then `seed` asc. `seed` is
//! the team's position in the list the league was created from, so equal
//! rows always come out in entry order.

use super::fixtures::LeagueFixture;
use crate::error::{CompetitionError, Result};
use crate::models::Team;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Standing {
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    /// Entry order in the league; final tie-break.
    #[serde(default)]
    pub seed: usize,
}

impl Standing {
    pub fn new(team: Team, seed: usize) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            seed,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Applies one result from this team's point of view. Fails without
    /// touching the row if a goal total would overflow.
    pub fn record(&mut self, scored: u32, conceded: u32) -> Result<()> {
        let (Some(goals_for), Some(goals_against)) =
            (self.goals_for.checked_add(scored), self.goals_against.checked_add(conceded))
        else {
            return Err(CompetitionError::GoalTotalOverflow { team: self.team.id.clone() });
        };

        self.played += 1;
        self.goals_for = goals_for;
        self.goals_against = goals_against;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Less => self.lost += 1,
            Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }
        Ok(())
    }
}

pub fn sort_standings(standings: &mut [Standing]) {
    standings.sort_by_key(|s| (Reverse(s.points), Reverse(s.goal_difference()), s.seed));
}

/// Builds the table from scratch out of the played fixtures.
pub fn recompute_standings(teams: &[Team], fixtures: &[LeagueFixture]) -> Result<Vec<Standing>> {
    let mut standings: Vec<Standing> =
        teams.iter().enumerate().map(|(seed, team)| Standing::new(team.clone(), seed)).collect();

    for fixture in fixtures.iter().filter(|f| f.played) {
        if let Some(home) = standings.iter_mut().find(|s| s.team.id == fixture.home_team.id) {
            home.record(fixture.home_score, fixture.away_score)?;
        }
        if let Some(away) = standings.iter_mut().find(|s| s.team.id == fixture.away_team.id) {
            away.record(fixture.away_score, fixture.home_score)?;
        }
    }

    sort_standings(&mut standings);
    Ok(standings)
}
