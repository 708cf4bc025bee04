//! # Round-Robin League
//!
//! Every team meets every other team once. The standings table is updated
//! incrementally as fixtures are recorded and can always be rebuilt from the
//! fixture list with [`recompute_standings`].
//!
//! State transitions take `&self` and return a new [`League`]; a rejected
//! update leaves the receiver untouched.

pub mod fixtures;
pub mod standings;

#[cfg(test)]
mod league_tests;

pub use fixtures::{generate_fixtures, LeagueFixture};
pub use standings::{recompute_standings, sort_standings, Standing, POINTS_FOR_DRAW, POINTS_FOR_WIN};

use crate::engine::outcome;
use crate::error::{CompetitionError, Result};
use crate::models::{MatchResult, Team};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct League {
    teams: Vec<Team>,
    fixtures: Vec<LeagueFixture>,
    standings: Vec<Standing>,
}

impl League {
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let fixtures = generate_fixtures(&teams)?;
        let standings = recompute_standings(&teams, &fixtures)?;

        log::info!("League created: {} teams, {} fixtures", teams.len(), fixtures.len());
        Ok(Self { teams, fixtures, standings })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[LeagueFixture] {
        &self.fixtures
    }

    /// Sorted table, leader first.
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    pub fn standing_of(&self, team_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.team.id == team_id)
    }

    pub fn played_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.played).count()
    }

    pub fn is_complete(&self) -> bool {
        self.fixtures.iter().all(|f| f.played)
    }

    /// First unplayed fixture in enumeration order.
    pub fn next_fixture(&self) -> Option<(usize, &LeagueFixture)> {
        self.fixtures.iter().enumerate().find(|(_, f)| !f.played)
    }

    /// Top of the table, once every fixture is played.
    pub fn leader(&self) -> Option<&Team> {
        if !self.is_complete() {
            return None;
        }
        self.standings.first().map(|s| &s.team)
    }

    /// Marks fixture `index` played with the given score and returns the
    /// updated league with a re-sorted table.
    pub fn record_result(&self, index: usize, home_score: u32, away_score: u32) -> Result<League> {
        let fixture = self
            .fixtures
            .get(index)
            .ok_or(CompetitionError::UnknownFixture { index })?;

        if fixture.played {
            log::warn!(
                "Rejected duplicate result for fixture {} ({} vs {})",
                index,
                fixture.home_team.name,
                fixture.away_team.name
            );
            return Err(CompetitionError::FixtureAlreadyPlayed { index });
        }

        let mut next = self.clone();

        let fixture = &mut next.fixtures[index];
        fixture.home_score = home_score;
        fixture.away_score = away_score;
        fixture.played = true;
        let (home_id, away_id) = (fixture.home_team.id.clone(), fixture.away_team.id.clone());

        for standing in next.standings.iter_mut() {
            if standing.team.id == home_id {
                standing.record(home_score, away_score)?;
            } else if standing.team.id == away_id {
                standing.record(away_score, home_score)?;
            }
        }
        sort_standings(&mut next.standings);

        log::debug!(
            "Fixture {} recorded: {} {}-{} {}",
            index,
            next.fixtures[index].home_team.name,
            home_score,
            away_score,
            next.fixtures[index].away_team.name
        );
        if next.is_complete() {
            if let Some(leader) = next.standings.first() {
                log::info!("League complete, {} top with {} points", leader.team.name, leader.points);
            }
        }

        Ok(next)
    }

    /// Simulates and records the next unplayed fixture. League matches may
    /// end level. Returns `None` once the league is complete.
    pub fn simulate_next<R: Rng>(&self, rng: &mut R) -> Result<Option<(League, MatchResult)>> {
        let Some((index, fixture)) = self.next_fixture() else {
            return Ok(None);
        };

        let result = outcome::simulate(&fixture.home_team, &fixture.away_team, rng, false);
        let next = self.record_result(index, result.home_score, result.away_score)?;
        Ok(Some((next, result)))
    }

    /// Simulates every remaining fixture in order.
    pub fn play_out<R: Rng>(&self, rng: &mut R) -> Result<League> {
        let mut league = self.clone();
        while let Some((next, _)) = league.simulate_next(rng)? {
            league = next;
        }
        Ok(league)
    }
}
