use crate::error::{CompetitionError, Result};
use crate::models::{MatchResult, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeagueFixture {
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: u32,
    pub away_score: u32,
    pub played: bool,
}

impl LeagueFixture {
    fn new(home_team: Team, away_team: Team) -> Self {
        Self { home_team, away_team, home_score: 0, away_score: 0, played: false }
    }

    /// Result of a played fixture.
    pub fn result(&self) -> Option<MatchResult> {
        self.played.then(|| {
            MatchResult::new(
                self.home_team.clone(),
                self.away_team.clone(),
                self.home_score,
                self.away_score,
            )
        })
    }
}

/// One fixture per unordered pair, `(i, j)` for `i < j` in input order with
/// team `i` at home.
pub fn generate_fixtures(teams: &[Team]) -> Result<Vec<LeagueFixture>> {
    check_entrants(teams)?;

    let mut fixtures = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            fixtures.push(LeagueFixture::new(home.clone(), away.clone()));
        }
    }
    Ok(fixtures)
}

pub(crate) fn check_entrants(teams: &[Team]) -> Result<()> {
    if teams.len() < 2 {
        return Err(CompetitionError::InsufficientTeams { found: teams.len() });
    }

    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.id.as_str()) {
            return Err(CompetitionError::DuplicateTeam { id: team.id.clone() });
        }
    }
    Ok(())
}
