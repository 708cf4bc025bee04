//! Choosing and pairing the knockout field.

use crate::config::SelectionConfig;
use crate::error::{CompetitionError, Result};
use crate::models::Team;
use std::collections::HashSet;

/// Teams picked for a knockout, in the order they were picked.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSelection {
    max_teams: usize,
    selected: Vec<Team>,
}

impl TeamSelection {
    pub fn new(max_teams: usize) -> Self {
        Self { max_teams, selected: Vec::with_capacity(max_teams) }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.max_teams)
    }

    pub fn max_teams(&self) -> usize {
        self.max_teams
    }

    pub fn selected(&self) -> &[Team] {
        &self.selected
    }

    pub fn is_selected(&self, team_id: &str) -> bool {
        self.selected.iter().any(|t| t.id == team_id)
    }

    /// Exactly `max_teams` chosen.
    pub fn is_ready(&self) -> bool {
        self.selected.len() == self.max_teams
    }

    /// Adds `team`; selecting an already-selected team does nothing.
    pub fn select(&mut self, team: Team) -> Result<()> {
        if self.is_selected(&team.id) {
            return Ok(());
        }
        if self.selected.len() >= self.max_teams {
            return Err(CompetitionError::SelectionFull { max: self.max_teams });
        }
        self.selected.push(team);
        Ok(())
    }

    /// Returns `true` if the team was selected.
    pub fn deselect(&mut self, team_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|t| t.id != team_id);
        self.selected.len() != before
    }

    /// Removes `team` if selected, otherwise selects it. Returns whether the
    /// team is selected afterwards.
    pub fn toggle(&mut self, team: Team) -> Result<bool> {
        if self.deselect(&team.id) {
            return Ok(false);
        }
        self.select(team)?;
        Ok(true)
    }

    /// Round-1 pairs in selection order: 1v2, 3v4, ...
    pub fn pair_in_order(&self) -> Result<Vec<(Team, Team)>> {
        if !self.is_ready() {
            return Err(CompetitionError::InsufficientTeams { found: self.selected.len() });
        }

        let pairs = self
            .selected
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        Ok(pairs)
    }
}

/// Rejects pairings that use a team in more than one slot.
pub fn validate_pairings(pairs: &[(Team, Team)]) -> Result<()> {
    let mut seen = HashSet::new();
    for team in pairs.iter().flat_map(|(home, away)| [home, away]) {
        if !seen.insert(team.id.as_str()) {
            return Err(CompetitionError::DuplicateTeam { id: team.id.clone() });
        }
    }
    Ok(())
}
