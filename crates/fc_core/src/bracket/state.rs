//! Single-elimination tournament state machine.
//!
//! `Setup -> InProgress -> Completed`. Every transition borrows the current
//! state and returns a new one; a rejected request leaves the caller's value
//! as it was.

use super::matches::{BracketMatch, MatchId, SlotState};
use super::selection::validate_pairings;
use crate::engine::outcome;
use crate::error::{CompetitionError, Result};
use crate::models::{MatchResult, Team};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Setup,
    InProgress,
    Completed,
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TournamentStatus::Setup => "setup",
            TournamentStatus::InProgress => "in progress",
            TournamentStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TournamentState {
    matches: Vec<BracketMatch>,
    status: TournamentStatus,
    /// Lowest round with an unplayed match; the final once completed, 0 in setup.
    current_round: u32,
}

impl TournamentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All matches ordered by id (round, then position).
    pub fn matches(&self) -> &[BracketMatch] {
        &self.matches
    }

    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn round_count(&self) -> u32 {
        self.matches.last().map_or(0, |m| m.round())
    }

    pub fn round(&self, round: u32) -> Vec<&BracketMatch> {
        self.matches.iter().filter(|m| m.round() == round).collect()
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&BracketMatch> {
        self.index_of(id).map(|i| &self.matches[i])
    }

    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.matches.last()
    }

    pub fn champion(&self) -> Option<&Team> {
        self.final_match().and_then(|m| m.winner())
    }

    /// First match in id order that is ready to be played.
    pub fn next_match(&self) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.is_scheduled())
    }

    /// Heading for `round`, counted back from the final.
    pub fn round_name(&self, round: u32) -> String {
        let total = self.round_count();
        if round == 0 || round > total {
            return format!("Round {}", round);
        }

        match total - round {
            0 => "Final".to_string(),
            1 => "Semi Finals".to_string(),
            2 => "Quarter Finals".to_string(),
            from_final => format!("Round of {}", 2u64 << from_final),
        }
    }

    /// Builds the bracket from round-1 pairings.
    ///
    /// Round 1 gets one scheduled match per pair at positions `1..=K`; every
    /// later round is laid out as empty placeholders, halving down to a
    /// single final. `K` must be a power of two.
    pub fn initialize(&self, pairs: &[(Team, Team)]) -> Result<TournamentState> {
        if self.status != TournamentStatus::Setup {
            return Err(CompetitionError::InvalidTransition {
                from: self.status.to_string(),
                action: "initialize",
            });
        }

        let field = pairs.len() * 2;
        if pairs.is_empty() {
            return Err(CompetitionError::InsufficientTeams { found: field });
        }
        if !pairs.len().is_power_of_two() {
            return Err(CompetitionError::NotPowerOfTwo { teams: field });
        }
        validate_pairings(pairs)?;

        let first_round = pairs.len() as u32;
        let rounds = first_round.trailing_zeros() + 1;

        let mut matches = Vec::with_capacity(2 * pairs.len() - 1);
        for (i, (home, away)) in pairs.iter().enumerate() {
            let id = MatchId::new(1, i as u32 + 1);
            matches.push(BracketMatch::scheduled(id, home.clone(), away.clone()));
        }
        for round in 2..=rounds {
            for position in 1..=(first_round >> (round - 1)) {
                matches.push(BracketMatch::placeholder(MatchId::new(round, position)));
            }
        }

        log::info!("Bracket initialized: {} teams, {} rounds, {} matches", field, rounds, matches.len());

        Ok(TournamentState { matches, status: TournamentStatus::InProgress, current_round: 1 })
    }

    /// Records a decisive score for a scheduled match, moves the winner on
    /// and returns the new state together with the winner.
    pub fn record_result(
        &self,
        id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<(TournamentState, Team)> {
        let index = self.index_of(id).ok_or(CompetitionError::UnknownMatch { id })?;

        let (home, away) = match &self.matches[index].state {
            SlotState::Scheduled { home, away } => (home, away),
            SlotState::Played(_) => {
                log::warn!("Rejected duplicate result for match {}", id);
                return Err(CompetitionError::MatchAlreadyPlayed { id });
            }
            SlotState::Awaiting { .. } => return Err(CompetitionError::MissingParticipants { id }),
        };
        if home_score == away_score {
            return Err(CompetitionError::DrawNotAllowed { id });
        }

        let result = MatchResult::new(home.clone(), away.clone(), home_score, away_score);
        let winner = result.winning_team().cloned().ok_or(CompetitionError::DrawNotAllowed { id })?;
        log::debug!("Match {} recorded: {}", id, result.scoreline());

        let mut next = self.clone();
        next.matches[index].state = SlotState::Played(result);
        next.place_winner(id)?;
        next.refresh_progress();

        if next.status == TournamentStatus::Completed {
            log::info!("Tournament complete, champion: {}", winner.name);
        }

        Ok((next, winner))
    }

    /// Moves the winner of `id` into its slot in the next round.
    ///
    /// Odd positions fill the home slot of `ceil(p/2)`, even positions the
    /// away slot. A no-op for the final (played or not) and for a winner
    /// already in place, even once the target match has been played.
    pub fn advance_winner(&self, id: MatchId) -> Result<TournamentState> {
        let mut next = self.clone();
        next.place_winner(id)?;
        Ok(next)
    }

    /// Fresh `Setup` state.
    pub fn reset(&self) -> TournamentState {
        if self.status != TournamentStatus::Setup {
            log::info!("Tournament reset from {}", self.status);
        }
        TournamentState::new()
    }

    /// Simulates a scheduled match with draws ruled out and records it.
    pub fn simulate_match<R: Rng>(&self, id: MatchId, rng: &mut R) -> Result<(TournamentState, MatchResult)> {
        let fixture = self.match_by_id(id).ok_or(CompetitionError::UnknownMatch { id })?;
        let (home, away) = match &fixture.state {
            SlotState::Scheduled { home, away } => (home, away),
            SlotState::Played(_) => return Err(CompetitionError::MatchAlreadyPlayed { id }),
            SlotState::Awaiting { .. } => return Err(CompetitionError::MissingParticipants { id }),
        };

        let result = outcome::simulate(home, away, rng, true);
        let (next, _) = self.record_result(id, result.home_score, result.away_score)?;
        Ok((next, result))
    }

    /// Simulates every remaining match in id order.
    pub fn play_out<R: Rng>(&self, rng: &mut R) -> Result<TournamentState> {
        let mut state = self.clone();
        while let Some(id) = state.next_match().map(|m| m.id) {
            let (next, _) = state.simulate_match(id, rng)?;
            state = next;
        }
        Ok(state)
    }

    fn index_of(&self, id: MatchId) -> Option<usize> {
        self.matches.binary_search_by_key(&id, |m| m.id).ok()
    }

    fn place_winner(&mut self, id: MatchId) -> Result<()> {
        let source = self.match_by_id(id).ok_or(CompetitionError::UnknownMatch { id })?;
        if id.round >= self.round_count() {
            return Ok(());
        }
        let winner = source.winner().cloned().ok_or(CompetitionError::MatchNotPlayed { id })?;

        let target_id = id.next();
        let target = self.index_of(target_id).ok_or(CompetitionError::UnknownMatch { id: target_id })?;
        let home_slot = id.feeds_home();

        let updated = match &self.matches[target].state {
            SlotState::Played(result) => {
                let occupant = if home_slot { &result.home_team } else { &result.away_team };
                if occupant.id != winner.id {
                    return Err(CompetitionError::SlotOccupied { id: target_id });
                }
                return Ok(());
            }
            SlotState::Scheduled { home, away } => {
                let occupant = if home_slot { home } else { away };
                if occupant.id != winner.id {
                    return Err(CompetitionError::SlotOccupied { id: target_id });
                }
                return Ok(());
            }
            SlotState::Awaiting { home, away } => {
                let occupant = if home_slot { home } else { away };
                match occupant {
                    Some(team) if team.id == winner.id => return Ok(()),
                    Some(_) => return Err(CompetitionError::SlotOccupied { id: target_id }),
                    None => {}
                }

                let (home, away) = if home_slot {
                    (Some(winner), away.clone())
                } else {
                    (home.clone(), Some(winner))
                };
                SlotState::Awaiting { home, away }.settle()
            }
        };

        log::debug!("Winner of {} moved to {}", id, target_id);
        self.matches[target].state = updated;
        Ok(())
    }

    fn refresh_progress(&mut self) {
        let final_played = self.final_match().is_some_and(|m| m.is_played());

        if final_played {
            self.status = TournamentStatus::Completed;
            self.current_round = self.round_count();
        } else {
            self.status = TournamentStatus::InProgress;
            self.current_round = self
                .matches
                .iter()
                .find(|m| !m.is_played())
                .map_or(self.round_count(), |m| m.round());
        }
    }
}
