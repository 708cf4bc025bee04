//! Minute-event match clock.
//!
//! The clock is a step function: [`ClockState::advance_one_minute`] returns
//! the next state plus whatever happened during that minute. Hosts decide the
//! cadence (a timer, a test loop, a batch run); [`run`] is the synchronous
//! driver used by tests and the CLI.
//!
//! Each minute a goal happens with probability [`GOAL_PROBABILITY`]. The
//! scoring side is home with probability
//! `50 + (home_overall - away_overall + HOME_ADVANTAGE) / 2` percent. The
//! scorer is picked uniformly among the team's midfielders and forwards. The
//! last minute also emits a full-time summary; draws are allowed.

use crate::error::{CompetitionError, Result};
use crate::models::{EventKind, MatchEvent, MatchResult, Side, Team};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance of a goal in any single minute.
pub const GOAL_PROBABILITY: f64 = 0.05;

/// Rating points added to the home side when picking who scored.
pub const HOME_ADVANTAGE: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockState {
    home_team: Team,
    away_team: Team,
    total_minutes: u32,
    /// Last completed minute; 0 before kick-off.
    minute: u32,
    home_score: u32,
    away_score: u32,
    events: Vec<MatchEvent>,
}

/// Everything a finished clock produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockOutcome {
    pub result: MatchResult,
    pub events: Vec<MatchEvent>,
}

impl ClockState {
    pub fn new(home_team: Team, away_team: Team, total_minutes: u32) -> Result<Self> {
        if total_minutes == 0 {
            return Err(CompetitionError::InvalidConfig(
                "match clock needs at least one minute".to_string(),
            ));
        }
        Ok(Self {
            home_team,
            away_team,
            total_minutes,
            minute: 0,
            home_score: 0,
            away_score: 0,
            events: Vec::new(),
        })
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    pub fn score(&self) -> (u32, u32) {
        (self.home_score, self.away_score)
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn is_finished(&self) -> bool {
        self.minute >= self.total_minutes
    }

    /// Result as it stands after the last completed minute.
    pub fn result(&self) -> MatchResult {
        MatchResult::new(
            self.home_team.clone(),
            self.away_team.clone(),
            self.home_score,
            self.away_score,
        )
    }

    /// Percent chance that a goal in this match goes to the home side.
    pub fn home_goal_share(&self) -> f64 {
        let edge = self.home_team.overall_rating as f64 - self.away_team.overall_rating as f64
            + HOME_ADVANTAGE;
        50.0 + edge / 2.0
    }

    /// Plays the next minute. Returns the new state and the events emitted
    /// during that minute (a goal, and on the last minute the full-time
    /// summary).
    pub fn advance_one_minute<R: Rng>(&self, rng: &mut R) -> Result<(ClockState, Vec<MatchEvent>)> {
        if self.is_finished() {
            return Err(CompetitionError::ClockFinished);
        }

        let mut next = self.clone();
        next.minute += 1;
        let mut emitted = Vec::new();

        if rng.gen::<f64>() < GOAL_PROBABILITY {
            let side = if rng.gen::<f64>() * 100.0 < self.home_goal_share() {
                Side::Home
            } else {
                Side::Away
            };
            emitted.push(next.score_goal(side, rng));
        }

        if next.is_finished() {
            emitted.push(next.full_time_event());
        }

        next.events.extend(emitted.iter().cloned());
        Ok((next, emitted))
    }

    fn score_goal<R: Rng>(&mut self, side: Side, rng: &mut R) -> MatchEvent {
        let team = match side {
            Side::Home => {
                self.home_score += 1;
                &self.home_team
            }
            Side::Away => {
                self.away_score += 1;
                &self.away_team
            }
        };

        let attackers = team.attacking_players();
        let scorer = if attackers.is_empty() {
            None
        } else {
            Some(attackers[rng.gen_range(0..attackers.len())].name.clone())
        };

        log::debug!("{}' goal for {} ({}-{})", self.minute, team.name, self.home_score, self.away_score);

        MatchEvent {
            minute: self.minute,
            kind: EventKind::Goal { side, team_name: team.name.clone(), scorer },
        }
    }

    fn full_time_event(&self) -> MatchEvent {
        let result = self.result();
        MatchEvent {
            minute: self.minute,
            kind: EventKind::FullTime {
                outcome: result.outcome(),
                winner_name: result.winning_team().map(|t| t.name.clone()),
                home_score: self.home_score,
                away_score: self.away_score,
            },
        }
    }
}

/// Runs a whole match synchronously, calling `on_minute` after every minute
/// with the new state and that minute's events.
pub fn run<R, F>(
    home_team: &Team,
    away_team: &Team,
    total_minutes: u32,
    rng: &mut R,
    mut on_minute: F,
) -> Result<ClockOutcome>
where
    R: Rng,
    F: FnMut(&ClockState, &[MatchEvent]),
{
    let mut state = ClockState::new(home_team.clone(), away_team.clone(), total_minutes)?;

    while !state.is_finished() {
        let (next, emitted) = state.advance_one_minute(rng)?;
        on_minute(&next, &emitted);
        state = next;
    }

    Ok(ClockOutcome { result: state.result(), events: state.events })
}
