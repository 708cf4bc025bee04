use thiserror::Error;

use crate::bracket::MatchId;

#[derive(Error, Debug)]
pub enum CompetitionError {
    #[error("Insufficient teams: need at least 2, found {found}")]
    InsufficientTeams { found: usize },

    #[error("Bracket field must be a power of two, found {teams} teams")]
    NotPowerOfTwo { teams: usize },

    #[error("Team {id} appears more than once")]
    DuplicateTeam { id: String },

    #[error("Unknown fixture: {index}")]
    UnknownFixture { index: usize },

    #[error("Fixture {index} has already been played")]
    FixtureAlreadyPlayed { index: usize },

    #[error("Goal totals for team {team} would overflow")]
    GoalTotalOverflow { team: String },

    #[error("Unknown match: {id}")]
    UnknownMatch { id: MatchId },

    #[error("Match {id} does not have both participants yet")]
    MissingParticipants { id: MatchId },

    #[error("Match {id} has already been played")]
    MatchAlreadyPlayed { id: MatchId },

    #[error("Match {id} has not been played")]
    MatchNotPlayed { id: MatchId },

    #[error("Match {id} cannot end in a draw")]
    DrawNotAllowed { id: MatchId },

    #[error("Slot in match {id} is already taken")]
    SlotOccupied { id: MatchId },

    #[error("Cannot {action} while tournament is {from}")]
    InvalidTransition { from: String, action: &'static str },

    #[error("Match clock has already finished")]
    ClockFinished,

    #[error("Selection is full ({max} teams)")]
    SelectionFull { max: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompetitionError {
    /// True for precondition violations the caller can fix by changing the request.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, CompetitionError::Io(_) | CompetitionError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, CompetitionError>;
