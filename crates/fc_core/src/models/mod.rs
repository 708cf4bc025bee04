pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{EventKind, MatchEvent};
pub use match_result::{MatchResult, Outcome, Side};
pub use player::{Player, Position};
pub use team::{Team, TeamStats, MAX_RATING};
