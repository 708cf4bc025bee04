//! # fc_core - Football Competition Simulation Engine
//!
//! Simulates football competitions between rated teams: single matches,
//! round-robin leagues and single-elimination brackets.
//!
//! ## Features
//! - Deterministic: every random draw comes from a caller-supplied RNG
//! - Minute-by-minute match clock driven by an explicit step function
//! - League table and knockout bracket as pure state transitions
//! - All state is plain serde data
//!
//! ## Usage
//! ```rust
//! use fc_core::league::League;
//! use fc_core::models::{Team, TeamStats};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let teams = vec![
//!     Team::new("rov", "Rovers", TeamStats::new(75, 70, 72)),
//!     Team::new("utd", "United", TeamStats::new(68, 74, 70)),
//!     Team::new("ath", "Athletic", TeamStats::new(60, 62, 65)),
//! ];
//!
//! let league = League::new(teams).unwrap();
//! let table = league.play_out(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
//! assert!(table.is_complete());
//! ```

pub mod bracket;
pub mod config;
pub mod engine;
pub mod error;
pub mod league;
pub mod models;

pub use bracket::{BracketMatch, MatchId, SlotState, TeamSelection, TournamentState, TournamentStatus};
pub use config::CompetitionConfig;
pub use engine::{run_clock, simulate, simulate_seeded, ClockOutcome, ClockState};
pub use error::{CompetitionError, Result};
pub use league::{League, LeagueFixture, Standing};
pub use models::{EventKind, MatchEvent, MatchResult, Player, Position, Side, Team, TeamStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
