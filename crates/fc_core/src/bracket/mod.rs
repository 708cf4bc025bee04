//! # Knockout Bracket
//!
//! Single-elimination tournament over a power-of-two field.
//!
//! ## Usage
//! ```rust
//! use fc_core::bracket::{TeamSelection, TournamentState, TournamentStatus};
//! use fc_core::models::{Team, TeamStats};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut selection = TeamSelection::new(4);
//! for (i, rating) in [80, 70, 60, 50].into_iter().enumerate() {
//!     let stats = TeamStats::new(rating, rating, rating);
//!     selection.toggle(Team::new(format!("t{i}"), format!("Team {i}"), stats)).unwrap();
//! }
//!
//! let bracket = TournamentState::new().initialize(&selection.pair_in_order().unwrap()).unwrap();
//! let done = bracket.play_out(&mut ChaCha8Rng::seed_from_u64(7)).unwrap();
//! assert_eq!(done.status(), TournamentStatus::Completed);
//! assert!(done.champion().is_some());
//! ```

pub mod matches;
pub mod selection;
pub mod state;


pub use matches::{BracketMatch, MatchId, SlotState};
pub use selection::{validate_pairings, TeamSelection};
pub use state::{TournamentState, TournamentStatus};
