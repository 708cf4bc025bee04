//! # Match Engines
//!
//! - [`rating`]: strength scalars derived from a team's rating block
//! - [`outcome`]: one-shot score simulation (used by leagues and brackets)
//! - [`clock`]: minute-by-minute event feed for a single match

pub mod clock;
pub mod outcome;
pub mod rating;


pub use clock::{run as run_clock, ClockOutcome, ClockState, GOAL_PROBABILITY, HOME_ADVANTAGE};
pub use outcome::{simulate, simulate_seeded, RANDOM_FACTOR_RANGE, SCORE_DIVISOR};
pub use rating::{strengths, Strengths};
