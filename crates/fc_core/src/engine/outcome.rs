//! Rating-based match outcome model.
//!
//! Each side's score is its attack strength against the opponent's defense
//! strength, both scaled by an independent random multiplier:
//!
//! ```text
//! home = max(0, floor((home_attack * r1 - away_defense * r2) / 15))
//! away = max(0, floor((away_attack * r3 - home_defense * r4) / 15))
//! ```
//!
//! Four draws per match, taken in the order r1, r2, r3, r4. With `no_draw`
//! a tie is broken by adding one goal to a side picked by a fair coin, which
//! is a fifth draw.

use super::rating::strengths;
use crate::models::{MatchResult, Team};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Random multiplier applied to every attack/defense term.
pub const RANDOM_FACTOR_RANGE: Range<f64> = 0.8..1.2;

/// Strength difference worth one goal.
pub const SCORE_DIVISOR: f64 = 15.0;

pub fn simulate<R: Rng>(
    home_team: &Team,
    away_team: &Team,
    rng: &mut R,
    no_draw: bool,
) -> MatchResult {
    let home = strengths(home_team);
    let away = strengths(away_team);

    let home_attack = home.attack * random_factor(rng);
    let away_defense = away.defense * random_factor(rng);
    let away_attack = away.attack * random_factor(rng);
    let home_defense = home.defense * random_factor(rng);

    let mut home_score = goals(home_attack, away_defense);
    let mut away_score = goals(away_attack, home_defense);

    if no_draw && home_score == away_score {
        if rng.gen_bool(0.5) {
            home_score += 1;
        } else {
            away_score += 1;
        }
    }

    let result = MatchResult::new(home_team.clone(), away_team.clone(), home_score, away_score);
    log::debug!("Simulated {} (no_draw={})", result.scoreline(), no_draw);
    result
}

/// Same as [`simulate`] with a ChaCha8 stream seeded from `seed`.
pub fn simulate_seeded(home_team: &Team, away_team: &Team, seed: u64, no_draw: bool) -> MatchResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate(home_team, away_team, &mut rng, no_draw)
}

fn random_factor<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(RANDOM_FACTOR_RANGE)
}

fn goals(attack: f64, defense: f64) -> u32 {
    let raw = ((attack - defense) / SCORE_DIVISOR).floor();
    if raw <= 0.0 {
        0
    } else {
        raw as u32
    }
}
