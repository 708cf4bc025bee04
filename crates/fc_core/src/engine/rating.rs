//! Team strength derived from the roster rating block.

use crate::models::Team;
use serde::{Deserialize, Serialize};

const ATTACK_WEIGHT: f64 = 0.4;
const TEAMWORK_WEIGHT: f64 = 0.2;
const DEFENSE_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Strengths {
    pub attack: f64,
    pub defense: f64,
}

/// `attack = attack*0.4 + teamwork*0.2`, `defense = defense*0.4`
pub fn strengths(team: &Team) -> Strengths {
    let stats = &team.stats;
    Strengths {
        attack: stats.attack as f64 * ATTACK_WEIGHT + stats.teamwork as f64 * TEAMWORK_WEIGHT,
        defense: stats.defense as f64 * DEFENSE_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamStats;

    #[test]
    fn test_weights() {
        let team = Team::new("t", "T", TeamStats::new(80, 50, 60));
        let s = strengths(&team);
        assert!((s.attack - 44.0).abs() < 1e-9);
        assert!((s.defense - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_ignores_overall_rating() {
        let a = Team::new("a", "A", TeamStats::new(70, 70, 70)).with_overall(10);
        let b = Team::new("b", "B", TeamStats::new(70, 70, 70)).with_overall(99);
        assert_eq!(strengths(&a), strengths(&b));
    }

    #[test]
    fn test_max_ratings() {
        let team = Team::new("t", "T", TeamStats::new(100, 100, 100));
        let s = strengths(&team);
        assert!((s.attack - 60.0).abs() < 1e-9);
        assert!((s.defense - 40.0).abs() < 1e-9);
    }
}
