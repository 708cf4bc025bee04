//! Plain-text rendering of engine output.

use fc_core::bracket::{BracketMatch, TournamentState};
use fc_core::league::{League, Standing};
use std::fmt::Write;

pub fn standings_table(standings: &[Standing]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<22} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for (i, s) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<22} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            i + 1,
            s.team.name,
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goals_for,
            s.goals_against,
            s.goal_difference(),
            s.points
        );
    }
    out
}

pub fn league_results(league: &League) -> String {
    let mut out = String::new();
    for fixture in league.fixtures() {
        if let Some(result) = fixture.result() {
            let _ = writeln!(out, "  {}", result.scoreline());
        }
    }
    out
}

fn match_line(m: &BracketMatch) -> String {
    let name = |team: Option<&fc_core::models::Team>| {
        team.map_or_else(|| "TBD".to_string(), |t| t.name.clone())
    };

    match m.result() {
        Some(result) => format!("  [{}] {}", m.id, result.scoreline()),
        None => format!("  [{}] {} vs {}", m.id, name(m.home_team()), name(m.away_team())),
    }
}

pub fn bracket(state: &TournamentState) -> String {
    let mut out = String::new();
    for round in 1..=state.round_count() {
        let _ = writeln!(out, "{}", state.round_name(round));
        for m in state.round(round) {
            let _ = writeln!(out, "{}", match_line(m));
        }
    }
    if let Some(champion) = state.champion() {
        let _ = writeln!(out, "Champion: {}", champion.name);
    }
    out
}
