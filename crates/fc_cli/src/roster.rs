//! Roster file loading.
//!
//! A roster is a JSON array of team records. Records are checked here, at
//! the host boundary, before any of them reach the engine.

use anyhow::{bail, Context, Result};
use fc_core::models::Team;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn load_roster(path: &Path) -> Result<Vec<Team>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    parse_roster(&content).with_context(|| format!("Invalid roster {}", path.display()))
}

pub fn parse_roster(json: &str) -> Result<Vec<Team>> {
    let teams: Vec<Team> = serde_json::from_str(json).context("Roster is not a JSON array of teams")?;

    let mut seen = HashSet::new();
    for team in &teams {
        if let Err(msg) = team.validate() {
            bail!(msg);
        }
        if !seen.insert(team.id.as_str()) {
            bail!("Team id '{}' is used twice", team.id);
        }
    }

    log::debug!("Loaded {} teams", teams.len());
    Ok(teams)
}

pub fn find_team<'a>(teams: &'a [Team], id: &str) -> Result<&'a Team> {
    teams
        .iter()
        .find(|t| t.id == id)
        .with_context(|| format!("No team with id '{}' in roster", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROSTER: &str = r#"[
        {"id": "rov", "name": "Rovers", "overall_rating": 74,
         "stats": {"attack": 78, "defense": 70, "teamwork": 74},
         "players": [{"id": "p1", "name": "Ada Striker", "position": "Forward", "attack": 85, "defense": 30}]},
        {"id": "utd", "name": "United", "overall_rating": 70,
         "stats": {"attack": 68, "defense": 72, "teamwork": 70}}
    ]"#;

    #[test]
    fn test_parse_roster() {
        let teams = parse_roster(ROSTER).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].formation, "4-4-2");
        assert_eq!(teams[0].attacking_players().len(), 1);
        assert_eq!(find_team(&teams, "utd").unwrap().name, "United");
        assert!(find_team(&teams, "xyz").is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "name": "A", "overall_rating": 50, "stats": {"attack": 50, "defense": 50, "teamwork": 50}},
            {"id": "a", "name": "B", "overall_rating": 50, "stats": {"attack": 50, "defense": 50, "teamwork": 50}}
        ]"#;
        let err = parse_roster(json).unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let json = r#"[{"id": "a", "name": "A", "overall_rating": 50,
                        "stats": {"attack": 150, "defense": 50, "teamwork": 50}}]"#;
        assert!(parse_roster(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let teams = load_roster(file.path()).unwrap();
        assert_eq!(teams[1].id, "utd");

        let err = load_roster(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster"));
    }
}
