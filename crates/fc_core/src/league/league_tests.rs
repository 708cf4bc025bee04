use super::*;
use crate::models::TeamStats;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn team(id: &str) -> Team {
    Team::new(id, id.to_uppercase(), TeamStats::new(60, 60, 60))
}

fn four_teams() -> Vec<Team> {
    vec![team("w"), team("x"), team("y"), team("z")]
}

fn fixture_index(league: &League, home: &str, away: &str) -> usize {
    league
        .fixtures()
        .iter()
        .position(|f| f.home_team.id == home && f.away_team.id == away)
        .unwrap()
}

fn table_order(league: &League) -> Vec<&str> {
    league.standings().iter().map(|s| s.team.id.as_str()).collect()
}

#[test]
fn test_new_league_has_zeroed_table_in_entry_order() {
    let league = League::new(four_teams()).unwrap();

    assert_eq!(league.fixtures().len(), 6);
    assert_eq!(table_order(&league), vec!["w", "x", "y", "z"]);
    assert!(league.standings().iter().all(|s| s.played == 0 && s.points == 0));
    assert_eq!(league.next_fixture().map(|(i, _)| i), Some(0));
    assert!(league.leader().is_none());
}

#[test]
fn test_insufficient_teams() {
    let err = League::new(vec![team("solo")]).unwrap_err();
    assert!(matches!(err, CompetitionError::InsufficientTeams { found: 1 }));
}

#[test]
fn test_dominant_and_winless_teams() {
    let mut league = League::new(four_teams()).unwrap();

    // x beats everyone, y loses everything, w-z is a draw
    let results = [
        ("w", "x", 0, 2),
        ("w", "y", 3, 1),
        ("w", "z", 1, 1),
        ("x", "y", 4, 0),
        ("x", "z", 1, 0),
        ("y", "z", 0, 2),
    ];
    for (home, away, hs, aws) in results {
        let index = fixture_index(&league, home, away);
        league = league.record_result(index, hs, aws).unwrap();
    }

    assert!(league.is_complete());
    let first = &league.standings()[0];
    assert_eq!(first.team.id, "x");
    assert_eq!((first.won, first.points), (3, 9));

    let last = league.standings().last().unwrap();
    assert_eq!(last.team.id, "y");
    assert_eq!((last.lost, last.points), (3, 0));

    // w and z both have 4 points; w is level on goals, z is +1
    assert_eq!(table_order(&league), vec!["x", "z", "w", "y"]);
    assert_eq!(league.leader().map(|t| t.id.as_str()), Some("x"));
}

#[test]
fn test_equal_points_and_goal_difference_keep_entry_order() {
    let mut league = League::new(four_teams()).unwrap();
    // z beats y 1-0 and x beats w 1-0: x and z level on 3 pts, +1
    league = league.record_result(fixture_index(&league, "y", "z"), 0, 1).unwrap();
    league = league.record_result(fixture_index(&league, "w", "x"), 0, 1).unwrap();

    assert_eq!(table_order(&league), vec!["x", "z", "w", "y"]);
}

#[test]
fn test_duplicate_result_rejected_and_table_unchanged() {
    let league = League::new(four_teams()).unwrap();
    let league = league.record_result(0, 2, 1).unwrap();
    let before = league.clone();

    let err = league.record_result(0, 5, 0).unwrap_err();
    assert!(matches!(err, CompetitionError::FixtureAlreadyPlayed { index: 0 }));
    assert_eq!(league, before);
    assert_eq!(league.standing_of("w").unwrap().points, 3);
    assert_eq!(league.fixtures()[0].home_score, 2);
}

#[test]
fn test_goal_overflow_rejected_and_table_unchanged() {
    let league = League::new(four_teams()).unwrap();
    let league = league.record_result(0, u32::MAX, 0).unwrap();
    let before = league.clone();

    // w already has u32::MAX goals for; one more cannot be counted
    let err = league.record_result(1, 1, 0).unwrap_err();
    assert!(matches!(err, CompetitionError::GoalTotalOverflow { ref team } if team == "w"));
    assert_eq!(league, before);
    assert!(!league.fixtures()[1].played);
    assert_eq!(league.standing_of("y").unwrap().played, 0);
}

#[test]
fn test_unknown_fixture_rejected() {
    let league = League::new(four_teams()).unwrap();
    let err = league.record_result(6, 1, 0).unwrap_err();
    assert!(matches!(err, CompetitionError::UnknownFixture { index: 6 }));
}

#[test]
fn test_record_does_not_mutate_receiver() {
    let league = League::new(four_teams()).unwrap();
    let next = league.record_result(2, 1, 1).unwrap();

    assert_eq!(league.played_count(), 0);
    assert_eq!(next.played_count(), 1);
    assert_eq!(next.standing_of("w").unwrap().drawn, 1);
    assert_eq!(next.standing_of("z").unwrap().drawn, 1);
}

#[test]
fn test_next_fixture_follows_enumeration() {
    let league = League::new(four_teams()).unwrap();
    let league = league.record_result(0, 1, 0).unwrap();
    let league = league.record_result(2, 1, 0).unwrap();

    let (index, fixture) = league.next_fixture().unwrap();
    assert_eq!(index, 1);
    assert_eq!((fixture.home_team.id.as_str(), fixture.away_team.id.as_str()), ("w", "y"));
}

#[test]
fn test_play_out_completes_and_is_reproducible() {
    let league = League::new(four_teams()).unwrap();

    let first = league.play_out(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    let second = league.play_out(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();

    assert!(first.is_complete());
    assert_eq!(first, second);
    assert!(first.simulate_next(&mut ChaCha8Rng::seed_from_u64(0)).unwrap().is_none());
    assert!(first.standings().iter().all(|s| s.played == 3));
}

#[test]
fn test_serializes_as_plain_data() {
    let league = League::new(four_teams()).unwrap().record_result(0, 1, 2).unwrap();
    let json = serde_json::to_string(&league).unwrap();
    let restored: League = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, league);
}

proptest! {
    #[test]
    fn prop_points_total_and_recompute(
        n in 2usize..7,
        scores in proptest::collection::vec((0u32..5, 0u32..5), 21),
    ) {
        let teams: Vec<Team> = (0..n).map(|i| team(&format!("t{i}"))).collect();
        let mut league = League::new(teams.clone()).unwrap();

        let count = league.fixtures().len();
        let (mut decisive, mut drawn) = (0u32, 0u32);
        for (index, &(hs, aws)) in scores.iter().take(count).enumerate() {
            league = league.record_result(index, hs, aws).unwrap();
            if hs == aws { drawn += 1 } else { decisive += 1 }
        }

        let total: u32 = league.standings().iter().map(|s| s.points).sum();
        prop_assert_eq!(total, 3 * decisive + 2 * drawn);

        for s in league.standings() {
            prop_assert_eq!(s.points, 3 * s.won + s.drawn);
            prop_assert_eq!(s.played, s.won + s.drawn + s.lost);
        }

        let rebuilt = recompute_standings(&teams, league.fixtures()).unwrap();
        prop_assert_eq!(league.standings(), rebuilt.as_slice());
    }
}
