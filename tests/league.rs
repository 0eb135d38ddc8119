use league_core::{ErrorKind, League, LeagueConfig, Team};

fn alpha_bravo() -> League {
    let teams = vec![Team::new("Alpha", 85), Team::new("Bravo", 70)];
    League::new(LeagueConfig::new(teams, 1).with_seed(42)).unwrap()
}

#[test]
fn alpha_bravo_season() {
    let mut league = alpha_bravo();

    let week_one = league.matches_in_week(1).unwrap();
    assert_eq!(week_one.len(), 2);
    assert_eq!((week_one[0].home_team.as_str(), week_one[0].away_team.as_str()), ("Alpha", "Bravo"));
    assert_eq!((week_one[1].home_team.as_str(), week_one[1].away_team.as_str()), ("Bravo", "Alpha"));

    league.update_match_result(1, 2, 1).unwrap();
    league.update_match_result(2, 0, 3).unwrap();

    let standings = league.standings().unwrap();
    let alpha = &standings[0];
    assert_eq!(alpha.team_name, "Alpha");
    assert_eq!((alpha.played, alpha.wins, alpha.draws, alpha.losses), (2, 2, 0, 0));
    assert_eq!((alpha.goals_for, alpha.goals_against, alpha.goal_difference, alpha.points), (5, 1, 4, 6));

    let bravo = &standings[1];
    assert_eq!(bravo.team_name, "Bravo");
    assert_eq!((bravo.played, bravo.wins, bravo.draws, bravo.losses), (2, 0, 0, 2));
    assert_eq!((bravo.goals_for, bravo.goals_against, bravo.goal_difference, bravo.points), (1, 5, -4, 0));

    // Nothing left to project: the projection is the real table
    assert_eq!(league.projected_standings().unwrap(), standings);
}

#[test]
fn seeded_simulation_is_reproducible() {
    let mut league1 = alpha_bravo();
    let mut league2 = alpha_bravo();

    league1.simulate_week(1).unwrap();
    league2.simulate_week(1).unwrap();
    assert_eq!(league1.matches(), league2.matches());
    assert_eq!(league1.standings().unwrap(), league2.standings().unwrap());
}

#[test]
fn default_league_full_season() {
    let mut league = League::new(LeagueConfig::default().with_seed(2024)).unwrap();

    let mut simulated = 0;
    for week in 1..=league.weeks() {
        simulated += league.simulate_week(week).unwrap();
    }
    assert_eq!(simulated, 12);
    assert!(league.is_complete());
    assert_eq!(league.simulate_all_remaining().unwrap(), 0);

    let standings = league.standings().unwrap();
    let total_played: u32 = standings.iter().map(|s| s.played).sum();
    assert_eq!(total_played, 24);
}

#[test]
fn json_shape() {
    let mut league = alpha_bravo();
    league.update_match_result(1, 2, 1).unwrap();

    let matches = serde_json::to_value(league.matches()).unwrap();
    assert_eq!(
        matches[0],
        serde_json::json!({
            "id": 1,
            "home_team": "Alpha",
            "away_team": "Bravo",
            "home_goals": 2,
            "away_goals": 1,
            "played": true,
            "week": 1
        })
    );

    let standings = serde_json::to_value(league.standings().unwrap()).unwrap();
    assert_eq!(
        standings[1],
        serde_json::json!({
            "team_name": "Bravo",
            "played": 1,
            "wins": 0,
            "draws": 0,
            "losses": 1,
            "goals_for": 1,
            "goals_against": 2,
            "goal_difference": -1,
            "points": 0
        })
    );
}

#[test]
fn error_kinds_are_distinct() {
    let mut league = alpha_bravo();

    assert_eq!(league.simulate_week(2).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(league.update_match_result(1, 0, -2).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(league.update_match_result(3, 0, 0).unwrap_err().kind(), ErrorKind::Referential);
    assert_eq!(league.projection_summary(0, None).unwrap_err().kind(), ErrorKind::Configuration);

    let err = League::new(LeagueConfig::new(vec![Team::new("Alpha", 85)], 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
