use chrono::Utc;
use uuid::Uuid;

use clubhouse_backend::league::perspective::{opponent_of, result_for, rival_records, team_record};
use clubhouse_backend::models::common::MatchResult;
use clubhouse_backend::models::matches::{Match, ScoreLine};

fn played(team1: &str, team2: &str, goals1: i32, goals2: i32) -> Match {
    Match {
        id: Uuid::new_v4(),
        tournament_id: None,
        match_date: Some(Utc::now()),
        team1: team1.to_string(),
        team2: team2.to_string(),
        goals_team1: Some(goals1),
        goals_team2: Some(goals2),
        played: true,
        mvp_player_id: None,
        venue: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_perspective_is_symmetric() {
    for (g1, g2) in [(0, 0), (2, 1), (1, 4), (7, 7)] {
        let line = ScoreLine::new("Gagamoto", "Los Pumas", Some(g1), Some(g2));
        let home = result_for(&line, "Gagamoto").unwrap();
        let away = result_for(&line, "Los Pumas").unwrap();

        assert_eq!(home.goals_for, away.goals_against);
        assert_eq!(home.goals_against, away.goals_for);
        assert_eq!(home.result, away.result.inverse());
    }
}

#[test]
fn test_away_win() {
    let line = ScoreLine::new("Los Pumas", "Gagamoto", Some(1), Some(3));
    let perspective = result_for(&line, "Gagamoto").unwrap();
    assert_eq!(perspective.goals_for, 3);
    assert_eq!(perspective.goals_against, 1);
    assert_eq!(perspective.result, MatchResult::Win);
}

#[test]
fn test_no_perspective_without_result_or_participation() {
    let pending = ScoreLine::new("Gagamoto", "Los Pumas", None, None);
    assert!(result_for(&pending, "Gagamoto").is_none());

    let other = ScoreLine::new("Atletico Sur", "Los Pumas", Some(1), Some(0));
    assert!(result_for(&other, "Gagamoto").is_none());
    assert!(opponent_of(&other, "Gagamoto").is_none());
    assert_eq!(opponent_of(&other, "Los Pumas"), Some("Atletico Sur"));
}

#[test]
fn test_team_record_totals() {
    let matches = vec![
        played("Gagamoto", "Los Pumas", 2, 0),
        played("Atletico Sur", "Gagamoto", 1, 1),
        played("Gagamoto", "Atletico Sur", 0, 3),
        played("Los Pumas", "Atletico Sur", 5, 5),
    ];

    let record = team_record(&matches, "Gagamoto");
    assert_eq!(record.played, 3);
    assert_eq!((record.won, record.drawn, record.lost), (1, 1, 1));
    assert_eq!(record.goals_for, 3);
    assert_eq!(record.goals_against, 4);
}

#[test]
fn test_rivals_ordered_by_matches_played() {
    let matches = vec![
        played("Gagamoto", "Los Pumas", 2, 0),
        played("Atletico Sur", "Gagamoto", 1, 1),
        played("Gagamoto", "Atletico Sur", 0, 3),
        played("Gagamoto", "Boca Chica", 1, 0),
    ];

    let rivals = rival_records(&matches, "Gagamoto");
    let names: Vec<&str> = rivals.iter().map(|r| r.rival.as_str()).collect();
    assert_eq!(names, vec!["Atletico Sur", "Boca Chica", "Los Pumas"]);

    let sur = &rivals[0].record;
    assert_eq!(sur.played, 2);
    assert_eq!((sur.won, sur.drawn, sur.lost), (0, 1, 1));
}
