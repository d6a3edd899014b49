use chrono::Utc;
use uuid::Uuid;

use clubhouse_backend::league::player_stats::{
    aggregate_player_stats, discipline_ranking, rating_averages, rounded_average, scorer_ranking,
};
use clubhouse_backend::models::match_event::{Card, CardType, Goal};
use clubhouse_backend::models::matches::Match;
use clubhouse_backend::models::player::Player;
use clubhouse_backend::models::voting::Rating;

fn player(first: &str, last: &str) -> Player {
    Player {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        shirt_number: None,
        user_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn goal(player_id: Uuid) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        match_id: Uuid::nil(),
        player_id,
        minute: None,
        side: None,
        created_at: Utc::now(),
        player_name: None,
    }
}

fn card(player_id: Uuid, card_type: CardType) -> Card {
    Card {
        id: Uuid::new_v4(),
        match_id: Uuid::nil(),
        player_id,
        card_type,
        minute: None,
        created_at: Utc::now(),
        player_name: None,
    }
}

fn rating(rated_player_id: Uuid, score: i32) -> Rating {
    Rating {
        match_id: Uuid::nil(),
        rater_id: Uuid::new_v4(),
        rated_player_id,
        score,
        updated_at: Utc::now(),
    }
}

fn match_with_mvp(mvp: Uuid, goals: Option<(i32, i32)>) -> Match {
    Match {
        id: Uuid::new_v4(),
        tournament_id: None,
        match_date: Some(Utc::now()),
        team1: "Gagamoto".to_string(),
        team2: "Los Pumas".to_string(),
        goals_team1: goals.map(|g| g.0),
        goals_team2: goals.map(|g| g.1),
        played: goals.is_some(),
        mvp_player_id: Some(mvp),
        venue: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_average_rounds_to_one_decimal() {
    assert_eq!(rounded_average(16, 2), Some(8.0));
    assert_eq!(rounded_average(20, 3), Some(6.7));
    assert_eq!(rounded_average(0, 0), None);
}

#[test]
fn test_player_line_totals() {
    let juan = player("Juan", "Perez");
    let ana = player("Ana", "Gomez");
    let players = vec![juan.clone(), ana.clone()];

    let goals = vec![goal(juan.id), goal(juan.id), goal(ana.id), goal(Uuid::new_v4())];
    let cards = vec![card(ana.id, CardType::Yellow), card(ana.id, CardType::Red)];
    let matches = vec![
        match_with_mvp(juan.id, Some((2, 1))),
        // No result recorded, does not count
        match_with_mvp(juan.id, None),
    ];
    let ratings = vec![rating(juan.id, 7), rating(juan.id, 9)];

    let lines = aggregate_player_stats(&players, &goals, &cards, &matches, &ratings);
    assert_eq!(lines.len(), 2);

    let juan_line = lines.iter().find(|l| l.player_id == juan.id).unwrap();
    assert_eq!(juan_line.goals, 2);
    assert_eq!(juan_line.mvp_matches, 1);
    assert_eq!(juan_line.avg_rating, Some(8.0));
    assert_eq!(juan_line.ratings_count, 2);

    let ana_line = lines.iter().find(|l| l.player_id == ana.id).unwrap();
    assert_eq!(ana_line.goals, 1);
    assert_eq!((ana_line.yellow_cards, ana_line.red_cards), (1, 1));
    assert_eq!(ana_line.avg_rating, None);
}

#[test]
fn test_rankings() {
    let juan = player("Juan", "Perez");
    let ana = player("Ana", "Gomez");
    let luis = player("Luis", "Alvarez");
    let players = vec![juan.clone(), ana.clone(), luis.clone()];

    let goals = vec![goal(juan.id), goal(ana.id)];
    let cards = vec![
        card(juan.id, CardType::Yellow),
        card(juan.id, CardType::Yellow),
        card(luis.id, CardType::Red),
    ];

    let lines = aggregate_player_stats(&players, &goals, &cards, &[], &[]);

    // Level on goals, ordered by surname
    let scorers = scorer_ranking(&lines);
    assert_eq!(scorers.len(), 2);
    assert_eq!(scorers[0].name, "Ana Gomez");
    assert_eq!(scorers[1].name, "Juan Perez");

    // One red weighs as much as two yellows
    let discipline = discipline_ranking(&lines);
    assert_eq!(discipline.len(), 2);
    assert_eq!(discipline[0].name, "Luis Alvarez");
    assert_eq!(discipline[1].yellow_cards, 2);
}

#[test]
fn test_rating_averages_best_first() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let averages = rating_averages(&[rating(a, 7), rating(a, 9), rating(b, 10)]);

    assert_eq!(averages[0].player_id, b);
    assert_eq!(averages[0].average, 10.0);
    assert_eq!(averages[1].average, 8.0);
    assert_eq!(averages[1].count, 2);
}
