use clubhouse_backend::league::standings::compute_standings;
use clubhouse_backend::models::matches::ScoreLine;

fn season() -> Vec<ScoreLine<'static>> {
    vec![
        ScoreLine::new("Gagamoto", "Los Pumas", Some(3), Some(1)),
        ScoreLine::new("Los Pumas", "Atletico Sur", Some(2), Some(2)),
        ScoreLine::new("Atletico Sur", "Gagamoto", Some(0), Some(1)),
        ScoreLine::new("Gagamoto", "Deportivo Norte", Some(0), Some(4)),
        ScoreLine::new("Deportivo Norte", "Los Pumas", Some(1), Some(0)),
        // Not played yet
        ScoreLine::new("Atletico Sur", "Deportivo Norte", None, None),
    ]
}

#[test]
fn test_goals_for_equal_goals_against_overall() {
    let standings = compute_standings(season());

    let goals_for: i32 = standings.iter().map(|s| s.goals_for).sum();
    let goals_against: i32 = standings.iter().map(|s| s.goals_against).sum();
    assert_eq!(goals_for, goals_against);
}

#[test]
fn test_points_follow_results() {
    for standing in compute_standings(season()) {
        assert_eq!(standing.points, 3 * standing.won + standing.drawn);
        assert_eq!(standing.won + standing.drawn + standing.lost, standing.played);
    }
}

#[test]
fn test_table_order() {
    let standings = compute_standings(season());
    let teams: Vec<&str> = standings.iter().map(|s| s.team.as_str()).collect();

    // Deportivo Norte and Gagamoto both have 6 points; Norte's goal difference is better
    assert_eq!(teams, vec!["Deportivo Norte", "Gagamoto", "Atletico Sur", "Los Pumas"]);
    assert_eq!(standings[0].points, 6);
    assert_eq!(standings[0].goal_difference(), 5);
    assert_eq!(standings[1].goal_difference(), -1);
}

#[test]
fn test_unplayed_matches_are_ignored() {
    let standings = compute_standings(vec![ScoreLine::new("A", "B", Some(1), None)]);
    assert!(standings.is_empty());
}

#[test]
fn test_goals_for_breaks_equal_difference() {
    let standings = compute_standings(vec![
        ScoreLine::new("Low", "X", Some(1), Some(0)),
        ScoreLine::new("High", "Y", Some(3), Some(2)),
    ]);
    assert_eq!(standings[0].team, "High");
    assert_eq!(standings[1].team, "Low");
}
