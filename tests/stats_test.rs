use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::{create_admin_user_and_login, create_match, create_player, record_result};
use common::utils::{make_authenticated_request, spawn_app, HOME_TEAM};

#[tokio::test]
async fn club_stats_and_rivals() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app).await;
    let juan = create_player(&test_app.address, &admin.token, "Juan", "Perez").await;

    let kickoff = Utc::now() - Duration::hours(3);
    let results = [
        ("Los Pumas", HOME_TEAM, 1, 2),
        (HOME_TEAM, "Los Pumas", 0, 0),
        (HOME_TEAM, "Atletico Sur", 1, 3),
    ];

    let mut first_match = None;
    for (team1, team2, goals1, goals2) in results {
        let match_id = create_match(&test_app.address, &admin.token, team1, team2, kickoff).await;
        record_result(&test_app.address, &admin.token, match_id, goals1, goals2).await;
        first_match.get_or_insert(match_id);
    }
    // Scheduled but not played
    create_match(&test_app.address, &admin.token, HOME_TEAM, "Boca Chica", Utc::now() + Duration::days(3)).await;

    let response = make_authenticated_request(
        &client, reqwest::Method::POST,
        &format!("{}/club/matches/{}/goals", &test_app.address, first_match.unwrap()),
        &admin.token, Some(json!({ "player_id": juan })),
    ).await;
    assert_eq!(201, response.status().as_u16());

    let response = make_authenticated_request(
        &client, reqwest::Method::GET, &format!("{}/club/stats", &test_app.address), &admin.token, None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let club = &body["data"]["club"];
    assert_eq!(club["played"], 3);
    assert_eq!(club["won"], 1);
    assert_eq!(club["drawn"], 1);
    assert_eq!(club["lost"], 1);
    assert_eq!(club["goals_for"], 3);
    assert_eq!(club["goals_against"], 4);
    assert_eq!(body["data"]["scorers"][0]["name"], "Juan Perez");
    assert_eq!(body["data"]["scorers"][0]["goals"], 1);

    let response = make_authenticated_request(
        &client, reqwest::Method::GET, &format!("{}/club/stats/rivals", &test_app.address), &admin.token, None,
    ).await;
    let body: serde_json::Value = response.json().await.unwrap();
    let rivals = body["data"].as_array().unwrap();
    assert_eq!(rivals.len(), 2);
    assert_eq!(rivals[0]["rival"], "Los Pumas");
    assert_eq!(rivals[0]["played"], 2);
    assert_eq!(rivals[0]["won"], 1);

    let response = make_authenticated_request(
        &client, reqwest::Method::GET,
        &format!("{}/club/stats/rivals/Atletico%20Sur", &test_app.address), &admin.token, None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["rival"]["lost"], 1);
    assert_eq!(body["data"]["matches"].as_array().unwrap().len(), 1);

    let response = make_authenticated_request(
        &client, reqwest::Method::GET,
        &format!("{}/club/stats/rivals/Nobody", &test_app.address), &admin.token, None,
    ).await;
    assert_eq!(404, response.status().as_u16());
}
