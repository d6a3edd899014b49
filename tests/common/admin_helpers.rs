use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use crate::common::utils::{
    login,
    make_authenticated_request,
    register_user,
    TestApp,
    UserRegLoginResponse,
};

/// Register a user, promote it to admin and log in.
pub async fn create_admin_user_and_login(test_app: &TestApp) -> UserRegLoginResponse {
    let (username, password) = register_user(&test_app.address).await;

    sqlx::query("UPDATE users SET role = 'admin' WHERE username = $1")
        .bind(&username)
        .execute(&test_app.db_pool)
        .await
        .expect("Failed to promote user to admin");

    login(&test_app.address, &username, &password).await
}

pub async fn create_player(app_address: &str, token: &str, first_name: &str, last_name: &str) -> Uuid {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &format!("{}/admin/players", app_address),
        token,
        Some(json!({ "first_name": first_name, "last_name": last_name })),
    ).await;

    assert_eq!(201, response.status().as_u16(), "Failed to create player");
    let body: serde_json::Value = response.json().await.expect("Failed to parse player response");
    Uuid::parse_str(body["data"]["id"].as_str().expect("Player ID not found")).unwrap()
}

pub async fn create_match(
    app_address: &str,
    token: &str,
    team1: &str,
    team2: &str,
    match_date: DateTime<Utc>,
) -> Uuid {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &format!("{}/admin/matches", app_address),
        token,
        Some(json!({ "team1": team1, "team2": team2, "match_date": match_date })),
    ).await;

    assert_eq!(201, response.status().as_u16(), "Failed to create match");
    let body: serde_json::Value = response.json().await.expect("Failed to parse match response");
    Uuid::parse_str(body["data"]["id"].as_str().expect("Match ID not found")).unwrap()
}

/// Link a player to the user account that plays as them.
pub async fn link_player_to_user(app_address: &str, token: &str, player_id: Uuid, user_id: Uuid) {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::PUT,
        &format!("{}/admin/players/{}", app_address, player_id),
        token,
        Some(json!({ "user_id": user_id })),
    ).await;

    assert_eq!(200, response.status().as_u16(), "Failed to link player");
}

pub async fn record_result(app_address: &str, token: &str, match_id: Uuid, goals_team1: i32, goals_team2: i32) {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &format!("{}/club/matches/{}/result", app_address, match_id),
        token,
        Some(json!({ "goals_team1": goals_team1, "goals_team2": goals_team2 })),
    ).await;

    assert_eq!(200, response.status().as_u16(), "Failed to record result");
}
