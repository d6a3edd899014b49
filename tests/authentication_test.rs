use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::create_admin_user_and_login;
use common::utils::{create_member_user_and_login, make_authenticated_request, register_user, spawn_app};

#[tokio::test]
async fn login_returns_token() {
    let test_app = spawn_app().await;
    let (username, password) = register_user(&test_app.address).await;

    let response = Client::new()
        .post(format!("{}/login", &test_app.address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    // First account on a fresh club
    assert_eq!(body["role"], "admin");
    assert!(body["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let test_app = spawn_app().await;
    let (username, _) = register_user(&test_app.address).await;

    let response = Client::new()
        .post(format!("{}/login", &test_app.address))
        .json(&json!({ "username": username, "password": "wrongpassword" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn club_routes_require_a_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/club/matches", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());

    let response = client
        .get(format!("{}/club/matches", &test_app.address))
        .header("Authorization", "Bearer not.a.token")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn members_cannot_use_admin_routes() {
    let test_app = spawn_app().await;
    let member = create_member_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &format!("{}/admin/players", &test_app.address),
        &member.token,
        Some(json!({ "first_name": "Juan", "last_name": "Perez" })),
    ).await;

    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn admins_can_use_member_routes() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::GET,
        &format!("{}/club/players", &test_app.address),
        &admin.token,
        None,
    ).await;

    assert_eq!(200, response.status().as_u16());
}
