use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::create_admin_user_and_login;
use common::utils::{make_authenticated_request, spawn_app};

#[tokio::test]
async fn player_fields_can_be_cleared() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &client, reqwest::Method::POST, &format!("{}/admin/players", &test_app.address), &admin.token,
        Some(json!({ "first_name": "Juan", "last_name": "Perez", "shirt_number": 9, "user_id": admin.user_id })),
    ).await;
    assert_eq!(201, response.status().as_u16());
    let created: serde_json::Value = response.json().await.unwrap();
    let player_url = format!("{}/admin/players/{}", &test_app.address, created["data"]["id"].as_str().unwrap());

    // Absent fields are left alone
    let response = make_authenticated_request(
        &client, reqwest::Method::PUT, &player_url, &admin.token,
        Some(json!({ "first_name": "Juan Carlos" })),
    ).await;
    assert_eq!(200, response.status().as_u16());
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["data"]["shirt_number"], 9);
    assert_eq!(updated["data"]["user_id"], json!(admin.user_id));

    let response = make_authenticated_request(
        &client, reqwest::Method::PUT, &player_url, &admin.token,
        Some(json!({ "shirt_number": null, "user_id": null })),
    ).await;
    assert_eq!(200, response.status().as_u16());
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["data"]["first_name"], "Juan Carlos");
    assert_eq!(updated["data"]["shirt_number"], serde_json::Value::Null);
    assert_eq!(updated["data"]["user_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn duplicate_player_name_is_rejected() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let url = format!("{}/admin/players", &test_app.address);

    for expected in [201, 400] {
        let response = make_authenticated_request(
            &Client::new(), reqwest::Method::POST, &url, &admin.token,
            Some(json!({ "first_name": "Ana", "last_name": "Gomez" })),
        ).await;
        assert_eq!(expected, response.status().as_u16());
    }
}
