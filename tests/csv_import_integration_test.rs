use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::create_admin_user_and_login;
use common::utils::{make_authenticated_request, spawn_app};

const SQUAD: &str = "Nombre,Apellido,Numero_de_camiseta\nJuan,Perez,10\nAna,,7\nLuis,Alvarez,abc\n";

#[tokio::test]
async fn player_import_is_idempotent() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let admin = create_admin_user_and_login(&test_app).await;
    let url = format!("{}/admin/import/players", &test_app.address);

    for _ in 0..2 {
        let response = make_authenticated_request(
            &client, reqwest::Method::POST, &url, &admin.token, Some(json!({ "csv": SQUAD })),
        ).await;
        assert_eq!(201, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"]["created"], 2);
    }

    let players: Vec<(String, Option<i32>)> =
        sqlx::query_as("SELECT last_name, shirt_number FROM players ORDER BY last_name")
            .fetch_all(&test_app.db_pool)
            .await
            .expect("Failed to fetch players");
    assert_eq!(
        players,
        vec![("Alvarez".to_string(), None), ("Perez".to_string(), Some(10))]
    );
}

#[tokio::test]
async fn missing_csv_is_a_validation_error() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(), reqwest::Method::POST,
        &format!("{}/admin/import/players", &test_app.address), &admin.token,
        Some(json!({})),
    ).await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn fixture_import_skips_unreadable_rows() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let csv = "Fecha,Equipo_1,Equipo_2,Horario,Lugar\n\
               08/03/2025,Gagamoto,Los Pumas,18:30,Cancha 2\n\
               ,Gagamoto,Atletico Sur,,\n\
               someday,Gagamoto,Boca Chica,20:00,\n";

    let response = make_authenticated_request(
        &Client::new(), reqwest::Method::POST,
        &format!("{}/admin/import/fixtures", &test_app.address), &admin.token,
        Some(json!({ "csv": csv })),
    ).await;
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["created"], 2);

    let (kickoff,): (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT match_date FROM matches WHERE team2 = 'Los Pumas'")
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch imported fixture");
    // 18:30 at UTC-3
    assert_eq!(kickoff.unwrap().to_rfc3339(), "2025-03-08T21:30:00+00:00");
}

#[tokio::test]
async fn fixture_import_needs_an_existing_tournament() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(), reqwest::Method::POST,
        &format!("{}/admin/import/fixtures", &test_app.address), &admin.token,
        Some(json!({
            "csv": "Fecha,Equipo_1,Equipo_2\n08/03/2025,Gagamoto,Los Pumas\n",
            "tournament_id": uuid::Uuid::new_v4(),
        })),
    ).await;
    assert_eq!(404, response.status().as_u16());
}
