use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use std::sync::Arc;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use clubhouse_backend::run;
use clubhouse_backend::clock::{Clock, SystemClock};
use clubhouse_backend::config::settings::{get_config, get_jwt_settings, ClubSettings, DatabaseSettings};
use clubhouse_backend::telemetry::{get_subscriber, init_subscriber};

pub const HOME_TEAM: &str = "Gagamoto";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init test subscriber");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to init test subscriber");
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub struct UserRegLoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_clock(Arc::new(SystemClock)).await
}

/// Start the app on a random port against a fresh database.
pub async fn spawn_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);

    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        ClubSettings::new(HOME_TEAM, -180),
        clock,
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub async fn register_user(app_address: &str) -> (String, String) {
    let client = Client::new();
    let username = format!("player{}", &Uuid::new_v4().simple().to_string()[..12]);
    let password = "password123".to_string();

    let response = client
        .post(format!("{}/register_user", app_address))
        .json(&json!({
            "username": username,
            "password": password,
            "email": format!("{}@example.com", username),
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert_eq!(200, response.status().as_u16());

    (username, password)
}

pub async fn login(app_address: &str, username: &str, password: &str) -> UserRegLoginResponse {
    let response = Client::new()
        .post(format!("{}/login", app_address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute login request.");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse login response");
    let token = body["token"].as_str().expect("No token in response").to_string();

    UserRegLoginResponse {
        user_id: parse_user_id_from_jwt_token(&token),
        token,
        username: username.to_string(),
    }
}

/// Register a member account and log in with it.
pub async fn create_member_user_and_login(test_app: &TestApp) -> UserRegLoginResponse {
    let (username, password) = register_user(&test_app.address).await;
    sqlx::query("UPDATE users SET role = 'member' WHERE username = $1")
        .bind(&username)
        .execute(&test_app.db_pool)
        .await
        .expect("Failed to demote user");
    login(&test_app.address, &username, &password).await
}

pub fn parse_user_id_from_jwt_token(token: &str) -> Uuid {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    let claims = decode::<serde_json::Value>(token, &DecodingKey::from_secret(&[]), &validation)
        .expect("Failed to decode token")
        .claims;
    let sub = claims["sub"].as_str().expect("No subject in token");
    Uuid::parse_str(sub).expect("Subject is not a UUID")
}

pub async fn make_authenticated_request(
    client: &Client,
    method: reqwest::Method,
    url: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> reqwest::Response {
    let mut request = client
        .request(method, url)
        .header("Authorization", format!("Bearer {}", token));
    if let Some(body) = body {
        request = request.json(&body);
    }
    request.send().await.expect("Failed to execute request.")
}
