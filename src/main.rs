use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use clubhouse_backend::run;
use clubhouse_backend::clock::SystemClock;
use clubhouse_backend::config::settings::{get_config, get_jwt_settings};
use clubhouse_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = get_config().map_err(|e| {
        eprintln!("Failed to read the config: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let subscriber = get_subscriber(
        "clubhouse-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let jwt_settings = get_jwt_settings(&config);

    // Only try to establish connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(
            config.database.connection_string().expose_secret()
        )
        .map_err(|e| {
            tracing::error!("Failed to create Postgres connection pool: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&connection_pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {} as {}", address, config.club.home_team);

    run(
        listener,
        connection_pool,
        jwt_settings,
        config.club.clone(),
        Arc::new(SystemClock),
    )?.await
}
