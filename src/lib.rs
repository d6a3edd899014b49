use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod auth;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
mod handlers;
pub mod import;
pub mod league;
mod middleware;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;

use crate::clock::Clock;
use crate::config::jwt::JwtSettings;
use crate::config::settings::ClubSettings;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    club_settings: ClubSettings,
    clock: Arc<dyn Clock>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let club_settings = web::Data::new(club_settings);
    let clock: web::Data<dyn Clock> = web::Data::from(clock);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(club_settings.clone())
            .app_data(clock.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
