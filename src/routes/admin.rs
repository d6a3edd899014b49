use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::ClubSettings;
use crate::error::AppError;
use crate::handlers::{import_handler, match_handler, player_handler, tournament_handler};
use crate::middleware::admin::AdminMiddleware;
use crate::models::import::{ImportFixturesRequest, ImportPlayersRequest};
use crate::models::matches::{CreateMatchRequest, UpdateMatchRequest};
use crate::models::player::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::models::tournament::CreateTournamentRequest;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // Match management routes
            .service(
                web::resource("/matches")
                    .route(web::post().to(create_match))
            )
            .service(
                web::resource("/matches/{id}")
                    .route(web::patch().to(update_match))
                    .route(web::delete().to(delete_match))
            )

            // Player management routes
            .service(
                web::resource("/players")
                    .route(web::post().to(create_player))
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::put().to(update_player))
                    .route(web::delete().to(delete_player))
            )

            // Tournament management routes
            .service(
                web::resource("/tournaments")
                    .route(web::post().to(create_tournament))
            )
            .service(
                web::resource("/tournaments/{id}")
                    .route(web::delete().to(delete_tournament))
            )

            // Bulk import routes
            .service(
                web::resource("/import/players")
                    .route(web::post().to(import_players))
            )
            .service(
                web::resource("/import/fixtures")
                    .route(web::post().to(import_fixtures))
            )
    );
}

async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::create_match(request, pool).await
}

async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::update_match(path.into_inner(), request, pool).await
}

async fn delete_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::delete_match(path.into_inner(), pool).await
}

async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::create_player(request, pool).await
}

async fn update_player(
    path: web::Path<Uuid>,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::update_player(path.into_inner(), request, pool).await
}

async fn delete_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::delete_player(path.into_inner(), pool).await
}

async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    tournament_handler::create_tournament(request, pool).await
}

async fn delete_tournament(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    tournament_handler::delete_tournament(path.into_inner(), pool).await
}

async fn import_players(
    request: web::Json<ImportPlayersRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    import_handler::import_players(request, pool).await
}

async fn import_fixtures(
    request: web::Json<ImportFixturesRequest>,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    import_handler::import_fixtures(request, pool, club).await
}
