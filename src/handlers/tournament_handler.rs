use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::settings::ClubSettings;
use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::tournament::CreateTournamentRequest;
use crate::services::TournamentService;

#[tracing::instrument(name = "List tournaments", skip(pool))]
pub async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let tournaments = TournamentService::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Tournaments retrieved", tournaments)))
}

#[tracing::instrument(name = "Get active tournament", skip(pool, clock, club))]
pub async fn get_active_tournament(
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    let today = clock.now().with_timezone(&club.local_offset()).date_naive();
    let tournament = TournamentService::new(pool.get_ref().clone()).active(today).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Active tournament retrieved", tournament)))
}

#[tracing::instrument(name = "Get tournament", skip(pool))]
pub async fn get_tournament(tournament_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let tournament = TournamentService::new(pool.get_ref().clone()).get(tournament_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Tournament retrieved", tournament)))
}

#[tracing::instrument(name = "Get tournament standings", skip(pool))]
pub async fn get_standings(tournament_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let standings = TournamentService::new(pool.get_ref().clone())
        .standings(tournament_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Standings retrieved", standings)))
}

#[tracing::instrument(name = "Create tournament", skip(request, pool), fields(name = %request.name))]
pub async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let tournament = TournamentService::new(pool.get_ref().clone()).create(&request).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Tournament created", tournament)))
}

#[tracing::instrument(name = "Delete tournament", skip(pool))]
pub async fn delete_tournament(tournament_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    TournamentService::new(pool.get_ref().clone()).delete(tournament_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Tournament deleted")))
}
