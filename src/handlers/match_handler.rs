use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::matches::{CreateMatchRequest, MatchListQuery, RecordResultRequest, UpdateMatchRequest};
use crate::services::MatchService;

#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let matches = MatchService::new(pool.get_ref().clone())
        .list(query.tournament_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Found {} matches", matches.len()),
        matches,
    )))
}

#[tracing::instrument(name = "Get match detail", skip(pool, clock))]
pub async fn get_match_detail(
    match_id: Uuid,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let detail = MatchService::new(pool.get_ref().clone())
        .detail(match_id, clock.now())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match retrieved", detail)))
}

#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(team1 = %request.team1, team2 = %request.team2)
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let created = MatchService::new(pool.get_ref().clone())
        .create(&request)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Match created", created)))
}

#[tracing::instrument(name = "Update match", skip(request, pool))]
pub async fn update_match(
    match_id: Uuid,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let updated = MatchService::new(pool.get_ref().clone())
        .update(match_id, &request)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match updated", updated)))
}

#[tracing::instrument(name = "Delete match", skip(pool))]
pub async fn delete_match(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    MatchService::new(pool.get_ref().clone()).delete(match_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Match deleted")))
}

#[tracing::instrument(
    name = "Record match result",
    skip(request, pool, clock),
    fields(goals_team1 = request.goals_team1, goals_team2 = request.goals_team2)
)]
pub async fn record_result(
    match_id: Uuid,
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let updated = MatchService::new(pool.get_ref().clone())
        .record_result(match_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Result recorded", updated)))
}
