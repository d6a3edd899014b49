use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::match_event::{AddCardRequest, AddGoalRequest};
use crate::services::MatchService;

#[tracing::instrument(name = "List goals", skip(pool))]
pub async fn list_goals(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let goals = MatchService::new(pool.get_ref().clone()).list_goals(match_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Goals retrieved", goals)))
}

#[tracing::instrument(
    name = "Add goal",
    skip(request, pool, clock),
    fields(player_id = %request.player_id)
)]
pub async fn add_goal(
    match_id: Uuid,
    request: web::Json<AddGoalRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let goal = MatchService::new(pool.get_ref().clone())
        .add_goal(match_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Goal recorded", goal)))
}

#[tracing::instrument(name = "Delete goal", skip(pool))]
pub async fn delete_goal(
    match_id: Uuid,
    goal_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    MatchService::new(pool.get_ref().clone()).delete_goal(match_id, goal_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Goal deleted")))
}

#[tracing::instrument(name = "List cards", skip(pool))]
pub async fn list_cards(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let cards = MatchService::new(pool.get_ref().clone()).list_cards(match_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Cards retrieved", cards)))
}

#[tracing::instrument(
    name = "Add card",
    skip(request, pool, clock),
    fields(player_id = %request.player_id, card_type = ?request.card_type)
)]
pub async fn add_card(
    match_id: Uuid,
    request: web::Json<AddCardRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let card = MatchService::new(pool.get_ref().clone())
        .add_card(match_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Card recorded", card)))
}

#[tracing::instrument(name = "Delete card", skip(pool))]
pub async fn delete_card(
    match_id: Uuid,
    card_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    MatchService::new(pool.get_ref().clone()).delete_card(match_id, card_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Card deleted")))
}
