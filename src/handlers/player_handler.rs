use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::player::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::services::PlayerService;

#[tracing::instrument(name = "List players", skip(pool))]
pub async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let players = PlayerService::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Found {} players", players.len()),
        players,
    )))
}

#[tracing::instrument(name = "Get player", skip(pool))]
pub async fn get_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new(pool.get_ref().clone()).get(player_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Player retrieved", player)))
}

#[tracing::instrument(
    name = "Create player",
    skip(request, pool),
    fields(first_name = %request.first_name, last_name = %request.last_name)
)]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new(pool.get_ref().clone()).create(&request).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Player created", player)))
}

#[tracing::instrument(name = "Update player", skip(request, pool))]
pub async fn update_player(
    player_id: Uuid,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new(pool.get_ref().clone())
        .update(player_id, &request)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Player updated", player)))
}

#[tracing::instrument(name = "Delete player", skip(pool))]
pub async fn delete_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    PlayerService::new(pool.get_ref().clone()).delete(player_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Player deleted")))
}
