use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::context::AuthContext;
use crate::clock::Clock;
use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::voting::{CastVoteRequest, SubmitRatingsRequest};
use crate::services::VotingService;

#[tracing::instrument(name = "List MVP votes", skip(pool))]
pub async fn list_votes(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let votes = VotingService::new(pool.get_ref().clone()).list_votes(match_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Votes retrieved", votes)))
}

#[tracing::instrument(
    name = "Cast MVP vote",
    skip(request, pool, clock, auth),
    fields(user_id = %auth.user_id, voted_player_id = %request.voted_player_id)
)]
pub async fn cast_vote(
    match_id: Uuid,
    auth: AuthContext,
    request: web::Json<CastVoteRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let response = VotingService::new(pool.get_ref().clone())
        .cast_vote(match_id, auth.user_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Vote recorded", response)))
}

#[tracing::instrument(name = "List ratings", skip(pool))]
pub async fn list_ratings(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let ratings = VotingService::new(pool.get_ref().clone()).list_ratings(match_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Ratings retrieved", ratings)))
}

#[tracing::instrument(
    name = "Submit ratings",
    skip(request, pool, clock, auth),
    fields(user_id = %auth.user_id, count = request.ratings.len())
)]
pub async fn submit_ratings(
    match_id: Uuid,
    auth: AuthContext,
    request: web::Json<SubmitRatingsRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let stored = VotingService::new(pool.get_ref().clone())
        .submit_ratings(match_id, auth.user_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Saved {} ratings", stored.len()),
        stored,
    )))
}
