use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::context::AuthContext;
use crate::clock::Clock;
use crate::config::settings::ClubSettings;
use crate::error::AppError;
use crate::handlers::{
    attendance_handler, event_handler, match_handler, player_handler, stats_handler,
    tournament_handler, voting_handler,
};
use crate::models::attendance::AttendanceRequest;
use crate::models::common::TournamentFilter;
use crate::models::match_event::{AddCardRequest, AddGoalRequest};
use crate::models::matches::{MatchListQuery, RecordResultRequest};
use crate::models::voting::{CastVoteRequest, SubmitRatingsRequest};

/// List matches, optionally for one tournament
#[get("/matches")]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::list_matches(query, pool).await
}

/// Match with its events, attendance, votes, ratings and window flags
#[get("/matches/{match_id}")]
pub async fn get_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    match_handler::get_match_detail(path.into_inner(), pool, clock).await
}

#[post("/matches/{match_id}/result")]
pub async fn record_result(
    path: web::Path<Uuid>,
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    match_handler::record_result(path.into_inner(), request, pool, clock).await
}

#[get("/matches/{match_id}/goals")]
pub async fn list_goals(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    event_handler::list_goals(path.into_inner(), pool).await
}

#[post("/matches/{match_id}/goals")]
pub async fn add_goal(
    path: web::Path<Uuid>,
    request: web::Json<AddGoalRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    event_handler::add_goal(path.into_inner(), request, pool, clock).await
}

#[delete("/matches/{match_id}/goals/{goal_id}")]
pub async fn delete_goal(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let (match_id, goal_id) = path.into_inner();
    event_handler::delete_goal(match_id, goal_id, pool).await
}

#[get("/matches/{match_id}/cards")]
pub async fn list_cards(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    event_handler::list_cards(path.into_inner(), pool).await
}

#[post("/matches/{match_id}/cards")]
pub async fn add_card(
    path: web::Path<Uuid>,
    request: web::Json<AddCardRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    event_handler::add_card(path.into_inner(), request, pool, clock).await
}

#[delete("/matches/{match_id}/cards/{card_id}")]
pub async fn delete_card(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let (match_id, card_id) = path.into_inner();
    event_handler::delete_card(match_id, card_id, pool).await
}

#[get("/matches/{match_id}/attendance")]
pub async fn list_attendance(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    attendance_handler::list_attendance(path.into_inner(), pool).await
}

/// Confirm or decline the caller's attendance
#[post("/matches/{match_id}/attendance")]
pub async fn set_attendance(
    path: web::Path<Uuid>,
    auth: AuthContext,
    request: web::Json<AttendanceRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    attendance_handler::set_attendance(path.into_inner(), auth, request, pool, clock).await
}

#[get("/matches/{match_id}/votes")]
pub async fn list_votes(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    voting_handler::list_votes(path.into_inner(), pool).await
}

#[post("/matches/{match_id}/votes")]
pub async fn cast_vote(
    path: web::Path<Uuid>,
    auth: AuthContext,
    request: web::Json<CastVoteRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    voting_handler::cast_vote(path.into_inner(), auth, request, pool, clock).await
}

#[get("/matches/{match_id}/ratings")]
pub async fn list_ratings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    voting_handler::list_ratings(path.into_inner(), pool).await
}

#[post("/matches/{match_id}/ratings")]
pub async fn submit_ratings(
    path: web::Path<Uuid>,
    auth: AuthContext,
    request: web::Json<SubmitRatingsRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    voting_handler::submit_ratings(path.into_inner(), auth, request, pool, clock).await
}

#[get("/players")]
pub async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    player_handler::list_players(pool).await
}

#[get("/players/{player_id}")]
pub async fn get_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::get_player(path.into_inner(), pool).await
}

#[get("/tournaments")]
pub async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    tournament_handler::list_tournaments(pool).await
}

/// Tournament running today, or the most recently started one
#[get("/tournaments/active")]
pub async fn get_active_tournament(
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    tournament_handler::get_active_tournament(pool, clock, club).await
}

#[get("/tournaments/{tournament_id}")]
pub async fn get_tournament(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    tournament_handler::get_tournament(path.into_inner(), pool).await
}

#[get("/tournaments/{tournament_id}/standings")]
pub async fn get_tournament_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    tournament_handler::get_standings(path.into_inner(), pool).await
}

/// Club record, player lines and rankings
#[get("/stats")]
pub async fn get_stats(
    query: web::Query<TournamentFilter>,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    stats_handler::get_stats(query, pool, club).await
}

#[get("/stats/rivals")]
pub async fn get_rivals(
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    stats_handler::get_rivals(pool, club).await
}

#[get("/stats/rivals/{rival}")]
pub async fn get_rival_detail(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    stats_handler::get_rival_detail(path.into_inner(), pool, club).await
}
