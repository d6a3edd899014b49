use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::ClubSettings;
use crate::error::AppError;
use crate::models::common::{ApiResponse, TournamentFilter};
use crate::services::StatsService;

#[tracing::instrument(name = "Get club statistics", skip(pool, club))]
pub async fn get_stats(
    query: web::Query<TournamentFilter>,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    let stats = StatsService::new(pool.get_ref().clone())
        .club_stats(&club.home_team, query.tournament_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Statistics retrieved", stats)))
}

#[tracing::instrument(name = "Get rival records", skip(pool, club))]
pub async fn get_rivals(
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    let rivals = StatsService::new(pool.get_ref().clone())
        .rivals(&club.home_team)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Rivals retrieved", rivals)))
}

#[tracing::instrument(name = "Get rival detail", skip(pool, club))]
pub async fn get_rival_detail(
    rival: String,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    let detail = StatsService::new(pool.get_ref().clone())
        .rival_detail(&club.home_team, &rival)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Rival retrieved", detail)))
}
