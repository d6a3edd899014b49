use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::ClubSettings;
use crate::error::AppError;
use crate::models::common::ApiResponse;
use crate::models::import::{ImportFixturesRequest, ImportPlayersRequest, ImportResponse};
use crate::services::ImportService;

#[tracing::instrument(name = "Import players from CSV", skip(request, pool))]
pub async fn import_players(
    request: web::Json<ImportPlayersRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let created = ImportService::new(pool.get_ref().clone())
        .import_players(request.csv.as_deref())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        format!("Imported {} players", created),
        ImportResponse { created },
    )))
}

#[tracing::instrument(
    name = "Import fixtures from CSV",
    skip(request, pool, club),
    fields(tournament_id = ?request.tournament_id)
)]
pub async fn import_fixtures(
    request: web::Json<ImportFixturesRequest>,
    pool: web::Data<PgPool>,
    club: web::Data<ClubSettings>,
) -> Result<HttpResponse, AppError> {
    let created = ImportService::new(pool.get_ref().clone())
        .import_fixtures(request.csv.as_deref(), request.tournament_id, club.local_offset())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        format!("Imported {} fixtures", created),
        ImportResponse { created },
    )))
}
