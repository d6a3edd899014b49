use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::context::AuthContext;
use crate::clock::Clock;
use crate::error::AppError;
use crate::models::attendance::AttendanceRequest;
use crate::models::common::ApiResponse;
use crate::services::MatchService;

#[tracing::instrument(name = "List attendance", skip(pool))]
pub async fn list_attendance(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let attendance = MatchService::new(pool.get_ref().clone())
        .list_attendance(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Attendance retrieved", attendance)))
}

#[tracing::instrument(
    name = "Set attendance",
    skip(request, pool, clock, auth),
    fields(user_id = %auth.user_id, status = ?request.status)
)]
pub async fn set_attendance(
    match_id: Uuid,
    auth: AuthContext,
    request: web::Json<AttendanceRequest>,
    pool: web::Data<PgPool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let attendance = MatchService::new(pool.get_ref().clone())
        .set_attendance(match_id, auth.user_id, &request, clock.now())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Attendance saved", attendance)))
}
