use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::error::AppError;
use crate::handlers::auth_handler::login_user;
use crate::models::auth::LoginRequest;

#[post("/login")]
pub async fn login(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>
) -> Result<HttpResponse, AppError> {
    login_user(login_form, pool, jwt_settings).await
}
