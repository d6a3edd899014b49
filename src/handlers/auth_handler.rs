use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::config::jwt::JwtSettings;
use crate::db::user_queries::UserQueries;
use crate::error::AppError;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::user::UserStatus;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>
) -> Result<HttpResponse, AppError> {
    let user = UserQueries::new(pool.get_ref().clone())
        .find_credentials(&login_form.username)
        .await?
        .ok_or_else(|| {
            tracing::info!("User not found or invalid credentials");
            AppError::Unauthorized
        })?;

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return Err(AppError::Unauthorized);
    }

    if user.status != UserStatus::Active {
        tracing::info!("Inactive account tried to log in");
        return Err(AppError::Unauthorized);
    }

    let issued = generate_token(&user, &jwt_settings)
        .map_err(|e| AppError::internal(format!("Error generating JWT token: {:?}", e)))?;

    tracing::info!("User {} logged in as {}", user.id, user.role);
    Ok(HttpResponse::Ok().json(LoginResponse {
        token: issued.token,
        role: user.role,
        expires_at: issued.expires_at,
    }))
}
