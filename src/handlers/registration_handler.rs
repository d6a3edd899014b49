use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::db::helpers::map_unique_violation;
use crate::db::user_queries::UserQueries;
use crate::error::AppError;
use crate::league::validation::ClubValidator;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;

const MIN_PASSWORD_LENGTH: usize = 8;

#[tracing::instrument(
    name = "Adding a new user",
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form.email
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> Result<HttpResponse, AppError> {
    let validator = ClubValidator::new();
    let username = validator.sanitize_string_input(&user_form.username);
    let email = validator.sanitize_string_input(&user_form.email);

    if username.is_empty() || username.chars().count() > 50 {
        return Err(AppError::validation("Username must be between 1 and 50 characters"));
    }
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    if user_form.password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let password_hash = hash_password(user_form.password.expose_secret())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {:?}", e)))?;

    let (user_id, role) = UserQueries::new(pool.get_ref().clone())
        .insert(&username, &email, &password_hash)
        .await
        .map_err(|e| map_unique_violation(e, "Username or email already taken"))?;

    tracing::info!("Registered user {} as {}", user_id, role);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User registered",
        json!({ "user_id": user_id, "role": role }),
    )))
}
