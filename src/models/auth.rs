use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use secrecy::SecretString;

use crate::models::user::UserRole;

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "crate::models::user::serialize_secret_string",
            deserialize_with = "crate::models::user::deserialize_secret_string")]
    pub password: SecretString,
}

/// Token plus what a client needs to decide which screens to show.
#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
}
