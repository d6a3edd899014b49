use chrono::Duration;
use secrecy::SecretString;
use serde::Deserialize;

/// Signing secret and lifetime of member tokens.
#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }

    /// Non-positive lifetimes fall back to one hour.
    pub fn token_lifetime(&self) -> Duration {
        if self.expiration_hours > 0 {
            Duration::hours(self.expiration_hours)
        } else {
            tracing::warn!("JWT expiration of {} hours is not usable, using 1", self.expiration_hours);
            Duration::hours(1)
        }
    }
}
