use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;

use crate::config::jwt::JwtSettings;
use crate::middleware::auth::Claims;
use crate::models::user::UserCredentials;

/// A signed token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign an HS256 token for `user` valid for the configured lifetime.
pub fn generate_token(
    user: &UserCredentials,
    jwt_settings: &JwtSettings,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + jwt_settings.token_lifetime();

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role,
        status: user.status,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )?;

    Ok(IssuedToken { token, expires_at })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation, Algorithm};
    use uuid::Uuid;
    use crate::models::user::{UserRole, UserStatus};

    #[test]
    fn token_carries_role_and_status() {
        let settings = JwtSettings::new("test-secret".to_string(), 1);
        let user = UserCredentials {
            id: Uuid::new_v4(),
            username: "keeper".to_string(),
            password_hash: String::new(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        };

        let issued = generate_token(&user, &settings).unwrap();
        let decoded = decode::<Claims>(
            &issued.token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.user_id(), Some(user.id));
        assert_eq!(decoded.claims.role, UserRole::Admin);
        assert_eq!(decoded.claims.username, "keeper");
        assert_eq!(decoded.claims.exp as i64, issued.expires_at.timestamp());
    }

    #[test]
    fn unusable_lifetime_falls_back_to_an_hour() {
        let settings = JwtSettings::new("test-secret".to_string(), 0);
        assert_eq!(settings.token_lifetime(), chrono::Duration::hours(1));
    }
}
