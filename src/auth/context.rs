use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::user::UserRole;

/// The authenticated caller, built from the claims the auth middleware stored.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl TryFrom<&Claims> for AuthContext {
    type Error = AppError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let user_id = claims.user_id().ok_or(AppError::Unauthorized)?;
        Ok(Self {
            user_id,
            username: claims.username.clone(),
            role: claims.role,
        })
    }
}

impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = match req.extensions().get::<Claims>() {
            Some(claims) => AuthContext::try_from(claims),
            None => {
                tracing::warn!("No claims on request to {}", req.path());
                Err(AppError::Unauthorized)
            }
        };
        ready(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use crate::models::user::UserStatus;

    fn claims(sub: String) -> Claims {
        Claims {
            sub,
            username: "striker".to_string(),
            role: UserRole::Member,
            status: UserStatus::Active,
            exp: 0,
        }
    }

    #[actix_web::test]
    async fn extracts_context_from_stored_claims() {
        let user_id = Uuid::new_v4();
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims(user_id.to_string()));

        let context = AuthContext::extract(&req).await.unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.role, UserRole::Member);
    }

    #[actix_web::test]
    async fn missing_claims_are_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthContext::extract(&req).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn malformed_subject_is_unauthorized() {
        let result = AuthContext::try_from(&claims("not-a-uuid".to_string()));
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
