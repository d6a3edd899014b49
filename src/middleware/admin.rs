use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::error::AppError;
use crate::middleware::auth::{validate_jwt_from_request, Claims};
use crate::models::user::{UserRole, UserStatus};

pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

/// Only active admins get through.
fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.status != UserStatus::Active {
        tracing::warn!("Inactive user attempted admin access: {}", claims.username);
        return Err(AppError::Unauthorized);
    }

    if claims.role != UserRole::Admin {
        tracing::warn!("Non-admin user attempted admin access: {} (role: {})", claims.username, claims.role);
        return Err(AppError::Forbidden);
    }

    Ok(())
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let claims = match validate_jwt_from_request(&req).and_then(|claims| {
            require_admin(&claims)?;
            Ok(claims)
        }) {
            Ok(claims) => claims,
            Err(e) => return Box::pin(async move { Err(e.into()) }),
        };

        req.extensions_mut().insert(claims);

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: UserRole, status: UserStatus) -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "coach".to_string(),
            role,
            status,
            exp: 0,
        }
    }

    #[test]
    fn active_admin_passes() {
        assert!(require_admin(&claims(UserRole::Admin, UserStatus::Active)).is_ok());
    }

    #[test]
    fn member_is_forbidden() {
        let result = require_admin(&claims(UserRole::Member, UserStatus::Active));
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[test]
    fn inactive_admin_is_unauthorized() {
        let result = require_admin(&claims(UserRole::Admin, UserStatus::Inactive));
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
