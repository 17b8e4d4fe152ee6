use crate::helpers::ApiError;
use crate::middleware::claims;
use crate::models;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{Context, Poll},
};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// Gate for the chat scope: resolves the caller's identity from the bearer
/// credential before any handler runs, or short-circuits with 401 leaving
/// all state untouched.
pub struct Authentication {}

impl Authentication {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        async move {
            match resolve_identity(&req) {
                Ok(identity) => {
                    req.extensions_mut().insert(Arc::new(identity));
                    service.call(req).await
                }
                Err(err) => Err(err.into()),
            }
        }
        .boxed_local()
    }
}

#[tracing::instrument(name = "Authenticate bearer credential.", skip_all)]
fn resolve_identity(req: &ServiceRequest) -> Result<models::Identity, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

    let token = claims::extract_bearer_token(authorization)
        .map_err(|_| ApiError::Unauthorized("Unauthorized".to_string()))?;

    let claims = claims::parse_claims(token).map_err(|err| {
        tracing::debug!("credential rejected: {}", err);
        ApiError::Unauthorized("Unauthorized".to_string())
    })?;

    let user_id = claims
        .subject()
        .ok_or_else(|| ApiError::Unauthorized("Invalid user ID".to_string()))?;

    tracing::debug!(user_id = user_id, "bearer credential accepted");
    Ok(models::Identity {
        user_id: user_id.to_string(),
    })
}
