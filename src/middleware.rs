//! Shared-secret guard for the admin API.

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde::Deserialize;

use crate::dto::api::ErrorResponse;
use crate::services::admin::authorize_admin;

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

fn supplied_token(query_string: &str) -> Option<String> {
    serde_html_form::from_str::<TokenQuery>(query_string)
        .ok()
        .and_then(|query| query.token)
}

/// Rejects requests whose `token` query parameter does not match the
/// configured admin token with `401 {"error": "Unauthorized"}`.
#[derive(Clone, Debug, Default)]
pub struct RequireAdminToken {
    token: Option<String>,
}

impl RequireAdminToken {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdminToken
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAdminTokenMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminTokenMiddleware {
            service,
            token: self.token.clone(),
        }))
    }
}

pub struct RequireAdminTokenMiddleware<S> {
    service: S,
    token: Option<String>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminTokenMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let supplied = supplied_token(req.query_string());

        if authorize_admin(self.token.as_deref(), supplied.as_deref()).is_err() {
            log::warn!("Rejected admin request to {}", req.path());
            let response = HttpResponse::Unauthorized()
                .json(ErrorResponse::new("Unauthorized"))
                .map_into_right_body();
            return Box::pin(async move { Ok(req.into_response(response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
