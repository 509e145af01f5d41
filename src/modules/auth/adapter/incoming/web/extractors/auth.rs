use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use tracing::error;

use crate::modules::auth::application::domain::entities::SessionToken;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A caller holding a live admin session.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub principal: String,
    pub email: String,
    pub token: SessionToken,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "UNAUTHORIZED",
        "Admin session required",
    ))
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let token = token.ok_or_else(unauthorized)?;

            match state.auth.validate_session.validate(&token).await {
                Ok(Some(identity)) => Ok(AdminUser {
                    principal: identity.principal,
                    email: identity.email,
                    token,
                }),
                Ok(None) => Err(unauthorized()),
                Err(e) => {
                    error!(error = %e, "Session lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Whatever bearer token the caller sent, unchecked. Never rejects.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<SessionToken>);

impl FromRequest for BearerToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(BearerToken(extract_token_from_header(req))))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<SessionToken> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SessionToken::new)
}
