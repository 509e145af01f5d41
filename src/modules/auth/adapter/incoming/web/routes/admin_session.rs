use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::auth::application::domain::entities::{CreateSessionResponse, SessionToken};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AdminLoginRequest, CreateSessionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct AdminLoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSessionRequest {
    pub session_token: SessionToken,
}

/// Exchange admin credentials for a session token.
///
/// Credential problems are part of the result (`invalidCredentials`,
/// `failure`), not HTTP errors; only malformed input gets a 400.
#[post("/api/admin/session")]
pub async fn create_session_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Admin login attempt");

    let request = match AdminLoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let response = match data.auth.create_session.execute(request).await {
        Ok(session) => CreateSessionResponse::Ok { session },
        Err(CreateSessionError::InvalidCredentials) => CreateSessionResponse::InvalidCredentials,
        Err(e) => {
            error!(error = %e, "Admin session could not be created");
            CreateSessionResponse::Failure {
                reason: "Sign-in is temporarily unavailable".to_string(),
            }
        }
    };

    ApiResponse::success(response)
}

#[post("/api/admin/session/validate")]
pub async fn validate_session_handler(
    req: web::Json<ValidateSessionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .validate_session
        .validate(&req.session_token)
        .await
    {
        Ok(identity) => ApiResponse::success(identity.is_some()),
        Err(e) => {
            error!(error = %e, "Session validation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Revoke the caller's session. Without a bearer token this is a no-op.
#[delete("/api/admin/session")]
pub async fn delete_session_handler(
    bearer: BearerToken,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(token) = bearer.0 else {
        return ApiResponse::no_content();
    };

    match data.auth.logout.logout(&token).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => {
            error!(error = %e, "Admin session revocation failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/is-admin")]
pub async fn is_admin_handler(bearer: BearerToken, data: web::Data<AppState>) -> impl Responder {
    let Some(token) = bearer.0 else {
        return ApiResponse::success(false);
    };

    match data.auth.validate_session.validate(&token).await {
        Ok(identity) => ApiResponse::success(identity.is_some()),
        Err(e) => {
            warn!(error = %e, "Admin check failed, answering false");
            ApiResponse::success(false)
        }
    }
}
