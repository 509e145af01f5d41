use actix_web::{get, put, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::ProfileError;
use crate::shared::api::ApiResponse;
use crate::shared::option::WireOption;
use crate::AppState;

#[get("/api/admin/profile")]
pub async fn get_profile_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.profile.get(&admin.principal).await {
        Ok(profile) => ApiResponse::success(WireOption::from(profile)),
        Err(e) => {
            error!(error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/profile")]
pub async fn save_profile_handler(
    admin: AdminUser,
    req: web::Json<UserProfile>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .profile
        .save(&admin.principal, req.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(ProfileError::EmptyName) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Profile name cannot be empty")
        }
        Err(e) => {
            error!(error = %e, "Profile save failed");
            ApiResponse::internal_error()
        }
    }
}
