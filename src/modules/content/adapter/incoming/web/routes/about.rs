use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateAboutRequest {
    pub content: String,
}

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.about.get().await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => {
            error!(error = %e, "About lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/about")]
pub async fn update_about_handler(
    _admin: AdminUser,
    req: web::Json<UpdateAboutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.about.update(req.into_inner().content).await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => {
            error!(error = %e, "About update failed");
            ApiResponse::internal_error()
        }
    }
}
