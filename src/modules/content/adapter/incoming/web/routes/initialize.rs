use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seed default content. Safe to call any number of times.
#[post("/api/admin/initialize")]
pub async fn initialize_content_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.initialize.execute().await {
        Ok(true) => {
            info!(principal = %admin.principal, "Default content seeded");
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::no_content(),
        Err(e) => {
            error!(error = %e, "Content initialization failed");
            ApiResponse::internal_error()
        }
    }
}
