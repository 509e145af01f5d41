use actix_web::{
    get,
    http::header::{self, CacheControl, CacheDirective},
    put, web, HttpRequest, HttpResponse, Responder,
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::entities::AdminFileType;
use crate::modules::content::application::domain::policies::UploadValidationError;
use crate::modules::content::application::ports::incoming::use_cases::UploadAdminFileCommand;
use crate::shared::api::ApiResponse;
use crate::shared::option::WireOption;
use crate::AppState;

#[derive(Deserialize)]
pub struct UploadQuery {
    pub name: String,
}

fn unknown_slot() -> HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "Unknown file slot")
}

async fn file_metadata(data: &AppState, file_type: AdminFileType) -> HttpResponse {
    match data.content.admin_files.get(file_type).await {
        Ok(file) => ApiResponse::success(WireOption::from(file)),
        Err(e) => {
            error!(file_type = %file_type, error = %e, "Admin file lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    file_metadata(&data, AdminFileType::Resume).await
}

#[get("/api/avatar")]
pub async fn get_avatar_handler(data: web::Data<AppState>) -> impl Responder {
    file_metadata(&data, AdminFileType::Avatar).await
}

/// Raw bytes of a slot's current file.
#[get("/api/files/{file_type}/content")]
pub async fn get_file_content_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(file_type) = AdminFileType::parse(&path) else {
        return unknown_slot();
    };

    match data.content.admin_files.content(file_type).await {
        Ok(Some((meta, content))) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, meta.content_type))
            // The URL carries the blob id, so a given URL never changes content.
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(86400),
            ]))
            .body(content),
        Ok(None) => ApiResponse::not_found("NOT_FOUND", "No file uploaded"),
        Err(e) => {
            error!(file_type = %file_type, error = %e, "Admin file read failed");
            ApiResponse::internal_error()
        }
    }
}

/// Replace a slot's file. The body is the raw file, typed by `Content-Type`.
#[put("/api/admin/files/{file_type}")]
pub async fn upload_admin_file_handler(
    _admin: AdminUser,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(file_type) = AdminFileType::parse(&path) else {
        return unknown_slot();
    };

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let command = match UploadAdminFileCommand::new(file_type, &query.name, content_type, body) {
        Ok(command) => command,
        Err(e) => {
            warn!(file_type = %file_type, error = %e, "Upload rejected");
            return match e {
                UploadValidationError::FileTooLarge { .. } => {
                    ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
                }
                UploadValidationError::UnsupportedMimeType { .. } => {
                    ApiResponse::unsupported_media_type("UNSUPPORTED_MEDIA_TYPE", &e.to_string())
                }
                _ => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
            };
        }
    };

    match data.content.admin_files.upload(command).await {
        Ok(file) => ApiResponse::success(file),
        Err(e) => {
            error!(file_type = %file_type, error = %e, "Admin file upload failed");
            ApiResponse::internal_error()
        }
    }
}
