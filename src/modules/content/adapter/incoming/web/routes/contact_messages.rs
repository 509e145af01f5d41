use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::entities::RecordId;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContactMessageError, ContactSubmission,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ContactMessageDto {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn error_response(e: ContactMessageError) -> HttpResponse {
    match e {
        ContactMessageError::NotFound => ApiResponse::not_found("NOT_FOUND", "Message not found"),
        ContactMessageError::RepositoryError(msg) => {
            error!(error = %msg, "Contact message repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Public contact form endpoint.
#[post("/api/contact-messages")]
pub async fn submit_contact_message_handler(
    req: web::Json<ContactMessageDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let submission = match ContactSubmission::new(&dto.name, &dto.email, &dto.message) {
        Ok(submission) => submission,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.content.contact_messages.submit(submission).await {
        Ok(message) => {
            info!(id = message.id, "Contact message received");
            ApiResponse::created(message)
        }
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.contact_messages.list().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/contact-messages/{id}/read")]
pub async fn mark_contact_message_read_handler(
    _admin: AdminUser,
    path: web::Path<RecordId>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .contact_messages
        .mark_read(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}

#[delete("/api/admin/contact-messages/{id}")]
pub async fn delete_contact_message_handler(
    _admin: AdminUser,
    path: web::Path<RecordId>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.contact_messages.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response(e),
    }
}
