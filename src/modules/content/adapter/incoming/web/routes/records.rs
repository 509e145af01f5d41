use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::entities::{
    Experience, Project, Record, RecordId, Skill, SocialLink,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageRecordsUseCase, RecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Picks the use case serving a record type out of the app state.
pub trait RecordRoutes: Record {
    fn use_case(state: &AppState) -> &Arc<dyn ManageRecordsUseCase<Self> + Send + Sync>;
}

impl RecordRoutes for Project {
    fn use_case(state: &AppState) -> &Arc<dyn ManageRecordsUseCase<Self> + Send + Sync> {
        &state.content.projects
    }
}

impl RecordRoutes for Skill {
    fn use_case(state: &AppState) -> &Arc<dyn ManageRecordsUseCase<Self> + Send + Sync> {
        &state.content.skills
    }
}

impl RecordRoutes for Experience {
    fn use_case(state: &AppState) -> &Arc<dyn ManageRecordsUseCase<Self> + Send + Sync> {
        &state.content.experiences
    }
}

impl RecordRoutes for SocialLink {
    fn use_case(state: &AppState) -> &Arc<dyn ManageRecordsUseCase<Self> + Send + Sync> {
        &state.content.social_links
    }
}

/// `GET /api/{collection}`, `POST /api/admin/{collection}` and
/// `PUT|DELETE /api/admin/{collection}/{id}`.
pub fn configure_records<R: RecordRoutes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", R::COLLECTION))
            .route(web::get().to(list_records_handler::<R>)),
    )
    .service(
        web::resource(format!("/api/admin/{}", R::COLLECTION))
            .route(web::post().to(create_record_handler::<R>)),
    )
    .service(
        web::resource(format!("/api/admin/{}/{{id}}", R::COLLECTION))
            .route(web::put().to(update_record_handler::<R>))
            .route(web::delete().to(delete_record_handler::<R>)),
    );
}

fn error_response<R: Record>(e: RecordError) -> HttpResponse {
    match e {
        RecordError::NotFound => ApiResponse::not_found("NOT_FOUND", "Record not found"),
        RecordError::MissingField(_) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        RecordError::RepositoryError(ref msg) => {
            error!(collection = R::COLLECTION, error = %msg, "Record repository failure");
            ApiResponse::internal_error()
        }
    }
}

pub async fn list_records_handler<R: RecordRoutes>(data: web::Data<AppState>) -> HttpResponse {
    match R::use_case(&data).list().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn create_record_handler<R: RecordRoutes>(
    _admin: AdminUser,
    req: web::Json<R::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data).create(req.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn update_record_handler<R: RecordRoutes>(
    _admin: AdminUser,
    path: web::Path<RecordId>,
    req: web::Json<R::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data)
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn delete_record_handler<R: RecordRoutes>(
    _admin: AdminUser,
    path: web::Path<RecordId>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data).delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response::<R>(e),
    }
}
