// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Upper bound for JSON request bodies. Record drafts and contact messages
/// are small; file content goes through [`file_payload_config`] instead.
pub const MAX_JSON_BODY_BYTES: usize = 256 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

/// Raw body limit for file uploads. Set one byte above the largest slot
/// limit so the handler, not the extractor, reports the size violation.
pub fn file_payload_config(max_file_bytes: u64) -> PayloadConfig {
    let limit = usize::try_from(max_file_bytes.saturating_add(1)).unwrap_or(usize::MAX);
    PayloadConfig::new(limit)
}
