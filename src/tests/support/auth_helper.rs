use actix_web::http::header::AUTHORIZATION;

/// Token the default test state accepts as a valid admin session.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub fn bearer_header() -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", TEST_ADMIN_TOKEN))
}
