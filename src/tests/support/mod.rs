pub mod app_state_builder;
pub mod auth_helper;
pub mod client_stubs;
pub mod content_fixtures;
pub mod stubs;
