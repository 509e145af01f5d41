pub mod config;
pub mod contact_form;
pub mod ports;
pub mod query;
pub mod seed_bootstrap;
pub mod session;
pub mod upload;

pub use config::ClientConfig;
