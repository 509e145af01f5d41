pub mod content_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use content_use_cases::ContentUseCases;
