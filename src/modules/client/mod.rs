//! Site client: admin session handling, cached reads, mutations and uploads
//! against the content service.

pub mod adapter;
pub mod application;
