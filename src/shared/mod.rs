pub mod api;
pub mod option;
