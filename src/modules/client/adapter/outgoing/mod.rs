mod file_token_store;
mod http_content_api;
mod memory_token_store;

pub use file_token_store::FileTokenStore;
pub use http_content_api::HttpContentApi;
pub use memory_token_store::InMemoryTokenStore;
