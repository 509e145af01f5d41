mod content_api;
mod token_store;
mod upload_progress;

pub use content_api::{ContentApi, FileUpload, RecordApi, RemoteError};
pub use token_store::{TokenStore, TokenStoreError, TOKEN_STORAGE_KEY};
pub use upload_progress::ProgressObserver;
