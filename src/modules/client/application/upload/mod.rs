mod file_uploader;
mod progress;

pub use file_uploader::{guess_content_type, FileUploader, UploadError};
pub use progress::{percent_of, MonotonicProgress};
