use std::sync::Arc;

use actix_web::web::Bytes;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::{header::CONTENT_TYPE, Body, Client as HttpClient, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::modules::auth::application::domain::entities::{
    CreateSessionResponse, SessionToken, UserProfile,
};
use crate::modules::auth::application::ports::incoming::use_cases::AdminLoginRequest;
use crate::modules::client::application::config::ClientConfig;
use crate::modules::client::application::ports::{
    ContentApi, FileUpload, ProgressObserver, RecordApi, RemoteError,
};
use crate::modules::client::application::session::TokenBroadcast;
use crate::modules::client::application::upload::percent_of;
use crate::modules::content::application::domain::entities::{
    About, AdminFile, AdminFileType, ContactMessage, Record, RecordId,
};
use crate::shared::api::ApiEnvelope;
use crate::shared::option::OptionalPayload;

/// [`ContentApi`] over the service's JSON HTTP interface.
///
/// The bearer token is read from the shared [`TokenBroadcast`] at the moment
/// each request is built, so login and logout take effect immediately.
#[derive(Clone)]
pub struct HttpContentApi {
    config: ClientConfig,
    client: HttpClient,
    tokens: TokenBroadcast,
}

fn transport(e: reqwest::Error) -> RemoteError {
    RemoteError::Transport(e.to_string())
}

/// Maps a non-success response onto the error taxonomy, keeping the
/// service's own message when the body is an error envelope.
fn error_from_response(status: StatusCode, body: &str) -> RemoteError {
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|error| error.message)
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::Unauthorized(message),
        StatusCode::NOT_FOUND => RemoteError::NotFound(message),
        StatusCode::BAD_REQUEST
        | StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNSUPPORTED_MEDIA_TYPE
        | StatusCode::UNPROCESSABLE_ENTITY => RemoteError::Validation(message),
        _ => RemoteError::Server(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

impl HttpContentApi {
    pub fn new(config: ClientConfig, tokens: TokenBroadcast) -> Result<Self, RemoteError> {
        let client = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(transport)?;

        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.config.url(path));
        match self.tokens.current() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RemoteError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Content service refused request");
            return Err(error_from_response(status, &body));
        }

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))?;
        envelope
            .data
            .ok_or_else(|| RemoteError::Decode("response carries no data".to_string()))
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), RemoteError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.map_err(transport)?;
        Err(error_from_response(status, &body))
    }

    fn upload_body(
        &self,
        content: Bytes,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Body {
        let total = content.len() as u64;
        let chunk = self.config.upload_chunk_bytes.max(1);
        let starts: Vec<usize> = (0..content.len()).step_by(chunk).collect();

        if let Some(observer) = &progress {
            observer.on_progress(0);
        }

        let chunks = stream::iter(starts).map(move |start| {
            let end = (start + chunk).min(content.len());
            if let Some(observer) = &progress {
                // 100 is reported once the service has accepted the file.
                observer.on_progress(percent_of(end as u64, total).min(99));
            }
            Ok::<Bytes, std::io::Error>(content.slice(start..end))
        });

        Body::wrap_stream(chunks)
    }
}

#[async_trait]
impl<R: Record> RecordApi<R> for HttpContentApi {
    async fn list(&self) -> Result<Vec<R>, RemoteError> {
        self.send(self.request(Method::GET, &format!("/api/{}", R::COLLECTION)))
            .await
    }

    async fn create(&self, draft: R::Draft) -> Result<R, RemoteError> {
        self.send(
            self.request(Method::POST, &format!("/api/admin/{}", R::COLLECTION))
                .json(&draft),
        )
        .await
    }

    async fn update(&self, id: RecordId, draft: R::Draft) -> Result<R, RemoteError> {
        self.send(
            self.request(Method::PUT, &format!("/api/admin/{}/{}", R::COLLECTION, id))
                .json(&draft),
        )
        .await
    }

    async fn delete(&self, id: RecordId) -> Result<(), RemoteError> {
        self.send_empty(
            self.request(Method::DELETE, &format!("/api/admin/{}/{}", R::COLLECTION, id)),
        )
        .await
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn get_about(&self) -> Result<About, RemoteError> {
        self.send(self.request(Method::GET, "/api/about")).await
    }

    async fn update_about(&self, content: &str) -> Result<About, RemoteError> {
        self.send(
            self.request(Method::PUT, "/api/admin/about")
                .json(&json!({ "content": content })),
        )
        .await
    }

    async fn submit_contact_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, RemoteError> {
        self.send(
            self.request(Method::POST, "/api/contact-messages")
                .json(&json!({ "name": name, "email": email, "message": message })),
        )
        .await
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, RemoteError> {
        self.send(self.request(Method::GET, "/api/admin/contact-messages"))
            .await
    }

    async fn mark_message_read(&self, id: RecordId) -> Result<(), RemoteError> {
        self.send_empty(self.request(
            Method::POST,
            &format!("/api/admin/contact-messages/{}/read", id),
        ))
        .await
    }

    async fn delete_message(&self, id: RecordId) -> Result<(), RemoteError> {
        self.send_empty(
            self.request(Method::DELETE, &format!("/api/admin/contact-messages/{}", id)),
        )
        .await
    }

    async fn get_admin_file(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<AdminFile>, RemoteError> {
        let payload: OptionalPayload<AdminFile> = self
            .send(self.request(Method::GET, &format!("/api/{}", file_type.as_str())))
            .await?;
        Ok(payload.normalize())
    }

    async fn upload_admin_file(
        &self,
        upload: FileUpload,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<AdminFile, RemoteError> {
        let url = Url::parse_with_params(
            &self
                .config
                .url(&format!("/api/admin/files/{}", upload.file_type.as_str())),
            &[("name", upload.file_name.as_str())],
        )
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let mut request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, upload.content_type.as_str())
            .body(self.upload_body(upload.content, progress.clone()));
        if let Some(token) = self.tokens.current() {
            request = request.bearer_auth(token.as_str());
        }

        let file: AdminFile = self.send(request).await?;
        if let Some(observer) = &progress {
            observer.on_progress(100);
        }
        Ok(file)
    }

    async fn create_session(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<CreateSessionResponse, RemoteError> {
        self.send(
            self.request(Method::POST, "/api/admin/session")
                .json(&json!({ "email": request.email(), "password": request.password() })),
        )
        .await
    }

    async fn validate_session(&self, token: &SessionToken) -> Result<bool, RemoteError> {
        self.send(
            self.request(Method::POST, "/api/admin/session/validate")
                .json(&json!({ "sessionToken": token.as_str() })),
        )
        .await
    }

    async fn logout(&self) -> Result<(), RemoteError> {
        self.send_empty(self.request(Method::DELETE, "/api/admin/session"))
            .await
    }

    async fn is_caller_admin(&self) -> Result<bool, RemoteError> {
        self.send(self.request(Method::GET, "/api/admin/is-admin"))
            .await
    }

    async fn initialize(&self) -> Result<(), RemoteError> {
        self.send_empty(self.request(Method::POST, "/api/admin/initialize"))
            .await
    }

    async fn get_caller_profile(&self) -> Result<Option<UserProfile>, RemoteError> {
        let payload: OptionalPayload<UserProfile> = self
            .send(self.request(Method::GET, "/api/admin/profile"))
            .await?;
        Ok(payload.normalize())
    }

    async fn save_caller_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<UserProfile, RemoteError> {
        self.send(self.request(Method::PUT, "/api/admin/profile").json(profile))
            .await
    }
}
