use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    AdminSession, CreateSessionResponse, SessionToken, UserProfile,
};
use crate::modules::auth::application::ports::incoming::use_cases::AdminLoginRequest;
use crate::modules::client::application::ports::{
    ContentApi, FileUpload, ProgressObserver, RecordApi, RemoteError,
};
use crate::modules::client::application::query::RecordKey;
use crate::modules::content::application::domain::entities::{
    About, AdminFile, AdminFileType, BlobRef, ContactMessage, RecordId,
};

#[derive(Default)]
struct StubState {
    calls: HashMap<String, usize>,
    failures: HashMap<String, VecDeque<RemoteError>>,
    holds: HashMap<String, VecDeque<oneshot::Receiver<()>>>,
    records: HashMap<&'static str, Vec<Value>>,
    next_id: RecordId,
    about: About,
    messages: Vec<ContactMessage>,
    files: HashMap<AdminFileType, AdminFile>,
    profile: Option<UserProfile>,
    caller_admin: bool,
    revoked: bool,
}

/// Scriptable in-memory [`ContentApi`].
///
/// Operations are named after the trait methods; record operations use the
/// collection, e.g. `list_projects`, `create_skill`, `delete_social_link`.
/// Only `owner@example.com` / `hunter2` signs in.
#[derive(Clone, Default)]
pub struct StubContentApi {
    state: Arc<Mutex<StubState>>,
}

impl StubContentApi {
    pub const VALID_TOKEN: &'static str = "stub-session-token";

    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self, op: &str) -> usize {
        self.state().calls.get(op).copied().unwrap_or(0)
    }

    /// The next call of `op` fails with `error`.
    pub fn fail_next(&self, op: &str, error: RemoteError) {
        self.state()
            .failures
            .entry(op.to_string())
            .or_default()
            .push_back(error);
    }

    /// The next call of `op` waits until `gate` fires (or its sender drops).
    pub fn hold_next(&self, op: &str, gate: oneshot::Receiver<()>) {
        self.state()
            .holds
            .entry(op.to_string())
            .or_default()
            .push_back(gate);
    }

    pub fn set_about(&self, content: &str) {
        self.state().about = About {
            content: content.to_string(),
        };
    }

    pub fn set_caller_admin(&self, admin: bool) {
        self.state().caller_admin = admin;
    }

    async fn begin(&self, op: &str) -> Result<(), RemoteError> {
        let (failure, gate) = {
            let mut state = self.state();
            *state.calls.entry(op.to_string()).or_default() += 1;
            let failure = state.failures.get_mut(op).and_then(VecDeque::pop_front);
            let gate = state.holds.get_mut(op).and_then(VecDeque::pop_front);
            (failure, gate)
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }
        failure.map_or(Ok(()), Err)
    }

    fn allocate_id(&self) -> RecordId {
        let mut state = self.state();
        state.next_id += 1;
        state.next_id
    }
}

fn op_name<R: RecordKey>(verb: &str, plural: bool) -> String {
    let noun = if plural {
        R::COLLECTION.replace('-', "_")
    } else {
        R::LABEL.replace(' ', "_")
    };
    format!("{}_{}", verb, noun)
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, RemoteError> {
    serde_json::from_value(value).map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait]
impl<R: RecordKey> RecordApi<R> for StubContentApi {
    async fn list(&self) -> Result<Vec<R>, RemoteError> {
        let snapshot = self
            .state()
            .records
            .get(R::COLLECTION)
            .cloned()
            .unwrap_or_default();
        self.begin(&op_name::<R>("list", true)).await?;
        snapshot.into_iter().map(decode).collect()
    }

    async fn create(&self, draft: R::Draft) -> Result<R, RemoteError> {
        self.begin(&op_name::<R>("create", false)).await?;
        let record = R::from_draft(self.allocate_id(), draft);
        let value = serde_json::to_value(&record).map_err(|e| RemoteError::Decode(e.to_string()))?;
        self.state()
            .records
            .entry(R::COLLECTION)
            .or_default()
            .push(value);
        Ok(record)
    }

    async fn update(&self, id: RecordId, draft: R::Draft) -> Result<R, RemoteError> {
        self.begin(&op_name::<R>("update", false)).await?;
        let record = R::from_draft(id, draft);
        let value = serde_json::to_value(&record).map_err(|e| RemoteError::Decode(e.to_string()))?;

        let mut state = self.state();
        let rows = state.records.entry(R::COLLECTION).or_default();
        let slot = rows
            .iter_mut()
            .find(|row| row["id"] == Value::from(id))
            .ok_or_else(|| RemoteError::NotFound(format!("{} {}", R::LABEL, id)))?;
        *slot = value;
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> Result<(), RemoteError> {
        self.begin(&op_name::<R>("delete", false)).await?;
        let mut state = self.state();
        let rows = state.records.entry(R::COLLECTION).or_default();
        let before = rows.len();
        rows.retain(|row| row["id"] != Value::from(id));
        if rows.len() == before {
            return Err(RemoteError::NotFound(format!("{} {}", R::LABEL, id)));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentApi for StubContentApi {
    async fn get_about(&self) -> Result<About, RemoteError> {
        let snapshot = self.state().about.clone();
        self.begin("get_about").await?;
        Ok(snapshot)
    }

    async fn update_about(&self, content: &str) -> Result<About, RemoteError> {
        self.begin("update_about").await?;
        self.set_about(content);
        Ok(self.state().about.clone())
    }

    async fn submit_contact_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, RemoteError> {
        self.begin("submit_contact_message").await?;
        let stored = ContactMessage {
            id: self.allocate_id(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
            read: false,
        };
        self.state().messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, RemoteError> {
        self.begin("list_contact_messages").await?;
        let mut messages = self.state().messages.clone();
        messages.reverse();
        Ok(messages)
    }

    async fn mark_message_read(&self, id: RecordId) -> Result<(), RemoteError> {
        self.begin("mark_message_read").await?;
        let mut state = self.state();
        let message = state
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RemoteError::NotFound(format!("message {}", id)))?;
        message.read = true;
        Ok(())
    }

    async fn delete_message(&self, id: RecordId) -> Result<(), RemoteError> {
        self.begin("delete_message").await?;
        self.state().messages.retain(|m| m.id != id);
        Ok(())
    }

    async fn get_admin_file(
        &self,
        file_type: AdminFileType,
    ) -> Result<Option<AdminFile>, RemoteError> {
        let snapshot = self.state().files.get(&file_type).cloned();
        self.begin("get_admin_file").await?;
        Ok(snapshot)
    }

    async fn upload_admin_file(
        &self,
        upload: FileUpload,
        progress: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<AdminFile, RemoteError> {
        self.begin("upload_admin_file").await?;
        if let Some(observer) = &progress {
            for percent in [0, 50, 25, 100] {
                observer.on_progress(percent);
            }
        }

        let id = Uuid::new_v4();
        let file = AdminFile {
            blob: BlobRef {
                id,
                url: format!("/api/files/{}/content?v={}", upload.file_type, id),
            },
            name: upload.file_name,
            file_type: upload.file_type,
            content_type: upload.content_type,
            size_bytes: upload.content.len() as u64,
            uploaded_at: Utc::now(),
        };
        self.state().files.insert(upload.file_type, file.clone());
        Ok(file)
    }

    async fn create_session(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<CreateSessionResponse, RemoteError> {
        self.begin("create_session").await?;
        if request.email() != "owner@example.com" || request.password() != "hunter2" {
            return Ok(CreateSessionResponse::InvalidCredentials);
        }

        self.state().revoked = false;
        Ok(CreateSessionResponse::Ok {
            session: AdminSession {
                principal: "admin".to_string(),
                created_at: Utc::now(),
                email: request.email().to_string(),
                session_token: SessionToken::new(Self::VALID_TOKEN),
            },
        })
    }

    async fn validate_session(&self, token: &SessionToken) -> Result<bool, RemoteError> {
        self.begin("validate_session").await?;
        Ok(token.as_str() == Self::VALID_TOKEN && !self.state().revoked)
    }

    async fn logout(&self) -> Result<(), RemoteError> {
        self.begin("logout").await?;
        self.state().revoked = true;
        Ok(())
    }

    async fn is_caller_admin(&self) -> Result<bool, RemoteError> {
        self.begin("is_caller_admin").await?;
        Ok(self.state().caller_admin)
    }

    async fn initialize(&self) -> Result<(), RemoteError> {
        self.begin("initialize").await
    }

    async fn get_caller_profile(&self) -> Result<Option<UserProfile>, RemoteError> {
        self.begin("get_caller_profile").await?;
        Ok(self.state().profile.clone())
    }

    async fn save_caller_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<UserProfile, RemoteError> {
        self.begin("save_caller_profile").await?;
        self.state().profile = Some(profile.clone());
        Ok(profile.clone())
    }
}
