use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;

use crate::modules::auth::application::domain::entities::SessionToken;
use crate::modules::client::application::ports::{
    TokenStore, TokenStoreError, TOKEN_STORAGE_KEY,
};

/// Keeps the token in a small JSON document on disk, next to whatever other
/// keys the file already holds.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Map<String, Value>, TokenStoreError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(TokenStoreError::Corrupt("expected a JSON object".to_string())),
            Err(e) => Err(TokenStoreError::Corrupt(e.to_string())),
        }
    }

    /// Writes to a sibling file first so a crash never leaves half a file.
    async fn write_document(&self, map: Map<String, Value>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(&Value::Object(map))
            .map_err(|e| TokenStoreError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<SessionToken>, TokenStoreError> {
        let map = self.read_document().await?;

        Ok(map
            .get(TOKEN_STORAGE_KEY)
            .and_then(Value::as_str)
            .map(SessionToken::new)
            .filter(|token| !token.is_empty()))
    }

    async fn save(&self, token: &SessionToken) -> Result<(), TokenStoreError> {
        let mut map = self.read_document().await?;
        map.insert(
            TOKEN_STORAGE_KEY.to_string(),
            Value::String(token.as_str().to_string()),
        );
        self.write_document(map).await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        let mut map = match self.read_document().await {
            Ok(map) => map,
            // Nothing worth keeping in a corrupt file.
            Err(TokenStoreError::Corrupt(_)) => Map::new(),
            Err(e) => return Err(e),
        };

        if map.remove(TOKEN_STORAGE_KEY).is_none() && fs::metadata(&self.path).await.is_err() {
            return Ok(());
        }
        self.write_document(map).await
    }
}
