use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::modules::client::application::ports::{ContentApi, RemoteError};
use crate::modules::client::application::query::QueryCache;

/// Seeds default content once per process when an admin is present.
///
/// A non-admin caller leaves the bootstrap pending, so a later call made
/// after an admin signs in still seeds. A failure is swallowed and settles
/// the bootstrap like a successful run.
/// The caller is not an admin yet; nothing is settled.
struct NotAdmin;

pub struct SeedBootstrap {
    api: Arc<dyn ContentApi>,
    cache: Arc<QueryCache>,
    done: OnceCell<bool>,
}

impl SeedBootstrap {
    pub fn new(api: Arc<dyn ContentApi>, cache: Arc<QueryCache>) -> Self {
        Self {
            api,
            cache,
            done: OnceCell::new(),
        }
    }

    /// Returns whether this process ran the seed. Once settled, later calls
    /// return the settled answer without touching the service.
    pub async fn ensure_initialized(&self) -> bool {
        let settled = self
            .done
            .get_or_try_init(|| async {
                match self.seed().await {
                    Ok(true) => Ok(true),
                    Ok(false) => Err(NotAdmin),
                    Err(e) => {
                        debug!(error = %e, "Content initialization skipped");
                        Ok(false)
                    }
                }
            })
            .await;

        matches!(settled, Ok(true))
    }

    pub fn is_initialized(&self) -> bool {
        self.done.initialized()
    }

    async fn seed(&self) -> Result<bool, RemoteError> {
        if !self.api.is_caller_admin().await? {
            return Ok(false);
        }

        self.api.initialize().await?;
        self.cache.invalidate_all();
        info!("Default content initialized");
        Ok(true)
    }
}
