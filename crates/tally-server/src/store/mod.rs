//! Persistence collaborator for user records.
//!
//! Handlers only see [`UserStore`]; schema and file layout belong to the
//! implementations.

mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use tally_core::error::{Result, TallyError};
use tally_core::model::{NewUser, User};

use crate::config::{StorageKind, StorageSection};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a record and return its newly assigned id.
    async fn insert(&self, user: NewUser) -> Result<u64>;
    /// Every stored record, in id order.
    async fn list_all(&self) -> Result<Vec<User>>;
}

/// Open the store selected by config.
pub async fn open(cfg: &StorageSection) -> Result<Arc<dyn UserStore>> {
    match (cfg.kind, cfg.path.as_deref()) {
        (StorageKind::File, Some(path)) if !path.is_empty() => {
            Ok(Arc::new(JsonFileStore::open(path).await?))
        }
        (StorageKind::File, _) => Err(TallyError::Config(
            "storage.path is required when storage.kind is file".into(),
        )),
        (StorageKind::Memory, _) => Ok(Arc::new(MemoryStore::new())),
    }
}
