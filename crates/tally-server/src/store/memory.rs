use async_trait::async_trait;
use tokio::sync::RwLock;

use tally_core::error::Result;
use tally_core::model::{NewUser, User};

use super::UserStore;

/// Process-local table; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |u| u.id + 1);
        rows.push(user.with_id(id));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(self.rows.read().await.clone())
    }
}
