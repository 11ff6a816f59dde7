//! JSON file table.
//!
//! The whole table lives in memory and is rewritten on every insert through a
//! sibling temp file followed by a rename, so readers of the file never see
//! a partial write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use tally_core::error::{Result, TallyError};
use tally_core::model::{NewUser, User};

use super::UserStore;

pub struct JsonFileStore {
    path: PathBuf,
    rows: Mutex<Vec<User>>,
}

impl JsonFileStore {
    /// Load the table at `path`. A missing file is an empty table.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| persistence("create data dir", &path, e))?;
        }

        let rows: Vec<User> = match fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| persistence("decode table", &path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(persistence("read table", &path, e)),
        };

        tracing::debug!(path = %path.display(), rows = rows.len(), "json file store opened");
        Ok(Self {
            path,
            rows: Mutex::new(rows),
        })
    }

    async fn flush(&self, rows: &[User]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(rows)
            .map_err(|e| persistence("encode table", &self.path, e))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, bytes)
            .await
            .map_err(|e| persistence("write temp table", &tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| persistence("replace table", &self.path, e))
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn insert(&self, user: NewUser) -> Result<u64> {
        let mut rows = self.rows.lock().await;
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        rows.push(user.with_id(id));
        if let Err(e) = self.flush(&rows).await {
            rows.pop();
            return Err(e);
        }
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(self.rows.lock().await.clone())
    }
}

fn persistence(op: &str, path: &Path, e: impl std::fmt::Display) -> TallyError {
    TallyError::Persistence(format!("{op} {}: {e}", path.display()))
}
