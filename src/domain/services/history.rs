#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::path;
#[cfg(test)]
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GeneratedSpecification;

pub const HISTORY_LIMIT: usize = 5;

/// Prepends `entry` and drops whatever falls past the history limit.
pub fn record(
    history: &[GeneratedSpecification],
    entry: GeneratedSpecification,
) -> Vec<GeneratedSpecification> {
    let mut res = vec![entry];
    res.extend(history.iter().cloned());
    res.truncate(HISTORY_LIMIT);

    return res;
}

#[async_trait]
pub trait HistoryStore {
    /// Loads all persisted entries, most recent first. Unreadable storage
    /// yields an empty history.
    async fn load(&self) -> Vec<GeneratedSpecification>;

    /// Replaces the persisted entries.
    async fn save(&self, entries: &[GeneratedSpecification]) -> Result<()>;
}

pub type HistoryStoreBox = std::sync::Arc<dyn HistoryStore + Send + Sync>;

pub struct FileHistoryStore {
    pub path: path::PathBuf,
}

impl Default for FileHistoryStore {
    fn default() -> FileHistoryStore {
        return FileHistoryStore::new(path::PathBuf::from(Config::get(
            ConfigKey::HistoryFile,
        )));
    }
}

impl FileHistoryStore {
    pub fn new(path: path::PathBuf) -> FileHistoryStore {
        return FileHistoryStore { path };
    }

    pub async fn find(&self, id: &str) -> Option<GeneratedSpecification> {
        return self.load().await.into_iter().find(|e| return e.id == id);
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> Vec<GeneratedSpecification> {
        if !self.path.exists() {
            return vec![];
        }

        let payload = match fs::read_to_string(&self.path).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, path = ?self.path, "Failed to read history file");
                return vec![];
            }
        };

        match serde_json::from_str::<Vec<GeneratedSpecification>>(&payload) {
            Ok(mut entries) => {
                entries.truncate(HISTORY_LIMIT);
                return entries;
            }
            Err(err) => {
                tracing::warn!(error = ?err, path = ?self.path, "History file is malformed, starting empty");
                return vec![];
            }
        }
    }

    #[allow(clippy::implicit_return)]
    async fn save(&self, entries: &[GeneratedSpecification]) -> Result<()> {
        let payload = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(entries = entries.len(), path = ?self.path, "Saved history");
        return Ok(());
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryHistoryStore {
    pub entries: Mutex<Vec<GeneratedSpecification>>,
    pub saves: Mutex<usize>,
}

#[cfg(test)]
#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> Vec<GeneratedSpecification> {
        return self.entries.lock().unwrap().clone();
    }

    async fn save(&self, entries: &[GeneratedSpecification]) -> Result<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        *self.saves.lock().unwrap() += 1;
        return Ok(());
    }
}
