#[cfg(test)]
#[path = "export_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub const DOWNLOAD_EXTENSION: &str = "md";

pub fn download_file_name(now: DateTime<Utc>) -> String {
    return format!("tasks-{}.{DOWNLOAD_EXTENSION}", now.timestamp_millis());
}

pub struct ExportService {}

impl ExportService {
    pub fn download_dir() -> path::PathBuf {
        return path::PathBuf::from(Config::get(ConfigKey::DownloadDir));
    }

    /// Writes `buffer` verbatim to a new timestamped markdown file in `dir`
    /// and returns its path.
    pub async fn download(dir: &path::Path, buffer: &str) -> Result<path::PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir).await?;
        }

        let file_path = dir.join(download_file_name(Utc::now()));
        let mut file = fs::File::create(&file_path).await?;
        file.write_all(buffer.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = ?file_path, bytes = buffer.len(), "Downloaded result");
        return Ok(file_path);
    }
}
