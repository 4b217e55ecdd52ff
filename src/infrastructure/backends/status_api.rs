#[cfg(test)]
#[path = "status_api_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::StatusProbe;
use crate::domain::models::StatusSnapshot;

pub struct StatusApi {
    url: String,
}

impl Default for StatusApi {
    fn default() -> StatusApi {
        let mut url = Config::get(ConfigKey::StatusURL);
        if url.is_empty() {
            url = Config::get(ConfigKey::ApiURL);
        }

        return StatusApi { url };
    }
}

#[async_trait]
impl StatusProbe for StatusApi {
    #[allow(clippy::implicit_return)]
    async fn check(&self) -> Result<StatusSnapshot> {
        let url = format!("{url}/status", url = self.url.trim_end_matches('/'));

        let res = match reqwest::Client::new().get(&url).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Status endpoint is not reachable");
                bail!("Failed to connect to backend: {err}");
            }
        };

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Status check failed");
            bail!("Failed to fetch status");
        }

        let snapshot = match res.json::<StatusSnapshot>().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(error = ?err, "Status response is not valid");
                bail!("Failed to fetch status: {err}");
            }
        };

        tracing::debug!(
            backend = %snapshot.backend,
            database = %snapshot.database,
            llm = %snapshot.llm,
            "Status checked"
        );
        return Ok(snapshot);
    }
}
