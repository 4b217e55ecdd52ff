#[cfg(test)]
#[path = "tasks_api_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GenerationRequest;
use crate::domain::models::GenerationResponse;
use crate::domain::models::Generator;

pub const GENERIC_FAILURE: &str = "Failed to generate tasks";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

/// Extracts the server supplied `detail` message from a failed response body.
fn failure_message(body: &str) -> String {
    if let Ok(res) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(serde_json::Value::String(detail)) = res.detail {
            if !detail.is_empty() {
                return detail;
            }
        }
    }

    return GENERIC_FAILURE.to_string();
}

pub struct TasksApi {
    url: String,
}

impl Default for TasksApi {
    fn default() -> TasksApi {
        return TasksApi {
            url: Config::get(ConfigKey::ApiURL),
        };
    }
}

#[async_trait]
impl Generator for TasksApi {
    #[allow(clippy::implicit_return)]
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let url = format!("{url}/generate-tasks", url = self.url.trim_end_matches('/'));
        tracing::debug!(url = %url, template = %request.template, "Requesting task generation");

        let res = match reqwest::Client::new().post(&url).json(&request).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Generation service is not reachable");
                bail!("Unable to reach the generation service at {url}: {err}");
            }
        };

        let status = res.status();
        let body = res.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Generation request failed");
            bail!(failure_message(&body));
        }

        let payload = match serde_json::from_str::<GenerationResponse>(&body) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = ?err, "Generation response is not valid");
                bail!("The generation service returned an invalid response: {err}");
            }
        };

        tracing::debug!(status = status.as_u16(), bytes = payload.result.len(), "Generated tasks");
        return Ok(payload);
    }
}
