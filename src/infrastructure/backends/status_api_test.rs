use anyhow::Result;

use super::StatusApi;
use crate::domain::models::StatusProbe;
use crate::domain::models::StatusSnapshot;

impl StatusApi {
    fn with_url(url: String) -> StatusApi {
        return StatusApi { url };
    }
}

#[tokio::test]
async fn it_checks_status() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_body(r#"{"backend":"healthy","database":"not_configured","llm":"error: timeout"}"#)
        .create();

    let backend = StatusApi::with_url(server.url());
    let res = backend.check().await?;

    assert_eq!(
        res,
        StatusSnapshot {
            backend: "healthy".to_string(),
            database: "not_configured".to_string(),
            llm: "error: timeout".to_string(),
        }
    );
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/status").with_status(503).create();

    let backend = StatusApi::with_url(server.url());
    let res = backend.check().await;

    assert_eq!(res.unwrap_err().to_string(), "Failed to fetch status");
    mock.assert();
}

#[tokio::test]
async fn it_reports_unreachable_backend() {
    let backend = StatusApi::with_url("http://127.0.0.1:1".to_string());
    let res = backend.check().await;

    assert!(res
        .unwrap_err()
        .to_string()
        .starts_with("Failed to connect to backend: "));
}
