use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(
        doc.get("api-url").and_then(|e| return e.as_str()),
        Some("http://127.0.0.1:8000")
    );
    assert_eq!(
        doc.get("status-poll-interval")
            .and_then(|e| return e.as_integer()),
        Some(30)
    );
    assert_eq!(
        doc.get("theme").and_then(|e| return e.as_str()),
        Some("base16-ocean.dark")
    );
    assert!(doc.get("entry-id").is_none());
    assert!(doc.get("config-file").is_none());
    assert!(res.contains("# status-url = \"\""));
    assert!(res.contains("[possible values: "));

    return Ok(());
}

#[test]
fn it_defaults_status_url_to_empty() {
    assert_eq!(Config::default(ConfigKey::StatusURL), "");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
    assert!(Config::default(ConfigKey::HistoryFile).ends_with("history.json"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["taskgen", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["taskgen", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
