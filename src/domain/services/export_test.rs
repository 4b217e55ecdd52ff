use anyhow::Result;
use chrono::TimeZone;
use chrono::Utc;
use test_utils::tasks_fixture;

use super::download_file_name;
use super::ExportService;

#[test]
fn it_names_files_from_timestamp() {
    let now = Utc.timestamp_millis_opt(1709374530123).unwrap();
    insta::assert_snapshot!(download_file_name(now), @"tasks-1709374530123.md");
}

#[tokio::test]
async fn it_writes_buffer_verbatim() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("exports");

    let file_path = ExportService::download(&target, tasks_fixture()).await?;

    assert!(file_path.starts_with(&target));
    assert_eq!(file_path.extension().unwrap(), "md");
    assert_eq!(std::fs::read_to_string(file_path)?, tasks_fixture());
    return Ok(());
}
