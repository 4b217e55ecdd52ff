use anyhow::Result;
use test_utils::history_fixture;

use super::record;
use super::FileHistoryStore;
use super::HistoryStore;
use super::HISTORY_LIMIT;
use crate::domain::models::GeneratedSpecification;
use crate::domain::models::GenerationRequest;

fn entry(goal: &str) -> GeneratedSpecification {
    let req = GenerationRequest {
        goal: goal.to_string(),
        users: "Devs".to_string(),
        ..GenerationRequest::default()
    };

    return GeneratedSpecification::new(&req, &format!("Tasks for {goal}"));
}

mod record_history {
    use super::*;

    #[test]
    fn it_prepends_new_entries() {
        let history = record(&[entry("first")], entry("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].goal, "second");
        assert_eq!(history[1].goal, "first");
    }

    #[test]
    fn it_evicts_the_oldest_entry() {
        let mut history = vec![];
        for idx in 1..=HISTORY_LIMIT {
            history = record(&history, entry(&format!("goal {idx}")));
        }
        let before = history.clone();

        history = record(&history, entry("goal 6"));

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].goal, "goal 6");
        assert_eq!(&history[1..], &before[..HISTORY_LIMIT - 1]);
        assert!(!history.iter().any(|e| return e.goal == "goal 1"));
    }

    #[test]
    fn it_never_exceeds_the_limit() {
        let mut history = vec![];
        for idx in 0..20 {
            history = record(&history, entry(&format!("goal {idx}")));
            assert!(history.len() <= HISTORY_LIMIT);
        }
    }
}

mod file_history_store {
    use super::*;

    #[tokio::test]
    async fn it_loads_empty_when_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileHistoryStore::new(dir.path().join("history.json"));

        assert!(store.load().await.is_empty());
        return Ok(());
    }

    #[tokio::test]
    async fn it_loads_fixture() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        std::fs::write(&path, history_fixture())?;

        let entries = FileHistoryStore::new(path).load().await;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].goal, "Add login");
        assert_eq!(entries[1].template, "mobile");
        return Ok(());
    }

    #[tokio::test]
    async fn it_treats_malformed_json_as_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json")?;

        assert!(FileHistoryStore::new(path).load().await.is_empty());
        return Ok(());
    }

    #[tokio::test]
    async fn it_saves_and_reloads() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileHistoryStore::new(dir.path().join("nested/dir/history.json"));
        let entries = vec![entry("second"), entry("first")];

        store.save(&entries).await?;

        assert_eq!(store.load().await, entries);
        assert_eq!(store.find(&entries[1].id).await, Some(entries[1].clone()));
        assert_eq!(store.find("missing").await, None);
        return Ok(());
    }

    #[tokio::test]
    async fn it_saves_a_raw_json_array() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        FileHistoryStore::new(path.clone())
            .save(&[entry("first")])
            .await?;

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        assert!(value.is_array());
        assert_eq!(value[0]["goal"], "first");
        return Ok(());
    }
}
