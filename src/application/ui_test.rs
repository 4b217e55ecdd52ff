use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::centered_rect;
use super::Shell;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Page;
use crate::domain::services::MemoryHistoryStore;
use crate::domain::services::Themes;

struct Harness {
    shell: Shell<'static>,
    store: Arc<MemoryHistoryStore>,
    actions: mpsc::UnboundedReceiver<Action>,
    _events: mpsc::UnboundedReceiver<Event>,
}

async fn harness() -> Result<Harness> {
    let (action_tx, actions) = mpsc::unbounded_channel::<Action>();
    let (event_tx, events) = mpsc::unbounded_channel::<Event>();
    let store = Arc::new(MemoryHistoryStore::default());
    let shell = Shell::new(
        action_tx,
        event_tx,
        store.clone(),
        Themes::get("base16-ocean.dark")?,
    )
    .await?;

    return Ok(Harness {
        shell,
        store,
        actions,
        _events: events,
    });
}

#[tokio::test]
async fn it_switches_pages_with_fresh_tokens() -> Result<()> {
    let mut harness = harness().await?;
    assert_eq!(harness.shell.page(), Page::Form);
    assert_eq!(harness.shell.token(), 1);

    assert!(harness.shell.dispatch(Event::KeyboardCTRLP()).await?);
    assert_eq!(harness.shell.page(), Page::Status);
    assert_eq!(harness.shell.token(), 2);
    match harness.actions.try_recv()? {
        Action::CheckStatus(2) => (),
        _ => bail!("Expected a status check on mount"),
    }

    harness.shell.dispatch(Event::KeyboardCTRLP()).await?;
    assert_eq!(harness.shell.page(), Page::Form);
    assert_eq!(harness.shell.token(), 3);

    return Ok(());
}

#[tokio::test]
async fn it_ignores_responses_for_unmounted_views() -> Result<()> {
    let mut harness = harness().await?;
    harness.shell.dispatch(Event::KeyboardCTRLP()).await?;
    harness.shell.dispatch(Event::KeyboardCTRLP()).await?;

    let request = GenerationRequest {
        goal: "Add login".to_string(),
        users: "Devs".to_string(),
        ..GenerationRequest::default()
    };
    let keep_running = harness
        .shell
        .dispatch(Event::GenerationFinished(
            1,
            request,
            Ok("## Tasks".to_string()),
        ))
        .await?;

    assert!(keep_running);
    assert_eq!(*harness.store.saves.lock().unwrap(), 0);
    assert!(harness.store.entries.lock().unwrap().is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_quits_on_ctrl_c() -> Result<()> {
    let mut harness = harness().await?;
    assert!(!harness.shell.dispatch(Event::KeyboardCTRLC()).await?);

    return Ok(());
}

#[test]
fn it_centers_rects() {
    let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));

    assert_eq!(rect, Rect::new(25, 10, 50, 20));
}
