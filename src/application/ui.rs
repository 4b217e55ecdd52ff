#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::Terminal;
use syntect::highlighting::Theme;
use tokio::sync::mpsc;

use super::form_view::FormView;
use super::status_view::StatusView;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Page;
use crate::domain::services::events::EventsService;
use crate::domain::services::FileHistoryStore;
use crate::domain::services::HistoryStoreBox;
use crate::domain::services::Themes;

pub fn help_text() -> String {
    let text = r#"
FORM HOTKEYS:
- Tab / Shift+Tab: Move between fields.
- Enter (goal, users, product type) or Ctrl+G: Generate tasks.
- Left / Right / Space: Change the product type.
- Ctrl+E: Toggle between previewing and editing the generated tasks.
- Ctrl+Y: Copy the generated tasks to the clipboard.
- Ctrl+O: Download the generated tasks as a markdown file.
- Ctrl+L: Clear the form. History is kept.
- Ctrl+R: Open history. Up / Down to pick, Enter to load, Esc to close.
- Esc: Dismiss an error.
- Up / Down / Ctrl+U / Ctrl+D: Scroll the generated tasks.

STATUS HOTKEYS:
- r: Check again.

GLOBAL HOTKEYS:
- Ctrl+P: Switch between the form and the status page.
- Ctrl+C: Quit.
    "#;

    return text.trim().to_string();
}

/// A rect of `percent_x` by `percent_y` centered in `rect`.
pub fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn poll_interval() -> Duration {
    let secs = Config::get(ConfigKey::StatusPollInterval)
        .parse::<u64>()
        .unwrap_or(30)
        .max(1);

    return Duration::from_secs(secs);
}

enum ActiveView<'a> {
    Form(Box<FormView<'a>>),
    Status(StatusView),
}

/// Holds the mounted page. Only one page exists at a time, switching drops
/// the outgoing view along with its timers.
pub struct Shell<'a> {
    view: ActiveView<'a>,
    next_token: u64,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    store: HistoryStoreBox,
    theme: Theme,
}

impl<'a> Shell<'a> {
    pub async fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        store: HistoryStoreBox,
        theme: Theme,
    ) -> Result<Shell<'a>> {
        let mut form = FormView::new(
            1,
            action_tx.clone(),
            event_tx.clone(),
            store.clone(),
            theme.clone(),
        )
        .await;

        let entry_id = Config::get(ConfigKey::EntryID);
        if !entry_id.is_empty() {
            if !form.open_entry(&entry_id) {
                tracing::warn!(entry_id = %entry_id, "History entry no longer exists");
            }
            Config::set(ConfigKey::EntryID, "");
        }

        return Ok(Shell {
            view: ActiveView::Form(Box::new(form)),
            next_token: 2,
            action_tx,
            event_tx,
            store,
            theme,
        });
    }

    pub fn page(&self) -> Page {
        match self.view {
            ActiveView::Form(_) => return Page::Form,
            ActiveView::Status(_) => return Page::Status,
        }
    }

    pub fn token(&self) -> u64 {
        match &self.view {
            ActiveView::Form(view) => return view.token,
            ActiveView::Status(view) => return view.token,
        }
    }

    pub async fn switch(&mut self) -> Result<()> {
        let token = self.next_token;
        self.next_token += 1;

        let page = self.page().other();
        tracing::debug!(token = token, page = ?page, "Switching page");

        match page {
            Page::Form => {
                let form = FormView::new(
                    token,
                    self.action_tx.clone(),
                    self.event_tx.clone(),
                    self.store.clone(),
                    self.theme.clone(),
                )
                .await;
                self.view = ActiveView::Form(Box::new(form));
            }
            Page::Status => {
                let status = StatusView::new(
                    token,
                    self.action_tx.clone(),
                    self.event_tx.clone(),
                    poll_interval(),
                )?;
                self.view = ActiveView::Status(status);
            }
        }

        return Ok(());
    }

    /// Routes an event to the mounted page. Returns false once the app
    /// should exit.
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC() => {
                return Ok(false);
            }
            Event::KeyboardCTRLP() => {
                self.switch().await?;
                return Ok(true);
            }
            Event::UITick() | Event::UIResize() => {
                return Ok(true);
            }
            _ => (),
        }

        if let Some(token) = event.token() {
            if token != self.token() {
                tracing::debug!(
                    token = token,
                    mounted = self.token(),
                    "Dropping event for an unmounted view"
                );
                return Ok(true);
            }
        }

        match &mut self.view {
            ActiveView::Form(view) => view.handle_event(event).await?,
            ActiveView::Status(view) => view.handle_event(event)?,
        }

        return Ok(true);
    }

    pub fn render<B: Backend>(&mut self, frame: &mut Frame<B>) {
        let rect = frame.size();
        match &mut self.view {
            ActiveView::Form(view) => view.render(frame, rect),
            ActiveView::Status(view) => view.render(frame, rect),
        }
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    shell: &mut Shell<'_>,
    events: &mut EventsService,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            shell.render(frame);
        })?;

        let event = events.next().await?;
        if !shell.dispatch(event).await? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    if let Err(err) = disable_raw_mode() {
        tracing::error!(error = ?err, "Failed to disable raw mode");
    }
    if let Err(err) = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    ) {
        tracing::error!(error = ?err, "Failed to restore terminal");
    }
}

pub async fn start(
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let theme = Themes::get(&Config::get(ConfigKey::Theme))?;
    let store: HistoryStoreBox = std::sync::Arc::new(FileHistoryStore::default());
    let mut shell = Shell::new(action_tx, event_tx, store, theme).await?;
    let mut events = EventsService::new(event_rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut shell, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
