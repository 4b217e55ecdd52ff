#[cfg(test)]
#[path = "form_view_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use syntect::highlighting::Theme;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::ui::centered_rect;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FormField;
use crate::domain::models::GeneratedSpecification;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Loading;
use crate::domain::models::ResultMode;
use crate::domain::models::TextArea;
use crate::domain::services::ExportService;
use crate::domain::services::FormState;
use crate::domain::services::HistoryStoreBox;
use crate::domain::services::Preview;
use crate::domain::services::Scheduler;
use crate::domain::services::TimerKey;
use crate::domain::services::COPIED_MESSAGE;

const SCROLL_DELAY: Duration = Duration::from_millis(100);
const SUCCESS_DELAY: Duration = Duration::from_secs(3);

const TEXT_FIELDS: [FormField; 4] = [
    FormField::Goal,
    FormField::Users,
    FormField::Constraints,
    FormField::Risks,
];

fn key_input(key: Key) -> Input {
    return Input {
        key,
        ctrl: false,
        alt: false,
    };
}

/// The task generation page. Owns the form state, the editors backing each
/// text field and the timers started from this page.
pub struct FormView<'a> {
    pub token: u64,
    pub state: FormState,
    goal: tui_textarea::TextArea<'a>,
    users: tui_textarea::TextArea<'a>,
    constraints: tui_textarea::TextArea<'a>,
    risks: tui_textarea::TextArea<'a>,
    result_editor: Option<tui_textarea::TextArea<'a>>,
    preview: Preview,
    scheduler: Scheduler,
    store: HistoryStoreBox,
    tx: mpsc::UnboundedSender<Action>,
}

impl<'a> FormView<'a> {
    pub async fn new(
        token: u64,
        tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        store: HistoryStoreBox,
        theme: Theme,
    ) -> FormView<'a> {
        let history = store.load().await;
        tracing::debug!(token = token, entries = history.len(), "Mounted form view");

        let mut view = FormView {
            token,
            state: FormState::new(history),
            goal: TextArea::with_text(FormField::Goal.title(), ""),
            users: TextArea::with_text(FormField::Users.title(), ""),
            constraints: TextArea::with_text(FormField::Constraints.title(), ""),
            risks: TextArea::with_text(FormField::Risks.title(), ""),
            result_editor: None,
            preview: Preview::new(theme),
            scheduler: Scheduler::new(event_tx),
            store,
            tx,
        };
        #[cfg(feature = "dev")]
        {
            view.state.set_field(
                FormField::Goal,
                "Let users reset their password from the login page",
            );
            view.state.set_field(FormField::Users, "Customers who forgot their password");
        }

        view.sync_inputs();

        return view;
    }

    /// Loads the history entry with `entry_id` into the form. Returns false
    /// when no such entry exists.
    pub fn open_entry(&mut self, entry_id: &str) -> bool {
        match self
            .state
            .history
            .iter()
            .position(|e| return e.id == entry_id)
        {
            Some(idx) => return self.load_entry(idx),
            None => return false,
        }
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut tui_textarea::TextArea<'a>> {
        match field {
            FormField::Goal => return Some(&mut self.goal),
            FormField::Users => return Some(&mut self.users),
            FormField::Constraints => return Some(&mut self.constraints),
            FormField::Risks => return Some(&mut self.risks),
            _ => return None,
        }
    }

    fn sync_inputs(&mut self) {
        for field in TEXT_FIELDS {
            let text = self.state.field(field).to_string();
            if let Some(input) = self.input_mut(field) {
                *input = TextArea::with_text(field.title(), &text);
            }
        }
        self.refresh_focus();
    }

    fn refresh_focus(&mut self) {
        let focus = self.state.focus;
        for field in TEXT_FIELDS {
            if let Some(input) = self.input_mut(field) {
                TextArea::set_focus(input, field.title(), focus == field);
            }
        }

        if let Some(editor) = self.result_editor.as_mut() {
            TextArea::set_focus(
                editor,
                FormField::Result.title(),
                focus == FormField::Result,
            );
        }
    }

    fn input_focused(&mut self, input: Input) {
        let focus = self.state.focus;
        if let Some(textarea) = self.input_mut(focus) {
            textarea.input(input);
            let text = TextArea::text(textarea);
            self.state.set_field(focus, &text);
            return;
        }

        if focus == FormField::Result && self.state.mode == ResultMode::Editing {
            if let Some(editor) = self.result_editor.as_mut() {
                editor.input(input);
                let text = TextArea::text(editor);
                self.state.edit_result(&text);
            }
        }
    }

    fn load_entry(&mut self, idx: usize) -> bool {
        if !self.state.load_entry(idx) {
            return false;
        }

        self.result_editor = None;
        self.sync_inputs();
        return true;
    }

    fn submit(&mut self) -> Result<()> {
        if let Some(request) = self.state.begin_submit() {
            tracing::debug!(token = self.token, template = %request.template, "Submitting form");
            self.tx.send(Action::GenerateTasks(self.token, request))?;
        }
        self.refresh_focus();

        return Ok(());
    }

    fn toggle_edit(&mut self) {
        self.state.toggle_edit();
        match self.state.mode {
            ResultMode::Editing => {
                let mut editor =
                    TextArea::with_text(FormField::Result.title(), &self.state.editable_result);
                editor.move_cursor(tui_textarea::CursorMove::Bottom);
                editor.move_cursor(tui_textarea::CursorMove::End);
                self.result_editor = Some(editor);
            }
            _ => self.result_editor = None,
        }
        self.refresh_focus();
    }

    fn clear(&mut self) {
        self.state.clear();
        self.result_editor = None;
        self.scheduler.cancel(TimerKey::ScrollToResult);
        self.sync_inputs();
    }

    async fn generation_finished(
        &mut self,
        request: GenerationRequest,
        res: Result<String, String>,
    ) {
        let result = match res {
            Ok(result) => result,
            Err(err) => {
                self.state.submit_failed(&err);
                return;
            }
        };

        self.state
            .submit_succeeded(GeneratedSpecification::new(&request, &result));
        self.result_editor = None;

        if let Err(err) = self.store.save(&self.state.history).await {
            tracing::error!(error = ?err, "Failed to save history");
        }

        self.scheduler.after(
            TimerKey::SuccessBanner,
            SUCCESS_DELAY,
            Event::SuccessExpired(self.token),
        );
        self.scheduler.after(
            TimerKey::ScrollToResult,
            SCROLL_DELAY,
            Event::ScrollToResult(self.token),
        );
    }

    fn handle_history_key(&mut self, event: Event) {
        match event {
            Event::KeyboardEnter() => {
                let cursor = self.state.history_cursor;
                self.load_entry(cursor);
            }
            Event::KeyboardEsc() | Event::KeyboardCTRLR() => {
                self.state.close_history();
            }
            _ => (),
        }
    }

    fn handle_enter(&mut self) -> Result<()> {
        let focus = self.state.focus;
        if focus.is_single_line() || focus == FormField::Template {
            self.submit()?;
        } else {
            self.input_focused(key_input(Key::Enter));
        }

        return Ok(());
    }

    fn handle_vertical(&mut self, key: Key) {
        if self.state.show_history {
            if matches!(key, Key::Up) {
                self.state.history_up();
            } else {
                self.state.history_down();
            }
            return;
        }

        let editing = self.state.focus == FormField::Result && self.state.mode == ResultMode::Editing;
        let multiline = self.state.focus.is_text() && !self.state.focus.is_single_line();
        if multiline || editing {
            self.input_focused(key_input(key));
            return;
        }

        if matches!(key, Key::Up) {
            self.state.result_scroll.up();
        } else {
            self.state.result_scroll.down();
        }
    }

    fn handle_input(&mut self, input: Input) {
        if self.state.focus == FormField::Template {
            match input.key {
                Key::Left => self.state.cycle_template(false),
                Key::Right | Key::Char(' ') => self.state.cycle_template(true),
                _ => (),
            }
            return;
        }

        self.input_focused(input);
    }

    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.state.notice.is_some() && (event.is_keyboard() || event.is_scroll()) {
            self.state.acknowledge_notice();
            return Ok(());
        }

        if self.state.show_history && event.is_keyboard() {
            self.handle_history_key(event);
            return Ok(());
        }

        match event {
            Event::GenerationFinished(_, request, res) => {
                self.generation_finished(request, res).await;
            }
            Event::ScrollToResult(_) => {
                self.state.reveal_result();
                self.refresh_focus();
            }
            Event::SuccessExpired(_) => {
                self.state.expire_success();
            }
            Event::ClipboardCopied(_, res) => match res {
                Ok(()) => self.state.show_notice(COPIED_MESSAGE),
                Err(err) => self
                    .state
                    .show_error(&format!("Failed to copy to clipboard: {err}")),
            },
            Event::ResultDownloaded(_, res) => match res {
                Ok(path) => self
                    .state
                    .show_notice(&format!("Saved to {}", path.to_string_lossy())),
                Err(err) => self.state.show_error(&err),
            },
            Event::KeyboardTab() => {
                self.state.focus_next();
                self.refresh_focus();
            }
            Event::KeyboardBackTab() => {
                self.state.focus_prev();
                self.refresh_focus();
            }
            Event::KeyboardEnter() => {
                self.handle_enter()?;
            }
            Event::KeyboardCTRLG() => {
                self.submit()?;
            }
            Event::KeyboardCTRLE() => {
                self.toggle_edit();
            }
            Event::KeyboardCTRLY() => {
                if self.state.has_result() {
                    self.tx.send(Action::CopyToClipboard(
                        self.token,
                        self.state.editable_result.to_string(),
                    ))?;
                }
            }
            Event::KeyboardCTRLO() => {
                if self.state.has_result() {
                    self.tx.send(Action::DownloadResult(
                        self.token,
                        ExportService::download_dir(),
                        self.state.editable_result.to_string(),
                    ))?;
                }
            }
            Event::KeyboardCTRLL() => {
                self.clear();
            }
            Event::KeyboardCTRLR() => {
                self.state.open_history();
            }
            Event::KeyboardEsc() => {
                self.state.dismiss_error();
            }
            Event::UIScrollUp() => {
                self.handle_vertical(Key::Up);
            }
            Event::UIScrollDown() => {
                self.handle_vertical(Key::Down);
            }
            Event::UIScrollPageUp() => {
                self.state.result_scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                self.state.result_scroll.down_page();
            }
            Event::KeyboardCharInput(input) => {
                self.handle_input(input);
            }
            _ => (),
        }

        return Ok(());
    }

    fn render_banners<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let mut lines = vec![];
        if let Some(err) = &self.state.error {
            lines.push(Line::from(Span::styled(
                format!("Error: {err} (Esc to dismiss)"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(validation) = &self.state.validation {
            lines.push(Line::from(Span::styled(
                validation.to_string(),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(success) = &self.state.success {
            lines.push(Line::from(Span::styled(
                success.to_string(),
                Style::default().fg(Color::Green),
            )));
        }

        frame.render_widget(Paragraph::new(lines), rect);
    }

    fn render_result<B: Backend>(&mut self, frame: &mut Frame<B>, rect: Rect) {
        if self.state.loading {
            Loading::new("Generating tasks...").render(frame, rect);
            return;
        }

        let focused = self.state.focus == FormField::Result;
        match self.state.mode {
            ResultMode::Empty => {
                frame.render_widget(
                    Paragraph::new(
                        "Fill in the feature goal and target users, then press Enter or Ctrl+G to generate tasks.",
                    )
                    .wrap(Wrap { trim: true })
                    .block(TextArea::block(FormField::Result.title(), false)),
                    rect,
                );
            }
            ResultMode::Editing => {
                if let Some(editor) = self.result_editor.as_ref() {
                    frame.render_widget(editor.widget(), rect);
                }
            }
            ResultMode::Previewing => {
                let block = TextArea::block(
                    &format!(
                        "{} (Ctrl+E edit, Ctrl+Y copy, Ctrl+O download)",
                        FormField::Result.title()
                    ),
                    focused,
                );
                let inner = block.inner(rect);
                let width = inner.width.saturating_sub(1) as usize;
                let lines = self
                    .preview
                    .lines(&self.state.editable_result, width)
                    .to_vec();

                self.state
                    .result_scroll
                    .set_state(lines.len() as u16, inner.height);

                frame.render_widget(
                    Paragraph::new(lines)
                        .block(block)
                        .scroll((self.state.result_scroll.position, 0)),
                    rect,
                );
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    rect.inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut self.state.result_scroll.scrollbar_state,
                );
            }
        }
    }

    fn render_history<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let area = centered_rect(70, 70, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title("Generation History (Enter to load, Esc to close)")
            .padding(Padding::new(1, 1, 0, 0));

        frame.render_widget(Clear, area);

        if self.state.history.is_empty() {
            frame.render_widget(
                Paragraph::new("No history yet. Generated tasks show up here.").block(block),
                area,
            );
            return;
        }

        let items = self
            .state
            .history
            .iter()
            .map(|entry| {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            entry.goal.to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            format!("[{}]", entry.request().template_label()),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]),
                    Line::from(format!("Users: {}", entry.users)),
                ];
                if !entry.constraints.is_empty() {
                    lines.push(Line::from(format!(
                        "Constraints: {}",
                        entry.constraints_preview()
                    )));
                }
                lines.push(Line::from(Span::styled(
                    entry.display_timestamp(),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(""));

                return ListItem::new(lines);
            })
            .collect::<Vec<ListItem>>();

        let mut list_state = ListState::default();
        list_state.select(Some(self.state.history_cursor));

        frame.render_stateful_widget(
            List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> "),
            area,
            &mut list_state,
        );
    }

    fn render_notice<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, notice: &str) {
        let width = (notice.chars().count() as u16 + 8)
            .max(40)
            .min(rect.width);
        let height = rect.height.min(5);
        let area = Rect {
            x: rect.x + rect.width.saturating_sub(width) / 2,
            y: rect.y + rect.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(notice.to_string()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press any key to continue",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double),
            ),
            area,
        );
    }

    pub fn render<B: Backend>(&mut self, frame: &mut Frame<B>, rect: Rect) {
        let banner_height = [
            self.state.error.is_some(),
            self.state.validation.is_some(),
            self.state.success.is_some(),
        ]
        .iter()
        .filter(|e| return **e)
        .count() as u16;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(banner_height),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(rect);

        self.render_banners(frame, layout[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(layout[1]);

        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(body[0]);

        frame.render_widget(self.goal.widget(), fields[0]);
        frame.render_widget(self.users.widget(), fields[1]);
        frame.render_widget(self.constraints.widget(), fields[2]);
        frame.render_widget(
            Paragraph::new(format!("◀ {} ▶", self.state.request.template_label())).block(
                TextArea::block(
                    FormField::Template.title(),
                    self.state.focus == FormField::Template,
                ),
            ),
            fields[3],
        );
        frame.render_widget(self.risks.widget(), fields[4]);

        self.render_result(frame, body[1]);

        frame.render_widget(
            Paragraph::new(
                "Tab next field • Ctrl+G generate • Ctrl+R history • Ctrl+L clear • Ctrl+P status • Ctrl+C quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
            layout[2],
        );

        if self.state.show_history {
            self.render_history(frame, rect);
        }

        if let Some(notice) = self.state.notice.as_ref() {
            self.render_notice(frame, rect, notice);
        }
    }
}
