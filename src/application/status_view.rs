#[cfg(test)]
#[path = "status_view_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::block::Title;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::StatusRow;
use crate::domain::services::Scheduler;
use crate::domain::services::StatusState;
use crate::domain::services::TimerKey;

pub struct StatusView {
    pub token: u64,
    pub state: StatusState,
    poll_interval: Duration,
    scheduler: Scheduler,
    tx: mpsc::UnboundedSender<Action>,
}

impl StatusView {
    /// Issues the first check right away and polls every `poll_interval`
    /// until the view is dropped.
    pub fn new(
        token: u64,
        tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        poll_interval: Duration,
    ) -> Result<StatusView> {
        let mut view = StatusView {
            token,
            state: StatusState::default(),
            poll_interval,
            scheduler: Scheduler::new(event_tx),
            tx,
        };

        view.refresh()?;
        view.scheduler
            .every(TimerKey::StatusPoll, poll_interval, move || {
                return Event::StatusPollTick(token);
            });

        return Ok(view);
    }

    fn refresh(&mut self) -> Result<()> {
        if self.state.begin_check() {
            self.tx.send(Action::CheckStatus(self.token))?;
        }

        return Ok(());
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::StatusPollTick(_) => {
                self.refresh()?;
            }
            Event::StatusChecked(_, res) => match res {
                Ok(snapshot) => self.state.check_succeeded(snapshot),
                Err(err) => self.state.check_failed(&err),
            },
            Event::KeyboardCharInput(Input {
                key: Key::Char('r'),
                ctrl: false,
                alt: false,
            }) => {
                self.refresh()?;
            }
            _ => (),
        }

        return Ok(());
    }

    fn render_row<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, row: &StatusRow) {
        let color = row.level.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .padding(Padding::new(1, 1, 0, 0));

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(row.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(row.value.to_string(), Style::default().fg(color))),
                Line::from(Span::styled(
                    row.caption,
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(block),
            rect,
        );
    }

    fn render_health<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let mut refresh_label = "r refresh".to_string();
        if self.state.loading {
            refresh_label = "Checking...".to_string();
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Service Health")
            .title(Title::from(refresh_label).alignment(Alignment::Right))
            .padding(Padding::new(1, 1, 0, 0));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let error_height = if self.state.error.is_some() { 2 } else { 0 };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(error_height), Constraint::Min(1)])
            .split(inner);

        if let Some(err) = &self.state.error {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        "Connection Error: ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(err.to_string(), Style::default().fg(Color::Red)),
                ]))
                .wrap(Wrap { trim: true }),
                layout[0],
            );
        }

        if let Some(snapshot) = &self.state.snapshot {
            let rows = snapshot.rows();
            let row_layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
                .split(layout[1]);

            for (idx, row) in rows.iter().enumerate() {
                self.render_row(frame, row_layout[idx], row);
            }
        } else if self.state.loading {
            Loading::new("Checking system status...").render(frame, layout[1]);
        }
    }

    fn render_info<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::styled("Backend API: ", bold),
                Span::raw("verifies the generation server is running and reachable."),
            ]),
            Line::from(vec![
                Span::styled("Database: ", bold),
                Span::raw("shows the storage configuration. History is kept by this client."),
            ]),
            Line::from(vec![
                Span::styled("LLM Connection: ", bold),
                Span::raw("tests the model provider behind the server with a real request."),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Checks repeat every {} seconds. An unhealthy LLM usually means a bad API key or exhausted quota.",
                    self.poll_interval.as_secs()
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("About This Status Page")
                    .padding(Padding::new(1, 1, 0, 0)),
            ),
            rect,
        );
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2),
                Constraint::Min(9),
                Constraint::Length(9),
                Constraint::Length(1),
            ])
            .split(rect);

        let mut subtitle = "Monitor the health of backend services".to_string();
        if let Some(last_checked) = self.state.last_checked {
            subtitle = format!(
                "{subtitle} (last checked {})",
                last_checked.format("%H:%M:%S")
            );
        }

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "System Status",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
            ]),
            layout[0],
        );

        self.render_health(frame, layout[1]);
        self.render_info(frame, layout[2]);

        frame.render_widget(
            Paragraph::new("r refresh • Ctrl+P form • Ctrl+C quit")
                .style(Style::default().fg(Color::DarkGray)),
            layout[3],
        );
    }
}
