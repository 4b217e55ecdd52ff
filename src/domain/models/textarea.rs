use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn with_text(title: &str, text: &str) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(TextArea::block(title, false));

        return textarea;
    }

    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, title: &str, focused: bool) {
        textarea.set_block(TextArea::block(title, focused));
        if focused {
            textarea.set_cursor_style(Style::default().bg(Color::White).fg(Color::Black));
        } else {
            textarea.set_cursor_style(Style::default());
        }
    }

    pub fn text(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("\n");
    }

    pub fn block(title: &str, focused: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title.to_string())
            .padding(Padding::new(1, 1, 0, 0));

        if focused {
            block = block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Cyan));
        }

        return block;
    }
}
