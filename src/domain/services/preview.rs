#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme;
use syntect::parsing::SyntaxSet;

static SYNTAX: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Word wraps `text` to `line_max_width` columns. Leading indentation is kept
/// on the first segment of each line and counts toward the width. Words longer
/// than a line are split across lines.
pub fn wrap_lines(text: &str, line_max_width: usize) -> Vec<String> {
    let width = line_max_width.max(1);
    let mut lines: Vec<String> = vec![];

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push("".to_string());
            continue;
        }

        let indent_len = full_line
            .chars()
            .take_while(|c| return c.is_whitespace())
            .count()
            .min(width - 1);
        let rest = full_line.chars().skip(indent_len).collect::<String>();

        let mut current = full_line.chars().take(indent_len).collect::<String>();
        let mut current_len = indent_len;
        let mut has_word = false;
        for word in rest.split(' ') {
            let mut word = word.to_string();
            let mut word_len = word.chars().count();

            if has_word && current_len + 1 + word_len > width {
                lines.push(current);
                current = String::new();
                current_len = 0;
                has_word = false;
            }

            if has_word {
                current.push(' ');
                current_len += 1;
            }

            while current_len + word_len > width {
                let take = width - current_len;
                current.push_str(&word.chars().take(take).collect::<String>());
                word = word.chars().skip(take).collect::<String>();
                word_len -= take;
                lines.push(current);
                current = String::new();
                current_len = 0;
            }

            current.push_str(&word);
            current_len += word_len;
            has_word = true;
        }
        lines.push(current.trim_end().to_string());
    }

    return lines;
}

fn translate_colour(syntect_color: syntect::highlighting::Color) -> Option<Color> {
    match syntect_color {
        syntect::highlighting::Color { r, g, b, a } if a > 0 => return Some(Color::Rgb(r, g, b)),
        _ => return None,
    }
}

/// Markdown highlighted, width wrapped lines for the result preview. Lines are
/// only rebuilt when the text or the width change.
pub struct Preview {
    theme: Theme,
    text: String,
    width: usize,
    lines: Vec<Line<'static>>,
}

impl Preview {
    pub fn new(theme: Theme) -> Preview {
        return Preview {
            theme,
            text: "".to_string(),
            width: 0,
            lines: vec![],
        };
    }

    pub fn lines(&mut self, text: &str, width: usize) -> &[Line<'static>] {
        if self.width != width || self.text != text || (self.lines.is_empty() && !text.is_empty())
        {
            self.text = text.to_string();
            self.width = width;
            self.lines = self.highlight(text, width);
        }

        return &self.lines;
    }

    fn highlight(&self, text: &str, width: usize) -> Vec<Line<'static>> {
        let wrapped = wrap_lines(text, width);
        let syntax = match SYNTAX.find_syntax_by_extension("md") {
            Some(syntax) => syntax,
            None => {
                return wrapped.into_iter().map(Line::from).collect();
            }
        };

        let mut highlight = HighlightLines::new(syntax, &self.theme);
        return wrapped
            .into_iter()
            .map(|line| {
                let with_newline = format!("{line}\n");
                let regions = match highlight.highlight_line(&with_newline, &SYNTAX) {
                    Ok(regions) => regions,
                    Err(err) => {
                        tracing::debug!(error = ?err, "Failed to highlight preview line");
                        return Line::from(line);
                    }
                };

                let spans = regions
                    .iter()
                    .map(|(style, content)| {
                        return Span::styled(
                            content.trim_end_matches('\n').to_string(),
                            Style {
                                fg: translate_colour(style.foreground),
                                ..Style::default()
                            },
                        );
                    })
                    .collect::<Vec<Span>>();

                return Line::from(spans);
            })
            .collect();
    }
}
