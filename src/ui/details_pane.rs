use crate::app::AppState;
use crate::domain::{find_urls, format_deadline, format_seconds, status_badge};
use crate::ui::styles::{border_style, default_style, hint_style, link_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = AppState::now();
    let mut lines = Vec::new();

    if let Some(task) = app.selected_task() {
        lines.push(Line::from(Span::styled(task.name.clone(), title_style())));
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("target    {}", format_seconds(task.seconds))));

        match task.due_at {
            Some(due) => {
                lines.push(Line::raw(format!("deadline  {}", format_deadline(due))));
                lines.push(Line::raw(format!(
                    "remaining {}",
                    format_seconds(task.remaining_at(now))
                )));
            }
            None => {
                lines.push(Line::raw("deadline  not scheduled"));
            }
        }

        lines.push(Line::raw(format!("status    {}", status_badge(task.phase(now)))));

        if !task.description.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("notes", hint_style())));
            for text_line in task.description.lines() {
                lines.push(highlight_urls(text_line));
            }
        }
    } else {
        lines.push(Line::raw(""));
        lines.push(Line::raw("  No tasks yet."));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  Press 'a' to add one."));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Split a text line into spans with http(s) URLs highlighted
fn highlight_urls(text: &str) -> Line<'static> {
    let ranges = find_urls(text);
    if ranges.is_empty() {
        return Line::raw(text.to_string());
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            spans.push(Span::styled(text[cursor..range.start].to_string(), default_style()));
        }
        spans.push(Span::styled(text[range.clone()].to_string(), link_style()));
        cursor = range.end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(text[cursor..].to_string(), default_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_urls_splits_spans() {
        let line = highlight_urls("see https://example.com for info");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "https://example.com");
    }

    #[test]
    fn test_highlight_urls_plain_text() {
        let line = highlight_urls("no links here");
        assert_eq!(line.spans.len(), 1);
    }
}
