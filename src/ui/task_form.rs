use crate::app::AppState;
use crate::domain::format_seconds;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if form.is_new { " Add Task " } else { " Edit Task " };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        lines.push(field_line("Name (8 chars max)", &form.name, form.editing_field == 0));
        lines.push(Line::raw(""));

        let duration_label = format!("Duration (1-99, unit: {})", form.unit.name());
        lines.push(field_line(&duration_label, &form.value, form.editing_field == 1));

        // Preview of what the committed duration will be
        let value = form.value.trim().parse::<u64>().unwrap_or(1).clamp(1, 99);
        lines.push(Line::from(vec![
            Span::raw("  = "),
            Span::styled(
                format_seconds(value * form.unit.multiplier()),
                modal_title_style(),
            ),
        ]));
        lines.push(Line::raw(""));

        lines.push(field_line("Notes", &form.description, form.editing_field == 2));
        lines.push(Line::raw(""));

        lines.push(Line::raw(
            "Tab next field  ·  ←/→ unit  ·  Enter save  ·  Esc cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_text = if active {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    let mut spans = vec![
        Span::raw(label_text),
        Span::raw("  > "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    Line::from(spans)
}
