use crate::app::AppState;
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

/// Render the settings view
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    lines.push(toggle_line(
        '1',
        "System notifications",
        app.settings.enable_system_notification,
    ));
    lines.push(toggle_line(
        '2',
        "Start minimized to tray",
        app.settings.start_minimized_to_tray,
    ));

    lines.push(Line::raw(""));
    lines.push(Line::raw("  Changes are saved immediately."));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Back"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn toggle_line(key: char, label: &str, enabled: bool) -> Line<'static> {
    let box_text = if enabled { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), modal_title_style()),
        Span::raw(format!("{} {}", box_text, label)),
    ])
}
