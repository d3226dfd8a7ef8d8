use crate::app::AppState;
use crate::domain::{format_deadline, format_seconds, status_badge, Task, TaskPhase};
use crate::ui::styles::{
    border_style, default_style, idle_style, overdue_style, paused_style, running_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = AppState::now();

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, now);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.tasks.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single task row.
/// Format: name      12/31 09:30:00  in 5m 30s  (RUNNING)
fn create_task_line(task: &Task, now: i64) -> Line<'static> {
    let mut spans = Vec::new();

    // Fixed-width name column keeps the schedule info aligned
    spans.push(Span::raw(format!("{:<10}", task.name)));

    match task.due_at {
        Some(due) => {
            spans.push(Span::raw(format!("{}  ", format_deadline(due))));
            if now < due {
                spans.push(Span::raw(format!(
                    "in {:<9}",
                    format_seconds(task.remaining_at(now))
                )));
            } else {
                spans.push(Span::raw(format!("{:<12}", "elapsed")));
            }
        }
        None => {
            spans.push(Span::raw(format!(
                "target {:<9}   not scheduled  ",
                format_seconds(task.seconds)
            )));
        }
    }

    let phase = task.phase(now);
    let badge_style = match phase {
        TaskPhase::Running => running_style(),
        TaskPhase::Paused => paused_style(),
        TaskPhase::Unscheduled => idle_style(),
        TaskPhase::DueUnacknowledged | TaskPhase::DueAcknowledged => overdue_style(),
    };
    spans.push(Span::styled(status_badge(phase).to_string(), badge_style));

    Line::from(spans)
}
